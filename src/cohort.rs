use std::collections::{BTreeMap, BTreeSet};

use anyhow::Context;

use crate::load;
use crate::models::{CohortPivot, InvestmentStatus, InvestorRecord};

/// Sentinel year for investors with no recorded investment date.
pub const NO_INVESTMENT_YEAR: &str = "1900";

fn present(field: Option<&str>) -> bool {
    field.is_some_and(|value| !value.trim().is_empty())
}

/// Classify one record. Total over all inputs: an absent date is a legal
/// state, not an error.
pub fn investment_status(record: &InvestorRecord) -> InvestmentStatus {
    if present(record.last_investment_with_syndicate.as_deref()) {
        return InvestmentStatus::InvestedInSyndicate;
    }
    if present(record.last_investment_with_angellist.as_deref()) {
        return InvestmentStatus::InvestedInAngelList;
    }
    InvestmentStatus::NoInvestment
}

/// Count records per status label, plus a `total` entry over the whole roster.
pub fn status_summary(records: &[InvestorRecord]) -> BTreeMap<&'static str, usize> {
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(investment_status(record).label()).or_insert(0) += 1;
    }
    counts.insert("total", records.len());
    counts
}

/// Cross-tabulate "year joined" against "year of last AngelList investment",
/// with missing AngelList dates collapsing onto [`NO_INVESTMENT_YEAR`]. Both
/// investment timestamps are validated here even though only the AngelList
/// year feeds the pivot; a present-but-malformed date is fatal.
pub fn build_cohort_pivot(records: &[InvestorRecord]) -> anyhow::Result<CohortPivot> {
    let mut cells: BTreeMap<(String, String), u64> = BTreeMap::new();
    let mut joined_years: BTreeSet<String> = BTreeSet::new();
    let mut invested_years: BTreeSet<String> = BTreeSet::new();

    for (index, record) in records.iter().enumerate() {
        let joined_year = load::investment_year(&record.date_joined_syndicate)
            .with_context(|| format!("record {index}: bad `Date Joined Your Syndicate`"))?;

        if let Some(raw) = record.last_investment_with_syndicate.as_deref() {
            if !raw.trim().is_empty() {
                load::investment_year(raw).with_context(|| {
                    format!("record {index}: bad `Last Investment with Your Syndicate`")
                })?;
            }
        }

        let invested_year = match record.last_investment_with_angellist.as_deref() {
            Some(raw) if !raw.trim().is_empty() => load::investment_year(raw)
                .with_context(|| format!("record {index}: bad `Last Investment With AngelList`"))?,
            _ => NO_INVESTMENT_YEAR.to_string(),
        };

        joined_years.insert(joined_year.clone());
        invested_years.insert(invested_year.clone());
        *cells.entry((joined_year, invested_year)).or_insert(0) += 1;
    }

    // 4-digit year strings sort lexicographically in calendar order, with the
    // 1900 sentinel landing in the first column.
    let joined_years: Vec<String> = joined_years.into_iter().collect();
    let invested_years: Vec<String> = invested_years.into_iter().collect();
    let counts = joined_years
        .iter()
        .map(|joined| {
            invested_years
                .iter()
                .map(|invested| {
                    cells
                        .get(&(joined.clone(), invested.clone()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect();

    Ok(CohortPivot {
        joined_years,
        invested_years,
        counts,
    })
}

pub fn row_totals(pivot: &CohortPivot) -> Vec<u64> {
    pivot.counts.iter().map(|row| row.iter().sum()).collect()
}

pub fn column_totals(pivot: &CohortPivot) -> Vec<u64> {
    let mut totals = vec![0u64; pivot.invested_years.len()];
    for row in &pivot.counts {
        for (total, count) in totals.iter_mut().zip(row) {
            *total += count;
        }
    }
    totals
}

pub fn grand_total(pivot: &CohortPivot) -> u64 {
    pivot.counts.iter().flatten().sum()
}

/// Row-normalized percentages, rounded to one decimal place. A zero-sum row
/// divides by zero and keeps the resulting non-finite values.
pub fn percentage_rows(pivot: &CohortPivot) -> Vec<Vec<f64>> {
    pivot
        .counts
        .iter()
        .map(|row| {
            let total: u64 = row.iter().sum();
            row.iter()
                .map(|&count| round1(100.0 * count as f64 / total as f64))
                .collect()
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
