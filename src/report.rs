use std::collections::HashMap;
use std::fmt::Write;

use crate::cohort::{self, NO_INVESTMENT_YEAR};
use crate::models::{BracketRow, CohortPivot, InvestorRecord};

/// Display order for the platform's trailing-12-month bracket labels. Values
/// outside this list never reach the report.
pub const BRACKET_ORDER: [&str; 7] = [
    "≥ $500k",
    "≥ $250k",
    "≥ $100k",
    "≥ $50k",
    "≥ $10k",
    "≥ $1k",
    "$0",
];

pub const BRACKET_CAPTION: &str = "Total Amount Invested With AngelList";
pub const COHORT_CAPTION: &str =
    "Cohort Joined Your Syndicate Year to Last Invested with AngelList Year";
pub const COHORT_PERCENT_CAPTION: &str =
    "Cohort Joined Your Syndicate Year to Last Invested with AngelList Year Percent";

/// Count records per bracket label and express each count as a share of the
/// whole roster. Unrecognized and blank labels stay in the denominator but
/// never appear as rows.
pub fn bracket_distribution(records: &[InvestorRecord]) -> Vec<BracketRow> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let bracket = record.invested_last_12m.as_deref().unwrap_or("").trim();
        *counts.entry(bracket).or_insert(0) += 1;
    }

    let total = records.len();
    let mut rows = Vec::new();
    for &bracket in BRACKET_ORDER.iter() {
        if let Some(&count) = counts.get(bracket) {
            let percentage = round2(100.0 * count as f64 / total as f64);
            rows.push(BracketRow {
                bracket,
                count,
                percentage,
            });
        }
    }
    rows
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Bracket distribution with the presentation column names.
pub fn render_bracket_table(rows: &[BracketRow]) -> String {
    let header = vec![
        "Last 12m".to_string(),
        "LPs".to_string(),
        "Percentage".to_string(),
    ];
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.bracket.to_string(),
                row.count.to_string(),
                row.percentage.to_string(),
            ]
        })
        .collect();
    markdown_table(&header, &body)
}

/// Absolute pivot with a trailing Total row and column. Only the column axis
/// relabels the 1900 sentinel; a sentinel row would keep the literal year.
pub fn render_cohort_table(pivot: &CohortPivot) -> String {
    let mut header = vec!["Year Joined Your Syndicate".to_string()];
    header.extend(
        pivot
            .invested_years
            .iter()
            .map(|year| display_invested_year(year).to_string()),
    );
    header.push("Total".to_string());

    let row_totals = cohort::row_totals(pivot);
    let mut body: Vec<Vec<String>> = Vec::new();
    for ((year, counts), total) in pivot.joined_years.iter().zip(&pivot.counts).zip(&row_totals) {
        let mut row = vec![year.clone()];
        row.extend(counts.iter().map(|count| count.to_string()));
        row.push(total.to_string());
        body.push(row);
    }

    let mut total_row = vec!["Total".to_string()];
    total_row.extend(
        cohort::column_totals(pivot)
            .iter()
            .map(|count| count.to_string()),
    );
    total_row.push(cohort::grand_total(pivot).to_string());
    body.push(total_row);

    markdown_table(&header, &body)
}

/// Percentage pivot, totals excluded.
pub fn render_cohort_percent_table(pivot: &CohortPivot) -> String {
    let mut header = vec!["Year Joined Your Syndicate".to_string()];
    header.extend(
        pivot
            .invested_years
            .iter()
            .map(|year| display_invested_year(year).to_string()),
    );

    let body: Vec<Vec<String>> = pivot
        .joined_years
        .iter()
        .zip(cohort::percentage_rows(pivot))
        .map(|(year, row)| {
            let mut cells = vec![year.clone()];
            cells.extend(row.iter().map(|value| value.to_string()));
            cells
        })
        .collect();

    markdown_table(&header, &body)
}

fn display_invested_year(year: &str) -> &str {
    if year == NO_INVESTMENT_YEAR {
        "No Investment"
    } else {
        year
    }
}

/// Markdown pipe table with every column padded to a shared width.
fn markdown_table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    write_table_row(&mut output, header, &widths);
    let separator: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
    write_table_row(&mut output, &separator, &widths);
    for row in rows {
        write_table_row(&mut output, row, &widths);
    }
    output
}

fn write_table_row(output: &mut String, cells: &[String], widths: &[usize]) {
    let _ = write!(output, "|");
    for (cell, &width) in cells.iter().zip(widths) {
        let padding = width.saturating_sub(cell.chars().count());
        let _ = write!(output, " {}{} |", cell, " ".repeat(padding));
    }
    let _ = writeln!(output);
}
