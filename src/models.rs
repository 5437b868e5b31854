use serde::Deserialize;

/// One row of the platform's LP roster export. Only the columns the reports
/// read are listed; every other export column is ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct InvestorRecord {
    #[serde(rename = "Last Investment With AngelList")]
    pub last_investment_with_angellist: Option<String>,
    #[serde(rename = "Last Investment with Your Syndicate")]
    pub last_investment_with_syndicate: Option<String>,
    #[serde(rename = "Date Joined Your Syndicate")]
    pub date_joined_syndicate: String,
    #[serde(rename = "Total Amount Invested With AngelList (Last 12m)")]
    pub invested_last_12m: Option<String>,
}

/// Per-record investment status. Syndicate activity takes precedence over
/// platform-only activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvestmentStatus {
    InvestedInSyndicate,
    InvestedInAngelList,
    NoInvestment,
}

impl InvestmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            InvestmentStatus::InvestedInSyndicate => "Invested in Syndicate",
            InvestmentStatus::InvestedInAngelList => "Invested in AngelList",
            InvestmentStatus::NoInvestment => "No Investment",
        }
    }
}

/// One row of the bracket distribution report.
#[derive(Debug, Clone)]
pub struct BracketRow {
    pub bracket: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// Cross-tabulation of "year joined the syndicate" against "year of last
/// AngelList investment". Years are 4-digit strings; the 1900 sentinel marks
/// investors with no platform investment and sorts ahead of real years.
/// Totals are derived on demand, not stored.
#[derive(Debug, Clone)]
pub struct CohortPivot {
    pub joined_years: Vec<String>,
    pub invested_years: Vec<String>,
    pub counts: Vec<Vec<u64>>,
}
