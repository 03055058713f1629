use serde::{Deserialize, Serialize};

/// Investment strategy the analysis is run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Rental,
    Flip,
    Development,
}

/// User-supplied assumptions. Rates are fractions (`0.05` is 5 %).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisAssumptions {
    pub strategy: Strategy,
    pub monthly_rent: f64,
    pub annual_expenses: f64,
    pub vacancy_rate: f64,
    pub down_payment_percent: f64,
    pub interest_rate: f64,
    pub loan_term_years: u32,
    #[serde(default)]
    pub renovation_cost: f64,
}

impl Default for AnalysisAssumptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Rental,
            monthly_rent: 1200.0,
            annual_expenses: 2000.0,
            vacancy_rate: 0.05,
            down_payment_percent: 0.20,
            interest_rate: 0.045,
            loan_term_years: 30,
            renovation_cost: 0.0,
        }
    }
}

/// Assumptions echoed back by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedAssumptions {
    pub monthly_rent: f64,
    pub annual_expenses: f64,
    pub vacancy_rate: f64,
    pub down_payment_percent: f64,
    pub interest_rate: f64,
    pub loan_term_years: u32,
}

impl From<&AnalysisAssumptions> for AppliedAssumptions {
    fn from(a: &AnalysisAssumptions) -> Self {
        Self {
            monthly_rent: a.monthly_rent,
            annual_expenses: a.annual_expenses,
            vacancy_rate: a.vacancy_rate,
            down_payment_percent: a.down_payment_percent,
            interest_rate: a.interest_rate,
            loan_term_years: a.loan_term_years,
        }
    }
}

/// Derived metrics; yields, cap rate and cash-on-cash are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    pub gross_yield: f64,
    pub net_yield: f64,
    pub monthly_cash_flow: f64,
    pub annual_cash_flow: f64,
    pub payback_years: f64,
    pub cap_rate: f64,
    pub cash_on_cash_return: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Financing {
    pub down_payment: f64,
    pub loan_amount: f64,
    pub monthly_mortgage: f64,
    pub total_monthly_expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub property_id: u64,
    pub strategy: Strategy,
    pub assumptions: AppliedAssumptions,
    pub metrics: AnalysisMetrics,
    /// Absent for cash purchases.
    #[serde(default)]
    pub financing: Option<Financing>,
}
