use serde::{Deserialize, Serialize};

/// Loan-to-value used to seed the calculator: 80 % of the price is borrowed.
pub const DEFAULT_LOAN_TO_VALUE: f64 = 0.80;
pub const DEFAULT_INTEREST_RATE: f64 = 0.035;
pub const DEFAULT_LOAN_TERM_YEARS: u32 = 30;
pub const DEFAULT_VACANCY_RATE: f64 = 0.05;
pub const DEFAULT_MONTHLY_EXPENSES: f64 = 300.0;
pub const DEFAULT_HOLDING_YEARS: u32 = 5;
pub const DEFAULT_MONTHLY_RENT: f64 = 1200.0;

/// Fixed-rate amortization: `L·r·(1+r)^n / ((1+r)^n − 1)`, with `r` the
/// monthly rate and `n` the number of monthly payments.
///
/// `annual_rate` is a fraction (`0.035` for 3.5 %). Zero when there is nothing
/// to repay; a zero rate spreads the principal evenly.
pub fn monthly_mortgage_payment(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    let n = term_years * 12;
    if principal <= 0.0 || n == 0 {
        return 0.0;
    }
    let r = annual_rate / 12.0;
    if r == 0.0 {
        return principal / f64::from(n);
    }
    let growth = (1.0 + r).powi(n as i32);
    principal * r * growth / (growth - 1.0)
}

/// Rent actually collected once vacancy is accounted for.
pub fn effective_rental_income(monthly_rent: f64, vacancy_rate: f64) -> f64 {
    monthly_rent * (1.0 - vacancy_rate)
}

/// Price per square metre, or "not applicable" for a property without a size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PricePerArea {
    Value(f64),
    NotApplicable,
}

impl PricePerArea {
    pub fn value(&self) -> Option<f64> {
        match self {
            PricePerArea::Value(v) => Some(*v),
            PricePerArea::NotApplicable => None,
        }
    }
}

impl std::fmt::Display for PricePerArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricePerArea::Value(v) => write!(f, "€{v:.0}/m²"),
            PricePerArea::NotApplicable => f.write_str("N/A"),
        }
    }
}

pub fn price_per_area(price: f64, size_sqm: f64) -> PricePerArea {
    if size_sqm == 0.0 {
        PricePerArea::NotApplicable
    } else {
        PricePerArea::Value(price / size_sqm)
    }
}

/// Inputs of the interactive ROI calculator. Rates are fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub property_price: f64,
    pub loan_amount: f64,
    pub interest_rate: f64,
    pub loan_term_years: u32,
    pub monthly_rent: f64,
    pub vacancy_rate: f64,
    pub monthly_expenses: f64,
    pub renovation_cost: f64,
    pub holding_years: u32,
}

impl RoiInputs {
    /// Calculator defaults for a property at `price` renting for `monthly_rent`.
    pub fn for_property(price: f64, monthly_rent: f64) -> Self {
        Self {
            property_price: price,
            loan_amount: price * DEFAULT_LOAN_TO_VALUE,
            interest_rate: DEFAULT_INTEREST_RATE,
            loan_term_years: DEFAULT_LOAN_TERM_YEARS,
            monthly_rent,
            vacancy_rate: DEFAULT_VACANCY_RATE,
            monthly_expenses: DEFAULT_MONTHLY_EXPENSES,
            renovation_cost: 0.0,
            holding_years: DEFAULT_HOLDING_YEARS,
        }
    }

    pub fn down_payment(&self) -> f64 {
        self.property_price - self.loan_amount
    }

    /// Cash the buyer puts in: down payment plus renovation.
    pub fn total_investment(&self) -> f64 {
        self.down_payment() + self.renovation_cost
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub down_payment: f64,
    pub monthly_payment: f64,
    pub effective_rental_income: f64,
    pub monthly_cash_flow: f64,
    pub annual_cash_flow: f64,
    pub total_investment: f64,
    /// Percent.
    pub annual_roi: f64,
    pub total_return: f64,
    /// Percent over the holding period.
    pub total_roi: f64,
    /// False when nothing was invested; both ROI figures are then reported
    /// as 0 but the ratio itself is undefined.
    pub roi_defined: bool,
}

pub fn calculate_roi(inputs: &RoiInputs) -> RoiResult {
    let monthly_payment =
        monthly_mortgage_payment(inputs.loan_amount, inputs.interest_rate, inputs.loan_term_years);
    let effective = effective_rental_income(inputs.monthly_rent, inputs.vacancy_rate);
    let monthly_cash_flow = effective - monthly_payment - inputs.monthly_expenses;
    let annual_cash_flow = monthly_cash_flow * 12.0;
    let total_investment = inputs.total_investment();
    let total_return = annual_cash_flow * f64::from(inputs.holding_years);

    let roi_defined = total_investment > 0.0;
    let (annual_roi, total_roi) = if roi_defined {
        (
            annual_cash_flow / total_investment * 100.0,
            total_return / total_investment * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    RoiResult {
        down_payment: inputs.down_payment(),
        monthly_payment,
        effective_rental_income: effective,
        monthly_cash_flow,
        annual_cash_flow,
        total_investment,
        annual_roi,
        total_return,
        total_roi,
        roi_defined,
    }
}
