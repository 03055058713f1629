use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::analysis::{
    AnalysisAssumptions, AnalysisMetrics, AnalysisResult, AppliedAssumptions, Financing,
};
use crate::models::property::Property;
use crate::storage::lock;

use super::calculator_service::{effective_rental_income, monthly_mortgage_payment};
use super::debounce::Debouncer;

/// Payback reported when the property never pays for itself.
pub const UNREACHABLE_PAYBACK_YEARS: f64 = 999.0;

/// Recompute delay after an assumption change.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Something that turns a property plus assumptions into investment metrics.
///
/// Implemented by [`LocalAnalyzer`] (pure arithmetic, no I/O) and by
/// [`AnalysisApi`](crate::api::AnalysisApi) (computed by the backend).
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Analyzer: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    async fn evaluate(
        &self,
        property: &Property,
        assumptions: &AnalysisAssumptions,
    ) -> Result<AnalysisResult, CoreError>;
}

/// Client-side analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAnalyzer;

impl LocalAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Metrics for a property at `price`.
    ///
    /// - gross yield: nominal annual rent / price
    /// - net operating income (NOI): rent after vacancy, minus annual expenses
    /// - cap rate: NOI / price
    /// - net yield: NOI / (price + renovation)
    /// - cash-on-cash: annual cash flow after mortgage / cash invested
    /// - payback: price / NOI, [`UNREACHABLE_PAYBACK_YEARS`] when NOI ≤ 0
    pub fn compute(property_id: u64, price: f64, a: &AnalysisAssumptions) -> AnalysisResult {
        let annual_rent = a.monthly_rent * 12.0;
        let annual_income = effective_rental_income(a.monthly_rent, a.vacancy_rate) * 12.0;
        let noi = annual_income - a.annual_expenses;

        let down_payment = price * a.down_payment_percent;
        let loan_amount = (price - down_payment).max(0.0);
        let monthly_mortgage = monthly_mortgage_payment(loan_amount, a.interest_rate, a.loan_term_years);

        let monthly_cash_flow = noi / 12.0 - monthly_mortgage;
        let annual_cash_flow = monthly_cash_flow * 12.0;
        let invested = down_payment + a.renovation_cost;

        let metrics = AnalysisMetrics {
            gross_yield: ratio_pct(annual_rent, price),
            net_yield: ratio_pct(noi, price + a.renovation_cost),
            monthly_cash_flow,
            annual_cash_flow,
            payback_years: if noi > 0.0 {
                price / noi
            } else {
                UNREACHABLE_PAYBACK_YEARS
            },
            cap_rate: ratio_pct(noi, price),
            cash_on_cash_return: ratio_pct(annual_cash_flow, invested),
        };

        let financing = (loan_amount > 0.0).then(|| Financing {
            down_payment,
            loan_amount,
            monthly_mortgage,
            total_monthly_expenses: a.annual_expenses / 12.0 + monthly_mortgage,
        });

        AnalysisResult {
            property_id,
            strategy: a.strategy,
            assumptions: AppliedAssumptions::from(a),
            metrics,
            financing,
        }
    }
}

fn ratio_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Analyzer for LocalAnalyzer {
    fn name(&self) -> &str {
        "local"
    }

    async fn evaluate(
        &self,
        property: &Property,
        assumptions: &AnalysisAssumptions,
    ) -> Result<AnalysisResult, CoreError> {
        Ok(Self::compute(property.id, property.price, assumptions))
    }
}

#[derive(Debug, Default)]
struct SessionState {
    assumptions: AnalysisAssumptions,
    last_result: Option<AnalysisResult>,
}

/// The analysis panel of one property: holds the current assumptions and
/// recomputes after they stop changing for the debounce window.
pub struct AnalysisSession {
    analyzer: Arc<dyn Analyzer>,
    property: Property,
    debouncer: Debouncer,
    state: Mutex<SessionState>,
}

impl AnalysisSession {
    /// Assumptions start from the defaults, with the region's average rent
    /// when the property has one.
    pub fn new(analyzer: Arc<dyn Analyzer>, property: Property) -> Self {
        let defaults = AnalysisAssumptions::default();
        let assumptions = AnalysisAssumptions {
            monthly_rent: property.suggested_monthly_rent(defaults.monthly_rent),
            ..defaults
        };
        Self {
            analyzer,
            property,
            debouncer: Debouncer::new(DEFAULT_DEBOUNCE),
            state: Mutex::new(SessionState {
                assumptions,
                last_result: None,
            }),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn assumptions(&self) -> AnalysisAssumptions {
        lock(&self.state).assumptions.clone()
    }

    pub fn last_result(&self) -> Option<AnalysisResult> {
        lock(&self.state).last_result.clone()
    }

    /// Record new assumptions, then recompute once the window has passed.
    /// `Ok(None)` means a later update superseded this one.
    pub async fn update(&self, assumptions: AnalysisAssumptions) -> Result<Option<AnalysisResult>, CoreError> {
        lock(&self.state).assumptions = assumptions;
        if !self.debouncer.settle().await {
            return Ok(None);
        }
        self.refresh().await.map(Some)
    }

    /// Recompute now with the current assumptions.
    pub async fn refresh(&self) -> Result<AnalysisResult, CoreError> {
        let assumptions = self.assumptions();
        tracing::debug!(
            analyzer = self.analyzer.name(),
            property_id = self.property.id,
            "running analysis"
        );
        let result = self.analyzer.evaluate(&self.property, &assumptions).await?;
        lock(&self.state).last_result = Some(result.clone());
        Ok(result)
    }
}

impl std::fmt::Debug for AnalysisSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisSession")
            .field("analyzer", &self.analyzer.name())
            .field("property_id", &self.property.id)
            .field("delay", &self.debouncer.delay())
            .finish()
    }
}
