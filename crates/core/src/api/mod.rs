pub mod analysis_api;
pub mod auth_api;
pub mod client;
pub mod contact_api;
pub mod feedback_api;
pub mod portfolio_api;
pub mod property_api;
pub mod query;
pub mod subscription_api;

pub use analysis_api::AnalysisApi;
pub use auth_api::AuthApi;
pub use client::{HttpClient, ResponseObserver};
pub use contact_api::ContactApi;
pub use feedback_api::FeedbackApi;
pub use portfolio_api::PortfolioApi;
pub use property_api::PropertyApi;
pub use query::QueryParams;
pub use subscription_api::SubscriptionApi;
