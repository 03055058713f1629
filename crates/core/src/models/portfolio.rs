use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::decimal;

/// Server-computed comparison between a property's current price and the
/// user's target price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceDifference {
    pub amount: f64,
    pub percentage: f64,
    pub is_below_target: bool,
}

/// A property saved into a portfolio, with the user's own notes and target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioProperty {
    pub id: u64,
    pub property_id: u64,
    pub property_address: String,
    #[serde(with = "decimal")]
    pub property_price: f64,
    pub property_type: String,
    #[serde(with = "decimal")]
    pub size_sqm: f64,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, with = "decimal::option")]
    pub target_price: Option<f64>,
    #[serde(default)]
    pub price_difference: Option<PriceDifference>,
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
}

/// A named collection of saved properties. At most one per user is the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub property_count: u32,
    #[serde(default, with = "decimal")]
    pub total_value: f64,
    #[serde(default, with = "decimal::option")]
    pub average_price: Option<f64>,
    /// Only present on single-portfolio reads.
    #[serde(default)]
    pub properties: Vec<PortfolioProperty>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Portfolio {
    pub fn contains_property(&self, property_id: u64) -> bool {
        self.properties.iter().any(|p| p.property_id == property_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePortfolio {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl CreatePortfolio {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Partial update: unset fields are left out of the PATCH body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePortfolio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddPortfolioProperty {
    pub property_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,
}

/// Edit notes or target price of a saved property.
/// `target_price: Some(None)` clears the target on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePortfolioProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<Option<f64>>,
}
