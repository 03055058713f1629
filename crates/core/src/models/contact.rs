use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A request to be contacted about a listed property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Property identifier.
    pub property: u64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: u64,
    pub property: u64,
    #[serde(default)]
    pub property_address: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    #[serde(default)]
    pub contacted: bool,
    pub created_at: DateTime<Utc>,
}
