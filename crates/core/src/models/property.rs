use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::decimal;

/// Category of a listed property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    House,
    Land,
    Commercial,
    Mixed,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Land,
        PropertyType::Commercial,
        PropertyType::Mixed,
    ];

    /// Value used on the wire and in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
            PropertyType::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    Excellent,
    Good,
    Fair,
    NeedsRenovation,
    Demolition,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Condition::New => "new",
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::NeedsRenovation => "needs_renovation",
            Condition::Demolition => "demolition",
        };
        f.write_str(s)
    }
}

/// Energy certificate grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyRating {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    #[serde(rename = "B-")]
    BMinus,
    C,
    D,
    E,
    F,
    G,
}

impl std::fmt::Display for EnergyRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EnergyRating::APlus => "A+",
            EnergyRating::A => "A",
            EnergyRating::B => "B",
            EnergyRating::BMinus => "B-",
            EnergyRating::C => "C",
            EnergyRating::D => "D",
            EnergyRating::E => "E",
            EnergyRating::F => "F",
            EnergyRating::G => "G",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Active,
    Sold,
    Pending,
    Withdrawn,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ListingStatus::Active => "active",
            ListingStatus::Sold => "sold",
            ListingStatus::Pending => "pending",
            ListingStatus::Withdrawn => "withdrawn",
        };
        f.write_str(s)
    }
}

/// `[longitude, latitude]`, as sent by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates(pub f64, pub f64);

impl Coordinates {
    pub fn longitude(&self) -> f64 {
        self.0
    }

    pub fn latitude(&self) -> f64 {
        self.1
    }
}

/// Market region a property belongs to, with the region's reference averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: u64,
    pub name: String,
    pub code: String,
    #[serde(default, with = "decimal::option")]
    pub avg_price_per_sqm: Option<f64>,
    #[serde(default, with = "decimal::option")]
    pub avg_rent: Option<f64>,
    #[serde(default, with = "decimal::option")]
    pub avg_yield: Option<f64>,
}

/// A listed property. Owned entirely by the backend; the client only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u64,
    #[serde(default)]
    pub external_id: Option<String>,
    pub address: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "decimal")]
    pub price: f64,
    #[serde(with = "decimal")]
    pub size_sqm: f64,
    #[serde(default, with = "decimal::option")]
    pub price_per_sqm: Option<f64>,
    pub property_type: PropertyType,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default, with = "decimal::option")]
    pub bathrooms: Option<f64>,
    #[serde(default)]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub floor_number: Option<i32>,
    #[serde(default)]
    pub total_floors: Option<i32>,
    #[serde(default)]
    pub has_elevator: Option<bool>,
    #[serde(default)]
    pub parking_spaces: Option<u32>,
    #[serde(default)]
    pub has_balcony: Option<bool>,
    #[serde(default)]
    pub has_terrace: Option<bool>,
    #[serde(default)]
    pub energy_rating: Option<EnergyRating>,
    #[serde(default)]
    pub listing_status: Option<ListingStatus>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub region_id: Option<u64>,
    /// Free-form payload from the listing source, kept as-is.
    #[serde(default)]
    pub raw_data: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Property {
    /// Monthly rent to seed the calculators with: the region's average when
    /// known, otherwise `fallback`.
    pub fn suggested_monthly_rent(&self, fallback: f64) -> f64 {
        self.region
            .as_ref()
            .and_then(|r| r.avg_rent)
            .map(f64::round)
            .unwrap_or(fallback)
    }
}
