use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::property::{Condition, EnergyRating, ListingStatus, PropertyType};
use crate::api::query::QueryParams;

// ── Neutral defaults of the catalog filter panel ────────────────────

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_ORDERING: &str = "-created_at";
pub const PRICE_FLOOR: u64 = 0;
pub const PRICE_CEILING: u64 = 2_000_000;
pub const SIZE_FLOOR: u32 = 0;
pub const SIZE_CEILING: u32 = 1_000;
pub const BEDROOMS_FLOOR: u32 = 0;
pub const BEDROOMS_CEILING: u32 = 10;
pub const BATHROOMS_FLOOR: u32 = 0;
pub const BATHROOMS_CEILING: u32 = 10;
pub const YEAR_BUILT_FLOOR: i32 = 1900;
pub const PARKING_FLOOR: u32 = 0;

/// Upper bound of the year-built slider: the current year.
pub fn year_built_ceiling() -> i32 {
    chrono::Utc::now().year()
}

/// Filters of the property catalog. Every field is optional; unset fields and
/// fields at their neutral default are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyFilters {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub property_type: Vec<PropertyType>,
    pub region: Vec<u64>,
    pub search: Option<String>,
    pub ordering: Option<String>,

    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_size: Option<u32>,
    pub max_size: Option<u32>,
    pub min_bedrooms: Option<u32>,
    pub max_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub max_bathrooms: Option<u32>,
    pub min_year_built: Option<i32>,
    pub max_year_built: Option<i32>,

    pub condition: Vec<Condition>,
    pub energy_rating: Vec<EnergyRating>,
    pub has_elevator: Option<bool>,
    pub has_balcony: Option<bool>,
    pub has_terrace: Option<bool>,
    pub min_parking_spaces: Option<u32>,
    pub listing_status: Vec<ListingStatus>,

    pub district: Vec<String>,
    pub municipality: Vec<String>,
    pub parish: Vec<String>,
}

impl PropertyFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the query string parameters of a list request.
    pub fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();

        // Pagination
        q.non_default("page", self.page, DEFAULT_PAGE);
        q.opt("page_size", self.page_size);

        // Basic filters
        q.many("property_type", &self.property_type);
        q.many("region", &self.region);
        q.text("search", self.search.as_deref());
        if let Some(ordering) = self.ordering.as_deref().map(str::trim) {
            if !ordering.is_empty() && ordering != DEFAULT_ORDERING {
                q.opt("ordering", Some(ordering));
            }
        }

        // Ranges
        q.above("price__gte", self.min_price, PRICE_FLOOR);
        q.below("price__lte", self.max_price, PRICE_CEILING);
        q.above("size_sqm__gte", self.min_size, SIZE_FLOOR);
        q.below("size_sqm__lte", self.max_size, SIZE_CEILING);
        q.above("bedrooms__gte", self.min_bedrooms, BEDROOMS_FLOOR);
        q.below("bedrooms__lte", self.max_bedrooms, BEDROOMS_CEILING);
        q.above("bathrooms__gte", self.min_bathrooms, BATHROOMS_FLOOR);
        q.below("bathrooms__lte", self.max_bathrooms, BATHROOMS_CEILING);
        q.above("year_built__gte", self.min_year_built, YEAR_BUILT_FLOOR);
        q.below("year_built__lte", self.max_year_built, year_built_ceiling());

        // Condition and features
        q.many("condition", &self.condition);
        q.many("energy_rating", &self.energy_rating);
        q.flag("has_elevator", self.has_elevator);
        q.flag("has_balcony", self.has_balcony);
        q.flag("has_terrace", self.has_terrace);
        q.above("parking_spaces__gte", self.min_parking_spaces, PARKING_FLOOR);
        q.many("listing_status", &self.listing_status);

        // Geography
        q.many("district", &self.district);
        q.many("municipality", &self.municipality);
        q.many("parish", &self.parish);

        q
    }

    /// Number of filter groups away from their default, pagination and
    /// ordering excluded. A min/max pair counts once per moved bound.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        let mut bump = |active: bool| {
            if active {
                count += 1;
            }
        };

        bump(self.search.as_deref().is_some_and(|s| !s.trim().is_empty()));
        bump(!self.property_type.is_empty());
        bump(!self.region.is_empty());
        bump(self.min_price.is_some_and(|v| v > PRICE_FLOOR));
        bump(self.max_price.is_some_and(|v| v < PRICE_CEILING));
        bump(self.min_size.is_some_and(|v| v > SIZE_FLOOR));
        bump(self.max_size.is_some_and(|v| v < SIZE_CEILING));
        bump(self.min_bedrooms.is_some_and(|v| v > BEDROOMS_FLOOR));
        bump(self.max_bedrooms.is_some_and(|v| v < BEDROOMS_CEILING));
        bump(self.min_bathrooms.is_some_and(|v| v > BATHROOMS_FLOOR));
        bump(self.max_bathrooms.is_some_and(|v| v < BATHROOMS_CEILING));
        bump(self.min_year_built.is_some_and(|v| v > YEAR_BUILT_FLOOR));
        bump(self.max_year_built.is_some_and(|v| v < year_built_ceiling()));
        bump(!self.condition.is_empty());
        bump(!self.energy_rating.is_empty());
        bump(self.has_elevator.is_some());
        bump(self.has_balcony.is_some());
        bump(self.has_terrace.is_some());
        bump(self.min_parking_spaces.is_some_and(|v| v > PARKING_FLOOR));
        bump(!self.listing_status.is_empty());
        bump(!self.district.is_empty() || !self.municipality.is_empty() || !self.parish.is_empty());

        count
    }

    /// True when the filters would produce a request without filter parameters.
    pub fn is_default(&self) -> bool {
        self.without_pagination().to_query().is_empty()
    }

    /// Back to the neutral state, keeping the page size.
    pub fn reset(&mut self) {
        let page_size = self.page_size;
        *self = Self {
            page_size,
            ..Self::default()
        };
    }

    /// Copy with pagination dropped (used when persisting filters).
    pub fn without_pagination(&self) -> Self {
        Self {
            page: None,
            page_size: None,
            ..self.clone()
        }
    }

    /// Changing any filter sends the user back to the first page.
    pub fn touch(&mut self) {
        self.page = None;
    }
}
