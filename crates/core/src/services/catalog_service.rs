use serde::Serialize;

use crate::errors::CoreError;
use crate::models::filters::{PropertyFilters, DEFAULT_PAGE};
use crate::models::page::{page_count, Page};
use crate::models::property::Property;

/// Page size of the catalog grid.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

pub const EMPTY_MESSAGE: &str = "No properties found";
pub const EMPTY_HINT: &str = "Try adjusting your filters";
pub const LOAD_FAILED_TITLE: &str = "Failed to load properties";

/// The four branches every data-consuming view renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViewState<T> {
    Loading,
    Empty {
        message: String,
        hint: String,
        /// Offer "reset filters" when filters could be hiding results.
        reset_visible: bool,
    },
    Error {
        title: String,
        message: String,
        retryable: bool,
    },
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(v) => Some(v),
            _ => None,
        }
    }

    /// Error branch for a failed load.
    pub fn failed(title: &str, error: &CoreError) -> Self {
        ViewState::Error {
            title: title.to_string(),
            message: error.user_message(),
            retryable: error.is_retryable(),
        }
    }
}

/// One rendered page of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyListView {
    pub properties: Vec<Property>,
    pub count: u64,
    pub page: u32,
    pub page_size: u32,
    pub page_count: u64,
    /// 1-based index of the first property shown.
    pub showing_from: u64,
    pub showing_to: u64,
    pub show_pagination: bool,
}

/// Map the outcome of a list request to the catalog's view state.
pub fn property_list_view(
    result: Result<Page<Property>, CoreError>,
    filters: &PropertyFilters,
) -> ViewState<PropertyListView> {
    let page = match result {
        Ok(page) => page,
        Err(e) => return ViewState::failed(LOAD_FAILED_TITLE, &e),
    };

    if page.is_empty() {
        return ViewState::Empty {
            message: EMPTY_MESSAGE.to_string(),
            hint: EMPTY_HINT.to_string(),
            reset_visible: true,
        };
    }

    let current = filters.page.unwrap_or(DEFAULT_PAGE).max(1);
    let page_size = filters.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let size = u64::from(page_size);
    let showing_from = u64::from(current - 1) * size + 1;
    let showing_to = (u64::from(current) * size).min(page.count);

    ViewState::Ready(PropertyListView {
        count: page.count,
        page: current,
        page_size,
        page_count: page_count(page.count, page_size),
        showing_from,
        showing_to,
        show_pagination: page.count > size,
        properties: page.results,
    })
}
