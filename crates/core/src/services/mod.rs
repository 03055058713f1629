pub mod access_service;
pub mod analysis_service;
pub mod auth_guard;
pub mod calculator_service;
pub mod catalog_service;
pub mod debounce;
pub mod geography_service;
pub mod map_service;
pub mod validation;
