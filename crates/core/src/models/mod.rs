pub mod analysis;
pub mod auth;
pub mod contact;
pub mod decimal;
pub mod feedback;
pub mod filters;
pub mod geography;
pub mod page;
pub mod portfolio;
pub mod property;
pub mod subscription;
