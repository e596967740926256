//! HTTP route handlers.
//!
//! One router per resource, merged in `main.rs`.

pub mod cities;
pub mod events;
pub mod filters;
pub mod health;
pub mod honeys;
pub mod newsletter;
pub mod sitemap;
pub mod sources;
