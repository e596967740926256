//! Read services over the catalog.
//!
//! One service per entity, each owning a pool handle. All operations are
//! independent, stateless reads; the newsletter subscribe is the only write.

pub mod cities;
pub mod events;
pub mod honeys;
pub mod newsletter;
pub mod sources;

pub use cities::CityService;
pub use events::EventService;
pub use honeys::HoneyService;
pub use newsletter::NewsletterService;
pub use sources::SourceService;
