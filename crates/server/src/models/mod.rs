//! Database models and their query methods.

pub mod city;
pub mod event;
pub mod honey;
pub mod local_source;
pub mod newsletter;

pub use city::CityContent;
pub use event::Event;
pub use honey::Honey;
pub use local_source::LocalSource;
pub use newsletter::NewsletterSubscription;

/// A slug plus its last-modified timestamp, as consumed by the sitemap.
pub type SitemapEntry = (String, chrono::DateTime<chrono::Utc>);
