pub mod epoch;
pub mod error;
pub mod serialize;

/// A point on the timeline, always expressed in UTC.
pub type Instant = chrono::DateTime<chrono::Utc>;
