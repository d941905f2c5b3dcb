/// An error that occurred while reading a point in time from text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("'{0}' is not a point in time, expected RFC 3339, YYYY-MM-DD or epoch milliseconds")]
    Syntax(String),
    #[error("'{0}' is outside of the representable time range")]
    OutOfRange(String),
}
