//! Domain error types.
//!
//! These errors describe user input that cannot be turned into a query.
//! They are distinct from API/IO errors.

/// Errors from parsing a commute query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The message did not contain exactly one separator
    #[error("expected exactly one \" to \" separator, found {found}")]
    Separator { found: usize },

    /// One side of the separator was blank
    #[error("{0} is empty")]
    EmptyPlace(&'static str),
}
