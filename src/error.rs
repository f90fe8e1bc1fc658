use thiserror::Error;

/// Required metadata that the scraped pages did not provide.
#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    #[error("field `{field}` not found")]
    MissingField { field: String },

    #[error("field `{field}` has no linked values")]
    EmptyLinks { field: String },
}
