use thiserror::Error;

/// Client-input errors raised at the request boundary, before the pipeline
/// runs. The pipeline itself is total: extraction, compilation, and matching
/// cannot fail, they only produce empty results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("'query' cannot be empty")]
    EmptyQuery,
}
