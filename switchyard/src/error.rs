use thiserror::Error;

/// Errors raised while building a route table.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A pattern, usually one produced by joining a prefix with a route,
    /// did not compile.
    #[error("invalid route pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
