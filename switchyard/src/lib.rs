#[path = "adapter/mod.rs"]
pub mod adapter;
#[path = "adapter/http_adapter.rs"]
pub mod http_adapter;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod http_helpers;
pub mod matcher;
pub mod pipeline;
pub mod router;
pub mod traits_helpers;

// Re-exports for adapter crates and applications
pub use adapter::RouteAdapter;
pub use http_adapter::HttpAdapter;
pub use context::{Context, Intermediate};
pub use dispatcher::{Dispatcher, finalize};
pub use error::RouteError;
pub use http_helpers::{Body, HttpError, HttpMethod, HttpRequest, HttpResponse, IntoResponse};
pub use matcher::{Matcher, RoutePattern};
pub use pipeline::{ErrorPolicy, Pipeline};
pub use router::{RouteLookup, RouteMap, RouteTarget, Router};
pub use traits_helpers::{Handler, HandlerResult, Middleware};

// Lets `#[async_trait]` middleware be written with only `switchyard` as a dependency
pub use async_trait::async_trait;
pub use regex::Regex;
