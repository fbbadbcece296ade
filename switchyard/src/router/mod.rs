//! Route registration and lookup.

mod route_map;
#[allow(clippy::module_inception)]
mod router;

pub use route_map::{RouteLookup, RouteMap, RouteTarget};
pub use router::Router;
