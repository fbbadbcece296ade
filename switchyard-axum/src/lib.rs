//! # switchyard-axum
//!
//! Serves a switchyard [`Router`](switchyard::Router) with axum.
//!
//! Every request reaches the router through a single fallback service, so
//! routing, hooks and recovery all stay in switchyard.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use switchyard::{ErrorPolicy, Handler, HttpAdapter, Router};
//! use switchyard_axum::AxumAdapter;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let router = Router::new().get(
//!         "/",
//!         [Handler::from_sync(|ctx| {
//!             ctx.send("Hello World!");
//!             Ok(())
//!         })],
//!     )?;
//!
//!     AxumAdapter::new(router, ErrorPolicy::default())
//!         .listen(3000, "127.0.0.1")
//!         .await
//! }
//! ```

mod axum_adapter;
mod axum_route_adapter;
mod error;
pub mod telemetry;

pub use axum_adapter::{serve, AxumAdapter};
pub use axum_route_adapter::AxumRouteAdapter;
pub use error::ServeError;

// Re-export commonly used types from switchyard
pub use switchyard::{HttpAdapter, RouteAdapter};
