//! Request entry point for transport adapters.

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde_json::json;
use tracing::{Instrument, debug, info_span};
use uuid::Uuid;

use crate::context::Context;
use crate::http_helpers::{HttpError, HttpRequest, HttpResponse, IntoResponse};
use crate::pipeline::ErrorPolicy;
use crate::router::{RouteMap, Router};

/// Runs requests against a router.
///
/// The route map is sorted before it is installed and lives behind an
/// [`ArcSwap`]: [`Dispatcher::reload`] replaces it atomically while requests
/// already in flight finish on the map they started with.
#[derive(Debug)]
pub struct Dispatcher {
    route_map: ArcSwap<RouteMap>,
    policy: ArcSwap<ErrorPolicy>,
    not_found_message: Option<String>,
}

impl Dispatcher {
    pub fn new(router: Router, policy: ErrorPolicy) -> Self {
        Self {
            route_map: ArcSwap::from_pointee(sorted(router)),
            policy: ArcSwap::from_pointee(policy),
            not_found_message: None,
        }
    }

    /// Fixed message for unmatched requests instead of `Cannot <METHOD> <uri>`
    pub fn with_not_found_message(mut self, message: impl Into<String>) -> Self {
        self.not_found_message = Some(message.into());
        self
    }

    pub fn reload(&self, router: Router) {
        let route_map = sorted(router);
        debug!(routes = route_map.len(), "reloading routes");
        self.route_map.store(Arc::new(route_map));
    }

    pub fn set_policy(&self, policy: ErrorPolicy) {
        self.policy.store(Arc::new(policy));
    }

    pub fn route_map(&self) -> Arc<RouteMap> {
        self.route_map.load_full()
    }

    /// Look the request up and run the matched pipeline.
    ///
    /// An unmatched request, or one matching a route without handlers, runs
    /// nothing and carries a 404 [`HttpError`] on `intermediate.error`.
    pub async fn dispatch(&self, request: HttpRequest) -> Context {
        let span = info_span!(
            "dispatch",
            request_id = %Uuid::new_v4(),
            method = %request.method,
            uri = %request.uri,
        );

        async move {
            let route_map = self.route_map.load_full();
            let lookup = route_map.find(&request);

            let mut ctx = Context::new(request);
            ctx.intermediate.route = lookup.key;

            if lookup.pipeline.is_empty() {
                let message = match &self.not_found_message {
                    Some(message) => message.clone(),
                    None => format!("Cannot {} {}", ctx.request.method, ctx.request.uri),
                };
                debug!("{message}");
                ctx.intermediate.error = Some(HttpError::not_found(message).into());
                return ctx;
            }

            let policy = self.policy.load_full();
            lookup.pipeline.run(&mut ctx, &policy).await;
            debug!(failed = ctx.intermediate.has_error(), "pipeline finished");
            ctx
        }
        .instrument(span)
        .await
    }

    /// [`Dispatcher::dispatch`] and turn the context into the final response.
    pub async fn handle(&self, request: HttpRequest) -> HttpResponse {
        finalize(self.dispatch(request).await)
    }
}

fn sorted(router: Router) -> RouteMap {
    let route_map = router.into_route_map();
    route_map.sort();
    route_map
}

/// A response written by a handler is returned as is. Otherwise a captured
/// error becomes `{"success": false, "message": ...}` with its status.
pub fn finalize(ctx: Context) -> HttpResponse {
    let Context {
        response,
        intermediate,
        ..
    } = ctx;

    if !response.body.is_empty() {
        return response;
    }

    match intermediate.error {
        Some(err) => {
            let http_error = HttpError::from_error(&err);
            let mut response = response;
            response.merge(
                (
                    http_error.status_code(),
                    json!({ "success": false, "message": http_error.message() }),
                )
                    .into_response(),
            );
            response
        }
        None => response,
    }
}
