use std::future::Future;
use std::sync::Arc;

use anyhow::Result;

use crate::dispatcher::Dispatcher;
use crate::http_helpers::{HttpRequest, HttpResponse};

/// Converts between a transport's request/response types and ours.
pub trait RouteAdapter {
    type Request;
    type Response;

    fn adapt_request(request: Self::Request) -> impl Future<Output = Result<HttpRequest>> + Send;

    fn adapt_response(response: HttpResponse) -> Result<Self::Response>;

    fn handle_request(
        request: Self::Request,
        dispatcher: Arc<Dispatcher>,
    ) -> impl Future<Output = Result<Self::Response>> + Send
    where
        Self::Request: Send,
        Self::Response: Send,
    {
        async move {
            let http_request = Self::adapt_request(request).await?;
            let http_response = dispatcher.handle(http_request).await;
            Self::adapt_response(http_response)
        }
    }
}
