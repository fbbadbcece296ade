use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, Response, StatusCode},
};
use switchyard::{Dispatcher, ErrorPolicy, HttpAdapter, RouteAdapter, Router};
use switchyard_config::{ServerConfig, Validate};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{AxumRouteAdapter, ServeError};

/// Serves a switchyard router through one axum fallback service.
#[derive(Clone)]
pub struct AxumAdapter {
    dispatcher: Arc<Dispatcher>,
}

impl AxumAdapter {
    pub fn new(router: Router, policy: ErrorPolicy) -> Self {
        Self::from_dispatcher(Arc::new(Dispatcher::new(router, policy)))
    }

    /// The dispatcher behind this adapter. Reload routes through it.
    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// An axum router sending every request to the dispatcher
    pub fn into_router(self) -> axum::Router {
        let dispatcher = self.dispatcher;

        axum::Router::new().fallback(move |req: Request<Body>| {
            let dispatcher = dispatcher.clone();
            async move {
                AxumRouteAdapter::handle_request(req, dispatcher)
                    .await
                    .unwrap_or_else(|e| {
                        error!(error = %e, "failed to adapt request or response");
                        internal_error()
                    })
            }
        })
    }

    pub async fn run(self, address: &str) -> Result<(), ServeError> {
        let listener = TcpListener::bind(address)
            .await
            .map_err(|source| ServeError::Bind {
                address: address.to_string(),
                source,
            })?;

        self.run_on(listener).await
    }

    /// Serve on an already bound listener
    pub async fn run_on(self, listener: TcpListener) -> Result<(), ServeError> {
        if let Ok(address) = listener.local_addr() {
            info!(%address, "listening");
        }

        axum::serve(listener, self.into_router())
            .await
            .map_err(ServeError::Server)
    }
}

impl HttpAdapter for AxumAdapter {
    fn from_dispatcher(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    async fn listen(self, port: u16, hostname: &str) -> anyhow::Result<()> {
        self.run(&format!("{}:{}", hostname, port)).await?;
        Ok(())
    }
}

/// Validate `config` and serve `router` on its address until the server stops.
pub async fn serve(
    config: &ServerConfig,
    router: Router,
    policy: ErrorPolicy,
) -> Result<(), ServeError> {
    config.validate()?;

    let mut dispatcher = Dispatcher::new(router, policy);
    if let Some(message) = &config.not_found_message {
        dispatcher = dispatcher.with_not_found_message(message.clone());
    }

    AxumAdapter::from_dispatcher(Arc::new(dispatcher))
        .run(&config.address())
        .await
}

fn internal_error() -> Response<Body> {
    let mut response = Response::new(Body::from(r#"{"success":false,"message":"Internal Server Error"}"#));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_rejects_invalid_config() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };

        let result = serve(&config, Router::new(), ErrorPolicy::default()).await;

        assert!(matches!(result, Err(ServeError::Config(_))));
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = taken.local_addr().unwrap().to_string();

        let result = AxumAdapter::new(Router::new(), ErrorPolicy::default())
            .run(&address)
            .await;

        assert!(matches!(result, Err(ServeError::Bind { .. })));
    }

    #[tokio::test]
    async fn test_run_on_serves_router() {
        let router = Router::new()
            .get(
                "/ping",
                [switchyard::Handler::from_sync(|ctx| {
                    ctx.send("pong");
                    Ok(())
                })],
            )
            .unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let server = tokio::spawn(AxumAdapter::new(router, ErrorPolicy::default()).run_on(listener));

        let response = reqwest::get(format!("http://{address}/ping")).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), "pong");

        let missing = reqwest::get(format!("http://{address}/pong")).await.unwrap();
        assert_eq!(missing.status(), 404);

        server.abort();
    }
}
