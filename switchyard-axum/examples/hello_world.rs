//! Serves `GET /` with a JSON greeting.
//!
//! ```text
//! cargo run -p switchyard-axum --example hello_world
//! curl http://127.0.0.1:3000/
//! ```

use serde_json::json;
use switchyard::{ErrorPolicy, Handler, Router};
use switchyard_axum::{serve, telemetry};
use switchyard_config::{ConfigModule, ServerConfig};

fn set_header(name: &'static str, value: &'static str) -> Handler {
    Handler::from_sync(move |ctx| {
        ctx.response.set_header(name, value);
        Ok(())
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigModule::<ServerConfig>::from_env()?.get();
    telemetry::init_tracing(&config)?;

    let build_hello = Handler::from_sync(|ctx| {
        ctx.intermediate.set(
            "helloWorld",
            json!({ "id": "hello-world", "message": "Hello World!" }),
        );
        Ok(())
    });

    let say_hello = Handler::from_sync(|ctx| {
        let hello = ctx.intermediate.get("helloWorld").cloned().unwrap_or_default();
        ctx.send(hello);
        Ok(())
    });

    let router = Router::new().get(
        "/",
        [set_header("Content-Type", "application/json"), build_hello, say_hello],
    )?;

    let policy = ErrorPolicy::new([Handler::from_sync(|ctx| {
        if let Some(err) = &ctx.intermediate.error {
            tracing::error!(error = %err, "request failed");
        }
        Ok(())
    })]);

    serve(&config, router, policy).await?;
    Ok(())
}
