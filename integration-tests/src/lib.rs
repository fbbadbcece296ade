//! Helpers shared by the integration tests.

use std::io;
use std::net::SocketAddr;

use switchyard::{ErrorPolicy, Router};
use switchyard_axum::AxumAdapter;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running in the background on an ephemeral port.
/// Dropping it stops the server.
pub struct TestServer {
    pub address: SocketAddr,
    pub adapter: AxumAdapter,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(router: Router, policy: ErrorPolicy) -> io::Result<Self> {
        Self::start_adapter(AxumAdapter::new(router, policy)).await
    }

    pub async fn start_adapter(adapter: AxumAdapter) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?;

        let server = adapter.clone();
        let handle = tokio::spawn(async move {
            let _ = server.run_on(listener).await;
        });

        Ok(Self {
            address,
            adapter,
            handle,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
