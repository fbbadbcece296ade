use std::future::Future;
use std::sync::Arc;

use anyhow::Result;

use crate::dispatcher::Dispatcher;

/// A server that feeds every request it accepts to a [`Dispatcher`].
pub trait HttpAdapter: Send + Sync + Sized {
    fn from_dispatcher(dispatcher: Arc<Dispatcher>) -> Self;

    fn listen(self, port: u16, hostname: &str) -> impl Future<Output = Result<()>> + Send;
}
