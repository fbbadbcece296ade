use std::fmt;
use std::future::{self, Future};
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use crate::context::Context;

/// Outcome of a single handler. `Err` stops the pipeline and triggers recovery.
pub type HandlerResult = anyhow::Result<()>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Object-style handler: anything exposing a `process` step
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn process(&self, ctx: &mut Context) -> HandlerResult;
}

/// Function-style handler
pub type MiddlewareFn =
    Arc<dyn for<'a> Fn(&'a mut Context) -> BoxFuture<'a, HandlerResult> + Send + Sync>;

/// One unit of request processing.
///
/// Both shapes are invoked the same way by [`Handler::call`]. Cloning a
/// handler is cheap and keeps its identity, see [`Handler::ptr_eq`].
#[derive(Clone)]
pub enum Handler {
    Function(MiddlewareFn),
    Object(Arc<dyn Middleware>),
}

impl Handler {
    /// Wrap an async closure.
    ///
    /// ```
    /// use switchyard::traits_helpers::middleware::Handler;
    ///
    /// let handler = Handler::from_fn(|ctx| {
    ///     Box::pin(async move {
    ///         ctx.intermediate.set("seen", true);
    ///         Ok(())
    ///     })
    /// });
    /// # let _ = handler;
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a mut Context) -> BoxFuture<'a, HandlerResult> + Send + Sync + 'static,
    {
        Handler::Function(Arc::new(f))
    }

    /// Wrap a closure that completes without awaiting anything
    pub fn from_sync<F>(f: F) -> Self
    where
        F: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
    {
        Self::from_fn(move |ctx| Box::pin(future::ready(f(ctx))))
    }

    pub fn from_middleware<M>(middleware: M) -> Self
    where
        M: Middleware + 'static,
    {
        Handler::Object(Arc::new(middleware))
    }

    pub async fn call(&self, ctx: &mut Context) -> HandlerResult {
        match self {
            Handler::Function(f) => f(ctx).await,
            Handler::Object(middleware) => middleware.process(ctx).await,
        }
    }

    /// Identity comparison: true when both values wrap the same handler
    pub fn ptr_eq(&self, other: &Handler) -> bool {
        match (self, other) {
            (Handler::Function(a), Handler::Function(b)) => Arc::ptr_eq(a, b),
            (Handler::Object(a), Handler::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<M> From<Arc<M>> for Handler
where
    M: Middleware + 'static,
{
    fn from(middleware: Arc<M>) -> Self {
        Handler::Object(middleware)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Function(_) => f.write_str("Handler::Function"),
            Handler::Object(_) => f.write_str("Handler::Object"),
        }
    }
}
