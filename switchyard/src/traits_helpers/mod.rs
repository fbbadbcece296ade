pub mod middleware;
pub use self::middleware::{BoxFuture, Handler, HandlerResult, Middleware, MiddlewareFn};
