//! Per-request state threaded through a pipeline run.

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::http_helpers::{Extensions, HttpRequest, HttpResponse, IntoResponse};
use crate::matcher::Matcher;

/// The mutable bag every handler of a pipeline receives.
///
/// One context exists per request and it is never shared between requests.
#[derive(Debug)]
pub struct Context {
    pub request: HttpRequest,
    pub response: HttpResponse,
    pub intermediate: Intermediate,
}

impl Context {
    pub fn new(request: HttpRequest) -> Self {
        Self {
            request,
            response: HttpResponse::new(),
            intermediate: Intermediate::default(),
        }
    }

    /// Replace status and body of the pending response. Headers already set
    /// by earlier handlers are kept unless `response` overrides them.
    pub fn send(&mut self, response: impl IntoResponse) {
        self.response.merge(response.into_response());
    }

    /// Whether a handler has written a body
    pub fn is_sent(&self) -> bool {
        !self.response.body.is_empty()
    }
}

/// Handler-to-handler scratch space.
///
/// `route` and `error` are the reserved slots: the matched route and the
/// last captured failure. Everything else lives in the free-form JSON map
/// or, for typed values, in [`Extensions`].
#[derive(Debug, Default)]
pub struct Intermediate {
    pub route: Option<Matcher>,
    pub error: Option<anyhow::Error>,
    pub extensions: Extensions,
    values: FxHashMap<String, Value>,
}

impl Intermediate {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.values.get_mut(key)
    }

    /// Store a value, returning the previous one under the same key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Shorthand for reading an integer slot, `None` if absent or not an integer
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(Value::as_i64)
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
