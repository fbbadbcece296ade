use serde_json::Value;

use super::{Body, HttpResponse};

/// Values a handler can hand to `Context::send`.
pub trait IntoResponse {
    fn into_response(self) -> HttpResponse;
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> HttpResponse {
        self
    }
}

impl IntoResponse for Body {
    fn into_response(self) -> HttpResponse {
        HttpResponse {
            body: self,
            ..HttpResponse::new()
        }
    }
}

impl IntoResponse for u16 {
    fn into_response(self) -> HttpResponse {
        HttpResponse {
            status: self,
            ..HttpResponse::new()
        }
    }
}

impl IntoResponse for (u16, Body) {
    fn into_response(self) -> HttpResponse {
        HttpResponse {
            body: self.1,
            status: self.0,
            ..HttpResponse::new()
        }
    }
}

impl IntoResponse for Value {
    fn into_response(self) -> HttpResponse {
        HttpResponse {
            body: Body::Json(self),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            ..HttpResponse::new()
        }
    }
}

impl IntoResponse for (u16, Value) {
    fn into_response(self) -> HttpResponse {
        HttpResponse {
            status: self.0,
            ..self.1.into_response()
        }
    }
}

impl IntoResponse for String {
    fn into_response(self) -> HttpResponse {
        HttpResponse {
            body: Body::Text(self),
            ..HttpResponse::new()
        }
    }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> HttpResponse {
        HttpResponse {
            body: Body::Text(self.to_string()),
            ..HttpResponse::new()
        }
    }
}
