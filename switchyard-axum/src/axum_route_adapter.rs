use anyhow::{anyhow, Result};
use axum::{
    body::to_bytes,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Request, Response, StatusCode},
};
use serde_json::Value;
use switchyard::{Body, HttpRequest, HttpResponse, RouteAdapter};

pub struct AxumRouteAdapter;

impl RouteAdapter for AxumRouteAdapter {
    type Request = Request<axum::body::Body>;
    type Response = Response<axum::body::Body>;

    async fn adapt_request(request: Self::Request) -> Result<HttpRequest> {
        let (parts, body) = request.into_parts();
        let body_bytes = to_bytes(body, usize::MAX).await?;

        let body = if body_bytes.is_empty() {
            Body::Empty
        } else if let Ok(body_str) = String::from_utf8(body_bytes.to_vec()) {
            match serde_json::from_str::<Value>(&body_str) {
                Ok(json) => Body::Json(json),
                Err(_) => Body::Text(body_str),
            }
        } else {
            Body::Text(String::from_utf8_lossy(&body_bytes).to_string())
        };

        let headers = parts
            .headers
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_str().unwrap_or("").to_string()))
            .collect();

        let uri = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        Ok(HttpRequest {
            body,
            headers,
            method: parts.method.to_string(),
            uri,
        })
    }

    fn adapt_response(response: HttpResponse) -> Result<Self::Response> {
        let status =
            StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let (body, default_content_type) = match response.body {
            Body::Text(text) => (axum::body::Body::from(text), Some("text/plain; charset=utf-8")),
            Body::Json(json) => {
                let vec = serde_json::to_vec(&json)
                    .map_err(|e| anyhow!("Failed to serialize JSON: {}", e))?;
                (axum::body::Body::from(vec), Some("application/json"))
            }
            Body::Empty => (axum::body::Body::empty(), None),
        };

        let mut res = Response::builder()
            .status(status)
            .body(body)
            .map_err(|e| anyhow!("Failed to build response: {}", e))?;

        let headers = res.headers_mut();
        for (k, v) in &response.headers {
            if let (Ok(name), Ok(value)) =
                (HeaderName::from_bytes(k.as_bytes()), HeaderValue::from_str(v))
            {
                headers.insert(name, value);
            }
        }
        if let Some(content_type) = default_content_type {
            headers
                .entry(CONTENT_TYPE)
                .or_insert(HeaderValue::from_static(content_type));
        }

        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(method: &str, uri: &str, body: &str) -> Request<axum::body::Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("X-Trace", "abc")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_adapt_request_parses_json_body() {
        let adapted = tokio_test::block_on(AxumRouteAdapter::adapt_request(request(
            "POST",
            "/users?page=2",
            r#"{"name":"Ada"}"#,
        )))
        .unwrap();

        assert_eq!(adapted.method, "POST");
        assert_eq!(adapted.uri, "/users?page=2");
        assert_eq!(adapted.path(), "/users");
        assert_eq!(adapted.header("x-trace"), Some("abc"));
        assert_eq!(adapted.body, Body::Json(json!({ "name": "Ada" })));
    }

    #[tokio::test]
    async fn test_adapt_request_text_and_empty_bodies() {
        let text = AxumRouteAdapter::adapt_request(request("PUT", "/", "plain"))
            .await
            .unwrap();
        assert_eq!(text.body, Body::Text("plain".to_string()));

        let empty = AxumRouteAdapter::adapt_request(request("GET", "/", ""))
            .await
            .unwrap();
        assert_eq!(empty.body, Body::Empty);
    }

    #[test]
    fn test_adapt_response_json() {
        let response = HttpResponse {
            status: 404,
            body: Body::Json(json!({ "success": false })),
            headers: vec![("X-Request".to_string(), "1".to_string())],
        };

        let adapted = AxumRouteAdapter::adapt_response(response).unwrap();

        assert_eq!(adapted.status(), StatusCode::NOT_FOUND);
        assert_eq!(adapted.headers()["content-type"], "application/json");
        assert_eq!(adapted.headers()["x-request"], "1");
    }

    #[test]
    fn test_adapt_response_keeps_handler_content_type() {
        let response = HttpResponse {
            status: 200,
            body: Body::Text("<p>hi</p>".to_string()),
            headers: vec![("Content-Type".to_string(), "text/html".to_string())],
        };

        let adapted = AxumRouteAdapter::adapt_response(response).unwrap();

        assert_eq!(adapted.headers()["content-type"], "text/html");
    }

    #[test]
    fn test_adapt_response_invalid_status() {
        let response = HttpResponse {
            status: 1000,
            ..HttpResponse::new()
        };

        let adapted = AxumRouteAdapter::adapt_response(response).unwrap();

        assert_eq!(adapted.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(adapted.headers().get("content-type").is_none());
    }
}
