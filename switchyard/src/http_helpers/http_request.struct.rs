use super::Body;

/// The request descriptor routes are matched against.
///
/// `uri` is the request target as received: the path, optionally followed
/// by `?query` and `#fragment`. Matching only ever looks at [`HttpRequest::path`].
#[derive(Clone, Debug, Default)]
pub struct HttpRequest {
    pub body: Body,
    pub headers: Vec<(String, String)>,
    pub method: String,
    pub uri: String,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// The request path with query string and fragment stripped
    pub fn path(&self) -> &str {
        let end = self
            .uri
            .find(|c| c == '?' || c == '#')
            .unwrap_or(self.uri.len());
        &self.uri[..end]
    }

    /// The raw query string, without the leading `?`
    pub fn query(&self) -> Option<&str> {
        let start = self.uri.find('?')? + 1;
        let rest = &self.uri[start..];
        Some(rest.split('#').next().unwrap_or(rest))
    }

    /// Get a reference to the headers
    pub fn headers(&self) -> &Vec<(String, String)> {
        &self.headers
    }

    /// Get a specific header value by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Check if a header exists
    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }
}
