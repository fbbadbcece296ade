use super::Body;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub body: Body,
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

impl HttpResponse {
    pub fn new() -> Self {
        Self {
            body: Body::Empty,
            status: 200,
            headers: vec![],
        }
    }

    /// Set a header, replacing any existing value with the same name
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name, value)),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Fold another response into this one. Status and body are taken from
    /// `other`, headers are merged with `other` winning on conflicts.
    pub fn merge(&mut self, other: HttpResponse) {
        self.status = other.status;
        self.body = other.body;
        for (name, value) in other.headers {
            self.set_header(name, value);
        }
    }
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_header_replaces() {
        let mut res = HttpResponse::new();
        res.set_header("Content-Type", "text/plain");
        res.set_header("content-type", "application/json");
        assert_eq!(res.headers.len(), 1);
        assert_eq!(res.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn test_merge_keeps_unrelated_headers() {
        let mut res = HttpResponse::new();
        res.set_header("X-Request-Id", "abc");
        let mut other = HttpResponse::new();
        other.status = 201;
        other.body = Body::Text("created".into());
        other.set_header("Content-Type", "text/plain");

        res.merge(other);

        assert_eq!(res.status, 201);
        assert_eq!(res.body, Body::Text("created".into()));
        assert_eq!(res.header("x-request-id"), Some("abc"));
        assert_eq!(res.header("content-type"), Some("text/plain"));
    }
}
