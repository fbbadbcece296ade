use std::fmt;

use serde::Serialize;

use super::RoutePattern;
use crate::error::RouteError;
use crate::http_helpers::{HttpMethod, HttpRequest};

/// Specificity floor for regex matchers. Keeps every regex matcher behind
/// every exact matcher once a route map is sorted.
pub const PATTERN_SPECIFICITY_BASE: usize = 1_000_000_000;

/// Decides whether a request belongs to a route.
///
/// A matcher is a (pattern, method) pair and is immutable: prefixing
/// produces a new matcher. Equality is structural, so two matchers built
/// separately from the same pattern and method are the same route key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Matcher {
    pattern: RoutePattern,
    method: HttpMethod,
}

impl Matcher {
    pub fn new(pattern: impl Into<RoutePattern>, method: HttpMethod) -> Self {
        Self {
            pattern: pattern.into(),
            method,
        }
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn is_exact(&self) -> bool {
        self.pattern.is_exact()
    }

    /// True when the method is equal and the path (query stripped) matches
    pub fn matches(&self, request: &HttpRequest) -> bool {
        request.method == self.method.as_str() && self.pattern.is_match(request.path())
    }

    /// A new matcher for the same method with `prefix` merged in front of
    /// the pattern.
    pub fn with_prefix(&self, prefix: &RoutePattern) -> Result<Matcher, RouteError> {
        Ok(Matcher {
            pattern: RoutePattern::merge(prefix, &self.pattern)?,
            method: self.method,
        })
    }

    /// Ordering score, lower sorts first.
    ///
    /// Exact matchers score their separator count (at least 1). Regex
    /// matchers score [`PATTERN_SPECIFICITY_BASE`] minus their separator count.
    pub fn specificity(&self) -> usize {
        let separators = self.pattern.separator_count();
        if self.is_exact() {
            separators.max(1)
        } else {
            PATTERN_SPECIFICITY_BASE.saturating_sub(separators)
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn get(uri: &str) -> HttpRequest {
        HttpRequest::new("GET", uri)
    }

    fn root_regex() -> Regex {
        Regex::new(r"^\/?$").unwrap()
    }

    #[test]
    fn test_exact_matches() {
        let matcher = Matcher::new("/", HttpMethod::GET);
        assert!(matcher.matches(&get("/")));
        assert!(!matcher.matches(&get("/1")));
        assert!(!matcher.matches(&HttpRequest::new("POST", "/")));
    }

    #[test]
    fn test_exact_ignores_query() {
        assert!(Matcher::new("/", HttpMethod::GET).matches(&get("/?a=b")));
    }

    #[test]
    fn test_regex_matches() {
        let matcher = Matcher::new(root_regex(), HttpMethod::GET);
        assert!(matcher.matches(&get("/")));
        assert!(matcher.matches(&get("/?a=b")));
        assert!(!matcher.matches(&get("/a")));
        assert!(!matcher.matches(&HttpRequest::new("PUT", "/")));
    }

    #[test]
    fn test_with_prefix_yields_regex_when_either_side_is_regex() {
        let from_regex = Matcher::new(root_regex(), HttpMethod::GET)
            .with_prefix(&"/api".into())
            .unwrap();
        assert!(!from_regex.is_exact());

        let from_string = Matcher::new("/", HttpMethod::GET)
            .with_prefix(&Regex::new(r"\/api").unwrap().into())
            .unwrap();
        assert!(!from_string.is_exact());
        assert!(from_string.matches(&get("/api/")));
    }

    #[test]
    fn test_with_prefix_does_not_touch_original() {
        let matcher = Matcher::new("/v1", HttpMethod::GET);
        let prefixed = matcher.with_prefix(&"/api".into()).unwrap();
        assert_eq!(matcher.pattern().source(), "/v1");
        assert_eq!(prefixed, Matcher::new("/api/v1", HttpMethod::GET));
    }

    #[test]
    fn test_empty_prefix_is_identity() {
        let requests = [get("/"), get("/a"), get("/a/b?c"), HttpRequest::new("POST", "/a")];
        for matcher in [
            Matcher::new("/a", HttpMethod::GET),
            Matcher::new(Regex::new("^/a").unwrap(), HttpMethod::GET),
        ] {
            let prefixed = matcher.with_prefix(&RoutePattern::empty()).unwrap();
            assert_eq!(prefixed, matcher);
            for request in &requests {
                assert_eq!(prefixed.matches(request), matcher.matches(request));
            }
        }
    }

    #[test]
    fn test_specificity() {
        assert_eq!(Matcher::new("", HttpMethod::GET).specificity(), 1);
        assert_eq!(Matcher::new("/", HttpMethod::GET).specificity(), 1);
        assert_eq!(Matcher::new("/a/b", HttpMethod::GET).specificity(), 2);
        assert_eq!(
            Matcher::new(Regex::new(".*").unwrap(), HttpMethod::GET).specificity(),
            PATTERN_SPECIFICITY_BASE
        );
        assert_eq!(
            Matcher::new(Regex::new(r"^\/a\/b$").unwrap(), HttpMethod::GET).specificity(),
            PATTERN_SPECIFICITY_BASE - 2
        );
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(
            Matcher::new(Regex::new("^/$").unwrap(), HttpMethod::GET),
            Matcher::new(Regex::new("^/$").unwrap(), HttpMethod::GET)
        );
        assert_ne!(
            Matcher::new("/", HttpMethod::GET),
            Matcher::new("/", HttpMethod::POST)
        );
    }
}
