use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::RouteError;

/// The path side of a route: either a literal path or a regular expression.
///
/// Two patterns are equal when they are of the same kind and have the same
/// source text. Compiled regexes are never compared by identity.
#[derive(Debug, Clone)]
pub enum RoutePattern {
    Exact(String),
    Regex(Regex),
}

impl RoutePattern {
    pub fn exact(path: impl Into<String>) -> Self {
        RoutePattern::Exact(path.into())
    }

    /// Compile `source` into a regex pattern
    pub fn regex(source: &str) -> Result<Self, RouteError> {
        compile(source).map(RoutePattern::Regex)
    }

    /// The empty prefix. Merging with it is the identity.
    pub fn empty() -> Self {
        RoutePattern::Exact(String::new())
    }

    pub fn source(&self) -> &str {
        match self {
            RoutePattern::Exact(path) => path,
            RoutePattern::Regex(regex) => regex.as_str(),
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, RoutePattern::Exact(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RoutePattern::Exact(path) if path.is_empty())
    }

    /// Test a request path (query string already stripped)
    pub fn is_match(&self, path: &str) -> bool {
        match self {
            RoutePattern::Exact(expected) => expected == path,
            RoutePattern::Regex(regex) => regex.is_match(path),
        }
    }

    /// Number of `/` characters in the source text.
    pub fn separator_count(&self) -> usize {
        self.source().matches('/').count()
    }

    /// Source text usable inside a regex. Literal paths are escaped.
    fn regex_source(&self) -> Cow<'_, str> {
        match self {
            RoutePattern::Exact(path) => Cow::Owned(regex::escape(path)),
            RoutePattern::Regex(regex) => Cow::Borrowed(regex.as_str()),
        }
    }

    /// Join a prefix and a route pattern into one pattern.
    ///
    /// - an empty prefix returns `url` unchanged
    /// - two literal paths are concatenated, runs of `/` collapse to one
    /// - otherwise the regex sources are concatenated (literal sides are
    ///   escaped first) and runs of separators, `/` or `\/`, collapse to the
    ///   first separator of the run
    ///
    /// ```
    /// use switchyard::matcher::RoutePattern;
    ///
    /// let merged = RoutePattern::merge(&"/api/".into(), &"/v1".into()).unwrap();
    /// assert_eq!(merged, RoutePattern::exact("/api/v1"));
    /// ```
    pub fn merge(prefix: &RoutePattern, url: &RoutePattern) -> Result<RoutePattern, RouteError> {
        if prefix.is_empty() {
            return Ok(url.clone());
        }

        match (prefix, url) {
            (RoutePattern::Exact(prefix), RoutePattern::Exact(url)) => {
                let joined = format!("{prefix}{url}");
                Ok(RoutePattern::Exact(collapse_path_separators(&joined)))
            }
            _ => {
                let joined = format!("{}{}", prefix.regex_source(), url.regex_source());
                RoutePattern::regex(&collapse_pattern_separators(&joined))
            }
        }
    }
}

fn compile(source: &str) -> Result<Regex, RouteError> {
    Regex::new(source).map_err(|source_err| RouteError::InvalidPattern {
        pattern: source.to_string(),
        source: source_err,
    })
}

fn collapse_path_separators(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    let mut previous_was_separator = false;

    for c in path.chars() {
        let is_separator = c == '/';
        if !(is_separator && previous_was_separator) {
            collapsed.push(c);
        }
        previous_was_separator = is_separator;
    }

    collapsed
}

// Escapes other than `\/` are copied through untouched, so an escaped
// backslash followed by `/` is not mistaken for an escaped separator.
fn collapse_pattern_separators(source: &str) -> String {
    let mut collapsed = String::with_capacity(source.len());
    let mut previous_was_separator = false;
    let mut chars = source.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('/') => {
                    if !previous_was_separator {
                        collapsed.push_str("\\/");
                    }
                    previous_was_separator = true;
                }
                Some(escaped) => {
                    collapsed.push('\\');
                    collapsed.push(escaped);
                    previous_was_separator = false;
                }
                None => {
                    collapsed.push('\\');
                    previous_was_separator = false;
                }
            },
            '/' => {
                if !previous_was_separator {
                    collapsed.push('/');
                }
                previous_was_separator = true;
            }
            other => {
                collapsed.push(other);
                previous_was_separator = false;
            }
        }
    }

    collapsed
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.is_exact() == other.is_exact() && self.source() == other.source()
    }
}

impl Eq for RoutePattern {}

impl Hash for RoutePattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_exact().hash(state);
        self.source().hash(state);
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutePattern::Exact(path) => f.write_str(path),
            RoutePattern::Regex(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

impl Serialize for RoutePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl Default for RoutePattern {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for RoutePattern {
    fn from(path: &str) -> Self {
        RoutePattern::Exact(path.to_string())
    }
}

impl From<String> for RoutePattern {
    fn from(path: String) -> Self {
        RoutePattern::Exact(path)
    }
}

impl From<Regex> for RoutePattern {
    fn from(regex: Regex) -> Self {
        RoutePattern::Regex(regex)
    }
}
