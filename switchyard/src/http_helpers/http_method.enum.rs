use std::fmt;

use serde::{Serialize, Serializer};

/// Request methods a route can be registered for.
///
/// Variants are spelled the way they travel on the wire, except `MSEARCH`
/// which is `M-SEARCH` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    ACL,
    BIND,
    CHECKOUT,
    CONNECT,
    COPY,
    DELETE,
    GET,
    HEAD,
    LINK,
    LOCK,
    MSEARCH,
    MERGE,
    MKACTIVITY,
    MKCALENDAR,
    MKCOL,
    MOVE,
    NOTIFY,
    OPTIONS,
    PATCH,
    POST,
    PROPFIND,
    PROPPATCH,
    PURGE,
    PUT,
    REBIND,
    REPORT,
    SEARCH,
    SOURCE,
    SUBSCRIBE,
    TRACE,
    UNBIND,
    UNLINK,
    UNLOCK,
    UNSUBSCRIBE,
}

impl HttpMethod {
    /// Every supported method, in registration order for `Router::all`.
    pub const ALL: [HttpMethod; 34] = [
        HttpMethod::ACL,
        HttpMethod::BIND,
        HttpMethod::CHECKOUT,
        HttpMethod::CONNECT,
        HttpMethod::COPY,
        HttpMethod::DELETE,
        HttpMethod::GET,
        HttpMethod::HEAD,
        HttpMethod::LINK,
        HttpMethod::LOCK,
        HttpMethod::MSEARCH,
        HttpMethod::MERGE,
        HttpMethod::MKACTIVITY,
        HttpMethod::MKCALENDAR,
        HttpMethod::MKCOL,
        HttpMethod::MOVE,
        HttpMethod::NOTIFY,
        HttpMethod::OPTIONS,
        HttpMethod::PATCH,
        HttpMethod::POST,
        HttpMethod::PROPFIND,
        HttpMethod::PROPPATCH,
        HttpMethod::PURGE,
        HttpMethod::PUT,
        HttpMethod::REBIND,
        HttpMethod::REPORT,
        HttpMethod::SEARCH,
        HttpMethod::SOURCE,
        HttpMethod::SUBSCRIBE,
        HttpMethod::TRACE,
        HttpMethod::UNBIND,
        HttpMethod::UNLINK,
        HttpMethod::UNLOCK,
        HttpMethod::UNSUBSCRIBE,
    ];

    /// Parse an HTTP method from a string (case-insensitive)
    pub fn from_string(method: &str) -> Option<Self> {
        let upper = method.to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == upper)
    }

    /// Convert to uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::ACL => "ACL",
            HttpMethod::BIND => "BIND",
            HttpMethod::CHECKOUT => "CHECKOUT",
            HttpMethod::CONNECT => "CONNECT",
            HttpMethod::COPY => "COPY",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::GET => "GET",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::LINK => "LINK",
            HttpMethod::LOCK => "LOCK",
            HttpMethod::MSEARCH => "M-SEARCH",
            HttpMethod::MERGE => "MERGE",
            HttpMethod::MKACTIVITY => "MKACTIVITY",
            HttpMethod::MKCALENDAR => "MKCALENDAR",
            HttpMethod::MKCOL => "MKCOL",
            HttpMethod::MOVE => "MOVE",
            HttpMethod::NOTIFY => "NOTIFY",
            HttpMethod::OPTIONS => "OPTIONS",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::POST => "POST",
            HttpMethod::PROPFIND => "PROPFIND",
            HttpMethod::PROPPATCH => "PROPPATCH",
            HttpMethod::PURGE => "PURGE",
            HttpMethod::PUT => "PUT",
            HttpMethod::REBIND => "REBIND",
            HttpMethod::REPORT => "REPORT",
            HttpMethod::SEARCH => "SEARCH",
            HttpMethod::SOURCE => "SOURCE",
            HttpMethod::SUBSCRIBE => "SUBSCRIBE",
            HttpMethod::TRACE => "TRACE",
            HttpMethod::UNBIND => "UNBIND",
            HttpMethod::UNLINK => "UNLINK",
            HttpMethod::UNLOCK => "UNLOCK",
            HttpMethod::UNSUBSCRIBE => "UNSUBSCRIBE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HttpMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}
