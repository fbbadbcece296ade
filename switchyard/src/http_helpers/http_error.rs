use http::StatusCode;

/// A failure annotated with the status a client should see.
///
/// Handlers return it through `anyhow::Error`; the dispatcher downcasts the
/// captured error to shape the final response.
///
/// ```
/// use switchyard::http_helpers::HttpError;
///
/// let err = HttpError::new(404, "Cannot GET /missing");
/// assert_eq!(err.status_code(), 404);
/// assert_eq!(err.status_message(), "Not Found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HttpError {
    status_code: u16,
    status_message: String,
    message: String,
}

impl HttpError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            status_message: canonical_reason(status_code),
            message: message.into(),
        }
    }

    /// Lift an arbitrary error into a 500 carrying its message.
    ///
    /// An error that already is an `HttpError` keeps its status.
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<HttpError>() {
            Some(http_error) => http_error.clone(),
            None => Self::new(500, err.to_string()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }

    /// Set the status code. The status message follows the code.
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self.status_message = canonical_reason(status_code);
        self
    }

    pub fn with_status_message(mut self, status_message: impl Into<String>) -> Self {
        self.status_message = status_message.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn canonical_reason(status_code: u16) -> String {
    StatusCode::from_u16(status_code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or_default()
        .to_string()
}
