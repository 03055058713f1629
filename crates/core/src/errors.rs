use thiserror::Error;

/// Unified error type for the entire atlas-core library.
/// Every public function returns `Result<T, CoreError>`.
///
/// Transport failures are not translated into domain kinds: the caller sees
/// the network failure, the HTTP status, or the parsing failure as it happened.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Transport ───────────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Response parsing failed: {0}")]
    Parsing(String),

    #[error("HTTP {status}{}", detail_suffix(.detail))]
    Http {
        status: u16,
        /// The server payload's `detail` field, verbatim.
        detail: Option<String>,
    },

    // ── Client-side ─────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ── Storage / File ──────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Unsupported file version: {0}")]
    UnsupportedVersion(u16),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

pub const MSG_NETWORK: &str = "Failed to load data. Please check your connection and try again.";
pub const MSG_PARSING: &str =
    "The server response could not be read. Please refresh the page and try again.";
pub const MSG_UNAUTHORIZED: &str = "Your session has expired. Please log in again.";
pub const MSG_FORBIDDEN: &str = "You do not have permission to access this resource.";

impl CoreError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CoreError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401 responses and unreadable response bodies both mean the session
    /// can no longer be trusted.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, CoreError::Http { status: 401, .. } | CoreError::Parsing(_))
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, CoreError::Http { status: 403, .. })
    }

    /// Whether a view should offer a manual retry. Nothing is retried automatically.
    pub fn is_retryable(&self) -> bool {
        match self {
            CoreError::Network(_) | CoreError::Parsing(_) => true,
            CoreError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Message suitable for an error branch in a view.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Network(_) => MSG_NETWORK.to_string(),
            CoreError::Parsing(_) => MSG_PARSING.to_string(),
            CoreError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            CoreError::Http { status: 401, .. } => MSG_UNAUTHORIZED.to_string(),
            CoreError::Http { status: 403, .. } => MSG_FORBIDDEN.to_string(),
            CoreError::Http { status, .. } => format!("Request failed with status {status}."),
            CoreError::ValidationError(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<url::ParseError> for CoreError {
    fn from(e: url::ParseError) -> Self {
        CoreError::Config(format!("Invalid URL: {e}"))
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors embed the full URL; search terms and filters stay out of messages.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
