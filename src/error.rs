//! Client Error Taxonomy
//!
//! Every public operation returns `Result<_, ApiError>`. The variants map
//! one-to-one onto the failure classes the retry loop cares about:
//! configuration errors are fatal at construction, transport and
//! missing-data errors consume the retry budget, and validation failures
//! never retry (resubmitting a malformed order cannot succeed).

use std::fmt;

use thiserror::Error;

/// Errors surfaced by the marketplace API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured chain id has no registry entry.
    #[error("unsupported chain id: {0}")]
    UnsupportedChain(u64),

    /// The HTTP client itself could not be built (bad proxy URL etc.).
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// Connection-level failure (DNS, TLS, timeout, reset).
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("api returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// A field the response contract requires was absent.
    #[error("missing data in response: {0}")]
    MissingData(String),

    /// The response body did not match the expected wire shape.
    #[error("failed to deserialize response: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// An order failed the validation gate.
    #[error("order failed validation: {0}")]
    Validation(Violations),
}

impl ApiError {
    /// Whether the retry loop may re-attempt after this error.
    ///
    /// Mirrors the transport's own classification: rate limiting and
    /// server errors are transient, everything the server rejected
    /// deliberately (4xx, validation) is not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::MissingData(_) | Self::Deserialize(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::UnsupportedChain(_) | Self::Config(_) | Self::Validation(_) => false,
        }
    }
}

/// The list of constraints an order violated, kept for logging.
///
/// The gate never repairs data; callers get the full list so a rejected
/// order can be diagnosed without re-running validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<String>);

impl Violations {
    /// Record a violated constraint.
    pub fn push(&mut self, constraint: impl Into<String>) {
        self.0.push(constraint.into());
    }

    /// True when no constraint was violated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The violated constraints, in check order.
    pub fn constraints(&self) -> &[String] {
        &self.0
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Violations> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("; "))
    }
}
