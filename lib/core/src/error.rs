use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Clients match on these —
// never on the human-readable message string.

/// Stable error code constants.
///
/// Consumers should match on `code` from `{"code": "CONFLICT", "message": "..."}`.
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const CONFLICT: &str = "CONFLICT";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified service error type used across all modules.
///
/// Each variant maps to a stable error code (see [`error_code`]). The
/// presentation layer translates these into user-facing messages; the core
/// never swallows an error and never logs one on its own behalf.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Referenced area/equipment/task/history entry does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Stale read during a progress update, or duplicate key. The caller
    /// must re-fetch current state and may retry; the core never retries.
    #[error("{0}")]
    Conflict(String),

    /// Malformed input (out-of-range progress, missing required fields).
    /// Recoverable locally by re-prompting.
    #[error("{0}")]
    Validation(String),

    /// Actor lacks the capability for this (resource, action).
    #[error("{0}")]
    PermissionDenied(String),

    /// Storage backend failure.
    #[error("{0}")]
    Storage(String),

    /// Unexpected internal error.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => error_code::NOT_FOUND,
            ServiceError::Conflict(_) => error_code::CONFLICT,
            ServiceError::Validation(_) => error_code::VALIDATION_FAILED,
            ServiceError::PermissionDenied(_) => error_code::PERMISSION_DENIED,
            ServiceError::Storage(_) => error_code::STORAGE_ERROR,
            ServiceError::Internal(_) => error_code::INTERNAL,
        }
    }

    /// Serialize to the `{"code": ..., "message": ...}` wire form.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        })
    }
}
