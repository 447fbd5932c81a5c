//! Domain errors - error types for the domain layer

use std::fmt;

use thiserror::Error;

/// Coarse error category, stable across message changes.
///
/// Boundaries switch on this instead of matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Auth,
    Persistence,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Auth => "auth",
            Self::Persistence => "persistence",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// Caller supplied missing or malformed input. The message is shown verbatim.
    #[error("{0}")]
    Validation(String),

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Invitation not found")]
    InvitationNotFound,

    #[error("Short link not found")]
    ShortLinkNotFound,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,

    // =========================================================================
    // Persistence Errors
    // =========================================================================
    #[error("Short code already exists")]
    ShortCodeConflict,

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvitationNotFound => "INVITATION_NOT_FOUND",
            Self::ShortLinkNotFound => "SHORT_LINK_NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::ShortCodeConflict => "SHORT_CODE_CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Error category for status mapping
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::InvitationNotFound | Self::ShortLinkNotFound => ErrorKind::NotFound,
            Self::InvalidCredentials | Self::Unauthorized => ErrorKind::Auth,
            Self::ShortCodeConflict | Self::Database(_) => ErrorKind::Persistence,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        self.kind() == ErrorKind::Auth
    }

    /// Check if this is a known uniqueness collision
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ShortCodeConflict)
    }
}
