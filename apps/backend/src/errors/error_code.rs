//! Error codes for the Level Up backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Token credential
    UnauthorizedMissingToken,
    /// Token not recognized
    UnauthorizedInvalidToken,
    /// Username/password pair did not match
    InvalidCredentials,

    // Request validation
    /// General validation error
    ValidationError,
    /// Username missing or empty
    InvalidUsername,
    /// Password missing or empty
    InvalidPassword,
    /// Referenced game type does not exist
    GameTypeNotFound,

    // Resource not found
    /// Game not found
    GameNotFound,
    /// Gamer profile not found
    GamerNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Username already registered
    UsernameTaken,

    // Infrastructure
    /// Database error
    DbError,
    /// Database not configured/available
    DbUnavailable,
    /// Configuration error
    ConfigError,
    /// Internal error
    InternalError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::UnauthorizedMissingToken => "UNAUTHORIZED_MISSING_TOKEN",
            ErrorCode::UnauthorizedInvalidToken => "UNAUTHORIZED_INVALID_TOKEN",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidUsername => "INVALID_USERNAME",
            ErrorCode::InvalidPassword => "INVALID_PASSWORD",
            ErrorCode::GameTypeNotFound => "GAME_TYPE_NOT_FOUND",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::GamerNotFound => "GAMER_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::UsernameTaken => "USERNAME_TAKEN",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::InternalError => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
