//! Unified error codes for the Rota framework
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Schedule errors
//! - 5xxx: Break errors
//! - 9xxx: System errors

use super::category::ErrorCategory;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility with the document
/// store's JavaScript-facing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Token is invalid
    TokenInvalid = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is valid but lacks access to the schedule
    PermissionDenied = 1004,

    // ==================== 4xxx: Schedule ====================
    /// Schedule document not found
    ScheduleNotFound = 4001,
    /// Day not present in the week schedule
    DayNotFound = 4002,
    /// Time block not found
    TimeBlockNotFound = 4003,
    /// Position not found
    PositionNotFound = 4004,
    /// Employee not found
    EmployeeNotFound = 4005,

    // ==================== 5xxx: Break ====================
    /// Employee already has an active break
    BreakAlreadyActive = 5001,
    /// No active break to end
    BreakNotActive = 5002,
    /// Break duration is not usable
    InvalidBreakDuration = 5003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network failure talking to the document store
    NetworkError = 9002,
    /// The store rejected or failed the write
    PersistenceFailed = 9003,
}

impl ErrorCode {
    /// Numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::NotAuthenticated => "Authentication required",
            Self::TokenInvalid => "Invalid token",
            Self::TokenExpired => "Token expired",
            Self::PermissionDenied => "Permission denied",
            Self::ScheduleNotFound => "Schedule not found",
            Self::DayNotFound => "Day not found in week schedule",
            Self::TimeBlockNotFound => "Time block not found",
            Self::PositionNotFound => "Position not found",
            Self::EmployeeNotFound => "Employee not found",
            Self::BreakAlreadyActive => "Employee already has an active break",
            Self::BreakNotActive => "No active break for employee",
            Self::InvalidBreakDuration => "Invalid break duration",
            Self::InternalError => "Internal error",
            Self::NetworkError => "Network error",
            Self::PersistenceFailed => "Failed to persist schedule",
        }
    }

    /// Category of this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// HTTP status this code maps to at an API boundary
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::ValidationFailed | Self::InvalidRequest | Self::RequiredField => {
                StatusCode::BAD_REQUEST
            }
            Self::NotAuthenticated | Self::TokenInvalid | Self::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::NotFound
            | Self::ScheduleNotFound
            | Self::DayNotFound
            | Self::TimeBlockNotFound
            | Self::PositionNotFound
            | Self::EmployeeNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists | Self::BreakAlreadyActive => StatusCode::CONFLICT,
            Self::BreakNotActive | Self::InvalidBreakDuration => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unknown | Self::InternalError | Self::NetworkError | Self::PersistenceFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Raised when deserializing an unrecognized numeric error code
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::RequiredField,
            1001 => Self::NotAuthenticated,
            1002 => Self::TokenInvalid,
            1003 => Self::TokenExpired,
            1004 => Self::PermissionDenied,
            4001 => Self::ScheduleNotFound,
            4002 => Self::DayNotFound,
            4003 => Self::TimeBlockNotFound,
            4004 => Self::PositionNotFound,
            4005 => Self::EmployeeNotFound,
            5001 => Self::BreakAlreadyActive,
            5002 => Self::BreakNotActive,
            5003 => Self::InvalidBreakDuration,
            9001 => Self::InternalError,
            9002 => Self::NetworkError,
            9003 => Self::PersistenceFailed,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
