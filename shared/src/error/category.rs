//! Error categories for classification and logging

use serde::{Deserialize, Serialize};

/// Classification of errors by domain
///
/// Derived from the numeric range of an [`super::ErrorCode`]; used to
/// decide logging severity and client-facing treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// General request/validation errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Schedule domain errors (4xxx)
    Schedule,
    /// Break tracking errors (5xxx)
    Break,
    /// System/infrastructure errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Human-readable category name
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Schedule => "schedule",
            Self::Break => "break",
            Self::System => "system",
        }
    }

    /// Derive the category from a raw code value
    pub fn from_code(code: u16) -> Self {
        match code {
            1000..=1999 => Self::Auth,
            4000..=4999 => Self::Schedule,
            5000..=5999 => Self::Break,
            9000..=9999 => Self::System,
            _ => Self::General,
        }
    }
}
