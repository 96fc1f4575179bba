//! Error types for tallyweb-core
//!
//! This module provides error handling for the ledger: error codes,
//! severity levels (which decide how a rejection is shown to the user),
//! and detailed messages with suggestions for logging.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Amount of zero submitted
    ZeroAmount,
    /// Item number outside 0-99
    ItemOutOfRange,
    /// Amount is not a usable number
    InvalidNumber,
    /// Item number is not an integer
    InvalidItem,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ZeroAmount => write!(f, "ZERO_AMOUNT"),
            ErrorCode::ItemOutOfRange => write!(f, "ITEM_OUT_OF_RANGE"),
            ErrorCode::InvalidNumber => write!(f, "INVALID_NUMBER"),
            ErrorCode::InvalidItem => write!(f, "INVALID_ITEM"),
        }
    }
}

/// Detailed error information for logs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, " (hint: {})", self.suggestions.join("; "))?;
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Warning - request ignored, nothing wrong with the ledger
    Warning,
    /// Error - request rejected
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for tallyweb-core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Amount must not be zero")]
    ZeroAmount,

    #[error("Item number {item} is out of range (0-99)")]
    ItemOutOfRange { item: i64 },

    #[error("Invalid number: {input:?}")]
    InvalidNumber { input: String },

    #[error("Invalid item number: {input:?}")]
    InvalidItem { input: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::ZeroAmount => ErrorCode::ZeroAmount,
            CoreError::ItemOutOfRange { .. } => ErrorCode::ItemOutOfRange,
            CoreError::InvalidNumber { .. } => ErrorCode::InvalidNumber,
            CoreError::InvalidItem { .. } => ErrorCode::InvalidItem,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::ZeroAmount => ErrorSeverity::Warning,
            CoreError::ItemOutOfRange { .. } => ErrorSeverity::Error,
            CoreError::InvalidNumber { .. } => ErrorSeverity::Error,
            CoreError::InvalidItem { .. } => ErrorSeverity::Error,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::ZeroAmount => {
                details = details.with_suggestion(
                    "Use a positive amount to add and a negative amount to correct.".to_string(),
                );
            }
            CoreError::ItemOutOfRange { item } => {
                details = details.with_detail(serde_json::json!({ "item": item, "min": 0, "max": 99 }));
            }
            CoreError::InvalidNumber { input } => {
                details = details.with_detail(serde_json::json!({ "input": input }));
            }
            CoreError::InvalidItem { input } => {
                details = details
                    .with_detail(serde_json::json!({ "input": input }))
                    .with_suggestion("Item numbers are whole numbers from 0 to 99.".to_string());
            }
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ==================== Tests ====================
