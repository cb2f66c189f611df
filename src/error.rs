//! Error handling for demo-hosts

use thiserror::Error;

/// Main error type for demo-hosts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostGenError {
    #[error("Underflow: {pool} pool is exhausted")]
    Underflow { pool: String },

    #[error("Malformed input '{input}': no domain separator found")]
    MalformedInput { input: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl HostGenError {
    /// Create an underflow error for the named pool
    pub fn underflow(pool: impl Into<String>) -> Self {
        Self::Underflow { pool: pool.into() }
    }

    /// Create a malformed input error
    pub fn malformed_input(input: impl Into<String>) -> Self {
        Self::MalformedInput {
            input: input.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Underflow { pool } => {
                format!("❌ Ran out of {} names\n💡 Re-run, lower the host count or enlarge the {} list", pool, pool)
            }
            Self::MalformedInput { input } => {
                format!("❌ '{}' has no domain part\n💡 Every domain in the wordlist needs a '.'", input)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check the built-in wordlists", message)
            }
            Self::Io { message } => {
                format!("❌ Output error: {}\n💡 Check that stdout is writable", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<std::io::Error> for HostGenError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HostGenError>;

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::HostGenError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::HostGenError::validation(format!($fmt, $($arg)*))
    };
}
