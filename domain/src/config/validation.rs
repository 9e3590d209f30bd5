//! Structured configuration issues.
//!
//! Config loaders report problems as [`ConfigIssue`]s instead of failing on
//! the first one, so every problem can be shown at once.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A URL field is empty.
    EmptyUrl { field: String },
    /// A value that must be positive is zero.
    ZeroValue { field: String },
    /// A value is lower than the smallest allowed one.
    BelowMinimum { field: String, min: u64 },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn empty_url(field: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: ConfigIssueCode::EmptyUrl {
                field: field.to_string(),
            },
            message: format!("{}: URL cannot be empty", field),
        }
    }

    pub fn zero_value(field: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: ConfigIssueCode::ZeroValue {
                field: field.to_string(),
            },
            message: format!("{}: value cannot be 0", field),
        }
    }

    pub fn below_minimum(field: &str, min: u64) -> Self {
        Self {
            severity: Severity::Error,
            code: ConfigIssueCode::BelowMinimum {
                field: field.to_string(),
                min,
            },
            message: format!("{}: value must be at least {}", field, min),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
