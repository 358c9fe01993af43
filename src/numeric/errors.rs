// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing a big integer.
///
/// The arithmetic kernels themselves never fail: digit buffers grow as
/// needed, and there is no division, so the only failure point in the core
/// is the string-parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a valid signed decimal integer: it is empty,
    /// consists solely of a sign character, or contains a non-digit after
    /// the optional leading sign.
    InvalidFormat,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidFormat => {
                write!(
                    f,
                    "invalid format: expected an optional sign followed by decimal digits"
                )
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidFormat.to_string(),
            "invalid format: expected an optional sign followed by decimal digits"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::InvalidFormat, NumericError::InvalidFormat);
    }
}
