//! Error types for the battery controller.

use thiserror::Error;
use thinkbat_acpi::AcpiError;

/// Errors from battery control operations.
#[derive(Debug, Error)]
pub enum ControlError {
    /// No firmware control object resolved among the candidate paths.
    ///
    /// Terminal: the controller cannot be constructed and no control
    /// surface should be registered.
    #[error("no EC battery control object found among candidate paths")]
    NoControlObject,

    /// A caller-supplied value violates a range or ordering invariant.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Which invariant was violated.
        reason: String,
    },

    /// A firmware method invocation failed; propagated unchanged.
    #[error(transparent)]
    Acpi(#[from] AcpiError),
}

impl ControlError {
    /// Create an [`ControlError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// A specialized `Result` type for battery control operations.
pub type ControlResult<T> = Result<T, ControlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = ControlError::invalid_argument("charge_start must be between 0 and 100");
        assert_eq!(
            err.to_string(),
            "invalid argument: charge_start must be between 0 and 100"
        );
    }

    #[test]
    fn test_acpi_error_passes_through() {
        let err: ControlError = AcpiError::firmware_failure("X.BCCS", "AE_ERROR").into();
        assert_eq!(err.to_string(), "firmware call X.BCCS failed: AE_ERROR");
    }
}
