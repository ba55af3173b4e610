//! Error types for firmware method invocation.

use thiserror::Error;

/// Errors from invoking methods on a firmware control object.
#[derive(Debug, Error)]
pub enum AcpiError {
    /// The named object or method does not exist in the firmware namespace.
    #[error("firmware object or method {name} is not available")]
    MethodUnavailable {
        /// Full namespace name of the missing object or method.
        name: String,
    },

    /// Firmware returned something other than a single integer.
    #[error("malformed result from {name}: {detail}")]
    MalformedResult {
        /// Full namespace name of the method that was evaluated.
        name: String,
        /// What was wrong with the returned value.
        detail: String,
    },

    /// The invocation itself failed, carrying the underlying status code.
    #[error("firmware call {name} failed: {status}")]
    FirmwareFailure {
        /// Full namespace name of the method that was evaluated.
        name: String,
        /// Firmware status code text, e.g. `AE_ERROR`.
        status: String,
    },

    /// The platform management interface itself is unreachable.
    #[error("management interface error: {0}")]
    Interface(#[from] std::io::Error),
}

impl AcpiError {
    /// Create a [`AcpiError::MethodUnavailable`] for the given name.
    #[must_use]
    pub fn method_unavailable(name: impl Into<String>) -> Self {
        Self::MethodUnavailable { name: name.into() }
    }

    /// Create a [`AcpiError::MalformedResult`] for the given name.
    #[must_use]
    pub fn malformed_result(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedResult {
            name: name.into(),
            detail: detail.into(),
        }
    }

    /// Create a [`AcpiError::FirmwareFailure`] carrying a status code.
    #[must_use]
    pub fn firmware_failure(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self::FirmwareFailure {
            name: name.into(),
            status: status.into(),
        }
    }
}

/// A specialized `Result` type for firmware method invocation.
pub type AcpiResult<T> = Result<T, AcpiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AcpiError::method_unavailable("\\_SB.PCI0.LPC.EC.HKEY.BDSG");
        assert_eq!(
            err.to_string(),
            "firmware object or method \\_SB.PCI0.LPC.EC.HKEY.BDSG is not available"
        );

        let err = AcpiError::firmware_failure("\\_SB.PCI0.LPC.EC.HKEY.BCCS", "AE_ERROR");
        assert_eq!(
            err.to_string(),
            "firmware call \\_SB.PCI0.LPC.EC.HKEY.BCCS failed: AE_ERROR"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: AcpiError = io_err.into();
        assert!(matches!(err, AcpiError::Interface(_)));
    }
}
