//! Controller configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};
use crate::ids::EC_HKEY_PATHS;

/// Configuration for resolving the EC control object.
///
/// The default carries the known `HKEY` locations; vendor-specific firmware
/// namespaces can override the list, preserving order — candidates are
/// probed front to back and the first that resolves wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Ordered candidate namespace paths for the control object.
    pub candidate_paths: Vec<String>,
}

impl ControllerConfig {
    /// A validated configuration with the given candidate paths.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::InvalidArgument`] when the list is empty or
    /// a path is not an absolute namespace path.
    pub fn new(candidate_paths: Vec<String>) -> ControlResult<Self> {
        let config = Self { candidate_paths };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::InvalidArgument`] when the list is empty or
    /// a path is not an absolute namespace path.
    pub fn validate(&self) -> ControlResult<()> {
        if self.candidate_paths.is_empty() {
            return Err(ControlError::invalid_argument(
                "candidate path list must not be empty",
            ));
        }
        for path in &self.candidate_paths {
            if !path.starts_with('\\') {
                return Err(ControlError::invalid_argument(format!(
                    "candidate path {path:?} is not an absolute namespace path"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            candidate_paths: EC_HKEY_PATHS.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}
