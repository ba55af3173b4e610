//! Convenient re-exports for battery control consumers.

pub use crate::config::ControllerConfig;
pub use crate::controller::BatteryController;
pub use crate::decode::{Reading, decode_mode, decode_threshold};
pub use crate::error::{ControlError, ControlResult};
pub use crate::types::{ChargeThreshold, Field, ForceDischargeMode};

pub use thinkbat_acpi::{AcpiError, AcpiHandle, EcMethods, FakeEc, FakeFailure, FakeOp};
