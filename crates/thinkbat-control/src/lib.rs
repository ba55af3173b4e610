//! Battery charge threshold and forced-discharge control for ThinkPad ECs.
//!
//! The embedded controller on ThinkPad-class machines exposes battery
//! charge control as integer-valued methods (`BCTG`, `BCSG`, `BCCS`,
//! `BCSS`, and on supporting firmware `BDSG`/`BDSS`) on an `HKEY` object
//! whose namespace location varies by platform. This crate resolves that
//! object once, then mediates every read and write:
//!
//! - packed firmware results are decoded at the boundary (7 value bits for
//!   thresholds, 2 for the discharge mode, bit 31 as an in-band failure
//!   flag) and never propagated raw;
//! - writes are validated first — percentage range, `start <= stop`
//!   ordering against a fresh firmware read — so no malformed or
//!   out-of-range value ever reaches firmware;
//! - firmware call failures propagate unchanged, with a diagnostic naming
//!   the object path and method.
//!
//! Firmware is an independent actor (vendor utilities can change state
//! behind this controller's back), so ordering checks always re-read the
//! sibling field instead of trusting a cached copy.
//!
//! I/O goes through the [`EcMethods`](thinkbat_acpi::EcMethods) seam;
//! everything here is synchronous and single-owner, with no locking, no
//! retries, and no background work.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]

pub mod config;
pub mod controller;
pub mod decode;
pub mod error;
pub mod ids;
pub mod prelude;
pub mod types;

pub use config::ControllerConfig;
pub use controller::BatteryController;
pub use decode::{FIRMWARE_ERROR_FLAG, MODE_BITS, Reading, THRESHOLD_BITS, decode_mode,
    decode_threshold};
pub use error::{ControlError, ControlResult};
pub use types::{ChargeThreshold, Field, ForceDischargeMode};
