//! ACPI method invocation for ThinkPad EC battery controls.
//!
//! This crate owns the low-level contract for calling integer-valued methods
//! on a firmware control object: marshaling a single integer argument,
//! reading back a single integer result (or none), and translating every
//! failure into the [`AcpiError`] taxonomy. It performs no retries; a
//! firmware call is not assumed idempotent, so failures propagate to the
//! caller unchanged.
//!
//! The seam is the [`EcMethods`] trait. Two implementations ship here:
//!
//! - [`AcpiCallEc`] drives real firmware through the `acpi_call` kernel
//!   interface (`/proc/acpi/call`). Command building and reply parsing are
//!   pure functions that can be tested without hardware.
//! - [`FakeEc`] is an in-memory EC double with scriptable replies and
//!   failures, for testing and hardware-free environments.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]

pub mod error;
pub mod fake;
pub mod methods;
pub mod proc_call;
pub mod types;

pub use error::{AcpiError, AcpiResult};
pub use fake::{FakeCall, FakeEc, FakeFailure, FakeOp};
pub use methods::EcMethods;
pub use proc_call::{AcpiCallEc, DEFAULT_INTERFACE, build_call_command, parse_call_reply};
pub use types::AcpiHandle;
