//! Firmware method invocation over the `acpi_call` kernel interface.
//!
//! The `acpi_call` module exposes a single file (`/proc/acpi/call`): writing
//! `"\_SB.PCI0.LPC.EC.HKEY.BCTG 0x1"` evaluates the method, and reading the
//! file back yields the result as text. Replies are NUL-terminated and take
//! one of three shapes:
//!
//! - `0x2a` — an integer result,
//! - `Error: AE_NOT_FOUND` — an ACPI status code,
//! - `{0x01, 0x02, ...}` / `"text"` — a package, buffer, or string.
//!
//! Command building and reply parsing are pure functions so they can be
//! tested without hardware; [`AcpiCallEc`] is the thin I/O wrapper around
//! them.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{AcpiError, AcpiResult};
use crate::methods::EcMethods;
use crate::types::AcpiHandle;

/// Default location of the `acpi_call` interface file.
pub const DEFAULT_INTERFACE: &str = "/proc/acpi/call";

/// Build the command string that evaluates `name` with one integer argument.
#[must_use]
pub fn build_call_command(name: &str, arg: u64) -> String {
    format!("{name} 0x{arg:x}")
}

/// A classified `acpi_call` reply.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    /// The evaluation produced a single integer.
    Integer(u64),
    /// The evaluation failed with an ACPI status code.
    Status(String),
    /// Anything else: package, buffer, string, or junk.
    Other(String),
}

/// Strip the trailing NUL terminator and surrounding whitespace.
fn clean_reply(reply: &str) -> &str {
    reply.trim_matches(|c: char| c == '\0' || c.is_whitespace())
}

fn classify_reply(reply: &str) -> Reply {
    let reply = clean_reply(reply);
    if let Some(status) = reply.strip_prefix("Error: ") {
        return Reply::Status(status.to_owned());
    }
    if let Some(hex) = reply.strip_prefix("0x")
        && let Ok(value) = u64::from_str_radix(hex, 16)
    {
        return Reply::Integer(value);
    }
    Reply::Other(reply.to_owned())
}

/// Whether an ACPI status code means "the named object does not exist".
fn is_not_found(status: &str) -> bool {
    status.starts_with("AE_NOT_FOUND") || status.starts_with("AE_NOT_EXIST")
}

/// Parse an `acpi_call` reply into the integer result of evaluating `name`.
///
/// # Errors
///
/// - [`AcpiError::MethodUnavailable`] for not-found status codes,
/// - [`AcpiError::FirmwareFailure`] for every other status code,
/// - [`AcpiError::MalformedResult`] when the reply is not an integer.
pub fn parse_call_reply(reply: &str, name: &str) -> AcpiResult<u64> {
    match classify_reply(reply) {
        Reply::Integer(value) => Ok(value),
        Reply::Status(status) if is_not_found(&status) => {
            Err(AcpiError::method_unavailable(name))
        }
        Reply::Status(status) => Err(AcpiError::firmware_failure(name, status)),
        Reply::Other(other) => Err(AcpiError::malformed_result(
            name,
            format!("expected integer, got {other:?}"),
        )),
    }
}

/// Firmware method invoker backed by the `acpi_call` kernel interface.
///
/// Each invocation is one write-then-read transaction on the interface
/// file. The interface path is injectable so tests never need the real
/// `/proc` entry.
#[derive(Debug, Clone)]
pub struct AcpiCallEc {
    interface: PathBuf,
}

impl AcpiCallEc {
    /// Invoker over the default `/proc/acpi/call` interface.
    #[must_use]
    pub fn new() -> Self {
        Self::with_interface(DEFAULT_INTERFACE)
    }

    /// Invoker over an alternate interface file.
    #[must_use]
    pub fn with_interface(interface: impl Into<PathBuf>) -> Self {
        Self {
            interface: interface.into(),
        }
    }

    /// The interface file this invoker transacts on.
    #[must_use]
    pub fn interface(&self) -> &Path {
        &self.interface
    }

    fn transact(&mut self, command: &str) -> AcpiResult<String> {
        trace!(command, interface = %self.interface.display(), "acpi_call transaction");
        let mut file = OpenOptions::new().write(true).open(&self.interface)?;
        file.write_all(command.as_bytes())?;
        drop(file);
        let reply = fs::read_to_string(&self.interface)?;
        Ok(reply)
    }
}

impl Default for AcpiCallEc {
    fn default() -> Self {
        Self::new()
    }
}

impl EcMethods for AcpiCallEc {
    fn resolve_object(&mut self, path: &str) -> AcpiResult<AcpiHandle> {
        // acpi_call offers evaluation, not namespace lookup. Evaluating a
        // device object typically fails with AE_TYPE; only the not-found
        // status class proves the path is absent.
        let reply = self.transact(path)?;
        match classify_reply(&reply) {
            Reply::Status(status) if is_not_found(&status) => {
                Err(AcpiError::method_unavailable(path))
            }
            _ => Ok(AcpiHandle::new(path)),
        }
    }

    fn call_int(&mut self, handle: &AcpiHandle, method: &str, arg: u64) -> AcpiResult<u64> {
        let name = handle.method_name(method);
        let reply = self.transact(&build_call_command(&name, arg))?;
        parse_call_reply(&reply, &name)
    }

    fn call_int_void(&mut self, handle: &AcpiHandle, method: &str, arg: u64) -> AcpiResult<()> {
        let name = handle.method_name(method);
        let reply = self.transact(&build_call_command(&name, arg))?;
        match parse_call_reply(&reply, &name) {
            // A void method may still echo a value; it is not needed.
            Ok(_) | Err(AcpiError::MalformedResult { .. }) => Ok(()),
            Err(err) => Err(err),
        }
    }
}
