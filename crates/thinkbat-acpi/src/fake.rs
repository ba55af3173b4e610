//! In-memory EC double for testing and hardware-free environments.

use std::collections::HashMap;

use crate::error::{AcpiError, AcpiResult};
use crate::methods::EcMethods;
use crate::types::AcpiHandle;

/// Scriptable failure for a single method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeFailure {
    /// The method is missing from the namespace.
    Unavailable,
    /// The invocation fails with the given status code.
    Firmware(&'static str),
    /// The method returns something that is not an integer.
    Malformed,
}

/// What a recorded call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeOp {
    /// A namespace resolution probe.
    Resolve,
    /// An integer-result invocation.
    Read,
    /// A void invocation.
    Write,
}

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeCall {
    /// What kind of call this was.
    pub op: FakeOp,
    /// Method name, or candidate path for [`FakeOp::Resolve`].
    pub method: String,
    /// Integer argument (0 for resolution probes).
    pub arg: u64,
}

/// In-memory EC double.
///
/// Holds per-method integer cells, a set of resolvable namespace paths,
/// scriptable per-method failures, and a log of every call, so tests can
/// assert both results and the absence of firmware writes.
///
/// Writes land in the cell of the write method itself unless routed: a
/// route such as `BCCS -> BCTG` makes a write through `BCCS` visible to
/// subsequent reads of `BCTG`, which is how a faithful EC stores thresholds.
#[derive(Debug, Default)]
pub struct FakeEc {
    paths: Vec<String>,
    cells: HashMap<String, u64>,
    routes: HashMap<String, String>,
    failures: HashMap<String, FakeFailure>,
    calls: Vec<FakeCall>,
}

impl FakeEc {
    /// An empty double: nothing resolves, every cell reads 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `path` resolvable.
    pub fn add_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.paths.push(path.into());
        self
    }

    /// Set the raw integer a read of `method` returns.
    pub fn set_reply(&mut self, method: impl Into<String>, raw: u64) -> &mut Self {
        self.cells.insert(method.into(), raw);
        self
    }

    /// Route writes through `write_method` into the cell read by `read_method`.
    pub fn route_write(
        &mut self,
        write_method: impl Into<String>,
        read_method: impl Into<String>,
    ) -> &mut Self {
        self.routes.insert(write_method.into(), read_method.into());
        self
    }

    /// Script `method` to fail every invocation.
    pub fn fail_method(&mut self, method: impl Into<String>, failure: FakeFailure) -> &mut Self {
        self.failures.insert(method.into(), failure);
        self
    }

    /// Every recorded call, in order.
    #[must_use]
    pub fn calls(&self) -> &[FakeCall] {
        &self.calls
    }

    /// Number of write invocations of `method`.
    #[must_use]
    pub fn writes_to(&self, method: &str) -> usize {
        self.calls
            .iter()
            .filter(|c| c.op == FakeOp::Write && c.method == method)
            .count()
    }

    /// Number of write invocations of any method.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.calls.iter().filter(|c| c.op == FakeOp::Write).count()
    }

    fn scripted_failure(&self, handle: &AcpiHandle, method: &str) -> AcpiResult<()> {
        match self.failures.get(method) {
            None => Ok(()),
            Some(FakeFailure::Unavailable) => {
                Err(AcpiError::method_unavailable(handle.method_name(method)))
            }
            Some(FakeFailure::Firmware(status)) => Err(AcpiError::firmware_failure(
                handle.method_name(method),
                *status,
            )),
            Some(FakeFailure::Malformed) => Err(AcpiError::malformed_result(
                handle.method_name(method),
                "expected integer, got \"fake\"",
            )),
        }
    }
}

impl EcMethods for FakeEc {
    fn resolve_object(&mut self, path: &str) -> AcpiResult<AcpiHandle> {
        self.calls.push(FakeCall {
            op: FakeOp::Resolve,
            method: path.to_owned(),
            arg: 0,
        });
        if self.paths.iter().any(|p| p == path) {
            Ok(AcpiHandle::new(path))
        } else {
            Err(AcpiError::method_unavailable(path))
        }
    }

    fn call_int(&mut self, handle: &AcpiHandle, method: &str, arg: u64) -> AcpiResult<u64> {
        self.calls.push(FakeCall {
            op: FakeOp::Read,
            method: method.to_owned(),
            arg,
        });
        self.scripted_failure(handle, method)?;
        Ok(self.cells.get(method).copied().unwrap_or(0))
    }

    fn call_int_void(&mut self, handle: &AcpiHandle, method: &str, arg: u64) -> AcpiResult<()> {
        self.calls.push(FakeCall {
            op: FakeOp::Write,
            method: method.to_owned(),
            arg,
        });
        // A scripted Malformed failure is still a successful void call;
        // void invocations do not inspect the result.
        match self.scripted_failure(handle, method) {
            Ok(()) | Err(AcpiError::MalformedResult { .. }) => {}
            Err(err) => return Err(err),
        }
        let cell = self.routes.get(method).cloned().unwrap_or_else(|| method.to_owned());
        self.cells.insert(cell, arg);
        Ok(())
    }
}
