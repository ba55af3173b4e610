//! The firmware method invocation trait.

use crate::error::AcpiResult;
use crate::types::AcpiHandle;

/// Integer-valued method invocation on a firmware control object.
///
/// This is the seam between the battery controller and the platform
/// management interface. Implementations marshal a single integer argument,
/// evaluate the named method on the resolved object, and translate failures
/// into [`AcpiError`](crate::AcpiError):
///
/// - [`MethodUnavailable`](crate::AcpiError::MethodUnavailable) when the
///   object or method cannot be resolved,
/// - [`MalformedResult`](crate::AcpiError::MalformedResult) when the result
///   is absent or not an integer (only for [`call_int`](Self::call_int)),
/// - [`FirmwareFailure`](crate::AcpiError::FirmwareFailure) for any other
///   invocation error, carrying the underlying status code.
///
/// # Contract
///
/// - Calls are synchronous blocking round trips into platform firmware;
///   latency is bounded but non-trivial and there is no cancellation.
/// - No retries. Firmware methods are not assumed idempotent, so a failure
///   is returned to the caller unchanged.
/// - Callers are expected to surface a diagnostic naming the object path
///   and method on failure; implementations only report, they do not log
///   on the caller's behalf.
pub trait EcMethods {
    /// Probe the firmware namespace for an object at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MethodUnavailable`](crate::AcpiError::MethodUnavailable)
    /// when the path does not resolve, or
    /// [`Interface`](crate::AcpiError::Interface) when the management
    /// interface itself is unreachable.
    fn resolve_object(&mut self, path: &str) -> AcpiResult<AcpiHandle>;

    /// Invoke a single-argument, single-integer-result method.
    ///
    /// # Errors
    ///
    /// Any [`AcpiError`](crate::AcpiError) variant; see the trait docs.
    fn call_int(&mut self, handle: &AcpiHandle, method: &str, arg: u64) -> AcpiResult<u64>;

    /// Invoke a single-argument method whose result is not needed.
    ///
    /// An integer echoed back by the firmware is discarded; only resolution
    /// and invocation failures are errors.
    ///
    /// # Errors
    ///
    /// Any [`AcpiError`](crate::AcpiError) variant except
    /// [`MalformedResult`](crate::AcpiError::MalformedResult).
    fn call_int_void(&mut self, handle: &AcpiHandle, method: &str, arg: u64) -> AcpiResult<()>;
}
