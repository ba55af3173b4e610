//! Integration tests for the `acpi_call`-backed invoker.
//!
//! Real firmware is not reachable from a test environment, so these cover
//! the interface-file plumbing: error translation when the interface is
//! missing, and transaction behavior against an ordinary file standing in
//! for the `/proc` entry.

use thinkbat_acpi::{AcpiCallEc, AcpiError, AcpiHandle, EcMethods};

#[test]
fn missing_interface_surfaces_interface_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut ec = AcpiCallEc::with_interface(dir.path().join("call"));

    let handle = AcpiHandle::new("\\_SB.PCI0.LPC.EC.HKEY");
    let err = ec.call_int(&handle, "BCTG", 1);
    assert!(matches!(err, Err(AcpiError::Interface(_))));

    let err = ec.resolve_object("\\_SB.PCI0.LPC.EC.HKEY");
    assert!(matches!(err, Err(AcpiError::Interface(_))));
}

#[test]
fn echoing_interface_is_a_malformed_result() {
    // A regular file reads back the command that was written, which is not
    // an integer reply; the invoker must classify it rather than panic.
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("call");
    std::fs::write(&path, b"").expect("create interface file");

    let mut ec = AcpiCallEc::with_interface(&path);
    let handle = AcpiHandle::new("\\_SB.PCI0.LPC.EC.HKEY");
    let err = ec.call_int(&handle, "BCTG", 1);
    assert!(matches!(err, Err(AcpiError::MalformedResult { .. })));

    // Void calls ignore the reply body entirely.
    assert!(ec.call_int_void(&handle, "BCCS", 40).is_ok());
}
