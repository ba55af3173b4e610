//! Handle type for a resolved firmware control object.

use std::fmt;

/// Opaque reference to a resolved firmware control object.
///
/// A handle is produced by [`EcMethods::resolve_object`](crate::EcMethods::resolve_object)
/// and is immutable afterwards; every method invocation names the object
/// through the handle it was resolved with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AcpiHandle {
    path: String,
}

impl AcpiHandle {
    /// Wrap a resolved namespace path.
    ///
    /// Intended for [`EcMethods`](crate::EcMethods) implementations; callers
    /// obtain handles by resolving, not by constructing.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The namespace path this handle resolved to.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full dotted name of a method on this object.
    #[must_use]
    pub fn method_name(&self, method: &str) -> String {
        format!("{}.{method}", self.path)
    }
}

impl fmt::Display for AcpiHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_name() {
        let handle = AcpiHandle::new("\\_SB.PCI0.LPC.EC.HKEY");
        assert_eq!(handle.method_name("BCTG"), "\\_SB.PCI0.LPC.EC.HKEY.BCTG");
        assert_eq!(handle.to_string(), "\\_SB.PCI0.LPC.EC.HKEY");
    }
}
