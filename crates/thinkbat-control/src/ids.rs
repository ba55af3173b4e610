//! Firmware namespace locations and method names for EC battery controls.

/// Known locations of the EC `HKEY` control object, probed in order.
///
/// The LPC bridge and EC device names vary across platform generations;
/// the first candidate that resolves wins.
pub const EC_HKEY_PATHS: [&str; 4] = [
    "\\_SB.PCI0.LPC.EC.HKEY",
    "\\_SB.PCI0.LPCB.EC.HKEY",
    "\\_SB.PCI0.LPCB.EC0.HKEY",
    "\\_SB.PCI0.LPCB.H_EC.HKEY",
];

/// Battery control method names on the `HKEY` object.
pub mod methods {
    /// Read the charge start threshold (called with input 1).
    pub const GET_CHARGE_START: &str = "BCTG";
    /// Read the charge stop threshold (called with input 1).
    pub const GET_CHARGE_STOP: &str = "BCSG";
    /// Write the charge start threshold.
    pub const SET_CHARGE_START: &str = "BCCS";
    /// Write the charge stop threshold.
    pub const SET_CHARGE_STOP: &str = "BCSS";
    /// Read the forced-discharge mode. Absent on some firmware variants.
    pub const GET_FORCE_DISCHARGE: &str = "BDSG";
    /// Write the forced-discharge mode. Absent on some firmware variants.
    pub const SET_FORCE_DISCHARGE: &str = "BDSS";
}
