//! Typed values exchanged with the EC battery controls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A battery charge percentage threshold.
///
/// Caller-supplied thresholds are validated into [0, 100] before any write.
/// Values read back from firmware are reported as stored (the 7-bit field
/// admits up to 127); firmware is the source of truth for its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChargeThreshold(u8);

impl ChargeThreshold {
    /// A validated threshold, `None` outside [0, 100].
    #[must_use]
    pub fn new(percent: u8) -> Option<Self> {
        (percent <= 100).then_some(Self(percent))
    }

    /// Wrap a value decoded from firmware (already masked to 7 bits).
    #[must_use]
    pub(crate) fn from_firmware(value: u8) -> Self {
        Self(value)
    }

    /// The percentage value.
    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ChargeThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The EC forced-discharge mode.
///
/// A 2-bit firmware value: bit 0 forces the battery to discharge regardless
/// of AC state, bit 1 cancels the forced discharge when AC is unplugged.
/// Values above 3 are illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForceDischargeMode(u8);

impl ForceDischargeMode {
    /// Forced discharge off.
    pub const INACTIVE: Self = Self(0);

    /// A validated mode, `None` outside [0, 3].
    #[must_use]
    pub fn new(mode: u8) -> Option<Self> {
        (mode <= 3).then_some(Self(mode))
    }

    /// Wrap a value decoded from firmware (already masked to 2 bits).
    #[must_use]
    pub(crate) fn from_firmware(value: u8) -> Self {
        Self(value)
    }

    /// The raw firmware value.
    #[must_use]
    pub fn as_raw(self) -> u8 {
        self.0
    }

    /// Whether forced discharge is active.
    #[must_use]
    pub fn is_discharging(self) -> bool {
        self.0 & 0x01 != 0
    }
}

impl fmt::Display for ForceDischargeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The named control values exposed to the host control-interface layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Charge start threshold.
    ChargeStart,
    /// Charge stop threshold.
    ChargeStop,
    /// Forced-discharge mode.
    ForceDischarge,
}

impl Field {
    /// Canonical field name as exposed to the control interface.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ChargeStart => "charge_start",
            Self::ChargeStop => "charge_stop",
            Self::ForceDischarge => "force_discharge",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "charge_start" => Ok(Self::ChargeStart),
            "charge_stop" => Ok(Self::ChargeStop),
            "force_discharge" => Ok(Self::ForceDischarge),
            _ => Err(UnknownField(s.to_owned())),
        }
    }
}

/// Error parsing a control field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown control field {0:?}")]
pub struct UnknownField(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_validation() {
        assert_eq!(ChargeThreshold::new(0).map(ChargeThreshold::percent), Some(0));
        assert_eq!(
            ChargeThreshold::new(100).map(ChargeThreshold::percent),
            Some(100)
        );
        assert_eq!(ChargeThreshold::new(101), None);
    }

    #[test]
    fn test_mode_validation() {
        assert!(ForceDischargeMode::new(3).is_some());
        assert!(ForceDischargeMode::new(4).is_none());
        assert!(!ForceDischargeMode::INACTIVE.is_discharging());
        assert!(ForceDischargeMode::new(1).is_some_and(ForceDischargeMode::is_discharging));
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in [Field::ChargeStart, Field::ChargeStop, Field::ForceDischarge] {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!("charge-start".parse::<Field>(), Ok(Field::ChargeStart));
        assert!("charge_speed".parse::<Field>().is_err());
    }
}
