//! Decoding of bit-packed firmware get-results.
//!
//! EC get-methods return one packed integer: the low bits carry the value
//! (7 bits for thresholds, 2 for the discharge mode) and bit 31 flags an
//! in-band firmware failure. The flag and value bits are disjoint, so a
//! flagged result still carries a usable value; callers log the flag and
//! keep the value. The raw packed integer never crosses this boundary.

/// Mask for the threshold value bits.
pub const THRESHOLD_BITS: u64 = 0x7f;

/// Mask for the forced-discharge mode value bits.
pub const MODE_BITS: u64 = 0x03;

/// In-band firmware failure flag.
pub const FIRMWARE_ERROR_FLAG: u64 = 1 << 31;

/// The decoded result of a firmware get-call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Value bits, already masked.
    pub value: u8,
    /// Whether firmware flagged an in-band failure.
    pub firmware_error: bool,
}

fn decode(raw: u64, mask: u64) -> Reading {
    Reading {
        // The mask is at most 7 bits wide.
        value: (raw & mask) as u8,
        firmware_error: raw & FIRMWARE_ERROR_FLAG != 0,
    }
}

/// Decode a threshold get-result (7 value bits).
#[must_use]
pub fn decode_threshold(raw: u64) -> Reading {
    decode(raw, THRESHOLD_BITS)
}

/// Decode a forced-discharge mode get-result (2 value bits).
#[must_use]
pub fn decode_mode(raw: u64) -> Reading {
    decode(raw, MODE_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_threshold() {
        let reading = decode_threshold(42);
        assert_eq!(reading.value, 42);
        assert!(!reading.firmware_error);
    }

    #[test]
    fn test_flagged_threshold_keeps_value() {
        let reading = decode_threshold(0x8000_002a);
        assert_eq!(reading.value, 42);
        assert!(reading.firmware_error);
    }

    #[test]
    fn test_threshold_ignores_high_garbage() {
        let reading = decode_threshold(0x0000_ff50);
        assert_eq!(reading.value, 0x50);
        assert!(!reading.firmware_error);
    }

    #[test]
    fn test_mode_masks_to_two_bits() {
        assert_eq!(decode_mode(0x03).value, 3);
        assert_eq!(decode_mode(0x07).value, 3);
        assert_eq!(decode_mode(0x8000_0001).value, 1);
        assert!(decode_mode(0x8000_0001).firmware_error);
    }
}
