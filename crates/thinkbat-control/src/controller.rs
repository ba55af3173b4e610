//! The battery threshold/mode controller.

use tracing::{debug, error, info, warn};

use thinkbat_acpi::{AcpiHandle, EcMethods};

use crate::config::ControllerConfig;
use crate::decode::{MODE_BITS, Reading, THRESHOLD_BITS, decode_mode, decode_threshold};
use crate::error::{ControlError, ControlResult};
use crate::ids::methods;
use crate::types::{ChargeThreshold, Field, ForceDischargeMode};

/// Input value for EC get-methods.
const GET_ARG: u64 = 1;

/// Battery charge threshold and forced-discharge controller.
///
/// Construction is the only transition from unresolved to ready: a
/// controller value exists if and only if a firmware control object was
/// resolved, so no operation is reachable without a handle. The handle is
/// written once and never changes.
///
/// All operations are synchronous blocking round trips into firmware; the
/// controller performs no locking and expects the host's existing
/// serialization of control-interface access (`&mut self` enforces a
/// single caller at the type level).
#[derive(Debug)]
pub struct BatteryController<E: EcMethods> {
    ec: E,
    handle: AcpiHandle,
}

impl<E: EcMethods> BatteryController<E> {
    /// Resolve the control object at one of the default locations.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NoControlObject`] when no candidate
    /// resolves; the controller is then never constructed.
    pub fn probe(ec: E) -> ControlResult<Self> {
        Self::probe_with_config(ec, &ControllerConfig::default())
    }

    /// Resolve the control object from an explicit candidate list.
    ///
    /// Candidates are probed in order and the first that resolves wins;
    /// later candidates are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::InvalidArgument`] for an invalid config and
    /// [`ControlError::NoControlObject`] when no candidate resolves.
    pub fn probe_with_config(mut ec: E, config: &ControllerConfig) -> ControlResult<Self> {
        config.validate()?;
        for path in &config.candidate_paths {
            match ec.resolve_object(path) {
                Ok(handle) => {
                    info!(path = %handle, "resolved EC battery control object");
                    return Ok(Self { ec, handle });
                }
                Err(err) => debug!(%path, %err, "candidate path did not resolve"),
            }
        }
        error!("no EC battery control object found among candidate paths");
        Err(ControlError::NoControlObject)
    }

    /// The resolved control object.
    #[must_use]
    pub fn handle(&self) -> &AcpiHandle {
        &self.handle
    }

    /// The underlying invoker (for inspection in tests and diagnostics).
    #[must_use]
    pub fn ec(&self) -> &E {
        &self.ec
    }

    /// Read the charge start threshold.
    ///
    /// # Errors
    ///
    /// Propagates firmware call failures unchanged.
    pub fn charge_start(&mut self) -> ControlResult<ChargeThreshold> {
        let reading = self.read_threshold(methods::GET_CHARGE_START)?;
        Ok(ChargeThreshold::from_firmware(reading.value))
    }

    /// Read the charge stop threshold.
    ///
    /// # Errors
    ///
    /// Propagates firmware call failures unchanged.
    pub fn charge_stop(&mut self) -> ControlResult<ChargeThreshold> {
        let reading = self.read_threshold(methods::GET_CHARGE_STOP)?;
        Ok(ChargeThreshold::from_firmware(reading.value))
    }

    /// Read the forced-discharge mode.
    ///
    /// # Errors
    ///
    /// Propagates firmware call failures unchanged; firmware without the
    /// mode methods yields `MethodUnavailable`.
    pub fn force_discharge_mode(&mut self) -> ControlResult<ForceDischargeMode> {
        let raw = self.read_raw(methods::GET_FORCE_DISCHARGE)?;
        let reading = decode_mode(raw);
        self.note_inband_failure(methods::GET_FORCE_DISCHARGE, reading);
        Ok(ForceDischargeMode::from_firmware(reading.value))
    }

    /// Set the charge start threshold.
    ///
    /// The stop threshold is re-read from firmware for the ordering check;
    /// a start above the current stop is rejected rather than auto-raising
    /// the stop, so a set call only ever changes the field it names.
    ///
    /// # Errors
    ///
    /// [`ControlError::InvalidArgument`] outside [0, 100] or above the
    /// current stop; firmware write failures propagate unchanged. Nothing
    /// is written unless validation passed.
    pub fn set_charge_start(&mut self, value: i64) -> ControlResult<()> {
        let start = validated_percentage(Field::ChargeStart, value)?;
        let stop = self.charge_stop()?;
        if start.percent() > stop.percent() {
            return Err(ControlError::invalid_argument(format!(
                "charge_start {start} exceeds charge_stop {stop}"
            )));
        }
        self.write(
            methods::SET_CHARGE_START,
            u64::from(start.percent()) & THRESHOLD_BITS,
        )
    }

    /// Set the charge stop threshold.
    ///
    /// The start threshold is re-read from firmware for the ordering check.
    ///
    /// # Errors
    ///
    /// [`ControlError::InvalidArgument`] outside [0, 100] or below the
    /// current start; firmware write failures propagate unchanged.
    pub fn set_charge_stop(&mut self, value: i64) -> ControlResult<()> {
        let stop = validated_percentage(Field::ChargeStop, value)?;
        let start = self.charge_start()?;
        if stop.percent() < start.percent() {
            return Err(ControlError::invalid_argument(format!(
                "charge_stop {stop} is below charge_start {start}"
            )));
        }
        self.write(
            methods::SET_CHARGE_STOP,
            u64::from(stop.percent()) & THRESHOLD_BITS,
        )
    }

    /// Set the forced-discharge mode.
    ///
    /// # Errors
    ///
    /// [`ControlError::InvalidArgument`] outside [0, 3]; firmware write
    /// failures propagate unchanged.
    pub fn set_force_discharge_mode(&mut self, value: i64) -> ControlResult<()> {
        let mode = u8::try_from(value)
            .ok()
            .and_then(ForceDischargeMode::new)
            .ok_or_else(|| {
                ControlError::invalid_argument(format!(
                    "force_discharge must be between 0 and 3, got {value}"
                ))
            })?;
        self.write(
            methods::SET_FORCE_DISCHARGE,
            u64::from(mode.as_raw()) & MODE_BITS,
        )
    }

    /// Read a named control value, for the host control-interface layer.
    ///
    /// # Errors
    ///
    /// As the typed getter for `field`.
    pub fn get(&mut self, field: Field) -> ControlResult<i64> {
        match field {
            Field::ChargeStart => Ok(i64::from(self.charge_start()?.percent())),
            Field::ChargeStop => Ok(i64::from(self.charge_stop()?.percent())),
            Field::ForceDischarge => Ok(i64::from(self.force_discharge_mode()?.as_raw())),
        }
    }

    /// Write a named control value, for the host control-interface layer.
    ///
    /// # Errors
    ///
    /// As the typed setter for `field`.
    pub fn set(&mut self, field: Field, value: i64) -> ControlResult<()> {
        match field {
            Field::ChargeStart => self.set_charge_start(value),
            Field::ChargeStop => self.set_charge_stop(value),
            Field::ForceDischarge => self.set_force_discharge_mode(value),
        }
    }

    /// Write 0 to charge start, charge stop, and forced discharge, in that
    /// order, attempting every step regardless of earlier failures so the
    /// firmware is left as close to a known-safe state as achievable.
    ///
    /// # Errors
    ///
    /// Returns the first failure after the full sweep.
    pub fn reset_to_defaults(&mut self) -> ControlResult<()> {
        let mut first_failure = None;
        for method in [
            methods::SET_CHARGE_START,
            methods::SET_CHARGE_STOP,
            methods::SET_FORCE_DISCHARGE,
        ] {
            if let Err(err) = self.write(method, 0) {
                if first_failure.is_none() {
                    first_failure = Some(err);
                }
            }
        }
        match first_failure {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }

    /// Tear down: reset firmware to defaults and consume the controller.
    ///
    /// Interface deregistration is the host's job; this only covers the
    /// firmware side of shutdown.
    ///
    /// # Errors
    ///
    /// As [`reset_to_defaults`](Self::reset_to_defaults).
    pub fn shutdown(mut self) -> ControlResult<()> {
        info!(path = %self.handle, "resetting EC battery controls");
        self.reset_to_defaults()
    }

    fn read_raw(&mut self, method: &str) -> ControlResult<u64> {
        self.ec.call_int(&self.handle, method, GET_ARG).map_err(|err| {
            warn!(path = %self.handle, method, %err, "firmware get failed");
            ControlError::from(err)
        })
    }

    fn read_threshold(&mut self, method: &str) -> ControlResult<Reading> {
        let raw = self.read_raw(method)?;
        let reading = decode_threshold(raw);
        self.note_inband_failure(method, reading);
        Ok(reading)
    }

    /// The flag bits and value bits are disjoint, so a flagged reading is
    /// logged but still returned to the caller.
    fn note_inband_failure(&self, method: &str, reading: Reading) {
        if reading.firmware_error {
            warn!(
                path = %self.handle,
                method,
                value = reading.value,
                "firmware flagged in-band failure in get result"
            );
        }
    }

    fn write(&mut self, method: &str, arg: u64) -> ControlResult<()> {
        self.ec
            .call_int_void(&self.handle, method, arg)
            .map_err(|err| {
                error!(path = %self.handle, method, arg, %err, "firmware set failed");
                ControlError::from(err)
            })
    }
}

fn validated_percentage(field: Field, value: i64) -> ControlResult<ChargeThreshold> {
    u8::try_from(value)
        .ok()
        .and_then(ChargeThreshold::new)
        .ok_or_else(|| {
            ControlError::invalid_argument(format!(
                "{field} must be between 0 and 100, got {value}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_percentage_bounds() {
        assert!(validated_percentage(Field::ChargeStart, 0).is_ok());
        assert!(validated_percentage(Field::ChargeStart, 100).is_ok());
        for bad in [-1, 101, 255, i64::MIN, i64::MAX] {
            assert!(matches!(
                validated_percentage(Field::ChargeStart, bad),
                Err(ControlError::InvalidArgument { .. })
            ));
        }
    }
}
