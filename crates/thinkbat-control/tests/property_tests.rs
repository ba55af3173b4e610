//! Property tests for validation, ordering, and decoding.

use proptest::prelude::*;

use thinkbat_control::ids::{EC_HKEY_PATHS, methods};
use thinkbat_control::prelude::*;

fn ready_ec(start: u64, stop: u64) -> FakeEc {
    let mut ec = FakeEc::new();
    ec.add_path(EC_HKEY_PATHS[0]);
    ec.set_reply(methods::GET_CHARGE_START, start);
    ec.set_reply(methods::GET_CHARGE_STOP, stop);
    ec.route_write(methods::SET_CHARGE_START, methods::GET_CHARGE_START);
    ec.route_write(methods::SET_CHARGE_STOP, methods::GET_CHARGE_STOP);
    ec
}

proptest! {
    /// For valid percentages, setting start succeeds iff it does not exceed
    /// the current stop, and issues exactly one write iff it succeeds.
    #[test]
    fn set_start_succeeds_iff_not_above_stop(value in 0i64..=100, stop in 0u64..=100) {
        let mut controller = BatteryController::probe(ready_ec(0, stop))
            .expect("resolves");
        let result = controller.set_charge_start(value);

        let should_succeed = value as u64 <= stop;
        prop_assert_eq!(result.is_ok(), should_succeed);
        prop_assert_eq!(
            controller.ec().writes_to(methods::SET_CHARGE_START),
            usize::from(should_succeed)
        );
    }

    /// Symmetric property for the stop threshold.
    #[test]
    fn set_stop_succeeds_iff_not_below_start(value in 0i64..=100, start in 0u64..=100) {
        let mut controller = BatteryController::probe(ready_ec(start, 100))
            .expect("resolves");
        let result = controller.set_charge_stop(value);

        let should_succeed = value as u64 >= start;
        prop_assert_eq!(result.is_ok(), should_succeed);
        prop_assert_eq!(
            controller.ec().writes_to(methods::SET_CHARGE_STOP),
            usize::from(should_succeed)
        );
    }

    /// Out-of-range values always fail InvalidArgument with zero writes.
    #[test]
    fn out_of_range_threshold_never_writes(value in prop_oneof![
        -1_000_000i64..=-1,
        101i64..=1_000_000,
    ]) {
        let mut controller = BatteryController::probe(ready_ec(20, 80))
            .expect("resolves");
        prop_assert!(
            matches!(
                controller.set_charge_start(value),
                Err(ControlError::InvalidArgument { .. })
            ),
            "expected InvalidArgument from set_charge_start"
        );
        prop_assert!(
            matches!(
                controller.set_charge_stop(value),
                Err(ControlError::InvalidArgument { .. })
            ),
            "expected InvalidArgument from set_charge_stop"
        );
        prop_assert_eq!(controller.ec().write_count(), 0);
    }

    /// Mode writes succeed exactly on [0, 3], masked to two bits.
    #[test]
    fn mode_accepts_exactly_its_domain(value in -10i64..=10) {
        let mut ec = ready_ec(20, 80);
        ec.route_write(methods::SET_FORCE_DISCHARGE, methods::GET_FORCE_DISCHARGE);
        let mut controller = BatteryController::probe(ec).expect("resolves");

        let result = controller.set_force_discharge_mode(value);
        if (0..=3).contains(&value) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(
                controller.force_discharge_mode().expect("get").as_raw(),
                value as u8
            );
        } else {
            prop_assert!(
                matches!(result, Err(ControlError::InvalidArgument { .. })),
                "expected InvalidArgument"
            );
        }
    }

    /// Decoding never errors: value bits and flag bit are independent.
    #[test]
    fn decode_splits_value_and_flag(raw in any::<u32>()) {
        let raw = u64::from(raw);
        let threshold = decode_threshold(raw);
        prop_assert_eq!(u64::from(threshold.value), raw & 0x7f);
        prop_assert_eq!(threshold.firmware_error, raw & (1 << 31) != 0);

        let mode = decode_mode(raw);
        prop_assert_eq!(u64::from(mode.value), raw & 0x03);
        prop_assert_eq!(mode.firmware_error, threshold.firmware_error);
    }

    /// A valid set followed by a get round-trips through faithful firmware.
    #[test]
    fn faithful_firmware_round_trips(value in 0i64..=100) {
        let mut controller = BatteryController::probe(ready_ec(0, 100))
            .expect("resolves");
        controller.set_charge_start(value).expect("0..=100 with stop at 100");
        prop_assert_eq!(
            i64::from(controller.charge_start().expect("get").percent()),
            value
        );
    }
}
