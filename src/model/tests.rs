use super::*;
use crate::mapping::RawColumns;

fn columns(rows: &[(&str, &str, &str, &str)]) -> RawColumns {
    RawColumns {
        ids: rows.iter().map(|r| r.0.to_string()).collect(),
        timestamps: rows.iter().map(|r| r.1.to_string()).collect(),
        concentrations: rows.iter().map(|r| r.2.to_string()).collect(),
        velocities: rows.iter().map(|r| r.3.to_string()).collect(),
        concentration_field: "C_INLET".to_string(),
    }
}

fn sample(id: &str, time: &str, c0: f64, velocity: f64) -> Sample {
    Sample {
        row: 1,
        id: id.to_string(),
        measured_at: NaiveDateTime::parse_from_str(time, TIMESTAMP_FORMAT).unwrap(),
        inlet_concentration: c0,
        velocity,
    }
}

#[test]
fn test_parse_samples() {
    let columns = columns(&[
        ("S1", "2020-01-01 00:00:00", "10.0", "2.0"),
        ("S2", "2020-01-01 01:00:00", "8.5", "1.5"),
    ]);

    let samples = parse_samples(&columns).unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].id, "S1");
    assert_eq!(samples[0].inlet_concentration, 10.0);
    assert_eq!(samples[1].velocity, 1.5);
    assert_eq!(samples[1].row, 2);
}

#[test]
fn test_first_bad_number_aborts_with_row_and_field() {
    let columns = columns(&[
        ("S1", "2020-01-01 00:00:00", "10.0", "2.0"),
        ("S2", "2020-01-01 01:00:00", "n/a", "1.5"),
    ]);

    let err = parse_samples(&columns).unwrap_err();
    match err {
        ModelError::InvalidNumber { row, field, value } => {
            assert_eq!(row, 2);
            assert_eq!(field, "C_INLET");
            assert_eq!(value, "n/a");
        }
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}

#[test]
fn test_malformed_timestamp_aborts() {
    let columns = columns(&[("S1", "01/01/2020 00:00", "10.0", "2.0")]);

    let err = parse_samples(&columns).unwrap_err();
    assert!(matches!(err, ModelError::InvalidTimestamp { row: 1, .. }));
}

#[test]
fn test_travel_time() {
    let s = sample("S1", "2020-01-01 00:00:00", 10.0, 2.0);
    assert_eq!(travel_time(100.0, &s).unwrap(), 50.0);
}

#[test]
fn test_zero_velocity_is_an_error() {
    let s = sample("S1", "2020-01-01 00:00:00", 10.0, 0.0);

    let err = travel_time(100.0, &s).unwrap_err();
    match err {
        ModelError::ZeroVelocity { row, id } => {
            assert_eq!(row, 1);
            assert_eq!(id, "S1");
        }
        other => panic!("expected ZeroVelocity, got {other:?}"),
    }
}

#[test]
fn test_negative_velocity_passes_through() {
    // Arrival before measurement is permitted, not rejected
    let s = sample("S1", "2020-01-01 00:00:10", 10.0, -1.0);
    let params = SimulationParameters {
        distance: 10.0,
        decay_rate: 0.0,
    };

    let simulated = simulate(&[s], &params).unwrap();
    assert_eq!(simulated[0].travel_time, -10.0);
    assert_eq!(
        simulated[0].arrival_at.format(TIMESTAMP_FORMAT).to_string(),
        "2020-01-01 00:00:00"
    );
}

#[test]
fn test_identity_at_zero_travel_time() {
    assert_eq!(outlet_concentration(10.0, 0.05, 0.0), 10.0);
}

#[test]
fn test_decay_example() {
    // 10.0 * exp(-0.01 * 50) = 10.0 * exp(-0.5)
    let c = outlet_concentration(10.0, 0.01, 50.0);
    assert!((c - 10.0 * (-0.5f64).exp()).abs() < 1e-12);
    assert!((c - 6.0653).abs() < 1e-4);
}

#[test]
fn test_extreme_exponents_are_not_errors() {
    // Underflow toward zero and overflow to infinity are valid outputs
    assert_eq!(outlet_concentration(10.0, 1e6, 1e6), 0.0);
    assert!(outlet_concentration(10.0, -1e6, 1e6).is_infinite());
}

#[test]
fn test_fractional_arrival_truncates_for_display() {
    let s = sample("S1", "2020-01-01 00:00:00", 10.0, 3.0);
    let params = SimulationParameters {
        distance: 100.0,
        decay_rate: 0.0,
    };

    // 100 / 3 = 33.333... s; display keeps whole seconds only
    let simulated = simulate(&[s], &params).unwrap();
    assert_eq!(
        simulated[0].arrival_at.format(TIMESTAMP_FORMAT).to_string(),
        "2020-01-01 00:00:33"
    );
}

#[test]
fn test_absurd_shift_is_out_of_range() {
    let s = sample("S1", "2020-01-01 00:00:00", 10.0, 1e-300);
    let params = SimulationParameters {
        distance: 1e300,
        decay_rate: 0.0,
    };

    let err = simulate(&[s], &params).unwrap_err();
    assert!(matches!(err, ModelError::ArrivalOutOfRange { .. }));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The decay law matches C0 * exp(-(k*t)) within 1e-12 relative,
        /// checked against the algebraically equivalent C0 / exp(k*t)
        #[test]
        fn decay_formula_matches_reference(
            c0 in -1e6f64..1e6,
            k in -10.0f64..10.0,
            t in -50.0f64..50.0,
        ) {
            let expected = c0 / (k * t).exp();
            prop_assume!(expected == 0.0 || expected.is_normal());

            let actual = outlet_concentration(c0, k, t);
            if expected == 0.0 {
                prop_assert_eq!(actual, 0.0);
            } else {
                prop_assert!(((actual - expected) / expected).abs() < 1e-12);
            }
        }

        /// Zero travel time leaves the concentration untouched
        #[test]
        fn identity_at_zero_travel_time(c0 in -1e9f64..1e9, k in -100.0f64..100.0) {
            prop_assert_eq!(outlet_concentration(c0, k, 0.0), c0);
        }

        /// For positive C0 and k, concentration strictly decreases with travel time
        #[test]
        fn decay_is_monotonic_in_travel_time(
            c0 in 1e-3f64..1e6,
            k in 1e-6f64..0.01,
            t in 0.0f64..1e4,
            dt in 1e-3f64..1e4,
        ) {
            let near = outlet_concentration(c0, k, t);
            let far = outlet_concentration(c0, k, t + dt);
            prop_assert!(far < near);
        }

        /// Travel time is distance over velocity for any non-zero velocity
        #[test]
        fn travel_time_is_distance_over_velocity(
            distance in -1e6f64..1e6,
            velocity in (-1e3f64..1e3).prop_filter("non-zero", |v| v.abs() > 1e-9),
        ) {
            let s = sample("P", "2020-06-01 12:00:00", 1.0, velocity);
            prop_assert_eq!(travel_time(distance, &s).unwrap(), distance / velocity);
        }
    }
}
