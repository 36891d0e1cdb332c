#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn default_ratio_is_ten() {
    assert_eq!(GridScale::default().px_per_unit(), 10.0);
}

#[test]
fn new_rejects_zero() {
    assert!(matches!(GridScale::new(0.0), Err(ScaleError::InvalidPxPerUnit(_))));
}

#[test]
fn new_rejects_non_finite() {
    assert!(GridScale::new(f64::NAN).is_err());
    assert!(GridScale::new(f64::INFINITY).is_err());
    assert!(GridScale::new(f64::NEG_INFINITY).is_err());
}

#[test]
fn new_accepts_negative_ratio() {
    // A negative ratio flips the axes but stays well-defined.
    let scale = GridScale::new(-2.0).unwrap();
    assert_eq!(scale.to_virtual(BaseCoord(3.0)).0, -6.0);
}

#[test]
fn set_rejects_zero_and_keeps_previous_ratio() {
    let mut scale = GridScale::default();
    assert!(scale.set_px_per_unit(0.0).is_err());
    assert_eq!(scale.px_per_unit(), 10.0);
}

#[test]
fn to_virtual_multiplies() {
    let scale = GridScale::default();
    assert_eq!(scale.to_virtual(BaseCoord(2.5)).0, 25.0);
}

#[test]
fn to_base_divides() {
    let scale = GridScale::default();
    assert_eq!(scale.to_base(VirtualCoord(25.0)).0, 2.5);
}

#[test]
fn round_trip_over_assorted_values() {
    let scale = GridScale::new(3.7).unwrap();
    for value in [-1000.0, -0.25, 0.0, 1.0, 17.5, 99999.0] {
        let back = scale.to_base(scale.to_virtual(BaseCoord(value)));
        assert!(approx_eq(back.0, value), "round trip failed for {value}");
    }
}

#[test]
fn mutation_visible_on_next_conversion() {
    let mut scale = GridScale::default();
    assert_eq!(scale.to_virtual(BaseCoord(1.0)).0, 10.0);
    scale.set_px_per_unit(25.0).unwrap();
    assert_eq!(scale.to_virtual(BaseCoord(1.0)).0, 25.0);
}

#[test]
fn error_names_the_offending_ratio() {
    let err = GridScale::new(0.0).unwrap_err();
    assert_eq!(err.to_string(), "invalid pixels-per-base-unit ratio: 0");
}
