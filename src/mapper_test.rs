#![allow(clippy::float_cmp)]

use super::*;

const AXIS_ANGLES: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

fn mapper() -> CoordinateMapper {
    CoordinateMapper::new(130.0, 15.0)
}

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

// =============================================================
// polar_to_cartesian
// =============================================================

#[test]
fn half_combined_is_sum_of_radii() {
    assert_eq!(mapper().half_combined(), 145.0);
}

#[test]
fn from_geometry_uses_radii_only() {
    let g = Geometry::new(100.0, 10.0, Point::new(500.0, 500.0));
    assert_eq!(CoordinateMapper::from_geometry(&g), CoordinateMapper::new(100.0, 10.0));
}

#[test]
fn zero_degrees_points_straight_up() {
    let p = mapper().polar_to_cartesian(0.0);
    assert!(approx_eq(p.x, 145.0, 1e-9));
    assert!(approx_eq(p.y, 15.0, 1e-9));
}

#[test]
fn ninety_degrees_points_right() {
    let p = mapper().polar_to_cartesian(90.0);
    assert!(approx_eq(p.x, 275.0, 1e-9));
    assert!(approx_eq(p.y, 145.0, 1e-9));
}

#[test]
fn angles_increase_clockwise() {
    let m = mapper();
    let bottom = m.polar_to_cartesian(180.0);
    let left = m.polar_to_cartesian(270.0);
    assert!(approx_eq(bottom.x, 145.0, 1e-9));
    assert!(approx_eq(bottom.y, 275.0, 1e-9));
    assert!(approx_eq(left.x, 15.0, 1e-9));
    assert!(approx_eq(left.y, 145.0, 1e-9));
}

#[test]
fn points_lie_on_ring() {
    let m = mapper();
    for deg in (0..360).step_by(7) {
        let p = m.polar_to_cartesian(f64::from(deg));
        let r = ((p.x - 145.0).powi(2) + (p.y - 145.0).powi(2)).sqrt();
        assert!(approx_eq(r, 130.0, 1e-9), "radius {r} at {deg}°");
    }
}

// =============================================================
// cartesian_to_polar: axis rules
// =============================================================

#[test]
fn vertical_axis_below_center_is_zero() {
    assert_eq!(mapper().cartesian_to_polar(145.0, 200.0), 0.0);
}

#[test]
fn vertical_axis_above_center_is_180() {
    assert_eq!(mapper().cartesian_to_polar(145.0, 100.0), 180.0);
}

#[test]
fn horizontal_axis_right_of_center_is_90() {
    assert_eq!(mapper().cartesian_to_polar(200.0, 145.0), 90.0);
    assert_eq!(mapper().cartesian_to_polar(275.0, 145.0), 90.0);
}

#[test]
fn horizontal_axis_left_of_center_is_270() {
    assert_eq!(mapper().cartesian_to_polar(100.0, 145.0), 270.0);
}

#[test]
fn exact_center_takes_vertical_axis_rule() {
    assert_eq!(mapper().cartesian_to_polar(145.0, 145.0), 180.0);
}

// =============================================================
// cartesian_to_polar: general case
// =============================================================

#[test]
fn quadrant_diagonals_map_to_midpoints() {
    let m = mapper();
    assert_eq!(m.cartesian_to_polar(245.0, 45.0), 45.0);
    assert_eq!(m.cartesian_to_polar(245.0, 245.0), 135.0);
    assert_eq!(m.cartesian_to_polar(45.0, 245.0), 225.0);
    assert_eq!(m.cartesian_to_polar(45.0, 45.0), 315.0);
}

#[test]
fn result_is_whole_degrees() {
    let m = mapper();
    let a = m.cartesian_to_polar(210.3, 77.9);
    assert_eq!(a, a.trunc());
}

#[test]
fn just_left_of_top_lands_at_seam() {
    // Left half-plane near the top resolves to the 360 end of the range.
    assert_eq!(mapper().cartesian_to_polar(144.0, 15.0), 360.0);
}

#[test]
fn just_right_of_top_lands_at_zero() {
    assert_eq!(mapper().cartesian_to_polar(146.0, 15.0), 0.0);
}

#[test]
fn rounding_ties_go_up() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(-0.4), 0.0);
}

#[test]
fn point_to_polar_matches_cartesian_to_polar() {
    let m = mapper();
    let p = Point::new(230.0, 60.0);
    assert_eq!(m.point_to_polar(p), m.cartesian_to_polar(p.x, p.y));
}

// =============================================================
// Round-trip
// =============================================================

#[test]
fn round_trip_whole_degrees_within_one_degree() {
    let m = mapper();
    for deg in 0..360 {
        let a = f64::from(deg);
        if AXIS_ANGLES.contains(&a) {
            continue;
        }
        let p = m.polar_to_cartesian(a);
        let back = m.point_to_polar(p);
        assert!(approx_eq(back, a, 1.0), "{a}° came back as {back}°");
    }
}

#[test]
fn round_trip_fractional_degrees_within_one_degree() {
    let m = mapper();
    for tenth in (5..3590).step_by(37) {
        let a = f64::from(tenth) / 10.0;
        let back = m.point_to_polar(m.polar_to_cartesian(a));
        assert!(approx_eq(back, a, 1.0), "{a}° came back as {back}°");
    }
}

#[test]
fn round_trip_holds_for_other_radii() {
    let m = CoordinateMapper::new(60.0, 8.0);
    for deg in (1..360).step_by(11) {
        let a = f64::from(deg);
        if AXIS_ANGLES.contains(&a) {
            continue;
        }
        let back = m.point_to_polar(m.polar_to_cartesian(a));
        assert!(approx_eq(back, a, 1.0), "{a}° came back as {back}°");
    }
}
