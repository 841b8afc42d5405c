use super::*;
use crate::angle::{PI, TAU};
use crate::error::GeometryError;
use nalgebra::vector;

fn unit_circle() -> Circle {
    Circle::new(Point::origin(), 1.0).unwrap()
}

fn deg(d: f64) -> f64 {
    d.to_radians()
}

#[test]
fn point_polar_roundtrip_and_arithmetic() {
    let p = Point::polar(2.0, deg(30.0));
    assert!((p.r() - 2.0).abs() < 1e-12);
    assert!((p.angle() - deg(30.0)).abs() < 1e-12);
    assert!((p.r2() - 4.0).abs() < 1e-12);

    let q = Point::new(1.0, -1.0);
    let a = Point::new(0.5, 3.0);
    assert_eq!(a + q - q, a);
    let mut b = a;
    b += q;
    b -= a;
    assert_eq!(b, q);
    assert_eq!(-q, Point::new(-1.0, 1.0));
    assert_eq!(q * 2.0, 2.0 * q);
    assert_eq!((q * 2.0) / 2.0, q);
    assert!((q.dot(&Point::new(2.0, 3.0)) + 1.0).abs() < 1e-15);
    assert_eq!(Point::from(vector![1.0, -1.0]), q);
    assert_eq!(Point::from((1.0, -1.0)), q);
}

#[test]
fn point_angle_is_in_half_open_interval() {
    // atan2(-0.0, -1.0) is -π; the bearing is reported as π
    assert_eq!(Point::new(-1.0, -0.0).angle(), PI);
    assert_eq!(Point::new(-1.0, 0.0).angle(), PI);
    assert_eq!(Point::origin().angle(), 0.0);
}

#[test]
fn circle_rejects_bad_radius() {
    assert!(matches!(
        Circle::new(Point::origin(), 0.0),
        Err(GeometryError::InvalidRadius(_))
    ));
    assert!(Circle::new(Point::origin(), -1.0).is_err());
    assert!(Circle::new(Point::origin(), f64::NAN).is_err());
    assert!(Circle::new(Point::origin(), f64::INFINITY).is_err());
}

#[test]
fn circle_contains_is_boundary_inclusive() {
    let c = Circle::new(Point::new(1.0, 1.0), 2.0).unwrap();
    assert!(c.contains(Point::new(3.0, 1.0)));
    assert!(c.contains(Point::new(1.0, 1.0)));
    assert!(!c.contains(Point::new(3.0, 1.5)));
    assert!(!c.contains(Point::new(f64::NAN, 1.0)));
    assert!((c.bearing(Point::new(1.0, 3.0)) - PI / 2.0).abs() < 1e-15);
}

#[test]
fn sector_rejects_bad_arc() {
    let c = unit_circle();
    for arc in [0.0, -1.0, TAU, 7.0, f64::NAN] {
        assert!(
            matches!(Sector::new(c, arc), Err(GeometryError::InvalidArc(_))),
            "arc {arc} accepted"
        );
    }
    assert!(matches!(
        Sector::with_arms(c, 1.0, f64::INFINITY),
        Err(GeometryError::NonFiniteAngle(_))
    ));
    let s = Sector::with_arms(c, 1.0, 3.0 * PI / 2.0).unwrap();
    assert!((s.start_arm() + PI / 2.0).abs() < 1e-12);
}

#[test]
fn sector_angle_inside_without_wrap() {
    let s = Sector::with_arms(unit_circle(), deg(90.0), deg(100.0)).unwrap();
    assert!(s.is_angle_inside(deg(100.0)));
    assert!(s.is_angle_inside(deg(10.001)));
    assert!(s.is_angle_inside(deg(50.0)));
    assert!(!s.is_angle_inside(deg(9.0)));
    assert!(!s.is_angle_inside(deg(101.0)));
    // same direction expressed with an extra turn
    assert!(s.is_angle_inside(deg(50.0) + TAU));
}

#[test]
fn sector_angle_inside_across_seam() {
    // start at -170°, end at -260° ≡ 100°: covers [100°, 180°] ∪ (-180°, -170°]
    let s = Sector::with_arms(unit_circle(), deg(90.0), deg(-170.0)).unwrap();
    assert!(s.end_arm_reduced() > s.start_arm());
    assert!(s.is_angle_inside(PI));
    assert!(s.is_angle_inside(-PI));
    assert!(s.is_angle_inside(deg(100.001)));
    assert!(s.is_angle_inside(deg(-170.0)));
    assert!(s.is_angle_inside(deg(150.0)));
    assert!(!s.is_angle_inside(deg(-160.0)));
    assert!(!s.is_angle_inside(deg(99.0)));
}

#[test]
fn sector_point_inside() {
    let c = Circle::new(Point::new(1.0, 0.0), 1.0).unwrap();
    let s = Sector::with_arms(c, PI / 2.0, PI / 2.0).unwrap();
    assert_eq!(s.end_arm(), 0.0);
    assert!(s.is_point_inside(Point::new(1.0, 0.0)), "center is always inside");
    assert!(s.is_point_inside(Point::new(1.5, 0.5)));
    assert!(s.is_point_inside(Point::new(1.0, 1.0)), "on the start arm, on the rim");
    assert!(!s.is_point_inside(Point::new(0.5, 0.5)));
    assert!(!s.is_point_inside(Point::new(1.0, 2.0)), "outside the circle");
}

#[test]
fn rotation_is_clockwise_and_normalized() {
    let s = Sector::with_arms(unit_circle(), deg(60.0), deg(-170.0)).unwrap();
    let r = s.rotated(deg(20.0));
    assert!((r.start_arm() - deg(170.0)).abs() < 1e-12);
    assert_eq!(r.arc(), s.arc());

    let mut m = MovingSector::from(s);
    m.rotate(deg(20.0));
    assert_eq!(m.snapshot(), r);

    m.set_end_arm(deg(0.0));
    assert!((m.start_arm() - deg(60.0)).abs() < 1e-12);
    assert!((m.end_arm()).abs() < 1e-12);
    m.set_start_arm(deg(200.0));
    assert!((m.start_arm() + deg(160.0)).abs() < 1e-12);
}

#[test]
fn snapshot_is_detached_from_moving_sector() {
    let mut m = MovingSector::from(Sector::with_arms(unit_circle(), 1.0, 0.5).unwrap());
    let snap = m.snapshot();
    m.rotate(0.25);
    assert_eq!(snap.start_arm(), 0.5);
    assert!((m.start_arm() - 0.25).abs() < 1e-15);
}

#[test]
fn with_start_arm_normalizes_and_validates() {
    let s = Sector::with_arms(unit_circle(), deg(60.0), 0.0).unwrap();
    let moved = s.with_start_arm(3.0 * PI / 2.0).unwrap();
    assert!((moved.start_arm() + PI / 2.0).abs() < 1e-12);
    assert_eq!(moved.arc(), s.arc());
    assert_eq!(moved.circle(), s.circle());
    assert_eq!(s.start_arm(), 0.0);
    assert!(matches!(
        s.with_start_arm(f64::NAN),
        Err(GeometryError::NonFiniteAngle(_))
    ));
}

#[test]
fn bisector_and_display() {
    let s = Sector::with_arms(unit_circle(), deg(90.0), deg(45.0)).unwrap();
    assert!(s.bisector().abs() < 1e-12);
    let text = s.to_string();
    assert!(text.contains("arc=90.0°"), "{text}");
}
