//! Concrete ship scenarios with known answers
//!
//! Each test builds ships the way a game would, then checks the pairwise
//! queries or state transitions against values worked out by hand.

use crate::foundation::math::constants::PI;
use crate::foundation::math::Point2;
use crate::physics::{
    collision_position, distance_between, overlap, time_to_collision, KinematicBody,
};
use approx::assert_abs_diff_eq;

const EPSILON: f64 = 1e-4;

fn ship(x: f64, y: f64, vx: f64, vy: f64, radius: f64, orientation: f64) -> KinematicBody {
    KinematicBody::new(x, y, vx, vy, radius, orientation).unwrap()
}

#[test]
fn test_distance_scenarios() {
    let cases = [
        ((0.0, 0.0), (0.0, 50.0), 10.0),
        ((-10.0, 0.0), (60.0, 0.0), 30.0),
        ((0.0, 0.0), (20.0, 0.0), -20.0),
        ((0.0, 0.0), (0.0, 0.0), -40.0),
        ((30.0, 50.0), (-20.0, -60.0), 80.830_459_7),
    ];
    for ((ax, ay), (bx, by), expected) in cases {
        let a = ship(ax, ay, 30.0, -15.0, 20.0, 0.0);
        let b = ship(bx, by, 30.0, -15.0, 20.0, 0.0);
        assert_abs_diff_eq!(distance_between(&a, &b), expected, epsilon = EPSILON);
        assert_eq!(overlap(&a, &b), distance_between(&a, &b) < 0.0);
    }
}

#[test]
fn test_overlap_scenarios() {
    let a = ship(0.0, 0.0, 30.0, -15.0, 20.0, 0.0);
    assert!(overlap(&a, &ship(20.0, 0.0, 30.0, -15.0, 20.0, 0.0)));
    assert!(!overlap(&a, &ship(60.0, 0.0, 30.0, -15.0, 20.0, 0.0)));
}

#[test]
fn test_collision_time_approaching_from_below() {
    let resting = ship(0.0, 0.0, 0.0, 0.0, 20.0, 0.0);
    let incoming = ship(0.0, -60.0, 0.0, 1.0, 20.0, PI / 2.0);
    assert_eq!(time_to_collision(&resting, &incoming), 20.0);
}

#[test]
fn test_collision_time_passing_sideways() {
    let resting = ship(0.0, 0.0, 0.0, 0.0, 20.0, 0.0);
    let passing = ship(0.0, -60.0, 1.0, 0.0, 20.0, PI);
    assert_eq!(time_to_collision(&resting, &passing), f64::INFINITY);
    assert_eq!(collision_position(&resting, &passing), None);
}

#[test]
fn test_collision_time_crossing_paths() {
    let a = ship(35.0, -120.0, -20.0, 30.0, 25.0, 0.0);
    let b = ship(-90.0, 60.0, 20.0, -30.0, 25.0, PI / 2.0);
    assert_abs_diff_eq!(time_to_collision(&a, &b), 2.347_490_607, epsilon = EPSILON);
}

#[test]
fn test_collision_position_straight_ahead() {
    let moving = ship(0.0, 0.0, 0.0, 1.0, 25.0, 0.0);
    let resting = ship(0.0, 60.0, 0.0, 0.0, 25.0, 0.0);
    assert_eq!(collision_position(&moving, &resting), Some(Point2::new(0.0, 35.0)));
}

#[test]
fn test_collision_position_moving_away() {
    let moving = ship(0.0, 0.0, 0.0, -1.0, 25.0, 0.0);
    let resting = ship(0.0, 60.0, 0.0, 0.0, 25.0, 0.0);
    assert_eq!(collision_position(&moving, &resting), None);
}

#[test]
fn test_collision_position_crossing_paths() {
    let a = ship(35.0, -120.0, -20.0, 30.0, 25.0, 0.0);
    let b = ship(-90.0, 60.0, 20.0, -30.0, 25.0, PI / 2.0);
    let contact = collision_position(&a, &b).unwrap();
    assert_abs_diff_eq!(contact, Point2::new(-27.5, -30.0), epsilon = EPSILON);
}

#[test]
fn test_contact_point_lies_on_both_rims() {
    let a = ship(35.0, -120.0, -20.0, 30.0, 15.0, 0.0);
    let b = ship(-90.0, 60.0, 20.0, -30.0, 40.0, 0.0);
    let time = time_to_collision(&a, &b);
    let contact = collision_position(&a, &b).unwrap();
    assert_abs_diff_eq!((contact - a.position_at(time)).norm(), 15.0, epsilon = 1e-6);
    assert_abs_diff_eq!((contact - b.position_at(time)).norm(), 40.0, epsilon = 1e-6);
}

#[test]
fn test_moving_to_collision_time_makes_bodies_touch() {
    let mut a = ship(35.0, -120.0, -20.0, 30.0, 25.0, 0.0);
    let mut b = ship(-90.0, 60.0, 20.0, -30.0, 25.0, 0.0);
    let time = time_to_collision(&a, &b);
    a.advance(time).unwrap();
    b.advance(time).unwrap();
    assert_abs_diff_eq!(distance_between(&a, &b), 0.0, epsilon = 1e-9);
}

#[test]
fn test_successive_moves() {
    let mut ship = ship(100.0, 100.0, 30.0, -15.0, 20.0, 0.0);
    ship.advance(1.0).unwrap();
    assert_abs_diff_eq!(ship.position(), Point2::new(130.0, 85.0), epsilon = EPSILON);
    ship.advance(3.0).unwrap();
    assert_abs_diff_eq!(ship.position(), Point2::new(220.0, 40.0), epsilon = EPSILON);
}

#[test]
fn test_thrust_then_turn_then_thrust() {
    let mut ship = ship(0.0, 0.0, 0.0, 0.0, 20.0, 0.0);
    ship.thrust(3.0);
    ship.turn(PI / 2.0);
    ship.thrust(4.0);
    assert_abs_diff_eq!(ship.vx(), 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(ship.vy(), 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(ship.speed(), 5.0, epsilon = 1e-12);
}
