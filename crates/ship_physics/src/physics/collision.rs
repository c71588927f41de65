//! Pairwise geometry between two kinematic bodies
//!
//! All queries are pure functions of two snapshots; neither body is mutated.
//! Collision prediction is exact: the squared center distance of two bodies
//! moving at constant velocity is a quadratic in time, and first contact is
//! its smaller root where that distance equals the sum of the radii.

use crate::foundation::math::{self, Point2};
use crate::physics::body::KinematicBody;

/// Signed edge-to-edge distance: center distance minus the sum of the radii.
///
/// Negative values are the penetration depth of overlapping bodies. A body
/// measured against itself is at distance exactly `0`, not `-2r`.
pub fn distance_between(a: &KinematicBody, b: &KinematicBody) -> f64 {
    if std::ptr::eq(a, b) {
        return 0.0;
    }
    (a.position() - b.position()).norm() - (a.radius() + b.radius())
}

/// Whether the bodies overlap. Exactly touching bodies do not.
pub fn overlap(a: &KinematicBody, b: &KinematicBody) -> bool {
    distance_between(a, b) < 0.0
}

/// Time until the two bodies first touch, assuming both keep their current
/// velocity; `f64::INFINITY` if they never do.
///
/// Bodies that are not closing in on each other (`Δv · Δp >= 0`) never
/// collide, and neither do bodies whose paths never bring the edges to
/// tangency (non-positive discriminant). Bodies that already overlap while
/// closing yield a negative time: the moment they would have touched.
pub fn time_to_collision(a: &KinematicBody, b: &KinematicBody) -> f64 {
    let dr = a.position() - b.position();
    let dv = a.velocity() - b.velocity();
    let sigma = a.radius() + b.radius();

    let dvdr = dv.dot(&dr);
    let dvdv = dv.dot(&dv);
    let drdr = dr.dot(&dr);
    let discriminant = dvdr * dvdr - dvdv * (drdr - sigma * sigma);

    log::trace!(
        "time_to_collision: dvdr={dvdr}, dvdv={dvdv}, drdr={drdr}, sigma={sigma}, d={discriminant}"
    );

    if dvdr >= 0.0 {
        return f64::INFINITY;
    }
    first_contact_root(dvdv, dvdr, discriminant).unwrap_or(f64::INFINITY)
}

/// Where the bodies first touch, or `None` if they never collide.
///
/// Both centers are projected to the time of contact; the contact point lies
/// on the segment between them at `a`'s radius from `a`'s center.
pub fn collision_position(a: &KinematicBody, b: &KinematicBody) -> Option<Point2> {
    let time = time_to_collision(a, b);
    if time == f64::INFINITY {
        return None;
    }

    let center_a = a.position_at(time);
    let center_b = b.position_at(time);
    Some(math::lerp_points(
        &center_a,
        &center_b,
        a.radius(),
        a.radius() + b.radius(),
    ))
}

/// Smaller root of `a·t² + 2·half_b·t + c = 0`, given the reduced
/// discriminant `half_b² - a·c`. Tangent and missing roots are `None`.
fn first_contact_root(a: f64, half_b: f64, discriminant: f64) -> Option<f64> {
    if discriminant <= 0.0 {
        None
    } else {
        Some(-(half_b + discriminant.sqrt()) / a)
    }
}
