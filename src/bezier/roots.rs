use super::super::consts::*;

use itertools::*;

use std::cmp::Ordering;
use std::f64::consts::PI;

///
/// The real roots of a cubic equation, along with how many of them there are
///
enum CubicRoots {
    None,
    One([f64; 1]),
    Two([f64; 2]),
    Three([f64; 3])
}

///
/// Computes the real-valued cube root of a number
///
/// (`f64::powf` returns NaN when a negative number is raised to a fractional power,
/// so the sign has to be dealt with separately)
///
#[inline]
pub fn cube_root(v: f64) -> f64 {
    if v < 0.0 {
        -f64::powf(-v, 1.0/3.0)
    } else {
        f64::powf(v, 1.0/3.0)
    }
}

///
/// True if a coefficient is small enough to treat as 0
///
#[inline]
fn is_small(coefficient: f64) -> bool {
    f64::abs(coefficient) < SMALL_COEFFICIENT
}

///
/// Solves for the t values where the cubic bezier curve with the weights w1, w2, w3, w4
/// evaluates to 0
///
/// The t values are returned in ascending order, restricted to the range 0 to 1 (the
/// range where the curve itself is defined), with duplicate values removed. An empty
/// vector indicates that the curve has no roots in that range.
///
pub fn solve_cubic_roots(w1: f64, w2: f64, w3: f64, w4: f64) -> Vec<f64> {
    let roots = match solve_cubic(w1, w2, w3, w4) {
        CubicRoots::None        => vec![],
        CubicRoots::One(r)      => r.to_vec(),
        CubicRoots::Two(r)      => r.to_vec(),
        CubicRoots::Three(r)    => r.to_vec()
    };

    filter_sort(roots)
}

///
/// Finds the real roots of the cubic equation described by four bezier weights, taking
/// account of the ways the equation can degenerate to a lower order
///
/// Uses Cardano's algorithm for the genuinely cubic case (see
/// <https://pomax.github.io/bezierinfo/#extremities>)
///
fn solve_cubic(w1: f64, w2: f64, w3: f64, w4: f64) -> CubicRoots {
    // Power-basis coefficients: the curve is the polynomial d*t^3 + a*t^2 + b*t + c
    let a = 3.0*w1 - 6.0*w2 + 3.0*w3;
    let b = -3.0*w1 + 3.0*w2;
    let c = w1;
    let d = -w1 + 3.0*w2 - 3.0*w3 + w4;

    if is_small(d) {
        // Not a cubic equation
        if is_small(a) {
            // Not a quadratic equation either
            if is_small(b) {
                // No solutions at all
                return CubicRoots::None;
            }

            // Linear equation
            return CubicRoots::One([-c/b]);
        }

        // Quadratic equation
        let q  = f64::sqrt(b*b - 4.0*a*c);
        let a2 = 2.0*a;

        return CubicRoots::Two([(q-b)/a2, (-b-q)/a2]);
    }

    // Reduce to a monic cubic, then depress it (remove the squared term)
    let a = a/d;
    let b = b/d;
    let c = c/d;

    let p  = (3.0*b - a*a)/3.0;
    let p3 = p/3.0;
    let q  = (2.0*a*a*a - 9.0*a*b + 27.0*c)/27.0;
    let q2 = q/2.0;

    let discriminant = q2*q2 + p3*p3*p3;

    if discriminant < 0.0 {
        // Three distinct real roots: trigonometric solution
        let mp3    = -p/3.0;
        let r      = f64::sqrt(mp3*mp3*mp3);
        let cosphi = f64::max(-1.0, f64::min(1.0, -q/(2.0*r)));
        let phi    = f64::acos(cosphi);
        let t1     = 2.0*cube_root(r);

        let root1 = t1*f64::cos(phi/3.0) - a/3.0;
        let root2 = t1*f64::cos((phi + 2.0*PI)/3.0) - a/3.0;
        let root3 = t1*f64::cos((phi + 4.0*PI)/3.0) - a/3.0;

        return CubicRoots::Three([root1, root2, root3]);
    }

    // An exact comparison: a tolerance here would alter the root count reported for
    // nearly-degenerate curves
    if discriminant == 0.0 {
        // A double root alongside a simple root
        let u1 = if q2 < 0.0 { cube_root(-q2) } else { -cube_root(q2) };

        let root1 = 2.0*u1 - a/3.0;
        let root2 = -u1 - a/3.0;

        return CubicRoots::Two([root1, root2]);
    }

    // One real root (the other two are complex)
    let sd = f64::sqrt(discriminant);
    let u1 = cube_root(sd - q2);
    let v1 = cube_root(sd + q2);

    CubicRoots::One([u1 - v1 - a/3.0])
}

///
/// Restricts a set of roots to the range 0 to 1, sorted in ascending order with exact
/// duplicates removed
///
fn filter_sort(mut roots: Vec<f64>) -> Vec<f64> {
    // Remove any roots outside the range of the curve (this also removes any NaN values)
    roots.retain(|r| r >= &0.0 && r <= &1.0);

    // Order the remaining roots so that duplicates become adjacent
    roots.sort_by(|r1, r2| r1.partial_cmp(r2).unwrap_or(Ordering::Equal));

    roots.into_iter().dedup().collect()
}
