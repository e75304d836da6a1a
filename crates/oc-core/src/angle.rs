//! Heading arithmetic in degrees.
//!
//! Two ranges are used throughout the engine:
//!
//! * **headings** (a subject's `direction`) live in `[0, 360)`;
//! * **turns** (relative rotations) live in `(-180, 180]` — the signed
//!   shortest way round, positive meaning clockwise.
//!
//! Rotation targets are kept *unwrapped* (`direction + turn`) so that a
//! 350° → 10° turn is stored as a target of 370°.  Only headings are wrapped.

/// Headings closer than this are considered equal; no rotation is started.
pub const ROTATION_EPSILON_DEG: f64 = 1e-6;

/// Wrap any finite angle into `[0, 360)`.
#[inline]
pub fn normalize(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed shortest turn from heading `from` to heading `to`, in `(-180, 180]`.
pub fn shortest_turn(from: f64, to: f64) -> f64 {
    let diff = normalize(to - from);
    if diff > 180.0 { diff - 360.0 } else { diff }
}

/// `true` if turning from `from` to `to` is below [`ROTATION_EPSILON_DEG`].
#[inline]
pub fn is_facing(from: f64, to: f64) -> bool {
    shortest_turn(from, to).abs() <= ROTATION_EPSILON_DEG
}
