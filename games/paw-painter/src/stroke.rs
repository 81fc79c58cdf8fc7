//! Freehand stroke interpolation.
//!
//! Pointer events arrive far apart when the hand moves fast. Filling the gap
//! with stamps every `radius` pixels keeps round stamps overlapping.

use glam::Vec2;

/// Points to stamp for a segment from `previous` to `current`.
///
/// The two anchors come first, then points at distance `0, radius, 2·radius, …`
/// along the segment while the distance is below its length. A zero-length
/// segment yields just the two anchors; a non-positive radius yields anchors only.
pub fn interpolate(previous: Vec2, current: Vec2, radius: f32) -> Vec<Vec2> {
    let mut points = vec![previous, current];
    let delta = current - previous;
    let length = delta.length();
    if length == 0.0 || !(radius > 0.0) || !length.is_finite() {
        return points;
    }

    let dir = delta / length;
    let count = (length / radius).ceil() as usize;
    points.reserve(count);
    for i in 0..count {
        let distance = i as f32 * radius;
        if distance >= length {
            break;
        }
        points.push(previous + dir * distance);
    }
    points
}

/// [`interpolate`] without repeated positions: interior points that land on
/// an anchor are dropped, and a zero-length segment stamps once.
pub fn stamp_points(previous: Vec2, current: Vec2, radius: f32) -> Vec<Vec2> {
    let mut points = interpolate(previous, current, radius);
    if previous == current {
        points.truncate(1);
        return points;
    }
    let interior = points.split_off(2);
    points.extend(interior.into_iter().filter(|p| *p != previous && *p != current));
    points
}
