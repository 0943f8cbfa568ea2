/*
 * Geometry Module
 *
 * Small 2D helpers shared by the flocking core. World space is y-down with
 * the origin in the top-left corner, and headings are degrees measured
 * clockwise from "up" (negative Y).
 */

use nannou::prelude::{vec2, Point2, Vec2};

// Euclidean distance between two points
#[inline]
pub fn distance_2d(a: Point2, b: Point2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    (rad * 180.0) / std::f32::consts::PI
}

#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    (deg * std::f32::consts::PI) / 180.0
}

// Unit vector pointing along a heading: 0 degrees is up, positive turns clockwise
pub fn heading_vector(heading: f32) -> Vec2 {
    let rad = deg_to_rad(heading);
    vec2(rad.sin(), -rad.cos())
}

// atan2 of the offset from `from` to `to`, in degrees. 0 points along +X.
pub fn bearing(from: Point2, to: Point2) -> f32 {
    rad_to_deg((to.y - from.y).atan2(to.x - from.x))
}
