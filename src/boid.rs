/*
 * Boid Module
 *
 * This module defines the Boid struct: a position, a heading in degrees and
 * a size that drives the three perception radii. Each tick a boid first moves
 * forward along its heading (with toroidal wrap at the world bounds) and then
 * picks a new heading from its flockmates, see the steering module.
 */

use nannou::prelude::*;

use crate::geometry::heading_vector;

pub const DEFAULT_BOID_SIZE: u32 = 10;
pub const DEFAULT_MOVE_SPEED: f32 = 200.0;

// Multipliers applied to the boid size to get each tier's radius
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RadiusFactors {
    pub cohesion: u32,
    pub alignment: u32,
    pub separation: u32,
}

impl Default for RadiusFactors {
    fn default() -> Self {
        Self {
            cohesion: 14,
            alignment: 9,
            separation: 3,
        }
    }
}

// Width and height of the area boids wrap around in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boid {
    pub position: Point2,
    pub heading: f32,
    pub size: u32,
    pub speed: f32,
    pub factors: RadiusFactors,
    pub color: Rgb<u8>,
}

impl Boid {
    pub fn new(position: Point2, heading: f32, color: Rgb<u8>) -> Self {
        Self {
            position,
            heading,
            size: DEFAULT_BOID_SIZE,
            speed: DEFAULT_MOVE_SPEED,
            factors: RadiusFactors::default(),
            color,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_factors(mut self, factors: RadiusFactors) -> Self {
        self.factors = factors;
        self
    }

    pub fn cohesion_radius(&self) -> f32 {
        (self.size * self.factors.cohesion) as f32
    }

    pub fn alignment_radius(&self) -> f32 {
        (self.size * self.factors.alignment) as f32
    }

    pub fn separation_radius(&self) -> f32 {
        (self.size * self.factors.separation) as f32
    }

    // Move forward along the current heading, then wrap into the world
    pub fn advance(&mut self, dt: f32, bounds: WorldBounds) {
        self.position += heading_vector(self.heading) * (self.speed * dt);
        self.wrap_edges(bounds);
    }

    // Wrap each axis independently. A coordinate exactly on the bound stays put.
    pub fn wrap_edges(&mut self, bounds: WorldBounds) {
        if self.position.x < 0.0 {
            self.position.x = bounds.width;
        }
        if self.position.x > bounds.width {
            self.position.x = 0.0;
        }

        if self.position.y < 0.0 {
            self.position.y = bounds.height;
        }
        if self.position.y > bounds.height {
            self.position.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn boid_at(x: f32, y: f32, heading: f32) -> Boid {
        Boid::new(pt2(x, y), heading, rgb(255, 255, 255))
    }

    #[test]
    fn radii_scale_with_size() {
        let boid = boid_at(0.0, 0.0, 0.0);
        assert_eq!(boid.cohesion_radius(), 140.0);
        assert_eq!(boid.alignment_radius(), 90.0);
        assert_eq!(boid.separation_radius(), 30.0);

        let small = boid.with_size(2);
        assert_eq!(small.cohesion_radius(), 28.0);
        assert_eq!(small.separation_radius(), 6.0);
    }

    #[test]
    fn advance_moves_up_for_zero_heading() {
        let mut boid = boid_at(100.0, 100.0, 0.0);
        boid.advance(0.5, WorldBounds::new(800.0, 600.0));
        assert!((boid.position.x - 100.0).abs() < EPS);
        assert!((boid.position.y - 0.0).abs() < EPS);
    }

    #[test]
    fn advance_turns_clockwise_for_positive_heading() {
        let mut boid = boid_at(100.0, 100.0, 90.0);
        boid.advance(0.1, WorldBounds::new(800.0, 600.0));
        assert!((boid.position.x - 120.0).abs() < EPS);
        assert!((boid.position.y - 100.0).abs() < EPS);
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut boid = boid_at(12.5, 40.0, 33.0);
        boid.advance(0.0, WorldBounds::new(800.0, 600.0));
        assert_eq!(boid.position, pt2(12.5, 40.0));
    }

    #[test]
    fn wrap_edges_follows_boundary_rules() {
        let bounds = WorldBounds::new(800.0, 600.0);

        let mut below = boid_at(-1.0, 300.0, 0.0);
        below.wrap_edges(bounds);
        assert_eq!(below.position.x, 800.0);

        let mut above = boid_at(801.0, 300.0, 0.0);
        above.wrap_edges(bounds);
        assert_eq!(above.position.x, 0.0);

        let mut on_edge = boid_at(800.0, 600.0, 0.0);
        on_edge.wrap_edges(bounds);
        assert_eq!(on_edge.position, pt2(800.0, 600.0));

        let mut top = boid_at(10.0, -0.5, 0.0);
        top.wrap_edges(bounds);
        assert_eq!(top.position.y, 600.0);
    }

    #[test]
    fn zero_bounds_collapse_to_origin() {
        let mut boid = boid_at(5.0, 5.0, 0.0);
        boid.wrap_edges(WorldBounds::new(0.0, 0.0));
        assert_eq!(boid.position, pt2(0.0, 0.0));
    }
}
