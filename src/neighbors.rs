/*
 * Neighbors Module
 *
 * Tiered neighbor classification. The cohesion tier is filtered out of the
 * whole flock, the alignment tier out of the cohesion tier and the separation
 * tier out of the alignment tier, so each tier is a subset of the previous one.
 * A boid always finds itself in every tier (distance 0).
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::geometry::distance_2d;

// Every candidate strictly closer than `radius` to `origin`, in candidate order
pub fn flockmates<'a, I>(origin: Point2, candidates: I, radius: f32) -> Vec<&'a Boid>
where
    I: IntoIterator<Item = &'a Boid>,
{
    candidates
        .into_iter()
        .filter(|other| distance_2d(origin, other.position) < radius)
        .collect()
}

/// Coordinate-wise mean of the members' positions, or `None` for an empty set.
///
/// Each member contributes `position / count`, so a single member yields its
/// own position exactly.
pub fn center_of_mass(boids: &[&Boid]) -> Option<Point2> {
    if boids.is_empty() {
        return None;
    }

    let count = boids.len() as f32;
    let center = boids.iter().fold(Point2::ZERO, |mut center, boid| {
        center.x += boid.position.x / count;
        center.y += boid.position.y / count;
        center
    });

    Some(center)
}

// The three flockmate sets of one boid
#[derive(Debug)]
pub struct Tiers<'a> {
    pub cohesion: Vec<&'a Boid>,
    pub alignment: Vec<&'a Boid>,
    pub separation: Vec<&'a Boid>,
}

impl<'a> Tiers<'a> {
    pub fn classify(boid: &Boid, flock: &'a [Boid]) -> Self {
        let cohesion = flockmates(boid.position, flock, boid.cohesion_radius());
        let alignment = flockmates(
            boid.position,
            cohesion.iter().copied(),
            boid.alignment_radius(),
        );
        let separation = flockmates(
            boid.position,
            alignment.iter().copied(),
            boid.separation_radius(),
        );

        Self {
            cohesion,
            alignment,
            separation,
        }
    }
}
