/*
 * Steering Module
 *
 * Picks a boid's new heading from its tiers, by strict priority:
 * 1. Alone in the cohesion tier: keep the current heading
 * 2. Someone within separation range: flee their center of mass
 * 3. Someone within alignment range: take the mean heading
 * 4. Otherwise: head for the cohesion center of mass
 */

use crate::boid::Boid;
use crate::geometry::bearing;
use crate::neighbors::{center_of_mass, Tiers};

// atan2 measures from +X while headings measure from "up"
const HEADING_OFFSET: f32 = 90.0;
const FLEE_OFFSET: f32 = 180.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SteeringDecision {
    Hold,
    Separate(f32),
    Align(f32),
    Cohere(f32),
}

impl SteeringDecision {
    // New heading, or None when the boid keeps its own
    pub fn heading(self) -> Option<f32> {
        match self {
            SteeringDecision::Hold => None,
            SteeringDecision::Separate(heading)
            | SteeringDecision::Align(heading)
            | SteeringDecision::Cohere(heading) => Some(heading),
        }
    }
}

pub fn steer(boid: &Boid, tiers: &Tiers) -> SteeringDecision {
    if tiers.cohesion.len() <= 1 {
        return SteeringDecision::Hold;
    }

    if tiers.separation.len() > 1 {
        if let Some(center) = center_of_mass(&tiers.separation) {
            return SteeringDecision::Separate(
                bearing(boid.position, center) + HEADING_OFFSET + FLEE_OFFSET,
            );
        }
    }

    if tiers.alignment.len() > 1 {
        return SteeringDecision::Align(average_heading(&tiers.alignment));
    }

    match center_of_mass(&tiers.cohesion) {
        Some(center) => SteeringDecision::Cohere(bearing(boid.position, center) + HEADING_OFFSET),
        None => SteeringDecision::Hold,
    }
}

// Linear mean of raw headings, accumulated as heading / count. Not a circular
// mean: 170 and -170 average to 0.
fn average_heading(boids: &[&Boid]) -> f32 {
    let count = boids.len() as f32;
    boids
        .iter()
        .fold(0.0, |total, boid| total + boid.heading / count)
}
