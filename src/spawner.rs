/*
 * Spawner Module
 *
 * Builds random populations: whole-pixel positions anywhere inside the
 * world (edges included), whole-degree headings in [-180, 179] and muted
 * random colors. Passing a seed makes the population reproducible.
 */

use nannou::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::boid::{Boid, WorldBounds};
use crate::params::SimulationParams;

const HEADING_RANGE: std::ops::RangeInclusive<i32> = -180..=179;
const COLOR_CHANNEL_RANGE: std::ops::RangeInclusive<u8> = 50..=255;

pub fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

pub fn random_boid<R: Rng + ?Sized>(rng: &mut R, params: &SimulationParams, bounds: WorldBounds) -> Boid {
    let max_x = bounds.width.max(0.0) as u32;
    let max_y = bounds.height.max(0.0) as u32;

    let position = pt2(
        rng.gen_range(0..=max_x) as f32,
        rng.gen_range(0..=max_y) as f32,
    );
    let heading = rng.gen_range(HEADING_RANGE) as f32;
    let color = rgb(
        rng.gen_range(COLOR_CHANNEL_RANGE),
        rng.gen_range(COLOR_CHANNEL_RANGE),
        rng.gen_range(COLOR_CHANNEL_RANGE),
    );

    Boid::new(position, heading, color)
        .with_size(params.boid_size)
        .with_speed(params.move_speed)
        .with_factors(params.radius_factors)
}

pub fn random_boids<R: Rng + ?Sized>(
    rng: &mut R,
    params: &SimulationParams,
    bounds: WorldBounds,
) -> Vec<Boid> {
    (0..params.num_boids)
        .map(|_| random_boid(rng, params, bounds))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_respects_ranges() {
        let params = SimulationParams::default();
        let bounds = WorldBounds::new(800.0, 600.0);
        let mut rng = make_rng(Some(7));
        let boids = random_boids(&mut rng, &params, bounds);

        assert_eq!(boids.len(), params.num_boids);
        for boid in &boids {
            assert!((0.0..=800.0).contains(&boid.position.x));
            assert!((0.0..=600.0).contains(&boid.position.y));
            assert!((-180.0..=179.0).contains(&boid.heading));
            assert_eq!(boid.heading.fract(), 0.0);
            assert!(boid.color.red >= 50 && boid.color.green >= 50 && boid.color.blue >= 50);
            assert_eq!(boid.size, params.boid_size);
        }
    }

    #[test]
    fn same_seed_same_population() {
        let params = SimulationParams::default();
        let bounds = WorldBounds::new(320.0, 240.0);
        let a = random_boids(&mut make_rng(Some(42)), &params, bounds);
        let b = random_boids(&mut make_rng(Some(42)), &params, bounds);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_bounds_spawn_at_origin() {
        let params = SimulationParams::default();
        let boids = random_boids(&mut make_rng(Some(1)), &params, WorldBounds::new(0.0, 0.0));
        assert!(boids.iter().all(|b| b.position == pt2(0.0, 0.0)));
    }
}
