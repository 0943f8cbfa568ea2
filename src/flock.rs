/*
 * Flock Module
 *
 * The Flock owns the boid population and runs one simulation tick at a time.
 *
 * Two update orders are supported:
 * - InPlace: boids are processed in index order and mutated as we go, so a
 *   boid later in the list already sees the new state of earlier boids.
 *   This is the classic behaviour and the default.
 * - DoubleBuffered: every boid moves first, then all headings are computed
 *   from a frozen copy of the moved population. The result does not depend
 *   on the order of the boids.
 */

use std::fmt;

use crate::boid::{Boid, WorldBounds};
use crate::error::FlockError;
use crate::neighbors::Tiers;
use crate::steering::{steer, SteeringDecision};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateOrder {
    #[default]
    InPlace,
    DoubleBuffered,
}

impl fmt::Display for UpdateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateOrder::InPlace => write!(f, "in-place"),
            UpdateOrder::DoubleBuffered => write!(f, "double-buffered"),
        }
    }
}

// How many boids took each steering branch during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub held: usize,
    pub separated: usize,
    pub aligned: usize,
    pub cohered: usize,
}

impl TickSummary {
    fn record(&mut self, decision: SteeringDecision) {
        match decision {
            SteeringDecision::Hold => self.held += 1,
            SteeringDecision::Separate(_) => self.separated += 1,
            SteeringDecision::Align(_) => self.aligned += 1,
            SteeringDecision::Cohere(_) => self.cohered += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.held + self.separated + self.aligned + self.cohered
    }
}

pub struct Flock {
    boids: Vec<Boid>,
    update_order: UpdateOrder,
}

impl Flock {
    pub fn new(boids: Vec<Boid>) -> Self {
        Self::with_order(boids, UpdateOrder::default())
    }

    pub fn with_order(boids: Vec<Boid>, update_order: UpdateOrder) -> Self {
        Self {
            boids,
            update_order,
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn update_order(&self) -> UpdateOrder {
        self.update_order
    }

    pub fn set_update_order(&mut self, update_order: UpdateOrder) {
        self.update_order = update_order;
    }

    // Swap in a whole new population; the next tick works on it
    pub fn reset(&mut self, boids: Vec<Boid>) {
        self.boids = boids;
    }

    /// Advance every boid by `dt` seconds and let it pick a new heading.
    ///
    /// Rejects a negative or non-finite `dt` and invalid bounds before
    /// touching any boid.
    pub fn tick(&mut self, dt: f32, bounds: WorldBounds) -> Result<TickSummary, FlockError> {
        validate_time_step(dt)?;
        validate_bounds(bounds)?;

        let summary = match self.update_order {
            UpdateOrder::InPlace => self.tick_in_place(dt, bounds),
            UpdateOrder::DoubleBuffered => self.tick_double_buffered(dt, bounds),
        };

        Ok(summary)
    }

    fn tick_in_place(&mut self, dt: f32, bounds: WorldBounds) -> TickSummary {
        let mut summary = TickSummary::default();

        for i in 0..self.boids.len() {
            self.boids[i].advance(dt, bounds);

            let decision = {
                let boid = &self.boids[i];
                let tiers = Tiers::classify(boid, &self.boids);
                steer(boid, &tiers)
            };

            if let Some(heading) = decision.heading() {
                self.boids[i].heading = heading;
            }
            summary.record(decision);
        }

        summary
    }

    fn tick_double_buffered(&mut self, dt: f32, bounds: WorldBounds) -> TickSummary {
        let mut summary = TickSummary::default();

        for boid in &mut self.boids {
            boid.advance(dt, bounds);
        }

        let snapshot = self.boids.clone();
        for (boid, frozen) in self.boids.iter_mut().zip(&snapshot) {
            let tiers = Tiers::classify(frozen, &snapshot);
            let decision = steer(frozen, &tiers);

            if let Some(heading) = decision.heading() {
                boid.heading = heading;
            }
            summary.record(decision);
        }

        summary
    }
}

fn validate_time_step(dt: f32) -> Result<(), FlockError> {
    if !dt.is_finite() {
        return Err(FlockError::NonFiniteTimeStep { dt });
    }
    if dt < 0.0 {
        return Err(FlockError::NegativeTimeStep { dt });
    }
    Ok(())
}

fn validate_bounds(bounds: WorldBounds) -> Result<(), FlockError> {
    let valid = |v: f32| v.is_finite() && v >= 0.0;
    if valid(bounds.width) && valid(bounds.height) {
        Ok(())
    } else {
        Err(FlockError::InvalidWorldBounds {
            width: bounds.width,
            height: bounds.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;

    fn boid(x: f32, y: f32, heading: f32) -> Boid {
        Boid::new(pt2(x, y), heading, rgb(128, 128, 128))
    }

    fn bounds() -> WorldBounds {
        WorldBounds::new(800.0, 600.0)
    }

    #[test]
    fn negative_dt_is_rejected_without_mutation() {
        let mut flock = Flock::new(vec![boid(10.0, 10.0, 0.0), boid(20.0, 10.0, 90.0)]);
        let before = flock.boids().to_vec();

        let err = flock.tick(-0.1, bounds()).unwrap_err();
        assert_eq!(err, FlockError::NegativeTimeStep { dt: -0.1 });
        assert_eq!(flock.boids(), &before[..]);
    }

    #[test]
    fn nan_dt_is_rejected() {
        let mut flock = Flock::new(vec![boid(10.0, 10.0, 0.0)]);
        assert!(matches!(
            flock.tick(f32::NAN, bounds()),
            Err(FlockError::NonFiniteTimeStep { .. })
        ));
    }

    #[test]
    fn negative_bounds_are_rejected() {
        let mut flock = Flock::new(vec![boid(10.0, 10.0, 0.0)]);
        let result = flock.tick(0.1, WorldBounds::new(-1.0, 600.0));
        assert!(matches!(result, Err(FlockError::InvalidWorldBounds { .. })));
    }

    #[test]
    fn summary_counts_every_boid() {
        let mut flock = Flock::new(vec![
            boid(100.0, 100.0, 10.0),
            boid(140.0, 100.0, 20.0),
            boid(700.0, 500.0, 30.0),
        ]);
        let summary = flock.tick(0.0, bounds()).unwrap();
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.held, 1);
        assert_eq!(summary.aligned, 2);
    }

    #[test]
    fn in_place_later_boids_see_earlier_updates() {
        let mut flock = Flock::new(vec![
            boid(100.0, 100.0, 10.0),
            boid(140.0, 100.0, 20.0),
            boid(180.0, 100.0, 30.0),
        ]);
        flock.tick(0.0, bounds()).unwrap();

        let headings: Vec<f32> = flock.boids().iter().map(|b| b.heading).collect();
        assert!((headings[0] - 20.0).abs() < 1e-3);
        // sees 20 (already updated), 20 and 30
        assert!((headings[1] - 70.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn double_buffered_uses_frozen_headings() {
        let mut flock = Flock::with_order(
            vec![
                boid(100.0, 100.0, 10.0),
                boid(140.0, 100.0, 20.0),
                boid(180.0, 100.0, 30.0),
            ],
            UpdateOrder::DoubleBuffered,
        );
        flock.tick(0.0, bounds()).unwrap();

        for boid in flock.boids() {
            assert!((boid.heading - 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn reset_replaces_population() {
        let mut flock = Flock::new(vec![boid(1.0, 1.0, 0.0)]);
        flock.reset(vec![boid(2.0, 2.0, 0.0), boid(3.0, 3.0, 0.0)]);
        assert_eq!(flock.len(), 2);
        assert_eq!(flock.boids()[0].position, pt2(2.0, 2.0));
    }

    #[test]
    fn empty_flock_ticks_quietly() {
        let mut flock = Flock::new(Vec::new());
        assert!(flock.is_empty());
        assert_eq!(flock.tick(0.1, bounds()).unwrap(), TickSummary::default());
    }
}
