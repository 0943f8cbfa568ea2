/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the boid simulation. They come from the command
 * line at startup and can be edited through the UI afterwards. Population
 * settings only take effect when the flock is regenerated.
 */

use crate::boid::{RadiusFactors, WorldBounds, DEFAULT_BOID_SIZE, DEFAULT_MOVE_SPEED};
use crate::error::FlockError;
use crate::flock::UpdateOrder;

pub const DEFAULT_NUM_BOIDS: usize = 40;
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub boid_size: u32,
    pub move_speed: f32,
    pub radius_factors: RadiusFactors,
    pub update_order: UpdateOrder,
    pub seed: Option<u64>,
    pub window_width: u32,
    pub window_height: u32,
    pub show_radii: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Debug, PartialEq)]
struct ParamSnapshot {
    num_boids: usize,
    boid_size: u32,
    move_speed: f32,
    radius_factors: RadiusFactors,
    update_order: UpdateOrder,
    show_radii: bool,
    pause_simulation: bool,
}

// What changed since the last snapshot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub population_changed: bool,
    pub update_order_changed: bool,
    pub any_changed: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: DEFAULT_NUM_BOIDS,
            boid_size: DEFAULT_BOID_SIZE,
            move_speed: DEFAULT_MOVE_SPEED,
            radius_factors: RadiusFactors::default(),
            update_order: UpdateOrder::default(),
            seed: None,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            show_radii: true,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    pub fn world_bounds(&self) -> WorldBounds {
        WorldBounds::new(self.window_width as f32, self.window_height as f32)
    }

    /// Checks the values a flock cannot be built from.
    ///
    /// An empty population is allowed. The radius factor ordering
    /// (cohesion >= alignment >= separation) is not enforced.
    pub fn validate(&self) -> Result<(), FlockError> {
        if self.boid_size == 0 {
            return Err(invalid("boid_size", "must be positive"));
        }
        if !(self.move_speed.is_finite() && self.move_speed > 0.0) {
            return Err(invalid(
                "move_speed",
                format!("must be positive and finite, got {}", self.move_speed),
            ));
        }
        let factors = self.radius_factors;
        if factors.cohesion == 0 || factors.alignment == 0 || factors.separation == 0 {
            return Err(invalid("radius_factors", "every factor must be positive"));
        }
        let largest = factors.cohesion.max(factors.alignment).max(factors.separation);
        if self.boid_size.checked_mul(largest).is_none() {
            return Err(invalid("radius_factors", "radius overflows"));
        }
        Ok(())
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_boids: self.num_boids,
            boid_size: self.boid_size,
            move_speed: self.move_speed,
            radius_factors: self.radius_factors,
            update_order: self.update_order,
            show_radii: self.show_radii,
            pause_simulation: self.pause_simulation,
        });
    }

    // Compare against the last snapshot. Without one nothing has changed.
    pub fn detect_changes(&self) -> ParamChanges {
        let mut changes = ParamChanges::default();

        if let Some(prev) = &self.previous_values {
            changes.population_changed = self.num_boids != prev.num_boids
                || self.boid_size != prev.boid_size
                || self.move_speed != prev.move_speed
                || self.radius_factors != prev.radius_factors;
            changes.update_order_changed = self.update_order != prev.update_order;
            changes.any_changed = changes.population_changed
                || changes.update_order_changed
                || self.show_radii != prev.show_radii
                || self.pause_simulation != prev.pause_simulation;
        }

        changes
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        1..=400
    }

    pub fn get_boid_size_range() -> std::ops::RangeInclusive<u32> {
        2..=30
    }

    pub fn get_move_speed_range() -> std::ops::RangeInclusive<f32> {
        10.0..=600.0
    }

    pub fn get_factor_range() -> std::ops::RangeInclusive<u32> {
        1..=30
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> FlockError {
    FlockError::InvalidParams {
        field,
        reason: reason.into(),
    }
}
