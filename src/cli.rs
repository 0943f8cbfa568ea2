/*
 * Command Line Module
 *
 * Optional overrides for the simulation parameters. Anything not given on
 * the command line keeps its default.
 */

use clap::{Parser, ValueEnum};

use crate::error::FlockError;
use crate::flock::UpdateOrder;
use crate::params::SimulationParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    InPlace,
    DoubleBuffered,
}

impl From<OrderArg> for UpdateOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::InPlace => UpdateOrder::InPlace,
            OrderArg::DoubleBuffered => UpdateOrder::DoubleBuffered,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tiered-boids", about = "Boid flocking with tiered neighbor radii")]
pub struct Args {
    /// Number of boids in the flock
    #[arg(short = 'n', long)]
    pub boids: Option<usize>,

    /// Boid size; every radius is a multiple of it
    #[arg(long)]
    pub size: Option<u32>,

    /// Movement speed in units per second
    #[arg(long)]
    pub speed: Option<f32>,

    #[arg(long)]
    pub cohesion_factor: Option<u32>,

    #[arg(long)]
    pub alignment_factor: Option<u32>,

    #[arg(long)]
    pub separation_factor: Option<u32>,

    /// How boids within one tick see each other's updates
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Seed for reproducible populations
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Start without the radius overlay
    #[arg(long)]
    pub hide_radii: bool,
}

impl Args {
    // Layer the given overrides on top of the defaults and validate the result
    pub fn into_params(self) -> Result<SimulationParams, FlockError> {
        let mut params = SimulationParams::default();

        if let Some(boids) = self.boids {
            params.num_boids = boids;
        }
        if let Some(size) = self.size {
            params.boid_size = size;
        }
        if let Some(speed) = self.speed {
            params.move_speed = speed;
        }
        if let Some(factor) = self.cohesion_factor {
            params.radius_factors.cohesion = factor;
        }
        if let Some(factor) = self.alignment_factor {
            params.radius_factors.alignment = factor;
        }
        if let Some(factor) = self.separation_factor {
            params.radius_factors.separation = factor;
        }
        if let Some(order) = self.order {
            params.update_order = order.into();
        }
        if let Some(width) = self.width {
            params.window_width = width;
        }
        if let Some(height) = self.height {
            params.window_height = height;
        }
        params.seed = self.seed;
        params.show_radii = !self.hide_radii;

        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_gives_defaults() {
        let params = Args::parse_from(["tiered-boids"]).into_params().unwrap();
        assert_eq!(params, SimulationParams::default());
    }

    #[test]
    fn overrides_are_applied() {
        let args = Args::parse_from([
            "tiered-boids",
            "-n",
            "12",
            "--size",
            "4",
            "--separation-factor",
            "2",
            "--order",
            "double-buffered",
            "--seed",
            "99",
            "--hide-radii",
        ]);
        let params = args.into_params().unwrap();

        assert_eq!(params.num_boids, 12);
        assert_eq!(params.boid_size, 4);
        assert_eq!(params.radius_factors.separation, 2);
        assert_eq!(params.radius_factors.cohesion, 14);
        assert_eq!(params.update_order, UpdateOrder::DoubleBuffered);
        assert_eq!(params.seed, Some(99));
        assert!(!params.show_radii);
    }

    #[test]
    fn invalid_overrides_are_reported() {
        let args = Args::parse_from(["tiered-boids", "--size", "0"]);
        assert!(args.into_params().is_err());
    }
}
