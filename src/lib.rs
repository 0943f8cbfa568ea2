/*
 * Boid Flocking Simulation - Module Definitions
 *
 * The flocking core (geometry, boid, neighbors, steering, flock) has no
 * window or UI dependencies beyond nannou's vector and color types. The
 * remaining modules make up the nannou application around it.
 */

// Re-export key components for easier access
pub use boid::{Boid, RadiusFactors, WorldBounds};
pub use error::FlockError;
pub use flock::{Flock, TickSummary, UpdateOrder};
pub use neighbors::{center_of_mass, flockmates, Tiers};
pub use params::SimulationParams;
pub use steering::{steer, SteeringDecision};

// Define modules
pub mod app;
pub mod boid;
pub mod cli;
pub mod debug;
pub mod error;
pub mod flock;
pub mod geometry;
pub mod input;
pub mod neighbors;
pub mod params;
pub mod renderer;
pub mod spawner;
pub mod steering;
pub mod ui;
