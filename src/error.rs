/*
 * Error Module
 *
 * Precondition violations reported by the flock and by parameter validation.
 * Degenerate but well-formed input (zero-sized world, a single boid) is not
 * an error.
 */

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FlockError {
    NegativeTimeStep { dt: f32 },
    NonFiniteTimeStep { dt: f32 },
    InvalidWorldBounds { width: f32, height: f32 },
    InvalidParams { field: &'static str, reason: String },
}

impl fmt::Display for FlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlockError::NegativeTimeStep { dt } => {
                write!(f, "time step must not be negative, got {}", dt)
            }
            FlockError::NonFiniteTimeStep { dt } => {
                write!(f, "time step must be finite, got {}", dt)
            }
            FlockError::InvalidWorldBounds { width, height } => write!(
                f,
                "world bounds must be finite and non-negative, got {}x{}",
                width, height
            ),
            FlockError::InvalidParams { field, reason } => {
                write!(f, "invalid parameter `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for FlockError {}
