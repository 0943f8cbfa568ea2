/*
 * Boid Flocking Simulation
 *
 * Every boid moves straight ahead and, once per frame, picks a new heading
 * from the boids around it:
 * 1. Separation: flee the center of any boids that are too close
 * 2. Alignment: otherwise match the average heading of nearby boids
 * 3. Cohesion: otherwise head for the center of the wider neighborhood
 *
 * Keys: R regenerates the flock, D toggles the radii, Space pauses.
 * Set RUST_LOG to change the log level (default: info).
 */

use clap::Parser;

use tiered_boids::app;
use tiered_boids::cli::Args;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = match Args::parse().into_params() {
        Ok(params) => params,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(2);
        }
    };
    app::set_startup_params(params);

    nannou::app(app::model)
        .update(app::update)
        .run();
}
