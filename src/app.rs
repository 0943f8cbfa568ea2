/*
 * Application Module
 *
 * This module defines the main application model and logic for the boid
 * simulation. It wires the flock to a nannou window: each frame the elapsed
 * time is fed to one flock tick using the current window size as the world
 * bounds, and the egui panel can regenerate or reconfigure the flock.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;
use rand_chacha::ChaCha8Rng;

use crate::boid::WorldBounds;
use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::params::SimulationParams;
use crate::spawner::{make_rng, random_boids};
use crate::{input, renderer, ui};

static STARTUP_PARAMS: OnceLock<SimulationParams> = OnceLock::new();

// Parameters for the window built by `model`; the first call wins
pub fn set_startup_params(params: SimulationParams) {
    if STARTUP_PARAMS.set(params).is_err() {
        log::warn!("startup parameters already set, ignoring");
    }
}

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub bounds: WorldBounds,
    rng: ChaCha8Rng,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = STARTUP_PARAMS.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title("Boids")
        .size(params.window_width, params.window_height)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .resized(input::resized)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to build window");

    let window = app.window(window_id).expect("window vanished right after creation");
    let egui = Egui::from_window(&window);
    let rect = window.rect();
    let bounds = WorldBounds::new(rect.w(), rect.h());

    let mut rng = make_rng(params.seed);
    let boids = random_boids(&mut rng, &params, bounds);
    log::info!(
        "spawned {} boids in {:.0}x{:.0} ({} updates)",
        boids.len(),
        bounds.width,
        bounds.height,
        params.update_order
    );

    Model {
        flock: Flock::with_order(boids, params.update_order),
        params,
        egui,
        debug_info: DebugInfo::default(),
        bounds,
        rng,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let (should_reset_boids, changes) = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if changes.update_order_changed {
        log::info!("switching to {} updates", model.params.update_order);
        model.flock.set_update_order(model.params.update_order);
    }

    if should_reset_boids || changes.population_changed {
        reset_boids(model);
    }

    if model.params.pause_simulation {
        return;
    }

    match model.flock.tick(update.since_last.as_secs_f32(), model.bounds) {
        Ok(summary) => {
            log::trace!("tick {}: {:?}", model.debug_info.ticks, summary);
            model.debug_info.record_tick(summary);
        }
        Err(err) => log::error!("skipping tick: {}", err),
    }
}

// Replace the whole flock with a fresh random population
pub fn reset_boids(model: &mut Model) {
    if let Err(err) = model.params.validate() {
        log::warn!("not regenerating flock: {}", err);
        return;
    }

    let boids = random_boids(&mut model.rng, &model.params, model.bounds);
    log::info!("regenerated flock of {} boids", boids.len());
    model.flock.reset(boids);
}
