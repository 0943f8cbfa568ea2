/*
 * Input Module
 *
 * This module handles window events for the boid simulation:
 * - R regenerates the flock
 * - D toggles the radius overlay
 * - Space pauses and resumes
 * - Resizing the window changes the world bounds for the following ticks
 */

use nannou::prelude::*;

use crate::app::{reset_boids, Model};
use crate::boid::WorldBounds;

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Keys typed into the panel belong to egui
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::R => reset_boids(model),
        Key::D => model.params.show_radii = !model.params.show_radii,
        Key::Space => model.params.pause_simulation = !model.params.pause_simulation,
        _ => {}
    }
}

pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.bounds = WorldBounds::new(size.x.max(0.0), size.y.max(0.0));
    log::debug!("world bounds now {:.0}x{:.0}", model.bounds.width, model.bounds.height);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
