/*
 * UI Module
 *
 * This module contains the egui control panel for the simulation. Population
 * settings (count, size, speed, radius factors) are applied when the flock is
 * regenerated; the update order and the toggles apply immediately.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::flock::UpdateOrder;
use crate::params::{ParamChanges, SimulationParams};

// Update the UI and return whether the flock should be regenerated plus what changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, ParamChanges) {
    let mut should_reset_boids = false;

    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Population", |ui| {
                ui.add(egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range()).text("Number of Boids"));
                ui.add(egui::Slider::new(&mut params.boid_size, SimulationParams::get_boid_size_range()).text("Boid Size"));
                ui.add(egui::Slider::new(&mut params.move_speed, SimulationParams::get_move_speed_range()).text("Move Speed"));

                if ui.button("Reset Boids (R)").clicked() {
                    should_reset_boids = true;
                }
            });

            ui.collapsing("Radius Factors", |ui| {
                ui.add(egui::Slider::new(&mut params.radius_factors.cohesion, SimulationParams::get_factor_range()).text("Cohesion"));
                ui.add(egui::Slider::new(&mut params.radius_factors.alignment, SimulationParams::get_factor_range()).text("Alignment"));
                ui.add(egui::Slider::new(&mut params.radius_factors.separation, SimulationParams::get_factor_range()).text("Separation"));
            });

            egui::ComboBox::from_label("Update Order")
                .selected_text(params.update_order.to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut params.update_order, UpdateOrder::InPlace, "in-place");
                    ui.selectable_value(&mut params.update_order, UpdateOrder::DoubleBuffered, "double-buffered");
                });

            ui.separator();

            let summary = debug_info.last_summary;
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
            ui.label(format!("Ticks: {}", debug_info.ticks));
            ui.label(format!(
                "Hold {} / Separate {} / Align {} / Cohere {}",
                summary.held, summary.separated, summary.aligned, summary.cohered
            ));

            ui.checkbox(&mut params.show_radii, "Show Radii (D)");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation (Space)");
        });

    (should_reset_boids, params.detect_changes())
}
