/*
 * Renderer Module
 *
 * This module handles the rendering of the boid simulation. The flock lives
 * in y-down world space with the origin in the top-left corner of the window,
 * so every position is mapped into nannou's centered, y-up screen space first.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::geometry::{deg_to_rad, heading_vector};

const COHESION_ALPHA: u8 = 32;
const ALIGNMENT_ALPHA: u8 = 48;
const SEPARATION_ALPHA: u8 = 48;
const BODY_SIDES: usize = 6;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();

    if model.params.show_radii {
        for boid in model.flock.boids() {
            draw_radii(&draw, boid, window_rect);
        }
    }

    for boid in model.flock.boids() {
        draw_body(&draw, boid, window_rect);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to draw ui: {:?}", err);
    }
}

// Convert a point from world space to screen space
pub fn world_to_screen(point: Point2, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + point.x, window_rect.top() - point.y)
}

fn draw_radii(draw: &Draw, boid: &Boid, window_rect: Rect) {
    let center = world_to_screen(boid.position, window_rect);
    let tiers = [
        (boid.cohesion_radius(), COHESION_ALPHA),
        (boid.alignment_radius(), ALIGNMENT_ALPHA),
        (boid.separation_radius(), SEPARATION_ALPHA),
    ];

    for (radius, alpha) in tiers {
        draw.ellipse()
            .xy(center)
            .radius(radius)
            .color(rgba(boid.color.red, boid.color.green, boid.color.blue, alpha));
    }
}

fn draw_body(draw: &Draw, boid: &Boid, window_rect: Rect) {
    let center = world_to_screen(boid.position, window_rect);
    let size = boid.size as f32;

    // Hexagon with a vertex pointing up, turned clockwise by the heading
    let points = (0..BODY_SIDES).map(|i| {
        let angle = i as f32 * std::f32::consts::TAU / BODY_SIDES as f32;
        pt2(size * angle.sin(), size * angle.cos())
    });
    draw.polygon()
        .color(boid.color)
        .points(points)
        .xy(center)
        .rotate(-deg_to_rad(boid.heading));

    // Direction indicator: flip the y-down heading vector into screen space
    let direction = heading_vector(boid.heading);
    let tip = center + vec2(direction.x, -direction.y) * (size * 2.0);
    draw.line()
        .start(center)
        .end(tip)
        .weight(size / 4.0)
        .color(boid.color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_origin_maps_to_top_left() {
        let window_rect = Rect::from_w_h(800.0, 600.0);
        assert_eq!(world_to_screen(pt2(0.0, 0.0), window_rect), pt2(-400.0, 300.0));
        assert_eq!(world_to_screen(pt2(800.0, 600.0), window_rect), pt2(400.0, -300.0));
        assert_eq!(world_to_screen(pt2(400.0, 300.0), window_rect), pt2(0.0, 0.0));
    }
}
