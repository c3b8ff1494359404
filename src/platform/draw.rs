//! Draw a built `Frame` with macroquad

use macroquad::prelude::{Color, clear_background, draw_text, draw_triangle, measure_text, vec2};

use crate::renderer::{Frame, Vertex};

fn color(c: [f32; 4]) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

fn point(v: &Vertex) -> macroquad::prelude::Vec2 {
    vec2(v.position[0], v.position[1])
}

/// Clear the screen and draw the frame's triangles, then its HUD text
pub fn draw_frame(frame: &Frame) {
    clear_background(color(frame.clear));

    for tri in frame.triangles.chunks_exact(3) {
        draw_triangle(point(&tri[0]), point(&tri[1]), point(&tri[2]), color(tri[0].color));
    }

    for line in &frame.hud {
        // draw_text positions by baseline; HUD lines are placed by top-left
        let dims = measure_text(&line.text, None, line.size as u16, 1.0);
        draw_text(
            &line.text,
            line.pos.x,
            line.pos.y + dims.offset_y,
            line.size,
            color(line.color),
        );
    }
}
