//! Frame building for the driving demo
//!
//! Turns a `SessionState` into triangles and HUD text. Nothing here touches a
//! window; the platform layer draws whatever `build_frame` returns.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::sim::SessionState;

/// Track outline thickness (pixels)
pub const TRACK_LINE_WIDTH: f32 = 2.0;
/// HUD font size (pixels)
pub const HUD_FONT_SIZE: f32 = 36.0;

/// One line of overlay text, positioned by its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: [f32; 4],
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear: [f32; 4],
    pub triangles: Vec<Vertex>,
    pub hud: Vec<HudLine>,
}

/// Seconds with two decimals, e.g. `3.25s`
pub fn format_secs(secs: f32) -> String {
    format!("{:.2}s", secs)
}

/// HUD text lines: current run time, then best time once one exists
pub fn hud_lines(state: &SessionState) -> Vec<HudLine> {
    let line = |text: String, y: f32| HudLine {
        text,
        pos: Vec2::new(10.0, y),
        size: HUD_FONT_SIZE,
        color: colors::HUD_TEXT,
    };

    let mut lines = vec![line(
        format!("Time: {}", format_secs(state.elapsed_secs())),
        10.0,
    )];
    if let Some(best) = state.best_secs() {
        lines.push(line(format!("Best: {}", format_secs(best)), 50.0));
    }
    lines
}

/// Build the frame for the current state (back to front)
pub fn build_frame(state: &SessionState) -> Frame {
    let track = &state.track;
    let mut triangles = Vec::new();

    triangles.extend(shapes::polygon_outline(
        &track.outer,
        TRACK_LINE_WIDTH,
        colors::TRACK_EDGE,
    ));
    triangles.extend(shapes::polygon_outline(
        &track.inner,
        TRACK_LINE_WIDTH,
        colors::TRACK_EDGE,
    ));
    for obstacle in &track.obstacles {
        triangles.extend(shapes::rect(&obstacle.rect, colors::OBSTACLE));
    }
    triangles.extend(shapes::car_sprite(&state.car));

    Frame {
        clear: colors::BACKGROUND,
        triangles,
        hud: hud_lines(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::RacerSettings;
    use crate::sim::Track;

    #[test]
    fn test_format_secs() {
        assert_eq!(format_secs(0.0), "0.00s");
        assert_eq!(format_secs(12.345), "12.35s");
    }

    #[test]
    fn test_hud_hides_best_until_set() {
        let mut state = SessionState::with_track(0, Track::empty(), &RacerSettings::default());
        state.run_ticks = 90;
        let hud = hud_lines(&state);
        assert_eq!(hud.len(), 1);
        assert_eq!(hud[0].text, "Time: 1.50s");

        state.restart();
        let hud = hud_lines(&state);
        assert_eq!(hud.len(), 2);
        assert_eq!(hud[0].text, "Time: 0.00s");
        assert_eq!(hud[1].text, "Best: 1.50s");
        assert_eq!(hud[1].pos, Vec2::new(10.0, 50.0));
    }

    #[test]
    fn test_frame_triangle_count() {
        let state = SessionState::new(3, &RacerSettings::default());
        let frame = build_frame(&state);
        // 10 + 8 outline edges, one quad per obstacle, four car parts
        let quads = 10 + 8 + state.track.obstacles.len() + 4;
        assert_eq!(frame.triangles.len(), quads * 6);
        assert_eq!(frame.clear, colors::BACKGROUND);
    }
}
