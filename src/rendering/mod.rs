use macroquad::prelude::*;
use crate::application::Session;
use crate::domain::{AutomatonKind, Buffer, Cell, Grid, Lattice, Neighborhood, is_up_triangle};

pub const PANEL_WIDTH: f32 = 240.0;

/// Format large numbers with K/M/B suffixes
pub fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

const BACKGROUND: Color = Color::new(0.06, 0.06, 0.06, 1.0);

/// Palette entry to screen color
pub fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Dead => BACKGROUND,
        Cell::Alive => Color::from_rgba(0, 255, 150, 255),
        Cell::EastCar => Color::from_rgba(230, 60, 60, 255),
        Cell::NorthCar => Color::from_rgba(60, 120, 240, 255),
        Cell::Cyclic(state) => match state % 4 {
            0 => Color::from_rgba(20, 20, 60, 255),
            1 => Color::from_rgba(90, 40, 160, 255),
            2 => Color::from_rgba(230, 120, 40, 255),
            _ => Color::from_rgba(250, 230, 120, 255),
        },
    }
}

/// Screen size needed to show a grid plus the panel
pub fn window_size(grid_width: usize, grid_height: usize, cell_pixels: f32) -> (f32, f32) {
    (
        (grid_width as f32 + 1.0) * cell_pixels + PANEL_WIDTH,
        grid_height as f32 * cell_pixels,
    )
}

/// Draw the displayed buffer with the geometry of its lattice.
/// Background cells are skipped; the area is cleared first.
pub fn draw_grid(grid: &Grid, lattice: Lattice, cell_pixels: f32) {
    let (width, height) = grid.dimensions();
    let s = cell_pixels;
    let area_width = match lattice {
        Lattice::Square => width as f32 * s,
        Lattice::Hexagonal => (width as f32 + 0.5) * s,
        // Triangles overlap by half a base
        Lattice::Triangular => (width as f32 + 1.0) * s / 2.0,
    };
    draw_rectangle(0.0, 0.0, area_width, height as f32 * s, BACKGROUND);

    for (x, y, cell) in grid.iter_cells() {
        if cell == Cell::Dead {
            continue;
        }
        let color = cell_color(cell);
        let (fx, fy) = (x as f32, y as f32);
        match lattice {
            Lattice::Square => draw_rectangle(fx * s, fy * s, s, s, color),
            Lattice::Hexagonal => {
                // Odd rows sit half a cell to the right
                let shift = if y % 2 == 1 { s / 2.0 } else { 0.0 };
                draw_rectangle(fx * s + shift, fy * s, s, s, color);
            }
            Lattice::Triangular => {
                let half = s / 2.0;
                let (left, apex, right) = (fx * half, (fx + 1.0) * half, (fx + 2.0) * half);
                let (top, bottom) = (fy * s, (fy + 1.0) * s);
                if is_up_triangle(x, y) {
                    draw_triangle(vec2(left, bottom), vec2(right, bottom), vec2(apex, top), color);
                } else {
                    draw_triangle(vec2(left, top), vec2(right, top), vec2(apex, bottom), color);
                }
            }
        }
    }
}

/// Draw control panel background
fn draw_panel_background(px: f32) {
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Rule line shown for the current kind
fn rule_summary(session: &Session) -> Vec<String> {
    let engine = &session.engine;
    match engine.kind() {
        AutomatonKind::ElementaryCA => {
            let outputs: String = (0..8)
                .rev()
                .map(|i| if engine.rule_output(i).unwrap_or(false) { '1' } else { '0' })
                .collect();
            vec![
                format!("Rule {} ({})", engine.rule_number(), outputs),
                format!("Start: {}", engine.initial_state_type().name()),
            ]
        }
        AutomatonKind::BooleanSquare | AutomatonKind::BooleanHex | AutomatonKind::BooleanTriangular => {
            // Both threshold sets, the one in use marked
            let active = engine.active_rule_slots();
            [Neighborhood::VonNeumann, Neighborhood::Moore]
                .into_iter()
                .map(|nb| {
                    let counts: Vec<String> = (0..nb.slots())
                        .filter(|&i| engine.check_boolean_rule_value(nb, i).unwrap_or(false))
                        .map(|i| (i + 1).to_string())
                        .collect();
                    let marker = if nb == active { '>' } else { ' ' };
                    format!("{marker} {nb}: {}", counts.join(" "))
                })
                .collect()
        }
        AutomatonKind::LangtonAnt => vec![format!("Brush: {} px", engine.ant_num_pixels())],
        AutomatonKind::ConwayLife => {
            vec![format!("Seed: {}", session.seed().map_or("-", |s| s.name))]
        }
        AutomatonKind::BmlTraffic => vec![format!("Density: {}%", engine.bml_density())],
        AutomatonKind::CyclicCA => vec![format!("States: {}", engine.num_states())],
        AutomatonKind::LangtonHexAnt | AutomatonKind::MunchingSquares => Vec::new(),
    }
}

/// Draw the side panel: kind, rule, counters, status and key help
pub fn draw_controls(session: &Session, px: f32) {
    draw_panel_background(px);
    let x = px + 10.0;
    let kind = session.kind();
    let dim = Color::from_rgba(180, 180, 180, 255);

    draw_text_label(kind.name(), x, 25.0, 20.0, WHITE);
    draw_text_label(kind.description(), x, 42.0, 13.0, GRAY);

    let mut y = 70.0;
    for line in rule_summary(session) {
        draw_text_label(&line, x, y, 15.0, Color::from_rgba(0, 255, 150, 255));
        y += 18.0;
    }

    let (gw, gh) = session.surface.dimensions();
    let status = if session.engine.has_finished() {
        ("Finished", Color::from_rgba(100, 200, 255, 255))
    } else if session.is_running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };

    // Color code the step time
    let step_ms = session.last_step_time_ms;
    let perf_color = if step_ms < 5.0 {
        Color::from_rgba(0, 255, 0, 255)
    } else if step_ms < 33.0 {
        Color::from_rgba(255, 255, 0, 255)
    } else {
        Color::from_rgba(255, 0, 0, 255)
    };

    let labels = [
        (format!("Grid: {}x{}", gw, gh), 13.0, dim),
        (format!("Steps: {}", session.engine.num_steps()), 16.0, WHITE),
        (format!("Population: {}", format_number(session.engine.population())), 16.0, WHITE),
        (format!("Speed: {:.0} steps/s", session.updates_per_second), 14.0, dim),
        (format!("Step: {:.2}ms | FPS: {}", step_ms, get_fps()), 13.0, perf_color),
        (format!("{} stepping", session.engine.strategy().name()), 12.0, GRAY),
        (
            match session.surface.presented() {
                Buffer::Primary => "Showing current generation".to_string(),
                Buffer::Secondary => "Showing previous generation".to_string(),
            },
            12.0,
            GRAY,
        ),
        (status.0.to_string(), 16.0, status.1),
    ];
    y += 10.0;
    for (text, size, color) in labels.iter() {
        draw_text_label(text, x, y, *size, *color);
        y += size + 6.0;
    }

    if let Some(err) = &session.last_error {
        draw_text_label(&err.to_string(), x, y, 12.0, Color::from_rgba(255, 80, 80, 255));
    }

    let help = [
        "1-0: Kind",
        "Space: Play  Enter: Restart",
        "Q-I: Toggle rule slot",
        "N: Neighborhood  D: Default rule",
        "S: Start row  P: Life seed",
        "B: Previous generation",
        "Left/Right: Brush",
        "+/-: Density  [/]: States",
        "Up/Down: Speed",
    ];
    let mut hy = screen_height() - help.len() as f32 * 15.0 - 10.0;
    draw_text_label("Controls:", x, hy - 4.0, 14.0, WHITE);
    for line in help {
        hy += 15.0;
        draw_text_label(line, x, hy, 12.0, GRAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(49_152), "49.2K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }

    #[test]
    fn test_palette_distinguishes_states() {
        let colors: Vec<Color> = (0..4).map(|s| cell_color(Cell::Cyclic(s))).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_ne!(cell_color(Cell::EastCar), cell_color(Cell::NorthCar));
    }
}
