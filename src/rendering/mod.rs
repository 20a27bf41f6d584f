use macroquad::prelude::*;

use crate::application::SimulationSession;
use crate::ui::{self, Button};

pub const BACKGROUND: Color = Color::new(30.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0, 1.0);
pub const SHADOW: Color = Color::new(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0);

const HUD_BOX: (f32, f32, f32, f32) = (10.0, 10.0, 220.0, 140.0);
const HUD_FONT_SIZE: f32 = 28.0;
const HUD_SHADOW_OFFSET: f32 = 2.0;

/// One filled cell square, outlined with [`SHADOW`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
}

/// One line of status text, positioned by its top-left corner
#[derive(Clone, Debug, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Everything needed to draw one frame. Built without touching the window.
#[derive(Clone, Debug)]
pub struct Frame {
    pub cells: Vec<CellRect>,
    pub hud: Vec<HudLine>,
    pub buttons: [Button; 5],
}

/// Colour of a live cell, a gradient over its grid position
pub fn alive_color(row: usize, col: usize) -> Color {
    Color::from_rgba(
        (255 - (row * 5) % 256) as u8,
        (255 - (col * 5) % 256) as u8,
        ((row * col) % 256) as u8,
        255,
    )
}

/// Build the draw list for a session. Cells entirely outside the viewport
/// are culled.
pub fn describe(session: &SimulationSession) -> Frame {
    let viewport = &session.viewport;
    let size = viewport.cell_size() as f32;
    let (width, height) = (viewport.width as f32, viewport.height as f32);

    let cells = session
        .grid
        .iter_cells()
        .filter_map(|(row, col, cell)| {
            let (x, y) = viewport.cell_to_screen(row, col);
            let visible = x + size > 0.0 && x < width && y + size > 0.0 && y < height;
            visible.then(|| CellRect {
                x,
                y,
                size,
                color: if cell.is_alive() { alive_color(row, col) } else { BACKGROUND },
            })
        })
        .collect();

    let status = if session.paused { "Paused" } else { "Running" };
    let hud = [
        status.to_owned(),
        format!("Speed: {}", session.speed),
        format!("Generations: {}", session.generation),
        format!("Population: {}", session.grid.population()),
    ]
    .into_iter()
    .enumerate()
    .map(|(line, text)| HudLine {
        text,
        x: 10.0,
        y: 10.0 + line as f32 * 30.0,
    })
    .collect();

    Frame {
        cells,
        hud,
        buttons: ui::control_buttons(viewport.height),
    }
}

/// Paint a frame onto the macroquad window
pub fn paint(frame: &Frame) {
    clear_background(BACKGROUND);

    for cell in &frame.cells {
        draw_rectangle(cell.x, cell.y, cell.size, cell.size, cell.color);
        draw_rectangle_lines(cell.x, cell.y, cell.size, cell.size, 1.0, SHADOW);
    }

    draw_hud(&frame.hud);
    frame.buttons.iter().for_each(Button::draw);
}

fn draw_hud(lines: &[HudLine]) {
    let (x, y, w, h) = HUD_BOX;
    draw_rectangle(x, y, w, h, BLACK);

    // Text is placed by baseline in macroquad, HUD lines by top edge
    let baseline = HUD_FONT_SIZE * 0.75;
    for line in lines {
        draw_text(
            &line.text,
            line.x + HUD_SHADOW_OFFSET,
            line.y + baseline + HUD_SHADOW_OFFSET,
            HUD_FONT_SIZE,
            SHADOW,
        );
        draw_text(&line.text, line.x, line.y + baseline, HUD_FONT_SIZE, WHITE);
    }
}
