use macroquad::prelude::*;

use crate::application::Command;

/// Control-panel button: a fixed rectangle bound to one command
#[derive(Clone, Debug)]
pub struct Button {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub label: &'static str,
    pub color: Color,
    pub command: Command,
}

impl Button {
    pub fn new(x: i32, y: i32, width: i32, height: i32, label: &'static str, color: Color, command: Command) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label,
            color,
            command,
        }
    }

    /// Check if a pixel position falls on the button. Left and top edges
    /// are inside, right and bottom edges are not.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && x < self.x + self.width
            && y >= self.y
            && y < self.y + self.height
    }

    /// Draw the filled button with its label in black
    pub fn draw(&self) {
        let (x, y) = (self.x as f32, self.y as f32);
        let (w, h) = (self.width as f32, self.height as f32);
        let radius = h / 2.0;

        // Pill shape: a rectangle between two end caps
        draw_rectangle(x + radius, y, w - 2.0 * radius, h, self.color);
        draw_circle(x + radius, y + radius, radius, self.color);
        draw_circle(x + w - radius, y + radius, radius, self.color);

        draw_text(self.label, x + 10.0, y + 26.0, 22.0, BLACK);
    }
}
