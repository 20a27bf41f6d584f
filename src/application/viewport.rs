use crate::config::Config;

/// Viewport tracks window size, zoom and pan, and derives cell geometry
/// from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    /// Tenths of zoom above 1.0, in `0..=Config::MAX_ZOOM_STEPS`
    zoom_steps: u32,
    pub pan_x: i32,
    pub pan_y: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            zoom_steps: 0,
            pan_x: 0,
            pan_y: 0,
        }
    }

    /// Zoom factor in [1.0, 5.0]
    pub fn zoom_factor(&self) -> f32 {
        (10 + self.zoom_steps) as f32 / 10.0
    }

    /// Pixel edge of one cell at the current zoom
    pub const fn cell_size(&self) -> u32 {
        Config::INITIAL_CELL_SIZE * (10 + self.zoom_steps) / 10
    }

    /// Zoom in by 0.1, clamped at 5.0. Returns whether the zoom changed.
    pub fn zoom_in(&mut self) -> bool {
        let next = (self.zoom_steps + 1).min(Config::MAX_ZOOM_STEPS);
        std::mem::replace(&mut self.zoom_steps, next) != next
    }

    /// Zoom out by 0.1, clamped at 1.0. Returns whether the zoom changed.
    pub fn zoom_out(&mut self) -> bool {
        let next = self.zoom_steps.saturating_sub(1);
        std::mem::replace(&mut self.zoom_steps, next) != next
    }

    /// Pan by a pointer delta, unbounded
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.pan_x = self.pan_x.saturating_add(dx);
        self.pan_y = self.pan_y.saturating_add(dy);
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// Grid (rows, cols) that fill the viewport at the current cell size
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let cell = self.cell_size() as i32;
        let rows = (self.height / cell).max(1) as usize;
        let cols = (self.width / cell).max(1) as usize;
        (rows, cols)
    }

    /// Convert a pixel position to (row, col). Floor division, so positions
    /// above or left of the pan origin come back negative.
    pub fn screen_to_cell(&self, x: i32, y: i32) -> (i64, i64) {
        let cell = i64::from(self.cell_size());
        let col = (i64::from(x) - i64::from(self.pan_x)).div_euclid(cell);
        let row = (i64::from(y) - i64::from(self.pan_y)).div_euclid(cell);
        (row, col)
    }

    /// Top-left pixel of a cell
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        let cell = self.cell_size() as f32;
        (
            col as f32 * cell + self.pan_x as f32,
            row as f32 * cell + self.pan_y as f32,
        )
    }

    /// Whether a pixel row falls in the control band along the bottom edge
    pub fn in_control_band(&self, y: i32) -> bool {
        y >= self.height - Config::PANEL_HEIGHT
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Config::WINDOW_WIDTH, Config::WINDOW_HEIGHT)
    }
}
