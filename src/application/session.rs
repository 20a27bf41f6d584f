use rand::Rng;

use crate::application::Viewport;
use crate::config::Config;
use crate::domain::{Cell, Grid, GridError, step};

/// SimulationSession owns the grid and every simulation parameter.
/// It is the single place the grid gets replaced.
#[derive(Clone, Debug)]
pub struct SimulationSession {
    pub grid: Grid,
    pub generation: u64,
    pub paused: bool,
    pub speed: u32,
    pub viewport: Viewport,
}

impl SimulationSession {
    /// Running session over a random grid that fills the viewport
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        let (rows, cols) = viewport.grid_dimensions();
        Self::with_grid(viewport, Grid::randomize(rows, cols, rng))
    }

    /// Running session over an existing grid, resized to the viewport
    pub fn with_grid(viewport: Viewport, grid: Grid) -> Self {
        let (rows, cols) = viewport.grid_dimensions();
        Self {
            grid: grid.resize(rows, cols),
            generation: 0,
            paused: false,
            speed: Config::INITIAL_SPEED,
            viewport,
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Fresh random grid, generation counter back to zero
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (rows, cols) = self.viewport.grid_dimensions();
        self.grid = Grid::randomize(rows, cols, rng);
        self.generation = 0;
    }

    /// Replace the grid with a loaded one, fitted to the viewport
    pub fn replace_grid(&mut self, grid: Grid) {
        let (rows, cols) = self.viewport.grid_dimensions();
        self.grid = grid.resize(rows, cols);
        self.generation = 0;
    }

    /// Adjust simulation speed, clamped to [1, 60]
    pub fn adjust_speed(&mut self, delta: i32) {
        self.speed = self
            .speed
            .saturating_add_signed(delta)
            .clamp(Config::MIN_SPEED, Config::MAX_SPEED);
    }

    pub fn zoom_in(&mut self) {
        if self.viewport.zoom_in() {
            self.fit_grid_to_viewport();
        }
    }

    pub fn zoom_out(&mut self) {
        if self.viewport.zoom_out() {
            self.fit_grid_to_viewport();
        }
    }

    pub fn resize_viewport(&mut self, width: i32, height: i32) {
        self.viewport.set_size(width, height);
        self.fit_grid_to_viewport();
    }

    fn fit_grid_to_viewport(&mut self) {
        let (rows, cols) = self.viewport.grid_dimensions();
        if self.grid.dimensions() != (rows, cols) {
            self.grid = self.grid.resize(rows, cols);
        }
    }

    /// Set the cell under a pixel position. Positions that miss the grid
    /// are reported and leave it unchanged.
    pub fn paint(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), GridError> {
        let (row, col) = self.viewport.screen_to_cell(x, y);
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => self.grid.set(row, col, cell),
            _ => {
                let (rows, cols) = self.grid.dimensions();
                Err(GridError::OutOfBounds { row, col, rows, cols })
            }
        }
    }

    /// Advance one generation when running
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.grid = step(&self.grid);
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn session() -> SimulationSession {
        SimulationSession::new(Viewport::default(), &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_new_session_is_running() {
        let session = session();
        assert!(!session.paused);
        assert_eq!(session.generation, 0);
        assert_eq!(session.speed, 10);
        assert_eq!(session.grid.dimensions(), (80, 80));
    }

    #[test]
    fn test_tick_advances_one_generation() {
        let mut session = session();
        let expected = step(&session.grid);
        session.tick();
        assert_eq!(session.generation, 1);
        assert_eq!(session.grid, expected);
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let mut session = session();
        session.toggle_pause();
        let before = session.grid.clone();
        session.tick();
        assert_eq!(session.generation, 0);
        assert_eq!(session.grid, before);
    }

    #[test]
    fn test_toggle_pause_keeps_generation() {
        let mut session = session();
        session.tick();
        session.toggle_pause();
        session.toggle_pause();
        assert_eq!(session.generation, 1);
        assert!(!session.paused);
    }

    #[test]
    fn test_speed_stays_in_bounds() {
        let mut session = session();
        for _ in 0..100 {
            session.adjust_speed(1);
        }
        assert_eq!(session.speed, 60);
        for _ in 0..100 {
            session.adjust_speed(-1);
        }
        assert_eq!(session.speed, 1);
    }

    #[test]
    fn test_reset_clears_generation() {
        let mut session = session();
        session.tick();
        session.tick();
        session.reset(&mut StdRng::seed_from_u64(2));
        assert_eq!(session.generation, 0);
        assert_eq!(session.grid.dimensions(), session.viewport.grid_dimensions());
    }

    #[test]
    fn test_zoom_resizes_grid_from_top_left() {
        let mut session = session();
        let before = session.grid.clone();
        session.zoom_in();
        assert_eq!(session.grid.dimensions(), (72, 72));
        assert_eq!(session.grid, before.resize(72, 72));
        session.zoom_out();
        assert_eq!(session.grid.dimensions(), (80, 80));
    }

    #[test]
    fn test_viewport_resize_fits_grid() {
        let mut session = session();
        session.resize_viewport(405, 1000);
        assert_eq!(session.grid.dimensions(), (100, 40));
    }

    #[test]
    fn test_paint_in_bounds() {
        let mut session = session();
        session.paused = true;
        session.paint(15, 25, Cell::Alive).unwrap();
        assert_eq!(session.grid.get(2, 1), Some(Cell::Alive));
        session.paint(15, 25, Cell::Dead).unwrap();
        assert_eq!(session.grid.get(2, 1), Some(Cell::Dead));
        assert_eq!(session.generation, 0);
    }

    #[test]
    fn test_paint_outside_grid_is_rejected() {
        let mut session = session();
        session.viewport.pan(100, 100);
        let before = session.grid.clone();
        assert!(session.paint(50, 50, Cell::Alive).is_err());
        assert!(session.paint(5000, 120, Cell::Alive).is_err());
        assert_eq!(session.grid, before);
    }

    #[test]
    fn test_replace_grid_fits_viewport() {
        let mut session = session();
        session.tick();
        let mut small = Grid::new(3, 3);
        small.set(1, 1, Cell::Alive).unwrap();
        session.replace_grid(small);
        assert_eq!(session.generation, 0);
        assert_eq!(session.grid.dimensions(), (80, 80));
        assert_eq!(session.grid.population(), 1);
        assert_eq!(session.grid.get(1, 1), Some(Cell::Alive));
    }
}
