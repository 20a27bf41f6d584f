/// Compile-time settings for the viewer.
pub struct Config;

impl Config {
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 800;
    pub const WINDOW_TITLE: &'static str = "Conway's Game of Life";

    /// Cell edge in pixels at zoom factor 1.0
    pub const INITIAL_CELL_SIZE: u32 = 10;

    pub const INITIAL_SPEED: u32 = 10;
    pub const MIN_SPEED: u32 = 1;
    pub const MAX_SPEED: u32 = 60;

    /// Zoom is counted in tenths above 1.0, so 40 steps is a factor of 5.0
    pub const MAX_ZOOM_STEPS: u32 = 40;

    /// Height of the control band along the bottom edge
    pub const PANEL_HEIGHT: i32 = 50;
    pub const BUTTON_X: i32 = 10;
    pub const BUTTON_SPACING: i32 = 90;
    pub const BUTTON_WIDTH: i32 = 80;
    pub const BUTTON_HEIGHT: i32 = 40;

    pub const SAVE_PATH: &'static str = "saved_grid.life";
    pub const CLICK_SOUND: &'static str = "sounds/click.wav";
    pub const TOGGLE_SOUND: &'static str = "sounds/toggle.wav";
}
