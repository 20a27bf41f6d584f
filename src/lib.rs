// Domain layer - grid and generation rules
pub mod domain;

// Application layer - session state and input handling
pub mod application;
pub mod persistence;
pub mod config;

// Infrastructure layer - window, audio, input
pub mod audio;
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{Command, Controller, InputEvent, SimulationSession, Viewport};
pub use domain::{Cell, Grid, step};
pub use persistence::{FileStore, GridStore, PersistError};
