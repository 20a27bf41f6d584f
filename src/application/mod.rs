mod controller;
mod pacing;
mod session;
mod viewport;

pub use controller::{Command, Controller, Flow, InputEvent, PointerButton};
pub use pacing::FrameLimiter;
pub use session::SimulationSession;
pub use viewport::Viewport;
