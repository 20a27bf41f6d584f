use rand::Rng;

use crate::application::SimulationSession;
use crate::audio::{AudioSink, Clip};
use crate::domain::Cell;
use crate::persistence::GridStore;
use crate::ui;

/// Actions reachable from both the keyboard and the control buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Run,
    Pause,
    Reset,
    Save,
    Load,
    SpeedUp,
    SpeedDown,
    ZoomIn,
    ZoomOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Sets cells alive, presses control buttons
    Primary,
    /// Sets cells dead
    Secondary,
    /// Held while dragging to pan
    Pan,
}

/// Input already decoded from the window system, in receipt order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Command(Command),
    PointerDown { button: PointerButton, x: i32, y: i32 },
    PointerMove { dx: i32, dy: i32, pan_held: bool },
    ViewportResized { width: i32, height: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Controller turns input into session transitions and runs the
/// per-frame simulation step.
pub struct Controller<R, S, A> {
    session: SimulationSession,
    rng: R,
    store: S,
    audio: A,
}

impl<R: Rng, S: GridStore, A: AudioSink> Controller<R, S, A> {
    pub fn new(session: SimulationSession, rng: R, store: S, audio: A) -> Self {
        Self {
            session,
            rng,
            store,
            audio,
        }
    }

    pub fn session(&self) -> &SimulationSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SimulationSession {
        &mut self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// One logical frame: apply every event in order, then advance one
    /// generation unless paused. A quit event stops the frame immediately.
    pub fn frame(&mut self, events: impl IntoIterator<Item = InputEvent>) -> Flow {
        for event in events {
            if self.handle(event) == Flow::Quit {
                return Flow::Quit;
            }
        }
        self.session.tick();
        Flow::Continue
    }

    pub fn handle(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::Quit => return Flow::Quit,
            InputEvent::Command(command) => self.execute(command),
            InputEvent::PointerDown { button, x, y } => self.pointer_down(button, x, y),
            InputEvent::PointerMove { dx, dy, pan_held } => {
                if pan_held {
                    self.session.viewport.pan(dx, dy);
                }
            }
            InputEvent::ViewportResized { width, height } => {
                self.session.resize_viewport(width, height);
                let (rows, cols) = self.session.grid.dimensions();
                log::info!("Viewport {}x{}, grid now {}x{}", width, height, rows, cols);
            }
        }
        Flow::Continue
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::TogglePause => {
                self.session.toggle_pause();
                self.audio.play(Clip::Toggle);
            }
            Command::Run => {
                self.session.set_paused(false);
                self.audio.play(Clip::Toggle);
            }
            Command::Pause => {
                self.session.set_paused(true);
                self.audio.play(Clip::Toggle);
            }
            Command::Reset => {
                self.session.reset(&mut self.rng);
                log::info!("Grid reset, population {}", self.session.grid.population());
                self.audio.play(Clip::Click);
            }
            Command::Save => {
                match self.store.save(&self.session.grid) {
                    Ok(()) => log::info!("Grid saved"),
                    Err(err) => log::error!("Failed to save grid: {}", err),
                }
                self.audio.play(Clip::Click);
            }
            Command::Load => {
                match self.store.load() {
                    Ok(grid) => {
                        let loaded = grid.dimensions();
                        self.session.replace_grid(grid);
                        log::info!(
                            "Grid loaded ({}x{} fitted to {}x{})",
                            loaded.0,
                            loaded.1,
                            self.session.grid.rows(),
                            self.session.grid.cols()
                        );
                    }
                    Err(err) => log::error!("Failed to load grid: {}", err),
                }
                self.audio.play(Clip::Click);
            }
            Command::SpeedUp => self.session.adjust_speed(1),
            Command::SpeedDown => self.session.adjust_speed(-1),
            Command::ZoomIn => self.session.zoom_in(),
            Command::ZoomOut => self.session.zoom_out(),
        }
    }

    fn pointer_down(&mut self, button: PointerButton, x: i32, y: i32) {
        if self.session.viewport.in_control_band(y) {
            if button == PointerButton::Primary {
                if let Some(command) = ui::command_at(self.session.viewport.height, x, y) {
                    self.execute(command);
                }
            }
            return;
        }

        let cell = match button {
            PointerButton::Primary => Cell::Alive,
            PointerButton::Secondary => Cell::Dead,
            PointerButton::Pan => return,
        };
        match self.session.paint(x, y, cell) {
            Ok(()) => self.audio.play(Clip::Click),
            Err(err) => log::debug!("Ignoring edit: {}", err),
        }
    }
}
