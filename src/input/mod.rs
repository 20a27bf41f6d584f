use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyCode, KeyMods, MouseButton};
use macroquad::prelude::{is_quit_requested, prevent_quit, screen_height, screen_width};

use crate::application::{Command, InputEvent, PointerButton};

/// Keyboard binding for each command
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    let command = match key {
        KeyCode::Space => Command::TogglePause,
        KeyCode::R => Command::Reset,
        KeyCode::S => Command::Save,
        KeyCode::L => Command::Load,
        KeyCode::Up => Command::SpeedUp,
        KeyCode::Down => Command::SpeedDown,
        KeyCode::Equal | KeyCode::KpAdd => Command::ZoomIn,
        KeyCode::Minus | KeyCode::KpSubtract => Command::ZoomOut,
        _ => return None,
    };
    Some(command)
}

pub fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Pan),
        _ => None,
    }
}

/// Collects raw window events into [`InputEvent`]s in arrival order
#[derive(Default)]
struct EventCollector {
    events: Vec<InputEvent>,
    last_mouse: Option<(i32, i32)>,
    pan_held: bool,
}

impl EventHandler for EventCollector {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn mouse_motion_event(&mut self, x: f32, y: f32) {
        let pos = (x.floor() as i32, y.floor() as i32);
        if let Some((last_x, last_y)) = self.last_mouse.replace(pos) {
            self.events.push(InputEvent::PointerMove {
                dx: pos.0 - last_x,
                dy: pos.1 - last_y,
                pan_held: self.pan_held,
            });
        }
    }

    fn mouse_button_down_event(&mut self, button: MouseButton, x: f32, y: f32) {
        let Some(button) = pointer_button(button) else {
            return;
        };
        if button == PointerButton::Pan {
            self.pan_held = true;
        }
        self.events.push(InputEvent::PointerDown {
            button,
            x: x.floor() as i32,
            y: y.floor() as i32,
        });
    }

    fn mouse_button_up_event(&mut self, button: MouseButton, _x: f32, _y: f32) {
        if button == MouseButton::Middle {
            self.pan_held = false;
        }
    }

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        if repeat {
            return;
        }
        if let Some(command) = command_for_key(keycode) {
            self.events.push(InputEvent::Command(command));
        }
    }
}

/// Input source backed by the macroquad window
pub struct WindowInput {
    subscriber: usize,
    collector: EventCollector,
    size: (i32, i32),
}

impl WindowInput {
    pub fn new() -> Self {
        prevent_quit();
        Self {
            subscriber: register_input_subscriber(),
            collector: EventCollector::default(),
            size: current_size(),
        }
    }

    /// Drain everything that arrived since the last call. A size change is
    /// reported first, a quit request last.
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let size = current_size();
        if size != self.size {
            self.size = size;
            events.push(InputEvent::ViewportResized {
                width: size.0,
                height: size.1,
            });
        }

        repeat_all_miniquad_input(&mut self.collector, self.subscriber);
        events.append(&mut self.collector.events);

        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }
        events
    }

    pub fn size(&self) -> (i32, i32) {
        self.size
    }
}

impl Default for WindowInput {
    fn default() -> Self {
        Self::new()
    }
}

fn current_size() -> (i32, i32) {
    (screen_width() as i32, screen_height() as i32)
}
