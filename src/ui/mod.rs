mod button;

pub use button::Button;

use macroquad::prelude::{BLUE, GREEN, RED, WHITE, YELLOW};

use crate::application::Command;
use crate::config::Config;

/// The five control buttons along the bottom band. Depends only on the
/// viewport height, so hit-testing never needs a rendered frame.
pub fn control_buttons(viewport_height: i32) -> [Button; 5] {
    let y = viewport_height - Config::PANEL_HEIGHT;
    let layout = [
        ("Start", GREEN, Command::Run),
        ("Pause", RED, Command::Pause),
        ("Reset", BLUE, Command::Reset),
        ("Save", YELLOW, Command::Save),
        ("Load", WHITE, Command::Load),
    ];
    std::array::from_fn(|slot| {
        let (label, color, command) = layout[slot];
        let x = Config::BUTTON_X + slot as i32 * Config::BUTTON_SPACING;
        Button::new(x, y, Config::BUTTON_WIDTH, Config::BUTTON_HEIGHT, label, color, command)
    })
}

/// Command of the control button under a pixel position, if any
pub fn command_at(viewport_height: i32, x: i32, y: i32) -> Option<Command> {
    control_buttons(viewport_height)
        .iter()
        .find(|button| button.contains(x, y))
        .map(|button| button.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_follow_viewport_height() {
        let buttons = control_buttons(600);
        assert!(buttons.iter().all(|b| b.y == 550));
        let xs: Vec<_> = buttons.iter().map(|b| b.x).collect();
        assert_eq!(xs, vec![10, 100, 190, 280, 370]);
    }

    #[test]
    fn test_command_at() {
        assert_eq!(command_at(800, 15, 760), Some(Command::Run));
        assert_eq!(command_at(800, 120, 760), Some(Command::Pause));
        assert_eq!(command_at(800, 200, 760), Some(Command::Reset));
        assert_eq!(command_at(800, 300, 760), Some(Command::Save));
        assert_eq!(command_at(800, 400, 760), Some(Command::Load));
        assert_eq!(command_at(800, 95, 760), None);
        assert_eq!(command_at(800, 90, 760), None);
        assert_eq!(command_at(800, 100, 789), Some(Command::Pause));
        assert_eq!(command_at(800, 100, 790), None);
        assert_eq!(command_at(800, 15, 795), None);
        assert_eq!(command_at(800, 700, 760), None);
    }
}
