use heapless::Vec;

use crate::command::Command;

/// Edge detector for the two buttons of the standalone board.
///
/// Button A wakes the face while held and puts it to sleep on release.
/// Button B blanks the LEDs and the display when pressed and leaves the
/// buzzer alone.
#[derive(Debug, Default)]
pub struct ButtonPanel {
    wake_held: bool,
    clear_held: bool,
}

impl ButtonPanel {
    pub const fn new() -> Self {
        Self {
            wake_held: false,
            clear_held: false,
        }
    }

    /// Feed one sample of both buttons (`true` = pressed) and collect the
    /// commands their edges produce, A before B.
    pub fn sample(&mut self, wake_pressed: bool, clear_pressed: bool) -> Vec<Command, 2> {
        let mut commands = Vec::new();

        if wake_pressed != self.wake_held {
            self.wake_held = wake_pressed;
            let command = if wake_pressed {
                Command::Wake
            } else {
                Command::Sleep
            };
            // at most two pushes into a capacity of two
            let _ = commands.push(command);
        }

        if clear_pressed && !self.clear_held {
            let _ = commands.push(Command::Blank);
        }
        self.clear_held = clear_pressed;

        commands
    }
}
