use crate::{
    matrix::Frame,
    presets::{BLANK, EYES_CLOSED, EYES_OPEN},
};

/// What a command does to the buzzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerAction {
    On,
    Off,
    /// Leave the buzzer as it is
    Keep,
}

/// The closed set of things a peer (or a button) can ask the face to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the eyes and start beeping
    Wake,
    /// Close the eyes and go quiet
    Sleep,
    /// Blank the matrix and the display
    LightsOff,
    /// Blank the matrix and the display without touching the buzzer
    Blank,
}

impl Command {
    /// Every command reachable over HTTP, in the order the page lists them.
    pub const ALL: [Command; 3] = [Command::Wake, Command::Sleep, Command::LightsOff];

    /// Request path that triggers the command, if it has one.
    pub const fn path(self) -> Option<&'static str> {
        match self {
            Command::Wake => Some("/robo_on"),
            Command::Sleep => Some("/robo_off"),
            Command::LightsOff => Some("/matriz_off"),
            Command::Blank => None,
        }
    }

    /// Resolve a request target. Query string and fragment are ignored, the
    /// remaining path must match exactly.
    pub fn from_target(target: &str) -> Option<Self> {
        let path = target.split(['?', '#']).next().unwrap_or(target);
        Self::ALL.into_iter().find(|command| command.path() == Some(path))
    }

    pub const fn preset(self) -> &'static Frame {
        match self {
            Command::Wake => &EYES_OPEN,
            Command::Sleep => &EYES_CLOSED,
            Command::LightsOff | Command::Blank => &BLANK,
        }
    }

    pub const fn buzzer(self) -> BuzzerAction {
        match self {
            Command::Wake => BuzzerAction::On,
            Command::Sleep | Command::LightsOff => BuzzerAction::Off,
            Command::Blank => BuzzerAction::Keep,
        }
    }

    /// Caption shown on the display.
    pub const fn caption(self) -> &'static str {
        match self {
            Command::Wake => "Bip Bip Bip",
            Command::Sleep => "ZzZ ZzZ ZzZ",
            Command::LightsOff => "",
            Command::Blank => " ",
        }
    }

    /// Label of the page button bound to the command.
    pub const fn label(self) -> &'static str {
        match self {
            Command::Wake => "Wake Robot",
            Command::Sleep => "Put Robot to Sleep",
            Command::LightsOff => "Turn Off LEDs",
            Command::Blank => "Blank Face",
        }
    }
}
