use embassy_rp::{
    Peri,
    gpio::{Level, Output, Pin},
};

/// The discrete RGB LED of the board, held dark.
pub struct StatusLeds {
    _pins: [Output<'static>; 3],
}

impl StatusLeds {
    pub fn off(
        red: Peri<'static, impl Pin>,
        green: Peri<'static, impl Pin>,
        blue: Peri<'static, impl Pin>,
    ) -> Self {
        Self {
            _pins: [
                Output::new(red, Level::Low),
                Output::new(green, Level::Low),
                Output::new(blue, Level::Low),
            ],
        }
    }
}
