use core::fmt;

mod buzzer_pwm;
mod led_ws2812;
mod network;
mod oled_display;
mod status_leds;
mod temperature;
mod wifi_sta;

pub use buzzer_pwm::PwmBuzzer;
pub use led_ws2812::PioLedStrip;
pub use network::{init_network_stack, wait_for_connection};
pub use oled_display::{OledDisplay, display_i2c};
pub use status_leds::StatusLeds;
pub use temperature::OnChipTemperature;
pub use wifi_sta::{RadioPins, init_radio, join_network};

/// Failure that stops the firmware during bring-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootError {
    /// SSD1306 did not answer the init sequence
    Display,
    /// Access point rejected the join
    WifiJoin,
    /// No association within the join timeout
    WifiTimeout,
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootError::Display => write!(f, "display init failed"),
            BootError::WifiJoin => write!(f, "wifi join failed"),
            BootError::WifiTimeout => write!(f, "wifi join timed out"),
        }
    }
}
