//! Port traits the firmware implements on top of the real peripherals.

use crate::{
    config::FRAME_BYTES,
    error::PeripheralError,
    http::{PageResponse, RequestBuffer},
};

/// Byte-level writer for the WS2812 strip.
pub trait StripWriter {
    /// Transmit one full frame, three bytes per pixel in G, R, B order.
    async fn write(&mut self, grb: &[u8; FRAME_BYTES]) -> Result<(), PeripheralError>;
}

/// PWM channel the buzzer hangs off.
pub trait BuzzerPwm {
    /// Program the compare level, `0..=PWM_TOP`.
    fn set_level(&mut self, level: u16) -> Result<(), PeripheralError>;
}

/// Monochrome text display with an off-screen frame buffer.
pub trait TextDisplay {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Blank the frame buffer.
    fn clear(&mut self);

    /// Draw `text` with its top-left corner at (`x`, `y`). Coordinates may
    /// lie off-screen.
    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), PeripheralError>;

    /// Push the frame buffer to the device.
    fn flush(&mut self) -> Result<(), PeripheralError>;
}

/// Raw reader of the on-chip temperature channel.
pub trait TemperatureSensor {
    /// Read one 12-bit sample.
    async fn read_raw(&mut self) -> Result<u16, PeripheralError>;
}

/// Non-blocking view of the HTTP front end from the main loop.
pub trait NetworkService {
    /// Take the next fully assembled request head, if one is waiting.
    fn next_request(&mut self) -> Option<RequestBuffer>;

    /// Hand the response back to the connection that sent the request.
    fn respond(&mut self, response: PageResponse);
}
