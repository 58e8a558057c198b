use embedded_hal_async::delay::DelayNs;
use smart_leds::RGB8;

use crate::{
    config::{FRAME_BYTES, LED_COUNT, MATRIX_SIDE, STRIP_SETTLE_US},
    error::PeripheralError,
    ports::StripWriter,
};

/// Logical 5x5 picture, addressed as `frame[y][x]`.
pub type Frame = [[RGB8; MATRIX_SIDE]; MATRIX_SIDE];

const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Map a logical cell to its position on the strip.
///
/// The strip snakes through the matrix starting from the bottom row, so even
/// rows run right-to-left on the strip and odd rows left-to-right. Cell
/// (0, 0) is always the last pixel.
pub const fn serpentine_index(x: usize, y: usize) -> usize {
    let column = if y % 2 == 0 { x } else { MATRIX_SIDE - 1 - x };
    LED_COUNT - 1 - (y * MATRIX_SIDE + column)
}

/// Frame buffer for the LED matrix plus the strip it is pushed to.
pub struct LedMatrix<S, D> {
    strip: S,
    delay: D,
    pixels: [RGB8; LED_COUNT],
}

impl<S: StripWriter, D: DelayNs> LedMatrix<S, D> {
    pub fn new(strip: S, delay: D) -> Self {
        Self {
            strip,
            delay,
            pixels: [BLACK; LED_COUNT],
        }
    }

    /// Set one pixel by physical strip position.
    pub fn set_pixel(&mut self, index: usize, color: RGB8) {
        match self.pixels.get_mut(index) {
            Some(pixel) => *pixel = color,
            None => log::debug!("matrix: pixel {} out of range", index),
        }
    }

    /// Turn every pixel of the buffer off. Nothing is transmitted.
    pub fn clear(&mut self) {
        self.pixels = [BLACK; LED_COUNT];
    }

    /// Pixels in physical strip order.
    pub fn pixels(&self) -> &[RGB8; LED_COUNT] {
        &self.pixels
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Serialize the buffer the way the strip expects it on the wire.
    pub fn wire_bytes(&self) -> [u8; FRAME_BYTES] {
        let mut bytes = [0u8; FRAME_BYTES];
        for (chunk, pixel) in bytes.chunks_exact_mut(3).zip(self.pixels.iter()) {
            chunk[0] = pixel.g;
            chunk[1] = pixel.r;
            chunk[2] = pixel.b;
        }
        bytes
    }

    /// Copy a logical frame into the buffer and transmit it.
    pub async fn update_frame(&mut self, frame: &Frame) -> Result<(), PeripheralError> {
        for (y, row) in frame.iter().enumerate() {
            for (x, color) in row.iter().enumerate() {
                self.pixels[serpentine_index(x, y)] = *color;
            }
        }
        self.write().await
    }

    /// Transmit the whole buffer, then hold the line low for the latch.
    pub async fn write(&mut self) -> Result<(), PeripheralError> {
        let bytes = self.wire_bytes();
        let result = self.strip.write(&bytes).await;
        self.delay.delay_us(STRIP_SETTLE_US).await;
        result
    }
}
