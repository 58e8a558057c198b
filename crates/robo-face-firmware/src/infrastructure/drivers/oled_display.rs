use embassy_rp::{
    Peri,
    i2c::{self, Blocking, I2c, SclPin, SdaPin},
    peripherals::I2C1,
};
use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_8X13},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use robo_face_core::{PeripheralError, ports::TextDisplay};
use ssd1306::{
    I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*,
    size::DisplaySize128x64,
};

use super::BootError;
use crate::config;

type DisplayBus = I2c<'static, I2C1, Blocking>;

type Display = Ssd1306<
    I2CInterface<DisplayBus>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// Open the I2C1 bus the display hangs off.
pub fn display_i2c(
    i2c: Peri<'static, I2C1>,
    scl: Peri<'static, impl SclPin<I2C1>>,
    sda: Peri<'static, impl SdaPin<I2C1>>,
) -> DisplayBus {
    let mut bus_config = i2c::Config::default();
    bus_config.frequency = config::DISPLAY.i2c_frequency;
    I2c::new_blocking(i2c, scl, sda, bus_config)
}

/// SSD1306 128x64 with an off-screen frame buffer.
pub struct OledDisplay {
    display: Display,
}

impl OledDisplay {
    /// Run the init sequence and blank the panel.
    pub fn new(bus: DisplayBus) -> Result<Self, BootError> {
        let interface = I2CDisplayInterface::new_custom_address(bus, config::DISPLAY.address);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        display.init().map_err(|e| {
            log::error!("display: init failed: {:?}", e);
            BootError::Display
        })?;
        display.clear_buffer();
        display.flush().map_err(|e| {
            log::error!("display: first flush failed: {:?}", e);
            BootError::Display
        })?;

        Ok(Self { display })
    }
}

impl TextDisplay for OledDisplay {
    fn width(&self) -> u32 {
        self.display.size().width
    }

    fn height(&self) -> u32 {
        self.display.size().height
    }

    fn clear(&mut self) {
        self.display.clear_buffer();
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), PeripheralError> {
        let style = MonoTextStyle::new(&FONT_8X13, BinaryColor::On);
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.display)
            .map_err(|e| {
                log::debug!("display: draw failed: {:?}", e);
                PeripheralError::Display
            })?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PeripheralError> {
        self.display.flush().map_err(|e| {
            log::debug!("display: flush failed: {:?}", e);
            PeripheralError::Display
        })
    }
}
