use embassy_rp::{
    Peri,
    dma::Channel,
    peripherals::PIO1,
    pio::{Common, PioPin, StateMachine},
    pio_programs::ws2812::{PioWs2812, PioWs2812Program},
};
use robo_face_core::{
    PeripheralError, RGB8,
    config::{FRAME_BYTES, LED_COUNT},
    ports::StripWriter,
};

/// WS2812 strip driven by a PIO1 state machine.
///
/// PIO0 belongs to the CYW43 SPI link.
pub struct PioLedStrip {
    driver: PioWs2812<'static, PIO1, 0, LED_COUNT>,
}

impl PioLedStrip {
    pub fn new(
        common: &mut Common<'static, PIO1>,
        sm: StateMachine<'static, PIO1, 0>,
        dma: Peri<'static, impl Channel>,
        pin: Peri<'static, impl PioPin>,
    ) -> Self {
        let program = PioWs2812Program::new(common);
        Self {
            driver: PioWs2812::new(common, sm, dma, pin, &program),
        }
    }
}

impl StripWriter for PioLedStrip {
    async fn write(&mut self, grb: &[u8; FRAME_BYTES]) -> Result<(), PeripheralError> {
        // The PIO program shifts colours out in G, R, B order on its own.
        let mut colors = [RGB8::default(); LED_COUNT];
        for (color, bytes) in colors.iter_mut().zip(grb.chunks_exact(3)) {
            *color = RGB8 {
                r: bytes[1],
                g: bytes[0],
                b: bytes[2],
            };
        }
        self.driver.write(&colors).await;
        Ok(())
    }
}
