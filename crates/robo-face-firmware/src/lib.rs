#![no_std]
#![allow(async_fn_in_trait)]

pub mod config;
pub mod controllers;
pub(crate) mod net;
pub mod infrastructure;

use embassy_rp::{
    adc, bind_interrupts,
    peripherals::{PIO0, PIO1, USB},
    pio, usb,
};

bind_interrupts!(pub struct Irqs {
    PIO0_IRQ_0 => pio::InterruptHandler<PIO0>;
    PIO1_IRQ_0 => pio::InterruptHandler<PIO1>;
    ADC_IRQ_FIFO => adc::InterruptHandler;
    USBCTRL_IRQ => usb::InterruptHandler<USB>;
});

#[macro_export]
// Create a static cell for a given type and value
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write(($val));
        x
    }};
}

/// Park the core after a fatal boot error. The USB logger keeps running, so
/// the error stays readable on the host.
pub async fn halt() -> ! {
    loop {
        embassy_time::Timer::after_secs(1).await;
    }
}
