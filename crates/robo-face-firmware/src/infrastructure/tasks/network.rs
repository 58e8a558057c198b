use cyw43_pio::PioSpi;
use embassy_net::Runner;
use embassy_rp::{
    gpio::Output,
    peripherals::{DMA_CH0, PIO0},
};

/// Background task driving the CYW43 radio. Must run for the chip to work.
#[embassy_executor::task]
pub async fn cyw43_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

/// Background task for running the network stack
#[embassy_executor::task]
pub async fn network_runner_task(mut runner: Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}
