use cyw43::{Control, JoinOptions, NetDriver, PowerManagementMode};
use cyw43_pio::{DEFAULT_CLOCK_DIVIDER, PioSpi};
use embassy_executor::Spawner;
use embassy_rp::{
    Peri,
    gpio::{Level, Output},
    peripherals::{DMA_CH0, PIN_23, PIN_24, PIN_25, PIN_29, PIO0},
    pio::Pio,
};
use embassy_time::with_timeout;

use super::BootError;
use crate::{Irqs, config, infrastructure::tasks::cyw43_task, mk_static};

/// Pins and blocks wired to the CYW43439 on the Pico W.
pub struct RadioPins {
    pub pio: Peri<'static, PIO0>,
    pub dma: Peri<'static, DMA_CH0>,
    pub pwr: Peri<'static, PIN_23>,
    pub dio: Peri<'static, PIN_24>,
    pub cs: Peri<'static, PIN_25>,
    pub clk: Peri<'static, PIN_29>,
}

/// Boot the radio, spawn its runner and load the regulatory data.
pub async fn init_radio(spawner: Spawner, pins: RadioPins) -> (NetDriver<'static>, Control<'static>) {
    let fw = include_bytes!("../../../cyw43-firmware/43439A0.bin");
    let clm = include_bytes!("../../../cyw43-firmware/43439A0_clm.bin");

    let pwr = Output::new(pins.pwr, Level::Low);
    let cs = Output::new(pins.cs, Level::High);
    let mut pio = Pio::new(pins.pio, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        pins.dio,
        pins.clk,
        pins.dma,
    );

    let state = mk_static!(cyw43::State, cyw43::State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;
    spawner.spawn(cyw43_task(runner)).ok();

    control.init(clm).await;
    control
        .set_power_management(PowerManagementMode::PowerSave)
        .await;

    (net_device, control)
}

/// Join the configured access point, giving up after the join timeout.
pub async fn join_network(control: &mut Control<'static>) -> Result<(), BootError> {
    log::info!("wifi: joining {}", config::WIFI.ssid);
    let options = if config::WIFI.password.is_empty() {
        JoinOptions::new_open()
    } else {
        JoinOptions::new(config::WIFI.password.as_bytes())
    };

    match with_timeout(
        config::WIFI.join_timeout,
        control.join(config::WIFI.ssid, options),
    )
    .await
    {
        Ok(Ok(())) => {
            log::info!("wifi: joined");
            Ok(())
        }
        Ok(Err(e)) => {
            log::error!("wifi: join rejected: {:?}", e);
            Err(BootError::WifiJoin)
        }
        Err(_) => Err(BootError::WifiTimeout),
    }
}
