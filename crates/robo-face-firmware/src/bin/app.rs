#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::{pio::Pio, usb::Driver};
use embassy_time::{Delay, Instant, Timer};
use panic_halt as _;

use robo_face_core::{
    RoboFace,
    config::{POLL_SLICE, WEB_BUZZER},
};
use robo_face_firmware::controllers::RoboHttpController;
use robo_face_firmware::infrastructure::drivers::{
    OledDisplay, OnChipTemperature, PioLedStrip, PwmBuzzer, RadioPins, StatusLeds, display_i2c,
    init_network_stack, init_radio, join_network, wait_for_connection,
};
use robo_face_firmware::infrastructure::exchange::ChannelNetwork;
use robo_face_firmware::infrastructure::tasks::{http_server_task, logger_task};
use robo_face_firmware::{Irqs, config, halt, mk_static};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let p = embassy_rp::init(embassy_rp::config::Config::default());
    spawner.spawn(logger_task(Driver::new(p.USB, Irqs))).ok();
    log::info!("face: booting web variant");

    let _status = StatusLeds::off(p.PIN_13, p.PIN_11, p.PIN_12);

    // Peripherals of the face
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO1, Irqs);
    let strip = PioLedStrip::new(&mut common, sm0, p.DMA_CH1, p.PIN_7);
    let buzzer = PwmBuzzer::new(p.PWM_SLICE2, p.PIN_21, config::WEB_BUZZER_PWM.frequency);
    let temperature = OnChipTemperature::new(p.ADC, p.ADC_TEMP_SENSOR);
    let screen = match OledDisplay::new(display_i2c(p.I2C1, p.PIN_15, p.PIN_14)) {
        Ok(screen) => screen,
        Err(e) => {
            log::error!("face: {}", e);
            halt().await
        }
    };

    // Network
    let radio = RadioPins {
        pio: p.PIO0,
        dma: p.DMA_CH0,
        pwr: p.PIN_23,
        dio: p.PIN_24,
        cs: p.PIN_25,
        clk: p.PIN_29,
    };
    let (net_device, mut control) = init_radio(spawner, radio).await;
    if let Err(e) = join_network(&mut control).await {
        log::error!("wifi: {}", e);
        halt().await;
    }
    let stack = init_network_stack(spawner, net_device);
    wait_for_connection(stack).await;

    let controller = mk_static!(RoboHttpController, RoboHttpController);
    spawner.spawn(http_server_task(stack, controller)).ok();

    let mut face = RoboFace::new(strip, Delay, buzzer, screen, temperature, WEB_BUZZER);
    face.blank().await;
    log::info!("face: ready");

    let mut network = ChannelNetwork;
    loop {
        face.poll(&mut network, Instant::now()).await;
        Timer::after(POLL_SLICE).await;
    }
}
