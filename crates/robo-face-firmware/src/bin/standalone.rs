#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::{
    gpio::{Input, Pull},
    pio::Pio,
    usb::Driver,
};
use embassy_time::{Delay, Instant, Timer};
use panic_halt as _;

use robo_face_core::{
    ButtonPanel, RoboFace,
    config::{POLL_SLICE, STANDALONE_BUZZER},
};
use robo_face_firmware::infrastructure::drivers::{
    OledDisplay, OnChipTemperature, PioLedStrip, PwmBuzzer, display_i2c,
};
use robo_face_firmware::infrastructure::tasks::logger_task;
use robo_face_firmware::{Irqs, config, halt};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let p = embassy_rp::init(embassy_rp::config::Config::default());
    spawner.spawn(logger_task(Driver::new(p.USB, Irqs))).ok();
    log::info!("face: booting button variant");

    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO1, Irqs);
    let strip = PioLedStrip::new(&mut common, sm0, p.DMA_CH1, p.PIN_7);
    let buzzer = PwmBuzzer::new(
        p.PWM_SLICE2,
        p.PIN_21,
        config::STANDALONE_BUZZER_PWM.frequency,
    );
    let temperature = OnChipTemperature::new(p.ADC, p.ADC_TEMP_SENSOR);
    let screen = match OledDisplay::new(display_i2c(p.I2C1, p.PIN_15, p.PIN_14)) {
        Ok(screen) => screen,
        Err(e) => {
            log::error!("face: {}", e);
            halt().await
        }
    };

    // Both buttons pull the line low when pressed
    let wake_button = Input::new(p.PIN_5, Pull::Up);
    let clear_button = Input::new(p.PIN_6, Pull::Up);
    let mut panel = ButtonPanel::new();

    let mut face = RoboFace::new(strip, Delay, buzzer, screen, temperature, STANDALONE_BUZZER);
    face.blank().await;
    log::info!("face: ready");

    loop {
        let now = Instant::now();
        for command in panel.sample(wake_button.is_low(), clear_button.is_low()) {
            face.apply(command, now).await;
        }
        face.refresh(now);
        Timer::after(POLL_SLICE).await;
    }
}
