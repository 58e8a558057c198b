use embassy_rp::{peripherals::USB, usb::Driver};

use crate::config;

/// Serve `log` records over USB CDC.
#[embassy_executor::task]
pub async fn logger_task(driver: Driver<'static, USB>) {
    embassy_usb_logger::run!(1024, config::LOG_LEVEL, driver);
}
