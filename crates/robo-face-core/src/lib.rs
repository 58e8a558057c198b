#![no_std]
#![allow(async_fn_in_trait)]

//! Hardware-independent core of the robot face firmware.
//!
//! Everything that decides *what* the board does lives here: the LED matrix
//! mapping, the buzzer cadence, the display queue, HTTP request routing and
//! the page served back. Peripherals are reached through the traits in
//! [`ports`], so the whole crate runs on the host in tests.

pub mod buttons;
pub mod buzzer;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod face;
pub mod http;
pub mod matrix;
pub mod ports;
pub mod presets;
pub mod scheduler;
pub mod thermometer;

pub use buttons::ButtonPanel;
pub use buzzer::{Buzzer, BuzzerState};
pub use command::{BuzzerAction, Command};
pub use display::DisplayQueue;
pub use error::PeripheralError;
pub use face::RoboFace;
pub use matrix::{Frame, LedMatrix, serpentine_index};
pub use scheduler::{Scheduler, TimedTask, Timers};
pub use thermometer::{Thermometer, celsius_from_raw};

pub use smart_leds::RGB8;
