//! Recording fakes for the peripheral ports.

#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal_async::delay::DelayNs;
use robo_face_core::{
    PeripheralError, RoboFace,
    config::{BuzzerConfig, FRAME_BYTES},
    http::{PageResponse, RequestBuffer},
    ports::{BuzzerPwm, NetworkService, StripWriter, TemperatureSensor, TextDisplay},
};

pub type TestFace = RoboFace<RecordingStrip, CountingDelay, RecordingPwm, RecordingScreen, FixedSensor>;

pub fn face(config: BuzzerConfig, raw: Option<u16>) -> TestFace {
    RoboFace::new(
        RecordingStrip::default(),
        CountingDelay::default(),
        RecordingPwm::default(),
        RecordingScreen::default(),
        FixedSensor(raw),
        config,
    )
}

#[derive(Default)]
pub struct RecordingStrip {
    pub frames: Vec<[u8; FRAME_BYTES]>,
    pub fail: bool,
}

impl StripWriter for RecordingStrip {
    async fn write(&mut self, grb: &[u8; FRAME_BYTES]) -> Result<(), PeripheralError> {
        if self.fail {
            return Err(PeripheralError::Strip);
        }
        self.frames.push(*grb);
        Ok(())
    }
}

#[derive(Default)]
pub struct CountingDelay {
    pub waits_ns: Vec<u32>,
}

impl DelayNs for CountingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.push(ns);
    }
}

#[derive(Default)]
pub struct RecordingPwm {
    pub levels: Vec<u16>,
}

impl RecordingPwm {
    pub fn last(&self) -> Option<u16> {
        self.levels.last().copied()
    }
}

impl BuzzerPwm for RecordingPwm {
    fn set_level(&mut self, level: u16) -> Result<(), PeripheralError> {
        self.levels.push(level);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenOp {
    Clear,
    Text(i32, i32, String),
    Flush,
}

#[derive(Default)]
pub struct RecordingScreen {
    pub ops: Vec<ScreenOp>,
    pub fail: bool,
}

impl RecordingScreen {
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                ScreenOp::Text(_, _, text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl TextDisplay for RecordingScreen {
    fn width(&self) -> u32 {
        128
    }

    fn height(&self) -> u32 {
        64
    }

    fn clear(&mut self) {
        self.ops.push(ScreenOp::Clear);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), PeripheralError> {
        if self.fail {
            return Err(PeripheralError::Display);
        }
        self.ops.push(ScreenOp::Text(x, y, text.to_owned()));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PeripheralError> {
        self.ops.push(ScreenOp::Flush);
        Ok(())
    }
}

/// Sensor returning the same sample every time; `None` fails the read.
pub struct FixedSensor(pub Option<u16>);

impl TemperatureSensor for FixedSensor {
    async fn read_raw(&mut self) -> Result<u16, PeripheralError> {
        self.0.ok_or(PeripheralError::Adc)
    }
}

#[derive(Default)]
pub struct QueueNetwork {
    pub requests: VecDeque<RequestBuffer>,
    pub responses: Vec<PageResponse>,
}

impl QueueNetwork {
    pub fn with_requests(heads: &[Vec<u8>]) -> Self {
        Self {
            requests: heads.iter().map(|head| RequestBuffer::from_bytes(head)).collect(),
            responses: Vec::new(),
        }
    }
}

impl NetworkService for QueueNetwork {
    fn next_request(&mut self) -> Option<RequestBuffer> {
        self.requests.pop_front()
    }

    fn respond(&mut self, response: PageResponse) {
        self.responses.push(response);
    }
}

pub fn get(path: &str) -> Vec<u8> {
    format!("GET {path} HTTP/1.1\r\nHost: 192.168.0.10\r\n\r\n").into_bytes()
}
