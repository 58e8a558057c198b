use crate::{error::PeripheralError, ports::TemperatureSensor};

const ADC_REFERENCE_VOLTS: f32 = 3.3;
const ADC_STEPS: f32 = 4096.0;
// RP2040 datasheet: 0.706 V at 27 degrees C, slope -1.721 mV per degree
const SENSOR_VOLTS_AT_27C: f32 = 0.706;
const SENSOR_SLOPE: f32 = 0.001_721;

/// Convert a raw 12-bit sample of the on-chip sensor to degrees Celsius.
pub fn celsius_from_raw(raw: u16) -> f32 {
    let volts = f32::from(raw) * (ADC_REFERENCE_VOLTS / ADC_STEPS);
    27.0 - (volts - SENSOR_VOLTS_AT_27C) / SENSOR_SLOPE
}

/// On-chip temperature sensor, sampled on demand.
pub struct Thermometer<A> {
    sensor: A,
}

impl<A: TemperatureSensor> Thermometer<A> {
    pub fn new(sensor: A) -> Self {
        Self { sensor }
    }

    pub async fn read_celsius(&mut self) -> Result<f32, PeripheralError> {
        let raw = self.sensor.read_raw().await?;
        Ok(celsius_from_raw(raw))
    }

    pub fn sensor(&self) -> &A {
        &self.sensor
    }
}
