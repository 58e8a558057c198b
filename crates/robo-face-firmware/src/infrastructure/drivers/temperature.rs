use embassy_rp::{
    Peri,
    adc::{self, Adc, Async, Channel},
    peripherals::{ADC, ADC_TEMP_SENSOR},
};
use robo_face_core::{PeripheralError, ports::TemperatureSensor};

use crate::Irqs;

/// The RP2040 on-die temperature sensor on ADC input 4.
pub struct OnChipTemperature {
    adc: Adc<'static, Async>,
    channel: Channel<'static>,
}

impl OnChipTemperature {
    pub fn new(adc: Peri<'static, ADC>, sensor: Peri<'static, ADC_TEMP_SENSOR>) -> Self {
        Self {
            adc: Adc::new(adc, Irqs, adc::Config::default()),
            channel: Channel::new_temp_sensor(sensor),
        }
    }
}

impl TemperatureSensor for OnChipTemperature {
    async fn read_raw(&mut self) -> Result<u16, PeripheralError> {
        self.adc.read(&mut self.channel).await.map_err(|e| {
            log::debug!("adc: read failed: {:?}", e);
            PeripheralError::Adc
        })
    }
}
