use embassy_rp::{
    Peri,
    clocks::clk_sys_freq,
    pwm::{ChannelBPin, Config, Pwm, Slice},
};
use robo_face_core::{PeripheralError, config::PWM_TOP, ports::BuzzerPwm};

/// Buzzer on the B output of a PWM slice, wrapped at [`PWM_TOP`].
pub struct PwmBuzzer {
    pwm: Pwm<'static>,
    config: Config,
}

impl PwmBuzzer {
    /// Configure the slice for a `frequency` Hz carrier, silent.
    pub fn new<T: Slice>(
        slice: Peri<'static, T>,
        pin: Peri<'static, impl ChannelBPin<T>>,
        frequency: u32,
    ) -> Self {
        let mut config = Config::default();
        config.top = PWM_TOP;
        config.divider = clock_divider(frequency).into();
        config.compare_b = 0;
        log::debug!("buzzer: {} Hz carrier", frequency);

        let pwm = Pwm::new_output_b(slice, pin, config.clone());
        Self { pwm, config }
    }
}

/// Integer divider of the system clock giving one wrap per carrier period.
fn clock_divider(frequency: u32) -> u8 {
    let per_wrap = frequency.saturating_mul(u32::from(PWM_TOP) + 1).max(1);
    let divider = (clk_sys_freq() / per_wrap).max(1);
    u8::try_from(divider).unwrap_or(u8::MAX)
}

impl BuzzerPwm for PwmBuzzer {
    fn set_level(&mut self, level: u16) -> Result<(), PeripheralError> {
        self.config.compare_b = level.min(PWM_TOP);
        self.pwm.set_config(&self.config);
        Ok(())
    }
}
