use embassy_time::Instant;

use crate::{
    config::BuzzerConfig,
    error::PeripheralError,
    ports::BuzzerPwm,
    scheduler::{TimedTask, Timers},
};

/// Observable buzzer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuzzerState {
    /// Beeping was requested and not yet stopped
    pub active: bool,
    /// Current half of the square wave, `true` while sounding
    pub level: bool,
}

/// Buzzer that beeps by toggling its PWM duty from the main loop.
///
/// While active, the next toggle lives in the shared [`Timers`] under
/// [`TimedTask::BuzzerToggle`].
pub struct Buzzer<P> {
    pwm: P,
    config: BuzzerConfig,
    state: BuzzerState,
}

impl<P: BuzzerPwm> Buzzer<P> {
    pub fn new(pwm: P, config: BuzzerConfig) -> Self {
        Self {
            pwm,
            config,
            state: BuzzerState::default(),
        }
    }

    pub fn state(&self) -> BuzzerState {
        self.state
    }

    pub fn config(&self) -> &BuzzerConfig {
        &self.config
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    /// Start sounding at `now` and schedule the first toggle.
    pub fn turn_on(
        &mut self,
        now: Instant,
        timers: &mut Timers,
    ) -> Result<(), PeripheralError> {
        self.state = BuzzerState {
            active: true,
            level: true,
        };
        self.schedule_toggle(now, timers);
        self.pwm.set_level(self.config.duty_on)
    }

    /// Silence immediately, whatever the previous state.
    pub fn turn_off(&mut self, timers: &mut Timers) -> Result<(), PeripheralError> {
        self.state = BuzzerState::default();
        timers.cancel(TimedTask::BuzzerToggle);
        self.pwm.set_level(0)
    }

    /// Flip to the other half of the square wave. Called when
    /// [`TimedTask::BuzzerToggle`] falls due.
    pub fn toggle(
        &mut self,
        now: Instant,
        timers: &mut Timers,
    ) -> Result<(), PeripheralError> {
        if !self.state.active {
            return Ok(());
        }
        self.state.level = !self.state.level;
        self.schedule_toggle(now, timers);
        let level = if self.state.level {
            self.config.duty_on
        } else {
            0
        };
        self.pwm.set_level(level)
    }

    fn schedule_toggle(&self, now: Instant, timers: &mut Timers) {
        let Some(interval) = self.config.toggle_interval else {
            return;
        };
        if timers
            .schedule(TimedTask::BuzzerToggle, now + interval)
            .is_err()
        {
            log::warn!("buzzer: no timer slot left for toggle");
        }
    }
}
