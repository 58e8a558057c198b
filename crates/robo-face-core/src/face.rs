//! The device context: every piece of state the firmware mutates, owned in
//! one place and driven from the single main loop.

use embassy_time::Instant;
use embedded_hal_async::delay::DelayNs;

use crate::{
    buzzer::{Buzzer, BuzzerState},
    command::{BuzzerAction, Command},
    config::{BuzzerConfig, TIMER_SLOTS},
    display::DisplayQueue,
    http::{PageResponse, route},
    matrix::LedMatrix,
    ports::{BuzzerPwm, NetworkService, StripWriter, TemperatureSensor, TextDisplay},
    presets::BLANK,
    scheduler::{TimedTask, Timers},
    thermometer::Thermometer,
};

/// Robot face device context.
///
/// `S` strip, `D` settle delay, `P` buzzer PWM, `X` text display, `A`
/// temperature sensor.
pub struct RoboFace<S, D, P, X, A> {
    matrix: LedMatrix<S, D>,
    buzzer: Buzzer<P>,
    screen: X,
    captions: DisplayQueue,
    thermometer: Thermometer<A>,
    timers: Timers,
}

impl<S, D, P, X, A> RoboFace<S, D, P, X, A>
where
    S: StripWriter,
    D: DelayNs,
    P: BuzzerPwm,
    X: TextDisplay,
    A: TemperatureSensor,
{
    pub fn new(
        strip: S,
        delay: D,
        pwm: P,
        screen: X,
        sensor: A,
        buzzer: BuzzerConfig,
    ) -> Self {
        Self {
            matrix: LedMatrix::new(strip, delay),
            buzzer: Buzzer::new(pwm, buzzer),
            screen,
            captions: DisplayQueue::new(),
            thermometer: Thermometer::new(sensor),
            timers: Timers::new(),
        }
    }

    /// Push a dark frame so the strip starts from a known state.
    pub async fn blank(&mut self) {
        if let Err(e) = self.matrix.update_frame(&BLANK).await {
            log::warn!("face: initial frame failed: {}", e);
        }
    }

    /// Apply one command: preset, buzzer action, caption.
    pub async fn apply(&mut self, command: Command, now: Instant) {
        log::info!("face: applying {:?}", command);

        if let Err(e) = self.matrix.update_frame(command.preset()).await {
            log::warn!("face: matrix update failed: {}", e);
        }

        let buzzer = match command.buzzer() {
            BuzzerAction::On => self.buzzer.turn_on(now, &mut self.timers),
            BuzzerAction::Off => self.buzzer.turn_off(&mut self.timers),
            BuzzerAction::Keep => Ok(()),
        };
        if let Err(e) = buzzer {
            log::warn!("face: buzzer update failed: {}", e);
        }

        self.captions.request_message(command.caption());
    }

    /// Serve one request head: route it, apply the command it names (if
    /// any), then build the page with a fresh temperature reading.
    pub async fn handle(&mut self, head: &[u8], now: Instant) -> PageResponse {
        match route(head) {
            Some(command) => self.apply(command, now).await,
            None => log::debug!("face: request matched no command"),
        }

        let temperature = match self.thermometer.read_celsius().await {
            Ok(celsius) => Some(celsius),
            Err(e) => {
                log::warn!("face: temperature read failed: {}", e);
                None
            }
        };
        PageResponse::new(temperature)
    }

    /// Fire every timer that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        // Bounded so a zero-length interval cannot spin forever.
        for _ in 0..TIMER_SLOTS {
            let Some(task) = self.timers.pop_due(now) else {
                break;
            };
            match task {
                TimedTask::BuzzerToggle => {
                    if let Err(e) = self.buzzer.toggle(now, &mut self.timers) {
                        log::warn!("face: buzzer toggle failed: {}", e);
                    }
                }
            }
        }
    }

    /// Render the pending caption, if any. Returns whether one was drawn.
    pub fn drain_display(&mut self) -> bool {
        match self.captions.drain_if_pending(&mut self.screen) {
            Ok(drawn) => drawn,
            Err(e) => {
                log::warn!("face: display render failed: {}", e);
                false
            }
        }
    }

    /// Timer and display half of a loop iteration.
    pub fn refresh(&mut self, now: Instant) {
        self.tick(now);
        self.drain_display();
    }

    /// One main loop iteration minus the trailing sleep: serve waiting
    /// requests, fire due timers, then render the pending caption.
    pub async fn poll<N: NetworkService>(&mut self, network: &mut N, now: Instant) {
        while let Some(request) = network.next_request() {
            let response = self.handle(request.head(), now).await;
            network.respond(response);
        }
        self.refresh(now);
    }

    pub fn matrix(&self) -> &LedMatrix<S, D> {
        &self.matrix
    }

    pub fn buzzer(&self) -> &Buzzer<P> {
        &self.buzzer
    }

    pub fn buzzer_state(&self) -> BuzzerState {
        self.buzzer.state()
    }

    pub fn next_toggle(&self) -> Option<Instant> {
        self.timers.deadline(TimedTask::BuzzerToggle)
    }

    pub fn captions(&self) -> &DisplayQueue {
        &self.captions
    }

    pub fn screen(&self) -> &X {
        &self.screen
    }

    pub fn thermometer(&self) -> &Thermometer<A> {
        &self.thermometer
    }
}
