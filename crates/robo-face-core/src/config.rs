use embassy_time::Duration;

/// Side length of the square LED matrix.
pub const MATRIX_SIDE: usize = 5;

/// Number of pixels on the strip behind the matrix.
pub const LED_COUNT: usize = MATRIX_SIDE * MATRIX_SIDE;

/// Bytes sent to the strip per full frame (G, R, B per pixel).
pub const FRAME_BYTES: usize = LED_COUNT * 3;

/// Reset time the strip needs after a frame before it latches.
pub const STRIP_SETTLE_US: u32 = 100;

/// Top of the 12-bit PWM counter driving the buzzer.
pub const PWM_TOP: u16 = 4095;

/// Longest caption accepted by the display queue, in characters.
pub const DISPLAY_MAX_CHARS: usize = 49;

/// Width and height of one glyph of the display font, in pixels.
pub const GLYPH_WIDTH: i32 = 8;
pub const GLYPH_HEIGHT: i32 = 13;

/// Pause at the end of every main loop iteration.
pub const POLL_SLICE: Duration = Duration::from_millis(10);

/// Capacity of the buffer that collects one request head.
pub const REQUEST_HEAD_CAPACITY: usize = 512;

/// Capacity needed to render the full page response.
pub const RESPONSE_CAPACITY: usize = 1536;

/// Number of concurrently scheduled timed tasks.
pub const TIMER_SLOTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuzzerConfig {
    /// Duty level written while the tone is sounding.
    pub duty_on: u16,
    /// Cadence of the on/off toggle. `None` holds a steady tone.
    pub toggle_interval: Option<Duration>,
}

/// Buzzer of the web server variant: beeps in 500 ms halves.
pub const WEB_BUZZER: BuzzerConfig = BuzzerConfig {
    duty_on: 1024,
    toggle_interval: Some(Duration::from_millis(500)),
};

/// Buzzer of the button variant: steady tone while the button is held.
pub const STANDALONE_BUZZER: BuzzerConfig = BuzzerConfig {
    duty_on: 2048,
    toggle_interval: None,
};
