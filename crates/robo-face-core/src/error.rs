use core::fmt;

/// Failure reported by one of the peripheral ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeripheralError {
    /// LED strip transmission failed
    Strip,
    /// PWM duty could not be programmed
    Pwm,
    /// Display did not accept the frame
    Display,
    /// Temperature sample could not be read
    Adc,
}

impl fmt::Display for PeripheralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeripheralError::Strip => "led strip",
            PeripheralError::Pwm => "pwm",
            PeripheralError::Display => "display",
            PeripheralError::Adc => "adc",
        };
        write!(f, "{name} failure")
    }
}
