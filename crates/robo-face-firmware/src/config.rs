//! Board wiring and compile-time settings.

use embassy_time::Duration;

pub struct WifiConfig {
    pub ssid: &'static str,
    pub password: &'static str,
    pub join_timeout: Duration,
}

pub struct HttpConfig {
    pub port: u16,
    pub socket_timeout: Duration,
}

pub struct NetworkConfig {
    pub seed: u64,
}

pub struct BuzzerPwmConfig {
    /// Carrier frequency of the tone, in Hz
    pub frequency: u32,
}

pub struct DisplayConfig {
    pub address: u8,
    pub i2c_frequency: u32,
}

pub const WIFI: WifiConfig = WifiConfig {
    ssid: env!("WIFI_SSID"),
    password: env!("WIFI_PASSWORD"),
    join_timeout: Duration::from_secs(20),
};

pub const HTTP: HttpConfig = HttpConfig {
    port: 80,
    socket_timeout: Duration::from_secs(30),
};

#[allow(clippy::unreadable_literal)]
pub const NETWORK: NetworkConfig = NetworkConfig {
    seed: 0x0123_4567_89ab_cdef,
};

pub const WEB_BUZZER_PWM: BuzzerPwmConfig = BuzzerPwmConfig { frequency: 6_000 };

pub const STANDALONE_BUZZER_PWM: BuzzerPwmConfig = BuzzerPwmConfig { frequency: 1_000 };

pub const DISPLAY: DisplayConfig = DisplayConfig {
    address: 0x3C,
    i2c_frequency: 400_000,
};

/// Log level of the USB logger.
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
