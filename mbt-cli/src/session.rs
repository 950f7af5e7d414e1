use std::time::Duration;

use log::LevelFilter;

/// Where and how to talk to the Modbus server.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub host: String,
    pub port: u16,
    pub unit_id: u8,
    /// Seconds, always > 0.
    pub timeout: f64,
    pub debug: bool,
    /// Log level used while debug mode is off.
    pub log_floor: LevelFilter,
}

impl SessionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            host: "localhost".to_string(),
            port: 502,
            unit_id: 1,
            timeout: 5.0,
            debug: false,
            log_floor: LevelFilter::Warn,
        }
    }
}

/// Output rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    pub dump_hex: bool,
    pub dump_32b: bool,
    pub swap_bytes: bool,
    pub swap_words: bool,
}

/// Parse an `on`/`off` switch argument, case-insensitive.
pub fn parse_switch(arg: &str) -> Option<bool> {
    match arg.to_ascii_lowercase().as_str() {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

pub fn switch_str(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Global log level for the given debug flag. Transport traces are logged at
/// debug level so they show up in debug mode, or when `floor` (from
/// `RUST_LOG`) already lets them through.
pub fn log_level(debug: bool, floor: LevelFilter) -> LevelFilter {
    if debug {
        floor.max(LevelFilter::Debug)
    } else {
        floor
    }
}

/// Parse a strictly positive, finite number of seconds.
pub fn parse_timeout(arg: &str) -> Option<f64> {
    arg.parse::<f64>()
        .ok()
        .filter(|t| t.is_finite() && *t > 0.0)
}
