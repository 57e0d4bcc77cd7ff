use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub submit_delay: Duration,
    pub seed_demo_data: bool,
    pub event_buffer: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            submit_delay: Duration::from_millis(
                env::var("SUBMIT_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1500),
            ),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| !matches!(v.trim(), "0" | "false" | "no" | "off"))
                .unwrap_or(true),
            event_buffer: env::var("EVENT_BUFFER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(256),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            submit_delay: Duration::from_millis(1500),
            seed_demo_data: true,
            event_buffer: 256,
        }
    }
}
