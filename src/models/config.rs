//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::call::CallTimings;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob handed to Tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    pub assets_dir: String,
    /// Key material for the flash message cookie, at least 64 bytes.
    pub secret: String,
    pub items_per_page: usize,
    pub call: CallConfig,
}

/// Delays of the simulated AI receptionist call, in seconds.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct CallConfig {
    pub connect_delay_secs: u32,
    pub complete_delay_secs: u32,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            connect_delay_secs: 2,
            complete_delay_secs: 5,
        }
    }
}

impl CallConfig {
    pub fn timings(&self) -> CallTimings {
        CallTimings::from_secs(self.connect_delay_secs, self.complete_delay_secs)
    }
}
