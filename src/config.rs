//! Kiosk settings.
//!
//! Sites override the defaults with a JSON file pointed to by
//! `PARKPAY_KIOSK_CONFIG`. A missing or broken file is logged and the
//! built-in defaults keep the kiosk usable.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the settings file path
pub const CONFIG_ENV: &str = "PARKPAY_KIOSK_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KioskConfig {
    /// Parking lot name shown in the footer
    pub site_name: String,
    /// Service hotline shown in the footer
    pub hotline: String,
    /// Plate the mocked entry camera always reports
    pub demo_plate: String,
    /// Shortest plate accepted by the input screen
    pub min_plate_len: usize,
    /// Tariff per started hour
    pub rate_cents_per_hour: u32,
    /// Daily tariff cap
    pub daily_cap_cents: u32,

    // Timings, all milliseconds
    /// Car-entering phase of the scan animation
    pub scan_entering_ms: u64,
    /// Camera phase of the scan animation
    pub scan_scanning_ms: u64,
    /// Result display before the landing screen
    pub scan_scanned_ms: u64,
    /// Landing animation before the main menu
    pub landing_ms: u64,
    /// Mocked card reader delay before approval
    pub card_read_ms: u64,
    /// Thank-you screen before the automatic restart
    pub thank_you_ms: u64,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            site_name: "Montiggler See - P1 - Wald".into(),
            hotline: "Störungshotline +39 0471 143 05 02".into(),
            demo_plate: "GRZ-M266".into(),
            min_plate_len: 3,
            rate_cents_per_hour: 150,
            daily_cap_cents: 1200,
            scan_entering_ms: 1500,
            scan_scanning_ms: 1500,
            scan_scanned_ms: 2000,
            landing_ms: 3000,
            card_read_ms: 3000,
            thank_you_ms: 8000,
        }
    }
}

impl KioskConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load from `PARKPAY_KIOSK_CONFIG` if set, defaults otherwise.
    pub fn load() -> Self {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => match Self::from_file(Path::new(&path)) {
                Ok(config) => {
                    log::info!("Loaded kiosk config from {}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring kiosk config {}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KioskConfig::default();
        assert_eq!(config.demo_plate, "GRZ-M266");
        assert_eq!(config.min_plate_len, 3);
        assert_eq!(config.landing_ms, 3000);
        assert_eq!(config.thank_you_ms, 8000);
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let config: KioskConfig =
            serde_json::from_str(r#"{"siteName": "Testplatz", "demoPlate": "BZ-123AB"}"#).unwrap();
        assert_eq!(config.site_name, "Testplatz");
        assert_eq!(config.demo_plate, "BZ-123AB");
        // Untouched fields fall back to defaults
        assert_eq!(config.card_read_ms, 3000);
    }
}
