use crate::eco::score::ScoringConfig;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the CLI front.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut scoring = ScoringConfig::default();
        if let Some(value) = read_u8("ECO_GREEN_BAND_MIN")? {
            scoring.green_band_min = value;
        }
        if let Some(value) = read_u8("ECO_AMBER_BAND_MIN")? {
            scoring.amber_band_min = value;
        }
        if let Some(value) = read_f64("ECO_HIGH_IMPACT_KG")? {
            scoring.high_impact_kg = value;
        }
        if let Some(value) = read_f64("ECO_MEDIUM_IMPACT_KG")? {
            scoring.medium_impact_kg = value;
        }
        if let Some(value) = read_usize("ECO_MIN_ADDRESS_LENGTH")? {
            scoring.min_address_length = value;
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            scoring,
        })
    }
}

fn read_u8(key: &'static str) -> Result<Option<u8>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u8>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(None),
    }
}

fn read_f64(key: &'static str) -> Result<Option<f64>, ConfigError> {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
            _ => Err(ConfigError::InvalidNumber { key, value: raw }),
        },
        Err(_) => Ok(None),
    }
}

fn read_usize(key: &'static str) -> Result<Option<usize>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a non-negative number, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
