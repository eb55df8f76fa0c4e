// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Nothing here is secret: the service is an in-memory mock, so every
//! setting has a usable default for local development.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Multiplier applied to every simulated latency (0 disables sleeping)
    pub latency_scale: f64,
    /// Whether the store starts with the demo account and its records
    pub seed_demo_data: bool,
    /// Fixed seed for the synthetic workout extractor (random when unset)
    pub extractor_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:3000".to_string(),
            latency_scale: 1.0,
            seed_demo_data: true,
            extractor_seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            latency_scale: parse_latency_scale(parse_var("LATENCY_SCALE")?)?,
            seed_demo_data: match env::var("SEED_DEMO_DATA") {
                Ok(raw) => parse_flag("SEED_DEMO_DATA", &raw)?,
                Err(_) => defaults.seed_demo_data,
            },
            extractor_seed: parse_var("EXTRACTOR_SEED")?,
        })
    }

    /// Config for tests: no latency, empty store, deterministic extractor.
    pub fn test_default() -> Self {
        Self {
            latency_scale: 0.0,
            seed_demo_data: false,
            extractor_seed: Some(42),
            ..Self::default()
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(None),
    }
}

fn parse_latency_scale(value: Option<f64>) -> Result<f64, ConfigError> {
    match value {
        None => Ok(1.0),
        Some(scale) if scale.is_finite() && scale >= 0.0 => Ok(scale),
        Some(scale) => Err(ConfigError::Invalid("LATENCY_SCALE", scale.to_string())),
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(name, raw.to_string())),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
