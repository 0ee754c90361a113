//! Shift handler configuration.
//!
//! ```toml
//! sentence_ending_characters = ".!?¡¿"
//! double_activation_interval_ms = 400
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::sources::{DEFAULT_DOUBLE_ACTIVATION_INTERVAL, SystemTiming};

/// Characters after which the next letter is capitalized.
pub const DEFAULT_SENTENCE_ENDING_CHARACTERS: &str = ".!?\u{a1}\u{bf}";

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
	#[error("double_activation_interval_ms must be greater than zero")]
	ZeroInterval,
}

/// Tunables for [`ShiftHandler`](crate::ShiftHandler). Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShiftConfig {
	pub sentence_ending_characters: String,
	pub double_activation_interval_ms: u64,
}

impl Default for ShiftConfig {
	fn default() -> Self {
		Self {
			sentence_ending_characters: DEFAULT_SENTENCE_ENDING_CHARACTERS.to_string(),
			double_activation_interval_ms: DEFAULT_DOUBLE_ACTIVATION_INTERVAL.as_millis() as u64,
		}
	}
}

impl ShiftConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		if config.double_activation_interval_ms == 0 {
			return Err(ConfigError::ZeroInterval);
		}
		Ok(config)
	}

	/// Returns the configured double-activation interval.
	pub fn double_activation_interval(&self) -> Duration {
		Duration::from_millis(self.double_activation_interval_ms)
	}

	/// Builds a system clock using the configured interval.
	pub fn timing(&self) -> SystemTiming {
		SystemTiming::new(self.double_activation_interval())
	}
}
