use serde::{Deserialize, Serialize};

use crate::error::{DictationError, DictationResult};

/// Dictation workflow configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictationConfig {
    /// Master switch for voice dictation. When false the workflow behaves as
    /// if the host had no speech-recognition capability.
    pub dictation_enabled: bool,
    /// BCP-47 language tag forwarded to the capture capability and the
    /// generation backend.
    pub language: String,
    /// Lower bound of the simulated submission round trip, in milliseconds.
    pub simulated_latency_min_ms: u64,
    /// Upper bound of the simulated submission round trip, in milliseconds.
    pub simulated_latency_max_ms: u64,
}

impl Default for DictationConfig {
    fn default() -> Self {
        Self {
            dictation_enabled: true,
            language: "fr-FR".to_string(),
            simulated_latency_min_ms: 400,
            simulated_latency_max_ms: 1200,
        }
    }
}

impl DictationConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> DictationResult<Self> {
        let defaults = Self::default();

        let dictation_enabled = std::env::var("DICTATION_ENABLED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.dictation_enabled);

        let language = std::env::var("DICTATION_LANGUAGE")
            .unwrap_or(defaults.language);

        let simulated_latency_min_ms = std::env::var("DICTATION_LATENCY_MIN_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.simulated_latency_min_ms);

        let simulated_latency_max_ms = std::env::var("DICTATION_LATENCY_MAX_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.simulated_latency_max_ms);

        if simulated_latency_min_ms > simulated_latency_max_ms {
            return Err(DictationError::Config(format!(
                "latency bounds inverted: min {} > max {}",
                simulated_latency_min_ms, simulated_latency_max_ms
            )));
        }

        Ok(Self {
            dictation_enabled,
            language,
            simulated_latency_min_ms,
            simulated_latency_max_ms,
        })
    }
}
