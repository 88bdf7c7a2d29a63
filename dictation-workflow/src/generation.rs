use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::DictationConfig;
use crate::document::DocumentType;
use crate::error::DictationResult;

/// Submission payload assembled from a validated draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub document_type: DocumentType,
    pub patient_id: Option<Uuid>,
    pub transcript_text: String,
    pub language: String,
}

/// Identifier of a generated document, returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Trait for document generation backends.
///
/// The workflow validates and assembles the request; the backend decides how
/// the document is actually produced. Swapping the simulated backend for a
/// real one changes neither validation nor session state handling.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> DictationResult<GeneratedDocument>;
}

/// Backend that simulates a network round trip with a bounded random delay
/// and always succeeds.
pub struct SimulatedBackend {
    latency_min_ms: u64,
    latency_max_ms: u64,
}

impl SimulatedBackend {
    pub fn new(config: &DictationConfig) -> Self {
        Self {
            latency_min_ms: config.simulated_latency_min_ms,
            latency_max_ms: config.simulated_latency_max_ms,
        }
    }
}

#[async_trait]
impl GenerationBackend for SimulatedBackend {
    async fn generate(&self, request: GenerationRequest) -> DictationResult<GeneratedDocument> {
        let delay_ms = if self.latency_max_ms > self.latency_min_ms {
            rand::thread_rng().gen_range(self.latency_min_ms..=self.latency_max_ms)
        } else {
            self.latency_min_ms
        };

        debug!(
            document_type = ?request.document_type,
            transcript_chars = request.transcript_text.len(),
            delay_ms = delay_ms,
            "Simulating document generation"
        );
        tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;

        Ok(GeneratedDocument {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_backend_resolves() {
        let config = DictationConfig {
            simulated_latency_min_ms: 0,
            simulated_latency_max_ms: 0,
            ..DictationConfig::default()
        };
        let backend = SimulatedBackend::new(&config);

        let request = GenerationRequest {
            document_type: DocumentType::Consultation,
            patient_id: None,
            transcript_text: "bonjour le patient".to_string(),
            language: config.language.clone(),
        };

        let document = tokio_test::block_on(backend.generate(request)).unwrap();
        assert!(document.created_at <= Utc::now());
    }
}
