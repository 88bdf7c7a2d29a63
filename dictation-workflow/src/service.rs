use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::capture::SpeechCapture;
use crate::capture::unavailable::UnavailableCapture;
use crate::config::DictationConfig;
use crate::document::{DocumentDraft, DocumentType};
use crate::error::{DictationError, DictationResult};
use crate::generation::{GeneratedDocument, GenerationBackend, GenerationRequest};
use crate::notify::{Notification, NotificationSink};
use crate::recording::Recording;
use crate::session::{RecordingManager, SessionPhase};

/// Snapshot of the authoring state for UI binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftStats {
    pub phase: SessionPhase,
    pub recording_count: usize,
    pub live_transcript_chars: usize,
    pub dictation_available: bool,
}

/// Voice-driven document authoring workflow.
///
/// Owns one dictation session, the current draft and its recordings, and the
/// generation backend. Capability and capture failures are handled here and
/// surfaced through the notification sink; they never propagate to the host.
/// Validation and submission failures are returned to the caller, with the
/// draft left intact.
pub struct DictationService {
    config: DictationConfig,
    session: RecordingManager,
    draft: DocumentDraft,
    backend: Box<dyn GenerationBackend>,
    notifications: Arc<dyn NotificationSink>,
}

impl DictationService {
    pub fn new(
        config: DictationConfig,
        capture: Box<dyn SpeechCapture>,
        backend: Box<dyn GenerationBackend>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        let capture = if config.dictation_enabled {
            capture
        } else {
            info!("Voice dictation disabled by configuration");
            Box::new(UnavailableCapture::new())
        };

        Self {
            config,
            session: RecordingManager::new(capture),
            draft: DocumentDraft::new(),
            backend,
            notifications,
        }
    }

    pub fn dictation_available(&self) -> bool {
        self.session.dictation_available()
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    pub fn live_transcript(&self) -> &str {
        self.session.live_transcript()
    }

    pub fn interim_preview(&self) -> Option<&str> {
        self.session.interim_preview()
    }

    pub fn draft(&self) -> &DocumentDraft {
        &self.draft
    }

    pub fn recordings(&self) -> &[Recording] {
        self.draft.recordings.list()
    }

    pub fn active_recording(&self) -> Option<&Recording> {
        self.draft.recordings.active()
    }

    pub fn stats(&self) -> DraftStats {
        DraftStats {
            phase: self.session.phase(),
            recording_count: self.draft.recordings.len(),
            live_transcript_chars: self.session.live_transcript().len(),
            dictation_available: self.dictation_available(),
        }
    }

    /// Begin a new dictation session. An unavailable capability is logged
    /// and surfaced as a notification, never propagated; the host should
    /// also check [`dictation_available`](Self::dictation_available) and
    /// disable the controls up front.
    pub fn start_dictation(&mut self) {
        match self.session.start() {
            Ok(()) => {
                info!("Dictation started");
            }
            Err(DictationError::CapabilityUnavailable) => {
                warn!("Dictation requested without a speech-recognition capability");
                self.notifications.notify(Notification::warning(
                    "Dictation unavailable",
                    "Speech recognition is not available on this device.",
                ));
            }
            Err(err) => {
                warn!(error = %err, "Could not start dictation");
                self.notifications.notify(Notification::error(
                    "Dictation error",
                    err.to_string(),
                ));
            }
        }
    }

    pub fn pause_dictation(&mut self) {
        self.session.pause();
    }

    pub fn resume_dictation(&mut self) {
        if let Err(err) = self.session.resume() {
            warn!(error = %err, "Could not resume dictation");
            self.notifications.notify(Notification::error(
                "Dictation error",
                err.to_string(),
            ));
        }
    }

    /// End the current session. A non-empty transcript becomes a recording
    /// in the draft; an empty one leaves the draft untouched.
    pub fn stop_dictation(&mut self) -> Option<Uuid> {
        let recording = self.session.final_stop()?;
        let id = recording.id;
        info!(recording_id = %id, "Recording added to draft");
        self.draft.recordings.add(recording);
        Some(id)
    }

    /// Drain pending capture events. The host calls this from its event
    /// loop; an implicit stop (capability ended on its own) finalizes the
    /// session exactly like [`stop_dictation`](Self::stop_dictation).
    pub fn pump_capture(&mut self) {
        match self.session.pump() {
            Ok(Some(recording)) => {
                info!(recording_id = %recording.id, "Recording added to draft (implicit stop)");
                self.draft.recordings.add(recording);
            }
            Ok(None) => {}
            Err(err) => {
                self.notifications.notify(Notification::error(
                    "Dictation interrupted",
                    err.to_string(),
                ));
            }
        }
    }

    pub fn select_recording(&mut self, id: Uuid) {
        self.draft.recordings.select(id);
    }

    pub fn remove_recording(&mut self, id: Uuid) {
        self.draft.recordings.remove(id);
        debug!(recording_id = %id, remaining = self.draft.recordings.len(), "Recording removed");
    }

    pub fn set_document_type(&mut self, document_type: Option<DocumentType>) {
        self.draft.document_type = document_type;
    }

    pub fn set_patient(&mut self, patient_id: Option<Uuid>) {
        self.draft.patient_id = patient_id;
    }

    /// Generation preconditions, surfaced inline next to the controls.
    pub fn validate(&self) -> DictationResult<()> {
        self.draft.validate()
    }

    /// Validate and submit the draft. On success the caller is expected to
    /// navigate away; on failure the draft is preserved and the caller may
    /// retry. Stopping or pausing dictation while a submission is in flight
    /// does not cancel it.
    pub async fn submit(&mut self) -> DictationResult<GeneratedDocument> {
        self.draft.validate()?;

        // validate() guarantees both the type and an active recording.
        let document_type = self
            .draft
            .document_type
            .ok_or(DictationError::MissingDocumentType)?;
        let transcript_text = self
            .draft
            .recordings
            .active()
            .map(|r| r.text.clone())
            .ok_or(DictationError::NoRecordingSelected)?;

        let request = GenerationRequest {
            document_type,
            patient_id: self.draft.patient_id,
            transcript_text,
            language: self.config.language.clone(),
        };

        info!(document_type = ?document_type, "Submitting document generation");
        match self.backend.generate(request).await {
            Ok(document) => {
                info!(document_id = %document.id, "Document generated");
                self.notifications.notify(Notification::success(
                    "Document generated",
                    format!("{} created.", document_type.label()),
                ));
                Ok(document)
            }
            Err(err) => {
                warn!(error = %err, "Document generation failed");
                self.notifications.notify(Notification::error(
                    "Generation failed",
                    "The document could not be generated. Your draft is unchanged.",
                ));
                Err(match err {
                    failed @ DictationError::SubmissionFailed(_) => failed,
                    other => DictationError::SubmissionFailed(other.to_string()),
                })
            }
        }
    }

    /// Whether leaving the authoring screen must be confirmed: true exactly
    /// when there is unsaved work (a live transcript or any recording).
    pub fn requires_confirmation(&self) -> bool {
        !self.session.live_transcript().is_empty() || !self.draft.recordings.is_empty()
    }

    /// Confirmed discard: stops any active capture and clears the draft and
    /// every recording unconditionally.
    pub fn discard_draft(&mut self) {
        self.session.abort();
        self.draft.clear();
        info!("Draft discarded");
    }
}
