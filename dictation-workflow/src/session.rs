use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::capture::{CaptureEvent, SpeechCapture};
use crate::error::{DictationError, DictationResult};
use crate::recording::Recording;

/// Dictation session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Recording,
    Paused,
    Stopped,
}

/// Owns the lifecycle of a single dictation session.
///
/// Drives the injected [`SpeechCapture`] binding through
/// `Idle → Recording → Paused → Stopped` and accumulates final transcript
/// fragments into the live buffer. `Stopped` is transient: every stop path
/// resets the manager to `Idle` for the next capture.
///
/// The manager exclusively owns the capture resource for the lifetime of a
/// session; the binding is stopped on drop even when the caller never called
/// [`final_stop`](Self::final_stop).
pub struct RecordingManager {
    capture: Box<dyn SpeechCapture>,
    phase: SessionPhase,
    live_transcript: String,
    interim_preview: Option<String>,
}

impl RecordingManager {
    pub fn new(capture: Box<dyn SpeechCapture>) -> Self {
        Self {
            capture,
            phase: SessionPhase::Idle,
            live_transcript: String::new(),
            interim_preview: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Final fragments accumulated so far, space-separated in delivery order.
    pub fn live_transcript(&self) -> &str {
        &self.live_transcript
    }

    /// Latest interim fragment, for preview only. Superseded by the next
    /// result and never persisted.
    pub fn interim_preview(&self) -> Option<&str> {
        self.interim_preview.as_deref()
    }

    /// Whether the host provides speech recognition at all.
    pub fn dictation_available(&self) -> bool {
        self.capture.is_available()
    }

    /// Begin a new capture session. Clears the live transcript.
    pub fn start(&mut self) -> DictationResult<()> {
        match self.phase {
            SessionPhase::Idle | SessionPhase::Stopped => {}
            SessionPhase::Recording | SessionPhase::Paused => {
                // The microphone is exclusively owned by the active session.
                return Err(DictationError::InvalidTransition(
                    "capture already active".to_string(),
                ));
            }
        }

        self.live_transcript.clear();
        self.interim_preview = None;
        self.capture.start()?;
        self.phase = SessionPhase::Recording;
        debug!("Dictation session started");
        Ok(())
    }

    /// Suspend capture without finalizing. The live transcript is retained;
    /// fragments the capability had not yet delivered as final are dropped.
    pub fn pause(&mut self) {
        if self.phase != SessionPhase::Recording {
            return;
        }
        self.capture.stop();
        self.interim_preview = None;
        self.phase = SessionPhase::Paused;
        debug!(
            transcript_chars = self.live_transcript.len(),
            "Dictation session paused"
        );
    }

    /// Resume a paused session, appending into the same live transcript.
    pub fn resume(&mut self) -> DictationResult<()> {
        if self.phase != SessionPhase::Paused {
            return Err(DictationError::InvalidTransition(
                "resume requires a paused session".to_string(),
            ));
        }
        self.capture.start()?;
        self.phase = SessionPhase::Recording;
        debug!("Dictation session resumed");
        Ok(())
    }

    /// End the session. Materializes a [`Recording`] when the live
    /// transcript is non-empty, nothing otherwise, then resets to `Idle`.
    pub fn final_stop(&mut self) -> Option<Recording> {
        match self.phase {
            SessionPhase::Recording | SessionPhase::Paused => {}
            _ => return None,
        }
        self.capture.stop();
        self.phase = SessionPhase::Stopped;
        self.finalize()
    }

    /// Drain pending capture events and apply them, returning a recording
    /// when the capability ended the session on its own (implicit stop).
    ///
    /// A capture error forces the session back to `Idle` with the
    /// unfinalized transcript discarded.
    pub fn pump(&mut self) -> DictationResult<Option<Recording>> {
        if self.phase != SessionPhase::Recording {
            return Ok(None);
        }
        for event in self.capture.poll() {
            match event {
                CaptureEvent::Interim(text) => {
                    self.interim_preview = Some(text);
                }
                CaptureEvent::Final(text) => {
                    self.append_final(&text);
                }
                CaptureEvent::Error(message) => {
                    warn!(error = %message, "Capture error, aborting session");
                    self.capture.stop();
                    self.reset();
                    return Err(DictationError::Capture(message));
                }
                CaptureEvent::Ended => {
                    debug!("Capture ended by host, finalizing session");
                    self.capture.stop();
                    self.phase = SessionPhase::Stopped;
                    return Ok(self.finalize());
                }
            }
        }
        Ok(None)
    }

    /// Stop capture and discard the live transcript without materializing
    /// anything. Used when the user confirms discarding a draft.
    pub fn abort(&mut self) {
        self.capture.stop();
        self.reset();
    }

    fn append_final(&mut self, fragment: &str) {
        self.interim_preview = None;
        if fragment.is_empty() {
            return;
        }
        if !self.live_transcript.is_empty() {
            self.live_transcript.push(' ');
        }
        self.live_transcript.push_str(fragment);
    }

    fn finalize(&mut self) -> Option<Recording> {
        let recording = if self.live_transcript.is_empty() {
            None
        } else {
            let recording = Recording::new(std::mem::take(&mut self.live_transcript));
            debug!(
                recording_id = %recording.id,
                transcript_chars = recording.text.len(),
                "Recording materialized"
            );
            Some(recording)
        };
        self.reset();
        recording
    }

    fn reset(&mut self) {
        self.live_transcript.clear();
        self.interim_preview = None;
        self.phase = SessionPhase::Idle;
    }
}

impl Drop for RecordingManager {
    fn drop(&mut self) {
        // Release the microphone on every exit path.
        self.capture.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::scripted::ScriptedCapture;
    use crate::capture::unavailable::UnavailableCapture;

    fn manager_with(intervals: Vec<Vec<CaptureEvent>>) -> RecordingManager {
        RecordingManager::new(Box::new(ScriptedCapture::new(intervals)))
    }

    #[test]
    fn test_final_fragments_accumulate_space_separated() {
        let mut manager = manager_with(vec![vec![
            CaptureEvent::Final("bonjour".to_string()),
            CaptureEvent::Final("le patient".to_string()),
        ]]);

        manager.start().unwrap();
        manager.pump().unwrap();
        assert_eq!(manager.live_transcript(), "bonjour le patient");

        let recording = manager.final_stop().unwrap();
        assert_eq!(recording.text, "bonjour le patient");
        assert_eq!(manager.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_interim_results_are_preview_only() {
        let mut manager = manager_with(vec![vec![
            CaptureEvent::Interim("bonj".to_string()),
            CaptureEvent::Final("bonjour".to_string()),
            CaptureEvent::Interim("le pat".to_string()),
        ]]);

        manager.start().unwrap();
        manager.pump().unwrap();

        assert_eq!(manager.live_transcript(), "bonjour");
        assert_eq!(manager.interim_preview(), Some("le pat"));

        let recording = manager.final_stop().unwrap();
        assert_eq!(recording.text, "bonjour");
    }

    #[test]
    fn test_stop_with_empty_transcript_materializes_nothing() {
        let mut manager = manager_with(vec![vec![CaptureEvent::Interim(
            "never final".to_string(),
        )]]);

        manager.start().unwrap();
        manager.pump().unwrap();
        assert!(manager.final_stop().is_none());
        assert_eq!(manager.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_pause_retains_transcript_and_resume_appends() {
        let mut manager = manager_with(vec![
            vec![CaptureEvent::Final("bonjour".to_string())],
            vec![CaptureEvent::Final("le patient".to_string())],
        ]);

        manager.start().unwrap();
        manager.pump().unwrap();
        manager.pause();
        assert_eq!(manager.phase(), SessionPhase::Paused);
        assert_eq!(manager.live_transcript(), "bonjour");

        manager.resume().unwrap();
        manager.pump().unwrap();
        let recording = manager.final_stop().unwrap();
        assert_eq!(recording.text, "bonjour le patient");
    }

    #[test]
    fn test_start_clears_previous_transcript() {
        let mut manager = manager_with(vec![
            vec![CaptureEvent::Final("first".to_string())],
            vec![CaptureEvent::Final("second".to_string())],
        ]);

        manager.start().unwrap();
        manager.pump().unwrap();
        manager.final_stop().unwrap();

        manager.start().unwrap();
        manager.pump().unwrap();
        assert_eq!(manager.live_transcript(), "second");
    }

    #[test]
    fn test_capture_error_discards_session() {
        let mut manager = manager_with(vec![vec![
            CaptureEvent::Final("bonjour".to_string()),
            CaptureEvent::Error("audio-capture".to_string()),
        ]]);

        manager.start().unwrap();
        let err = manager.pump().unwrap_err();
        assert_eq!(err, DictationError::Capture("audio-capture".to_string()));
        assert_eq!(manager.phase(), SessionPhase::Idle);
        assert!(manager.live_transcript().is_empty());
    }

    #[test]
    fn test_host_ended_capture_is_implicit_stop() {
        let mut manager = manager_with(vec![vec![
            CaptureEvent::Final("bonjour".to_string()),
            CaptureEvent::Ended,
        ]]);

        manager.start().unwrap();
        let recording = manager.pump().unwrap().unwrap();
        assert_eq!(recording.text, "bonjour");
        assert_eq!(manager.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_start_while_active_is_rejected() {
        let mut manager = manager_with(vec![vec![], vec![]]);
        manager.start().unwrap();
        assert!(matches!(
            manager.start(),
            Err(DictationError::InvalidTransition(_))
        ));
    }

    #[test]
    fn test_unavailable_capability() {
        let mut manager = RecordingManager::new(Box::new(UnavailableCapture::new()));
        assert!(!manager.dictation_available());
        assert_eq!(
            manager.start(),
            Err(DictationError::CapabilityUnavailable)
        );
        assert_eq!(manager.phase(), SessionPhase::Idle);
    }
}
