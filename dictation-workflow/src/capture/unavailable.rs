/// Capture binding for hosts without speech recognition.
///
/// `start` always fails with `CapabilityUnavailable`; callers detect this
/// (or check `is_available` up front) and disable dictation controls.
use crate::capture::{CaptureEvent, SpeechCapture};
use crate::error::{DictationError, DictationResult};

#[derive(Debug, Default)]
pub struct UnavailableCapture;

impl UnavailableCapture {
    pub fn new() -> Self {
        Self
    }
}

impl SpeechCapture for UnavailableCapture {
    fn start(&mut self) -> DictationResult<()> {
        Err(DictationError::CapabilityUnavailable)
    }

    fn stop(&mut self) {}

    fn is_available(&self) -> bool {
        false
    }

    fn poll(&mut self) -> Vec<CaptureEvent> {
        Vec::new()
    }
}
