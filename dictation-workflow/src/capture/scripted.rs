/// Scripted capture binding for tests and development.
///
/// Plays back a fixed sequence of event batches, one batch per capture
/// interval, without touching any real microphone.
use std::collections::VecDeque;

use crate::capture::{CaptureEvent, SpeechCapture};
use crate::error::DictationResult;

pub struct ScriptedCapture {
    intervals: VecDeque<Vec<CaptureEvent>>,
    pending: Vec<CaptureEvent>,
    capturing: bool,
}

impl ScriptedCapture {
    /// One inner `Vec` of events is delivered per `start()` call, in order.
    pub fn new(intervals: Vec<Vec<CaptureEvent>>) -> Self {
        Self {
            intervals: intervals.into(),
            pending: Vec::new(),
            capturing: false,
        }
    }

    /// Convenience constructor: a single interval of final fragments.
    pub fn finals(fragments: &[&str]) -> Self {
        Self::new(vec![fragments
            .iter()
            .map(|f| CaptureEvent::Final((*f).to_string()))
            .collect()])
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }
}

impl SpeechCapture for ScriptedCapture {
    fn start(&mut self) -> DictationResult<()> {
        self.capturing = true;
        if let Some(batch) = self.intervals.pop_front() {
            self.pending = batch;
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.capturing = false;
        // Anything not yet polled was never delivered as final.
        self.pending.clear();
    }

    fn is_available(&self) -> bool {
        true
    }

    fn poll(&mut self) -> Vec<CaptureEvent> {
        if !self.capturing {
            return Vec::new();
        }
        std::mem::take(&mut self.pending)
    }
}
