pub mod scripted;
pub mod unavailable;

use serde::{Deserialize, Serialize};

use crate::error::DictationResult;

/// Event emitted by a speech capture capability during an active interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CaptureEvent {
    /// Provisional fragment, superseded by the next result. May be shown as
    /// a preview but is never persisted into the live transcript.
    Interim(String),
    /// Confirmed fragment, appended to the live transcript.
    Final(String),
    /// Capability-level failure. The session is forcibly stopped and the
    /// unfinalized transcript discarded.
    Error(String),
    /// The underlying capture ended on its own (e.g. silence timeout).
    /// Treated as an implicit stop.
    Ended,
}

/// Trait for host speech-recognition bindings.
///
/// The workflow never talks to a concrete speech API; the host injects an
/// implementation of this trait. Bindings bridge their native callbacks into
/// an internal queue which the session manager drains through [`poll`].
///
/// [`poll`]: SpeechCapture::poll
pub trait SpeechCapture: Send {
    /// Begin a capture interval. Returns `CapabilityUnavailable` when the
    /// host has no speech recognition; callers log and disable dictation
    /// controls rather than propagate.
    fn start(&mut self) -> DictationResult<()>;

    /// End the current capture interval. Idempotent: stopping an inactive
    /// capture is a no-op. Events not yet delivered as final are dropped.
    fn stop(&mut self);

    /// Whether the host provides speech recognition at all.
    fn is_available(&self) -> bool;

    /// Drain events produced since the last poll, in delivery order.
    fn poll(&mut self) -> Vec<CaptureEvent>;
}
