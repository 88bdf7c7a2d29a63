use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A finalized dictation transcript.
///
/// Frozen at finalize time: the text and timestamp never change afterwards.
/// A recording leaves the store only through explicit deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    pub id: Uuid,
    pub text: String,
    pub captured_at: DateTime<Utc>,
}

impl Recording {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            captured_at: Utc::now(),
        }
    }

    /// Human-readable capture time, e.g. "14:32:05".
    pub fn timestamp_label(&self) -> String {
        self.captured_at.format("%H:%M:%S").to_string()
    }
}

/// Ordered set of recordings for the current draft, with at most one
/// active selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordingStore {
    recordings: Vec<Recording>,
    active_id: Option<Uuid>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recording (insertion order = capture order) and make it the
    /// active selection. Ids are UUIDv4, so the store never holds two
    /// recordings with the same id and ids are never reused after deletion.
    pub fn add(&mut self, recording: Recording) {
        self.active_id = Some(recording.id);
        self.recordings.push(recording);
    }

    /// Set the active selection. No-op when the id is not in the store.
    pub fn select(&mut self, id: Uuid) {
        if self.recordings.iter().any(|r| r.id == id) {
            self.active_id = Some(id);
        }
    }

    /// Delete a recording. When the deleted recording was active, the first
    /// remaining recording in list order becomes active; when the store
    /// empties, the selection is cleared.
    pub fn remove(&mut self, id: Uuid) {
        self.recordings.retain(|r| r.id != id);
        if self.active_id == Some(id) {
            self.active_id = self.recordings.first().map(|r| r.id);
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Recording> {
        self.recordings.iter().find(|r| r.id == id)
    }

    pub fn active(&self) -> Option<&Recording> {
        self.active_id.and_then(|id| self.get(id))
    }

    pub fn active_id(&self) -> Option<Uuid> {
        self.active_id
    }

    pub fn list(&self) -> &[Recording] {
        &self.recordings
    }

    pub fn len(&self) -> usize {
        self.recordings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recordings.is_empty()
    }

    pub fn clear(&mut self) {
        self.recordings.clear();
        self.active_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_label_is_human_readable() {
        let recording = Recording::new("bonjour".to_string());
        let label = recording.timestamp_label();

        // "HH:MM:SS", e.g. "14:32:05".
        assert_eq!(label.len(), 8);
        assert_eq!(
            label.chars().filter(|c| *c == ':').count(),
            2,
            "unexpected label shape: {label}"
        );
        assert_eq!(label, recording.captured_at.format("%H:%M:%S").to_string());
    }

    #[test]
    fn test_add_selects_new_recording() {
        let mut store = RecordingStore::new();
        let r1 = Recording::new("first".to_string());
        let r2 = Recording::new("second".to_string());
        let id2 = r2.id;

        store.add(r1);
        store.add(r2);

        assert_eq!(store.len(), 2);
        assert_eq!(store.active_id(), Some(id2));
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut store = RecordingStore::new();
        let r1 = Recording::new("first".to_string());
        let id1 = r1.id;
        store.add(r1);

        store.select(Uuid::new_v4());
        assert_eq!(store.active_id(), Some(id1));
    }

    #[test]
    fn test_remove_active_reselects_first_remaining() {
        let mut store = RecordingStore::new();
        let r1 = Recording::new("first".to_string());
        let r2 = Recording::new("second".to_string());
        let (id1, id2) = (r1.id, r2.id);
        store.add(r1);
        store.add(r2);

        store.remove(id2);
        assert_eq!(store.active_id(), Some(id1));
    }

    #[test]
    fn test_remove_inactive_keeps_selection() {
        let mut store = RecordingStore::new();
        let r1 = Recording::new("first".to_string());
        let r2 = Recording::new("second".to_string());
        let (id1, id2) = (r1.id, r2.id);
        store.add(r1);
        store.add(r2);

        store.remove(id1);
        assert_eq!(store.active_id(), Some(id2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_last_clears_selection() {
        let mut store = RecordingStore::new();
        let r1 = Recording::new("only".to_string());
        let id1 = r1.id;
        store.add(r1);

        store.remove(id1);
        assert!(store.is_empty());
        assert_eq!(store.active_id(), None);
    }
}
