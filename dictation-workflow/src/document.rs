use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DictationError, DictationResult};
use crate::recording::RecordingStore;

/// Fixed catalog of document template kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Consultation,
    Prescription,
    Certificate,
    Report,
    Letter,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Consultation,
        DocumentType::Prescription,
        DocumentType::Certificate,
        DocumentType::Report,
        DocumentType::Letter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Consultation => "Consultation note",
            DocumentType::Prescription => "Prescription",
            DocumentType::Certificate => "Medical certificate",
            DocumentType::Report => "Report",
            DocumentType::Letter => "Letter",
        }
    }
}

/// In-progress document authoring state.
///
/// The draft exclusively owns its recordings for the lifetime of the
/// authoring screen; nothing outside the workflow mutates them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentDraft {
    pub document_type: Option<DocumentType>,
    pub patient_id: Option<Uuid>,
    pub recordings: RecordingStore,
}

impl DocumentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation preconditions: a document type is chosen and the active
    /// selection resolves to a stored, non-empty recording. The patient
    /// association stays optional.
    pub fn validate(&self) -> DictationResult<()> {
        if self.document_type.is_none() {
            return Err(DictationError::MissingDocumentType);
        }
        match self.recordings.active() {
            Some(recording) if !recording.text.is_empty() => Ok(()),
            _ => Err(DictationError::NoRecordingSelected),
        }
    }

    /// Drop all draft state, recordings included.
    pub fn clear(&mut self) {
        self.document_type = None;
        self.patient_id = None;
        self.recordings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::Recording;

    #[test]
    fn test_validate_requires_document_type_first() {
        let mut draft = DocumentDraft::new();
        draft.recordings.add(Recording::new("bonjour".to_string()));

        assert_eq!(draft.validate(), Err(DictationError::MissingDocumentType));

        draft.document_type = Some(DocumentType::Consultation);
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_validate_requires_resolvable_recording() {
        let mut draft = DocumentDraft::new();
        draft.document_type = Some(DocumentType::Prescription);

        assert_eq!(draft.validate(), Err(DictationError::NoRecordingSelected));
    }

    #[test]
    fn test_patient_is_optional() {
        let mut draft = DocumentDraft::new();
        draft.document_type = Some(DocumentType::Certificate);
        draft.recordings.add(Recording::new("repos trois jours".to_string()));
        assert!(draft.patient_id.is_none());

        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_document_type_wire_names_are_snake_case() {
        let json = serde_json::to_string(&DocumentType::Consultation).unwrap();
        assert_eq!(json, "\"consultation\"");
        let parsed: DocumentType = serde_json::from_str("\"prescription\"").unwrap();
        assert_eq!(parsed, DocumentType::Prescription);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut draft = DocumentDraft::new();
        draft.document_type = Some(DocumentType::Report);
        draft.patient_id = Some(uuid::Uuid::new_v4());
        draft.recordings.add(Recording::new("text".to_string()));

        draft.clear();
        assert!(draft.document_type.is_none());
        assert!(draft.patient_id.is_none());
        assert!(draft.recordings.is_empty());
    }
}
