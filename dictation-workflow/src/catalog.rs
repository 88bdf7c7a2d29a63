/// Read-only collaborator interfaces queried when the authoring screen opens.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::DocumentType;
use crate::error::DictationResult;

/// One entry of the document template catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateKind {
    pub id: DocumentType,
    pub label: String,
}

/// Provider of the enumerated document template kinds.
#[async_trait]
pub trait TemplateCatalog: Send + Sync {
    async fn template_kinds(&self) -> DictationResult<Vec<TemplateKind>>;
}

/// Static catalog covering the fixed template kinds.
#[derive(Debug, Default)]
pub struct StaticTemplateCatalog;

#[async_trait]
impl TemplateCatalog for StaticTemplateCatalog {
    async fn template_kinds(&self) -> DictationResult<Vec<TemplateKind>> {
        Ok(DocumentType::ALL
            .iter()
            .map(|kind| TemplateKind {
                id: *kind,
                label: kind.label().to_string(),
            })
            .collect())
    }
}

/// Patient reference for the optional document association.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRef {
    pub id: Uuid,
    pub name: String,
}

/// Provider of `{id, name}` pairs for the optional patient association.
#[async_trait]
pub trait PatientDirectory: Send + Sync {
    async fn patients(&self) -> DictationResult<Vec<PatientRef>>;
}

/// In-memory directory, the same shape a backed directory would return.
#[derive(Debug, Default)]
pub struct StaticPatientDirectory {
    patients: Vec<PatientRef>,
}

impl StaticPatientDirectory {
    pub fn new(patients: Vec<PatientRef>) -> Self {
        Self { patients }
    }
}

#[async_trait]
impl PatientDirectory for StaticPatientDirectory {
    async fn patients(&self) -> DictationResult<Vec<PatientRef>> {
        Ok(self.patients.clone())
    }
}
