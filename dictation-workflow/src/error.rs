use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictationError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Speech recognition is not available on this host")]
    CapabilityUnavailable,

    #[error("Speech capture error: {0}")]
    Capture(String),

    #[error("No document type selected")]
    MissingDocumentType,

    #[error("No recording selected")]
    NoRecordingSelected,

    #[error("Document generation failed: {0}")]
    SubmissionFailed(String),

    #[error("Invalid session transition: {0}")]
    InvalidTransition(String),
}

pub type DictationResult<T> = Result<T, DictationError>;
