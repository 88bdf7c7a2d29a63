//! Voice-Driven Document Capture Workflow for Healthcare EMR
//!
//! Implements the dictation and document generation workflow used by the
//! authoring screen of a clinical documentation front end: live speech
//! capture, recording management, and AI-assisted document generation
//! (consultation notes, prescriptions, certificates, reports, letters).
//!
//! # Components
//!
//! - **Speech capture adapter**: trait seam over the host's live
//!   speech-recognition capability, with scripted and unavailable bindings
//! - **Recording session manager**: `Idle → Recording → Paused → Stopped`
//!   lifecycle accumulating final transcript fragments
//! - **Recording store**: ordered recordings with at-most-one active
//!   selection and deletion fallback
//! - **Document draft**: template kind, optional patient association, and
//!   generation preconditions
//! - **Generation backend**: async seam simulating (or performing) the
//!   document generation round trip
//! - **Draft guard**: decides whether discarding unsaved work needs
//!   confirmation
//!
//! Transcripts are PHI: the workflow logs identifiers and character counts,
//! never transcript bodies.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dictation_workflow::{
//!     DictationConfig, DictationService, DocumentType, SimulatedBackend, TracingSink,
//!     capture::scripted::ScriptedCapture,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DictationConfig::from_env()?;
//! let backend = SimulatedBackend::new(&config);
//! let capture = ScriptedCapture::finals(&["bonjour", "le patient"]);
//!
//! let mut service = DictationService::new(
//!     config,
//!     Box::new(capture),
//!     Box::new(backend),
//!     Arc::new(TracingSink),
//! );
//!
//! service.start_dictation();
//! service.pump_capture();
//! let recording_id = service.stop_dictation();
//! assert!(recording_id.is_some());
//!
//! service.set_document_type(Some(DocumentType::Consultation));
//! let document = service.submit().await?;
//! println!("Generated document {}", document.id);
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod generation;
pub mod notify;
pub mod recording;
pub mod service;
pub mod session;

pub use catalog::*;
pub use config::*;
pub use document::*;
pub use error::*;
pub use generation::*;
pub use notify::*;
pub use recording::*;
pub use service::*;
pub use session::*;
