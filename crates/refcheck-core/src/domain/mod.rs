//! Domain models for refcheck.
//!
//! Canonical definitions for the core entities:
//! - `Person`: Immutable committer/tagger identity
//! - `CommitRecord` / `AnnotatedTag`: The two upstream record shapes
//! - `CommitDescriptor`: The normalized value consumed by policy rules

pub mod descriptor;
pub mod error;
pub mod person;
pub mod record;

// Re-export main types and errors
pub use descriptor::CommitDescriptor;
pub use error::{RecordError, Result};
pub use person::Person;
pub use record::{AnnotatedTag, CommitRecord};
