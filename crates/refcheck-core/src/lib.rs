//! Refcheck Core Library
//!
//! Normalizes heterogeneous version-control records — commits and annotated
//! tags, each exposed by the underlying integration with a different shape —
//! into the uniform [`CommitDescriptor`] value that commit-policy rules
//! evaluate.

pub mod domain;
pub mod raw;

pub use domain::{AnnotatedTag, CommitDescriptor, CommitRecord, Person, RecordError, Result};

pub use raw::{parse_annotated_tag, parse_commit};

/// Refcheck version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
