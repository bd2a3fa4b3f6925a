//! Upstream record shapes.
//!
//! The integration layer hands over two different shapes for "something a
//! policy rule should check": a commit record and an annotated-tag record.
//! Both are plain data; the reconciliation into one uniform value happens
//! in [`crate::domain::descriptor`].

use serde::{Deserialize, Serialize};

use crate::domain::person::Person;

/// A commit as exposed by the underlying version-control integration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommitRecord {
    /// Commit id (eg, git hash).
    pub id: String,

    /// Committer identity, absent when the upstream record carries none.
    /// Absence is propagated, never substituted with a placeholder.
    pub committer: Option<Person>,

    /// Raw commit message, exactly as the integration delivered it —
    /// including a trailing newline when the access path produces one.
    pub message: String,

    /// Parent commit ids. More than one parent makes this a merge commit.
    pub parents: Vec<String>,
}

impl CommitRecord {
    /// Create a new commit record.
    pub fn new(
        id: impl Into<String>,
        committer: Option<Person>,
        message: impl Into<String>,
        parents: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            committer,
            message: message.into(),
            parents,
        }
    }
}

/// An annotated tag as exposed by the underlying version-control
/// integration. Tags have no parents in this model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotatedTag {
    /// Tag object id.
    pub id: String,

    /// Tagger identity, absent when the upstream record carries none.
    pub tagger: Option<Person>,

    /// Tag message. Optional upstream, unlike a commit message.
    pub message: Option<String>,
}

impl AnnotatedTag {
    /// Create a new annotated-tag record.
    pub fn new(id: impl Into<String>, tagger: Option<Person>, message: Option<String>) -> Self {
        Self {
            id: id.into(),
            tagger,
            message,
        }
    }
}
