//! The normalized commit descriptor.
//!
//! [`CommitDescriptor`] is the seam where the two upstream record shapes
//! are reconciled into one value every policy rule can read blindly:
//! identity extraction, merge classification, and message canonicalization
//! all happen here, in exactly one of three named construction paths.

use tracing::debug;

use crate::domain::person::Person;
use crate::domain::record::{AnnotatedTag, CommitRecord};

/// Minimal metadata required to verify a commit or an annotated tag.
///
/// Immutable once constructed; rules may read it concurrently without
/// synchronization. Constructed per evaluation and discarded afterwards —
/// it has no persistence or cross-request identity.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitDescriptor {
    id: String,
    committer: Option<Person>,
    message: Option<String>,
    is_merge: bool,
}

impl CommitDescriptor {
    /// Build a descriptor from a commit record.
    ///
    /// The committer identity is rebuilt from its name and email only; no
    /// other upstream fields are retained. The message is stored exactly
    /// as delivered — this path does not strip a trailing newline (see
    /// [`CommitDescriptor::from_fields`] for the path that does). A commit
    /// is a merge when it has more than one parent.
    pub fn from_commit(record: &CommitRecord) -> Self {
        let committer = record
            .committer
            .as_ref()
            .map(|person| Person::new(person.name.clone(), person.email.clone()));
        let is_merge = record.parents.len() > 1;

        debug!(event = "descriptor.from_commit", id = %record.id, is_merge);

        Self {
            id: record.id.clone(),
            committer,
            message: Some(record.message.clone()),
            is_merge,
        }
    }

    /// Build a descriptor from an annotated-tag record.
    ///
    /// The tagger identity is taken as-is. Tags have no parents in this
    /// model, so the descriptor is never a merge. The message, when
    /// present, is stored without stripping.
    pub fn from_annotated_tag(tag: &AnnotatedTag) -> Self {
        debug!(event = "descriptor.from_annotated_tag", id = %tag.id);

        Self {
            id: tag.id.clone(),
            committer: tag.tagger.clone(),
            message: tag.message.clone(),
            is_merge: false,
        }
    }

    /// Build a descriptor from explicit field values.
    ///
    /// Used by tests and by rules that fabricate a descriptor. The message
    /// passes through trailing-newline canonicalization; the other fields
    /// are stored verbatim.
    ///
    /// The stripping exists only on this path. The record paths above store
    /// messages unstripped, and that asymmetry is kept as observed so that
    /// existing message-pattern rules keep matching the same inputs they
    /// always have.
    pub fn from_fields(
        id: impl Into<String>,
        committer: Option<Person>,
        message: Option<String>,
        is_merge: bool,
    ) -> Self {
        let id = id.into();

        debug!(event = "descriptor.from_fields", id = %id, is_merge);

        Self {
            id,
            committer,
            message: message.map(strip_trailing_newline),
            is_merge,
        }
    }

    /// The commit or tag id, verbatim from the source record.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The committer (commit) or tagger (tag) identity, when the upstream
    /// record carried one.
    pub fn committer(&self) -> Option<&Person> {
        self.committer.as_ref()
    }

    /// The message, when present.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether this descriptor represents a merge commit.
    pub fn is_merge(&self) -> bool {
        self.is_merge
    }
}

/// Remove a single trailing newline.
///
/// One git access path delivers messages with a trailing newline that
/// another does not, and anchored message patterns must see one canonical
/// form. Exactly one terminator is stripped: `"abc\n\n"` becomes
/// `"abc\n"`, not `"abc"`. Already-canonical input is returned unchanged.
fn strip_trailing_newline(mut message: String) -> String {
    if message.ends_with('\n') {
        message.pop();
    }

    message
}
