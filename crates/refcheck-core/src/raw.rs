//! Raw git object adaptation.
//!
//! Pure text-to-record adaptation for the two object bodies the descriptor
//! builder normalizes. A git object body is a run of `key value` header
//! lines, a blank line, then the free-form message; this module splits the
//! two, collects `parent` headers, and extracts `Name <email>` identities.
//!
//! Fetching object bodies out of a repository belongs to the integration
//! layer; nothing here touches a process, a socket, or the filesystem.

use tracing::trace;

use crate::domain::error::{RecordError, Result};
use crate::domain::person::Person;
use crate::domain::record::{AnnotatedTag, CommitRecord};

/// Adapt a raw commit object body into a [`CommitRecord`].
///
/// `id` is the object hash the body was addressed by; bodies do not repeat
/// it. Unrecognized headers (`tree`, `author`, `gpgsig`, ...) are skipped.
/// The message keeps whatever trailing terminator the body carries —
/// trailing-newline handling is the descriptor's concern, not this layer's.
///
/// A body with no message section is an error: commits always have one,
/// even if empty.
pub fn parse_commit(id: impl Into<String>, body: &str) -> Result<CommitRecord> {
    let id = id.into();
    let (headers, message) = split_sections(body);
    let message = message.ok_or_else(|| RecordError::MissingMessage { id: id.clone() })?;

    let mut committer = None;
    let mut parents = Vec::new();
    for line in headers.lines() {
        if let Some(hash) = line.strip_prefix("parent ") {
            parents.push(hash.to_string());
        } else if let Some(signature) = line.strip_prefix("committer ") {
            committer = Some(parse_identity(signature)?);
        }
    }

    trace!(event = "raw.commit_adapted", id = %id, parents = parents.len());

    Ok(CommitRecord::new(id, committer, message, parents))
}

/// Adapt a raw annotated-tag object body into an [`AnnotatedTag`].
///
/// Unlike a commit, a tag may legitimately carry no message; a body without
/// a message section adapts to `message: None`.
pub fn parse_annotated_tag(id: impl Into<String>, body: &str) -> Result<AnnotatedTag> {
    let id = id.into();
    let (headers, message) = split_sections(body);

    let mut tagger = None;
    for line in headers.lines() {
        if let Some(signature) = line.strip_prefix("tagger ") {
            tagger = Some(parse_identity(signature)?);
        }
    }

    trace!(event = "raw.tag_adapted", id = %id, has_message = message.is_some());

    Ok(AnnotatedTag::new(id, tagger, message))
}

/// Split an object body into its header block and message section at the
/// first blank line. `None` when the body has no message section at all.
fn split_sections(body: &str) -> (&str, Option<String>) {
    match body.split_once("\n\n") {
        Some((headers, message)) => (headers, Some(message.to_string())),
        None => (body, None),
    }
}

/// Parse a `Name <email> ...` signature line into a [`Person`].
///
/// The identity is delimited by the first `<`/`>` pair; whatever follows
/// the closing bracket (timestamp, timezone) is ignored. The name may be
/// empty.
fn parse_identity(signature: &str) -> Result<Person> {
    let malformed = || RecordError::MalformedIdentity {
        line: signature.to_string(),
    };

    let (name, rest) = signature.split_once('<').ok_or_else(malformed)?;
    let (email, _) = rest.split_once('>').ok_or_else(malformed)?;

    Ok(Person::new(name.trim_end(), email))
}
