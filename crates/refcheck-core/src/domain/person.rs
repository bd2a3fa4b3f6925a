//! Committer and tagger identity.

use serde::{Deserialize, Serialize};

/// A committer or tagger identity.
///
/// Deliberately a plain value, not a wrapper around any VCS-library type:
/// the descriptor builder only ever reads the display name and the email
/// address, so nothing else is modeled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,
}

impl Person {
    /// Create a new identity.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_signature_form() {
        let person = Person::new("Alice", "a@x.com");
        assert_eq!(person.to_string(), "Alice <a@x.com>");
    }

    #[test]
    fn serde_roundtrip() {
        let person = Person::new("Alice", "a@x.com");
        let json = serde_json::to_string(&person).expect("serialize");
        let deserialized: Person = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(person, deserialized);
    }
}
