//! Invitee emails for the trip being created.

use serde::{Deserialize, Serialize};

use crate::error::GuestError;

/// Ordered, deduplicated list of invitee emails.
///
/// Entries are stored normalized (trimmed, lower-cased) in insertion
/// order; membership ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestList {
    emails: Vec<String>,
}

impl GuestList {
    pub fn new() -> Self {
        GuestList::default()
    }

    /// Validate, normalize and append a candidate email.
    ///
    /// The list is unchanged when the candidate is malformed or already
    /// present.
    pub fn add(&mut self, candidate: &str) -> Result<(), GuestError> {
        let normalized = normalize(candidate);

        if !is_valid_email(&normalized) {
            return Err(GuestError::InvalidEmail);
        }

        if self.emails.iter().any(|e| e == &normalized) {
            return Err(GuestError::DuplicateGuest);
        }

        self.emails.push(normalized);
        Ok(())
    }

    /// Remove the matching entry; no-op when absent.
    pub fn remove(&mut self, email: &str) {
        let normalized = normalize(email);
        self.emails.retain(|e| e != &normalized);
    }

    pub fn contains(&self, email: &str) -> bool {
        let normalized = normalize(email);
        self.emails.iter().any(|e| e == &normalized)
    }

    /// Entries in insertion order.
    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

/// Standard email shape: local part, "@", and a domain containing at
/// least one dot, with no whitespace anywhere.
pub(crate) fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}
