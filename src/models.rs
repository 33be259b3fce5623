//! Frontend Models
//!
//! Content data for career pages and the contact form's state/payload.

use serde::Serialize;

/// One career specialization's page content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Specialization {
    /// URL path segment, unique across the table
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    /// Introductory paragraphs
    pub overview: &'static [&'static str],
    pub responsibilities: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub salaries: &'static [SalaryBand],
    pub resources: &'static [Resource],
}

/// One row of the salary table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBand {
    pub level: &'static str,
    pub range: &'static str,
}

/// External study resource (book, course, reference)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resource {
    pub title: &'static str,
    pub url: &'static str,
}

/// Contact form fields as the user types them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// All three fields filled in (the form-level required constraint)
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    /// Reset every field at once; only called after a confirmed send
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Wire payload for the mail-relay endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_draft() -> ContactDraft {
        ContactDraft {
            name: "Alice".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        }
    }

    #[test]
    fn draft_updates_are_independent_per_field() {
        let mut draft = ContactDraft::default();
        draft.name = "Alice".to_string();
        draft.email = "a@b.com".to_string();
        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.email, "a@b.com");
        assert_eq!(draft.message, "");
    }

    #[test]
    fn draft_clear_resets_every_field() {
        let mut draft = make_draft();
        draft.clear();
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn draft_complete_requires_all_fields() {
        assert!(make_draft().is_complete());

        let mut missing_message = make_draft();
        missing_message.message.clear();
        assert!(!missing_message.is_complete());

        assert!(!ContactDraft::default().is_complete());
    }

    #[test]
    fn contact_message_serializes_to_relay_shape() {
        let json = serde_json::to_value(make_draft().to_message()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Alice",
                "email": "a@b.com",
                "message": "hi",
            })
        );
    }
}
