//! Contact form
//!
//! The form never talks to a server: every submission is acknowledged and
//! the fields are cleared, whatever they contained.

use serde::Serialize;

/// Message shown after every submission
pub const CONTACT_ACK_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

/// Snapshot of the fields at submit time
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Result of a submission
#[derive(Clone, Debug, PartialEq)]
pub enum Acknowledgement {
    /// Shown to the visitor; carries what was submitted for logging
    Sent {
        message: &'static str,
        submission: Submission,
    },
}

impl Acknowledgement {
    /// Text for the visitor
    pub fn message(&self) -> &'static str {
        match self {
            Acknowledgement::Sent { message, .. } => message,
        }
    }

    pub fn submission(&self) -> &Submission {
        match self {
            Acknowledgement::Sent { submission, .. } => submission,
        }
    }
}

/// Contact form fields
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Take the fields, leaving the form empty, and acknowledge them
    pub fn submit(&mut self) -> Acknowledgement {
        let submission = Submission {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email),
            message: std::mem::take(&mut self.message),
        };
        Acknowledgement::Sent {
            message: CONTACT_ACK_MESSAGE,
            submission,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_clears_and_acknowledges() {
        let mut form = ContactForm::new("Ada", "ada@example.com", "Hello");
        let ack = form.submit();
        assert!(form.is_empty());
        assert_eq!(ack.message(), CONTACT_ACK_MESSAGE);
        assert_eq!(ack.submission().name, "Ada");
        assert_eq!(ack.submission().email, "ada@example.com");
    }

    #[test]
    fn test_empty_form_still_acknowledged() {
        let mut form = ContactForm::default();
        let ack = form.submit();
        assert_eq!(ack.message(), CONTACT_ACK_MESSAGE);
        assert_eq!(ack.submission(), &Submission::default());
        assert!(form.is_empty());
    }

    #[test]
    fn test_submission_serializes() {
        let mut form = ContactForm::new("A", "not-an-email", "");
        let json = serde_json::to_string(form.submit().submission()).unwrap();
        assert_eq!(json, r#"{"name":"A","email":"not-an-email","message":""}"#);
    }
}
