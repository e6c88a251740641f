//! Contact form fields and submission status.
//!
//! Delivery of the message (and any artificial delay or auto-reset timer) is up
//! to the page; this module only decides what is valid and which status follows.

use serde::{Deserialize, Serialize};

use sangam_core::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(DomainError::validation("email address is not valid"));
        }
        if self.message.trim().is_empty() {
            return Err(DomainError::validation("message cannot be empty"));
        }
        Ok(())
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "reason")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Form contents plus where the submission stands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactFormState {
    pub form: ContactForm,
    status: SubmissionStatus,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Validate and move to `Submitting`. Returns the payload to send.
    pub fn begin_submit(&mut self) -> DomainResult<ContactForm> {
        if self.status == SubmissionStatus::Submitting {
            return Err(DomainError::conflict("a submission is already in progress"));
        }
        self.form.validate()?;
        self.status = SubmissionStatus::Submitting;
        tracing::debug!(subject = %self.form.subject, "contact form submitting");
        Ok(self.form.clone())
    }

    /// Delivery succeeded: clear the fields.
    pub fn complete(&mut self) -> DomainResult<()> {
        self.ensure_submitting()?;
        self.form = ContactForm::default();
        self.status = SubmissionStatus::Succeeded;
        tracing::info!("contact form submitted");
        Ok(())
    }

    /// Delivery failed: keep the fields so the visitor can retry.
    pub fn fail(&mut self, reason: impl Into<String>) -> DomainResult<()> {
        self.ensure_submitting()?;
        let reason = reason.into();
        tracing::warn!(%reason, "contact form submission failed");
        self.status = SubmissionStatus::Failed(reason);
        Ok(())
    }

    /// Dismiss the success or failure notice.
    pub fn acknowledge(&mut self) {
        if matches!(
            self.status,
            SubmissionStatus::Succeeded | SubmissionStatus::Failed(_)
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    fn ensure_submitting(&self) -> DomainResult<()> {
        if self.status != SubmissionStatus::Submitting {
            return Err(DomainError::conflict(format!(
                "no submission in progress (status: {:?})",
                self.status
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.form.set(ContactField::Name, "Priya Sharma");
        state.form.set(ContactField::Email, "priya@example.com");
        state.form.set(ContactField::Subject, "Custom order");
        state.form.set(ContactField::Message, "Can you build a 6-seater in sheesham?");
        state
    }

    #[test]
    fn validation_requires_name_email_and_message() {
        let mut form = filled().form;
        assert!(form.validate().is_ok());

        form.set(ContactField::Email, "priya.example.com");
        assert!(matches!(form.validate(), Err(DomainError::Validation(_))));

        for bad in ["@example.com", "priya@", "pri ya@example.com", "a@b@c"] {
            form.set(ContactField::Email, bad);
            assert!(form.validate().is_err(), "{bad} should be rejected");
        }

        let mut form = filled().form;
        form.set(ContactField::Message, "   ");
        assert!(form.validate().is_err());

        let mut form = filled().form;
        form.set(ContactField::Name, "");
        assert!(form.validate().is_err());
    }

    #[test]
    fn phone_and_subject_are_optional() {
        let mut form = filled().form;
        form.set(ContactField::Subject, "");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn successful_submission_clears_fields() {
        let mut state = filled();
        let payload = state.begin_submit().unwrap();
        assert_eq!(payload.name, "Priya Sharma");
        assert_eq!(state.status(), &SubmissionStatus::Submitting);

        state.complete().unwrap();
        assert_eq!(state.status(), &SubmissionStatus::Succeeded);
        assert!(state.form.is_blank());

        state.acknowledge();
        assert_eq!(state.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn failed_submission_keeps_fields_for_retry() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.fail("network unreachable").unwrap();
        assert_eq!(state.status(), &SubmissionStatus::Failed("network unreachable".into()));
        assert!(!state.form.is_blank());

        // Retrying straight from the failure notice is allowed.
        state.begin_submit().unwrap();
        state.complete().unwrap();
    }

    #[test]
    fn invalid_transitions_conflict() {
        let mut state = filled();
        assert!(matches!(state.complete(), Err(DomainError::Conflict(_))));
        assert!(matches!(state.fail("x"), Err(DomainError::Conflict(_))));

        state.begin_submit().unwrap();
        assert!(matches!(state.begin_submit(), Err(DomainError::Conflict(_))));
    }

    #[test]
    fn invalid_form_does_not_start_submitting() {
        let mut state = ContactFormState::new();
        assert!(matches!(state.begin_submit(), Err(DomainError::Validation(_))));
        assert_eq!(state.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn status_serializes_with_tag() {
        let json = serde_json::to_value(SubmissionStatus::Failed("timeout".into())).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "timeout");
    }
}
