//! Contact form submission state machine
//!
//! A submission moves `Idle -> Pending -> {Succeeded, Failed}`. Validation
//! happens synchronously inside [`Submitter::begin`]; a form with an empty
//! field fails straight away without a request. Each accepted submission gets
//! a [`Ticket`], and only the first outcome reported for the pending ticket is
//! allowed to settle it.

use super::{ContactForm, ContactMessage};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields";
pub const MSG_WAKING_SERVER: &str =
    "Waking up server... This may take 30-60 seconds on first request.";
pub const MSG_SENT: &str = "Message sent successfully! I'll get back to you soon.";
pub const MSG_SEND_FAILED: &str = "Failed to send message. Please try again.";

/// Outcome shown to the user after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    None,
    Info(String),
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Info(m) | Self::Success(m) | Self::Error(m) => Some(m),
        }
    }
}

/// Why a submission did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("one or more fields are empty")]
    MissingFields,
    #[error("endpoint rejected the message with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("no response within {0:?}")]
    TimedOut(Duration),
    #[error("transport failure: {0}")]
    Transport(String),
}

impl SubmissionError {
    /// Text shown to the user for this failure
    pub fn user_message(&self, fallback_email: &str) -> String {
        match self {
            Self::MissingFields => MSG_MISSING_FIELDS.to_string(),
            Self::Rejected { message, .. } => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(MSG_SEND_FAILED)
                .to_string(),
            Self::TimedOut(_) => format!(
                "Request timed out. The server might be waking up. Please try again in a moment, or email me directly at {fallback_email}"
            ),
            Self::Transport(_) => format!(
                "Network error. Please try again or email me directly at {fallback_email}"
            ),
        }
    }
}

/// Result of one delivery attempt
pub type SubmissionOutcome = Result<(), SubmissionError>;

/// Identifies one accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(Uuid);

impl Ticket {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Pending(Ticket),
    Succeeded,
    Failed,
}

/// What the caller should do after [`Submitter::begin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginOutcome {
    /// Validation passed; send `message` and report back with `ticket`
    Dispatch {
        ticket: Ticket,
        message: ContactMessage,
    },
    /// A field was empty; status already set, nothing to send
    Invalid,
    /// A submission is already in flight; nothing changed
    AlreadyPending,
}

/// Owns the submission phase and the status shown to the user
#[derive(Debug, Clone, Default)]
pub struct Submitter {
    phase: SubmissionPhase,
    status: SubmissionStatus,
    fallback_email: String,
}

impl Submitter {
    pub fn new(fallback_email: impl Into<String>) -> Self {
        Self {
            fallback_email: fallback_email.into(),
            ..Default::default()
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// True exactly while a request is in flight
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Pending(_))
    }

    /// Validate the form and, if complete, move to pending.
    ///
    /// Called while pending this is a no-op: the Send control is disabled
    /// for the whole pending interval.
    pub fn begin(&mut self, form: &ContactForm) -> BeginOutcome {
        if let SubmissionPhase::Pending(ticket) = self.phase {
            tracing::debug!("Ignoring submit while {ticket} is pending");
            return BeginOutcome::AlreadyPending;
        }

        if !form.is_complete() {
            self.phase = SubmissionPhase::Failed;
            let message = SubmissionError::MissingFields.user_message(&self.fallback_email);
            self.status = SubmissionStatus::Error(message);
            return BeginOutcome::Invalid;
        }

        let ticket = Ticket::new();
        self.phase = SubmissionPhase::Pending(ticket);
        self.status = SubmissionStatus::Info(MSG_WAKING_SERVER.to_string());
        tracing::info!("Submitting contact message {ticket}");

        BeginOutcome::Dispatch {
            ticket,
            message: form.to_message(),
        }
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns false, changing nothing, when `ticket` is not the pending one
    /// (already settled, or superseded). On success the form is cleared; on
    /// failure it is left untouched.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        outcome: SubmissionOutcome,
        form: &mut ContactForm,
    ) -> bool {
        if self.phase != SubmissionPhase::Pending(ticket) {
            tracing::debug!("Dropping outcome for settled submission {ticket}");
            return false;
        }

        match outcome {
            Ok(()) => {
                tracing::info!("Contact message {ticket} delivered");
                self.phase = SubmissionPhase::Succeeded;
                self.status = SubmissionStatus::Success(MSG_SENT.to_string());
                form.clear();
            }
            Err(err) => {
                tracing::warn!("Contact message {ticket} failed: {err}");
                self.phase = SubmissionPhase::Failed;
                self.status = SubmissionStatus::Error(err.user_message(&self.fallback_email));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "me@example.com";

    fn filled_form() -> ContactForm {
        ContactForm::filled("A", "a@b.com", "Hi", "Hello")
    }

    fn dispatch(submitter: &mut Submitter, form: &ContactForm) -> Ticket {
        match submitter.begin(form) {
            BeginOutcome::Dispatch { ticket, .. } => ticket,
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_is_rejected_without_dispatch() {
            let mut submitter = Submitter::new(FALLBACK);
            let outcome = submitter.begin(&ContactForm::new());
            assert_eq!(outcome, BeginOutcome::Invalid);
            assert_eq!(
                submitter.status(),
                &SubmissionStatus::Error("Please fill in all fields".to_string())
            );
            assert!(!submitter.is_submitting());
        }

        #[test]
        fn test_missing_message_is_rejected() {
            let mut submitter = Submitter::new(FALLBACK);
            let form = ContactForm::filled("A", "a@b.com", "Hi", "");
            assert_eq!(submitter.begin(&form), BeginOutcome::Invalid);
            assert_eq!(submitter.phase, SubmissionPhase::Failed);
        }

        #[test]
        fn test_each_missing_field_is_rejected() {
            let cases = [
                ContactForm::filled("", "a@b.com", "Hi", "Hello"),
                ContactForm::filled("A", "", "Hi", "Hello"),
                ContactForm::filled("A", "a@b.com", "", "Hello"),
                ContactForm::filled("A", "a@b.com", "Hi", ""),
            ];
            for form in cases {
                let mut submitter = Submitter::new(FALLBACK);
                assert_eq!(submitter.begin(&form), BeginOutcome::Invalid);
                assert_eq!(submitter.status().message(), Some(MSG_MISSING_FIELDS));
            }
        }
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_complete_form_goes_pending_with_info() {
            let mut submitter = Submitter::new(FALLBACK);
            let form = filled_form();
            match submitter.begin(&form) {
                BeginOutcome::Dispatch { message, .. } => {
                    assert_eq!(message, form.to_message());
                }
                other => panic!("expected dispatch, got {other:?}"),
            }
            assert!(submitter.is_submitting());
            assert_eq!(
                submitter.status(),
                &SubmissionStatus::Info(MSG_WAKING_SERVER.to_string())
            );
        }

        #[test]
        fn test_success_clears_form() {
            let mut submitter = Submitter::new(FALLBACK);
            let mut form = filled_form();
            let ticket = dispatch(&mut submitter, &form);

            assert!(submitter.settle(ticket, Ok(()), &mut form));
            assert_eq!(
                submitter.status(),
                &SubmissionStatus::Success(
                    "Message sent successfully! I'll get back to you soon.".to_string()
                )
            );
            assert!(!submitter.is_submitting());
            assert!(form.fields().iter().all(|f| f.as_text().is_empty()));
        }

        #[test]
        fn test_rejection_with_endpoint_message_keeps_form() {
            let mut submitter = Submitter::new(FALLBACK);
            let mut form = filled_form();
            let ticket = dispatch(&mut submitter, &form);

            let err = SubmissionError::Rejected {
                status: 500,
                message: Some("quota exceeded".to_string()),
            };
            assert!(submitter.settle(ticket, Err(err), &mut form));
            assert_eq!(
                submitter.status(),
                &SubmissionStatus::Error("quota exceeded".to_string())
            );
            assert_eq!(form.to_message(), filled_form().to_message());
        }

        #[test]
        fn test_rejection_without_message_uses_fallback_text() {
            let mut submitter = Submitter::new(FALLBACK);
            let mut form = filled_form();
            let ticket = dispatch(&mut submitter, &form);

            let err = SubmissionError::Rejected {
                status: 500,
                message: None,
            };
            submitter.settle(ticket, Err(err), &mut form);
            assert_eq!(
                submitter.status(),
                &SubmissionStatus::Error("Failed to send message. Please try again.".to_string())
            );
        }

        #[test]
        fn test_timeout_message_includes_fallback_address() {
            let mut submitter = Submitter::new(FALLBACK);
            let mut form = filled_form();
            let ticket = dispatch(&mut submitter, &form);

            submitter.settle(
                ticket,
                Err(SubmissionError::TimedOut(Duration::from_secs(90))),
                &mut form,
            );
            assert_eq!(
                submitter.status(),
                &SubmissionStatus::Error(
                    "Request timed out. The server might be waking up. Please try again in a moment, or email me directly at me@example.com".to_string()
                )
            );
            assert!(form.is_complete());
        }

        #[test]
        fn test_transport_failure_message() {
            let mut submitter = Submitter::new(FALLBACK);
            let mut form = filled_form();
            let ticket = dispatch(&mut submitter, &form);

            submitter.settle(
                ticket,
                Err(SubmissionError::Transport("connection refused".to_string())),
                &mut form,
            );
            assert_eq!(
                submitter.status().message(),
                Some("Network error. Please try again or email me directly at me@example.com")
            );
            assert!(!submitter.is_submitting());
        }

        #[test]
        fn test_resubmit_after_error_discards_previous_status() {
            let mut submitter = Submitter::new(FALLBACK);
            let mut form = filled_form();
            let ticket = dispatch(&mut submitter, &form);
            submitter.settle(
                ticket,
                Err(SubmissionError::Transport("reset".to_string())),
                &mut form,
            );

            let second = dispatch(&mut submitter, &form);
            assert_ne!(second, ticket);
            assert!(matches!(submitter.status(), SubmissionStatus::Info(_)));
        }
    }

    mod settled_guard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_late_outcome_after_timeout_is_ignored() {
            let mut submitter = Submitter::new(FALLBACK);
            let mut form = filled_form();
            let ticket = dispatch(&mut submitter, &form);

            assert!(submitter.settle(
                ticket,
                Err(SubmissionError::TimedOut(Duration::from_secs(90))),
                &mut form
            ));
            let after_timeout = submitter.status().clone();

            assert!(!submitter.settle(ticket, Ok(()), &mut form));
            assert_eq!(submitter.status(), &after_timeout);
            assert!(form.is_complete());
        }

        #[test]
        fn test_outcome_for_unknown_ticket_is_ignored() {
            let mut submitter = Submitter::new(FALLBACK);
            let mut form = filled_form();
            let _pending = dispatch(&mut submitter, &form);

            assert!(!submitter.settle(Ticket::new(), Ok(()), &mut form));
            assert!(submitter.is_submitting());
            assert!(form.is_complete());
        }

        #[test]
        fn test_outcome_while_idle_is_ignored() {
            let mut submitter = Submitter::new(FALLBACK);
            let mut form = filled_form();
            assert!(!submitter.settle(Ticket::new(), Ok(()), &mut form));
            assert_eq!(submitter.status(), &SubmissionStatus::None);
        }

        #[test]
        fn test_submit_while_pending_is_ignored() {
            let mut submitter = Submitter::new(FALLBACK);
            let form = filled_form();
            let ticket = dispatch(&mut submitter, &form);

            assert_eq!(submitter.begin(&form), BeginOutcome::AlreadyPending);
            assert_eq!(submitter.phase, SubmissionPhase::Pending(ticket));

            // Even an empty form does not disturb the pending submission
            assert_eq!(
                submitter.begin(&ContactForm::new()),
                BeginOutcome::AlreadyPending
            );
            assert!(submitter.is_submitting());
        }
    }

    mod status {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_has_no_message() {
            assert_eq!(SubmissionStatus::default().message(), None);
        }

        #[test]
        fn test_empty_endpoint_message_falls_back() {
            let err = SubmissionError::Rejected {
                status: 400,
                message: Some(String::new()),
            };
            assert_eq!(err.user_message(FALLBACK), MSG_SEND_FAILED);
        }

        #[test]
        fn test_error_display() {
            let err = SubmissionError::Rejected {
                status: 502,
                message: None,
            };
            assert_eq!(
                err.to_string(),
                "endpoint rejected the message with status 502"
            );
        }
    }
}
