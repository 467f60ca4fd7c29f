//! Submission lifecycle of a single booking form instance.
//!
//! `Idle -> Submitting -> Success | Error`, with `Error -> Submitting` on
//! retry and `reset` taking any state back to `Idle`. Every submission gets
//! an [`AttemptId`]; completions for an attempt that is no longer current
//! (the form was reset, or the component went away and came back) are
//! ignored.

use crate::booking::form_data::{BookingPayload, BookingReceipt, ConsultationForm, FormField};
use crate::booking::lead_store::PersistError;

pub const GENERIC_ERROR: &str =
    "Something went wrong while sending your request. Please try again, or pick a time directly on our calendar.";

#[derive(Debug, Clone, PartialEq)]
pub enum BookingState {
    Idle,
    Submitting,
    Success(BookingReceipt),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptId(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRejected {
    InFlight,
    MissingFields(Vec<FormField>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed,
    Stale,
}

#[derive(Debug)]
pub struct BookingFlow {
    source_page: String,
    form: ConsultationForm,
    state: BookingState,
    in_flight: Option<AttemptId>,
    last_attempt: u64,
    pending_redirect: Option<AttemptId>,
}

impl BookingFlow {
    pub fn new(source_page: impl Into<String>) -> Self {
        Self {
            source_page: source_page.into(),
            form: ConsultationForm::default(),
            state: BookingState::Idle,
            in_flight: None,
            last_attempt: 0,
            pending_redirect: None,
        }
    }

    pub fn source_page(&self) -> &str {
        &self.source_page
    }

    pub fn form(&self) -> &ConsultationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ConsultationForm {
        &mut self.form
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Starts a submission. Checked synchronously, so a second submit that
    /// arrives before the disabled button re-renders is refused here.
    pub fn begin_submit(&mut self) -> Result<(AttemptId, BookingPayload), SubmitRejected> {
        if self.in_flight.is_some() {
            return Err(SubmitRejected::InFlight);
        }
        let missing = self.form.missing_required();
        if !missing.is_empty() {
            return Err(SubmitRejected::MissingFields(missing));
        }

        self.last_attempt += 1;
        let attempt = AttemptId(self.last_attempt);
        self.in_flight = Some(attempt);
        self.state = BookingState::Submitting;
        Ok((attempt, self.form.to_payload(&self.source_page)))
    }

    pub fn finish(
        &mut self,
        attempt: AttemptId,
        outcome: Result<BookingReceipt, PersistError>,
    ) -> Completion {
        if self.in_flight != Some(attempt) {
            return Completion::Stale;
        }
        self.in_flight = None;

        match outcome {
            Ok(receipt) => {
                self.form = ConsultationForm::default();
                self.state = BookingState::Success(receipt);
                self.pending_redirect = Some(attempt);
                Completion::Succeeded
            }
            Err(e) => {
                log::error!("Failed to save consultation request from {}: {}", self.source_page, e);
                self.state = BookingState::Error(GENERIC_ERROR.to_string());
                Completion::Failed
            }
        }
    }

    /// The direct calendar link offered while the last attempt has failed.
    pub fn escape_hatch<'a>(&self, calendar_url: &'a str) -> Option<&'a str> {
        matches!(self.state, BookingState::Error(_)).then_some(calendar_url)
    }

    /// True exactly once per successful attempt.
    pub fn take_redirect(&mut self, attempt: AttemptId) -> bool {
        if self.pending_redirect == Some(attempt) {
            self.pending_redirect = None;
            true
        } else {
            false
        }
    }

    /// Back to `Idle`. Whatever is still in flight becomes stale; typed
    /// values are kept.
    pub fn reset(&mut self) {
        self.in_flight = None;
        self.state = BookingState::Idle;
    }
}
