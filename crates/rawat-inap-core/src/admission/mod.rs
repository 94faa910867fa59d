//! Admission flow.
//!
//! ```text
//!   ViewingRoster ──open_form──▶ ShowingForm ──begin_submit (valid)──▶ Submitting
//!         ▲                        │    ▲                                 │
//!         └────────cancel──────────┘    └──complete_submit (gateway err)──┤
//!         ▲                                                               │
//!         └──────────complete_submit (ok, patient prepended)──────────────┘
//! ```
//!
//! While a submission is in flight, edits, re-submission and cancel are
//! rejected. `finish_submit` calls the gateway in place; hosts that must not
//! hold their lock across the round trip call the gateway themselves and hand
//! the answer to `complete_submit`.

mod form;

pub use form::*;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Patient, PatientDraft, ReferenceData};
use crate::store::{AdmissionGateway, GatewayError, GatewayResult, PatientStore};
use crate::validation::{AdmissionValidator, DraftField, ValidationErrors};

/// Flow errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("No admission form is open")]
    NotEditing,

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("No submission is in progress")]
    NotSubmitting,

    #[error("Draft is invalid: {0}")]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

pub type FlowResult<T> = Result<T, FlowError>;

/// Which screen the admission module is on.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum FlowState {
    ViewingRoster,
    ShowingForm,
    Submitting,
}

#[derive(Debug, Clone)]
enum Phase {
    Roster,
    Form(AdmissionForm),
    Submitting(AdmissionForm),
}

/// Page-level state holder: owns the roster and drives the admission form.
#[derive(Debug, Clone)]
pub struct AdmissionFlow {
    store: PatientStore,
    reference: ReferenceData,
    strict_reference: bool,
    phase: Phase,
}

impl AdmissionFlow {
    pub fn new(store: PatientStore, reference: ReferenceData) -> Self {
        Self {
            store,
            reference,
            strict_reference: false,
            phase: Phase::Roster,
        }
    }

    /// Check doctor/room selections against the reference data.
    pub fn with_strict_reference(mut self, strict: bool) -> Self {
        self.strict_reference = strict;
        self
    }

    pub fn state(&self) -> FlowState {
        match self.phase {
            Phase::Roster => FlowState::ViewingRoster,
            Phase::Form(_) => FlowState::ShowingForm,
            Phase::Submitting(_) => FlowState::Submitting,
        }
    }

    /// The open (or submitting) form, if any.
    pub fn form(&self) -> Option<&AdmissionForm> {
        match &self.phase {
            Phase::Roster => None,
            Phase::Form(form) | Phase::Submitting(form) => Some(form),
        }
    }

    pub fn store(&self) -> &PatientStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PatientStore {
        &mut self.store
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Show a blank form. An already open form is left untouched.
    pub fn open_form(&mut self, today: NaiveDate) -> FlowResult<()> {
        match self.state() {
            FlowState::ViewingRoster => {
                self.phase = Phase::Form(AdmissionForm::new(today));
                Ok(())
            }
            FlowState::ShowingForm => Ok(()),
            FlowState::Submitting => Err(FlowError::SubmissionInProgress),
        }
    }

    /// Discard the form and return to the roster.
    pub fn cancel(&mut self) -> FlowResult<()> {
        if self.state() == FlowState::Submitting {
            return Err(FlowError::SubmissionInProgress);
        }
        self.phase = Phase::Roster;
        Ok(())
    }

    pub fn edit_field(&mut self, field: DraftField, value: impl Into<String>) -> FlowResult<()> {
        match &mut self.phase {
            Phase::Form(form) => {
                form.edit(field, value);
                Ok(())
            }
            Phase::Submitting(_) => Err(FlowError::SubmissionInProgress),
            Phase::Roster => Err(FlowError::NotEditing),
        }
    }

    /// Validate the draft; on success lock the form for submission.
    ///
    /// Returns a copy of the locked draft for the gateway. On failure the form
    /// stays open with the errors attached.
    pub fn begin_submit(&mut self, today: NaiveDate) -> FlowResult<PatientDraft> {
        let form = match &mut self.phase {
            Phase::Form(form) => form,
            Phase::Submitting(_) => return Err(FlowError::SubmissionInProgress),
            Phase::Roster => return Err(FlowError::NotEditing),
        };

        let errors = AdmissionValidator::new(&self.reference)
            .strict(self.strict_reference)
            .validate(form.draft(), today);

        if !errors.is_empty() {
            tracing::warn!(fields = %errors, "admission draft rejected");
            form.set_errors(errors.clone());
            return Err(FlowError::Invalid(errors));
        }

        form.set_errors(ValidationErrors::new());
        let draft = form.draft().clone();
        if let Phase::Form(form) = std::mem::replace(&mut self.phase, Phase::Roster) {
            self.phase = Phase::Submitting(form);
        }
        Ok(draft)
    }

    /// Hand the locked draft to the gateway and apply its answer.
    pub fn finish_submit(&mut self, gateway: &dyn AdmissionGateway) -> FlowResult<Patient> {
        let draft = match &self.phase {
            Phase::Submitting(form) => form.draft().clone(),
            _ => return Err(FlowError::NotSubmitting),
        };
        self.complete_submit(gateway.submit(draft))
    }

    /// Apply a gateway answer obtained outside the flow.
    ///
    /// Success prepends the new patient and returns to the roster; a gateway
    /// failure reopens the form with the draft intact.
    pub fn complete_submit(&mut self, result: GatewayResult<Patient>) -> FlowResult<Patient> {
        let form = match std::mem::replace(&mut self.phase, Phase::Roster) {
            Phase::Submitting(form) => form,
            other => {
                self.phase = other;
                return Err(FlowError::NotSubmitting);
            }
        };

        match result {
            Ok(patient) => {
                self.store.admit(patient.clone());
                Ok(patient)
            }
            Err(e) => {
                tracing::warn!(error = %e, "admission submission failed");
                self.phase = Phase::Form(form);
                Err(e.into())
            }
        }
    }

    /// Validate and submit in one step.
    pub fn submit(&mut self, gateway: &dyn AdmissionGateway, today: NaiveDate) -> FlowResult<Patient> {
        self.begin_submit(today)?;
        self.finish_submit(gateway)
    }
}
