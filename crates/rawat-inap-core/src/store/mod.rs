//! In-memory roster store and the submission gateway.

mod gateway;

pub use gateway::*;

use thiserror::Error;

use crate::models::{Patient, PatientStatus};

/// Store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Field is immutable: {0}")]
    Immutable(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The roster of admitted patients, newest first.
///
/// Lives for the session only; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct PatientStore {
    patients: Vec<Patient>,
}

impl PatientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store, keeping the given order (newest first).
    pub fn with_patients(patients: Vec<Patient>) -> Self {
        Self { patients }
    }

    /// Prepend a newly admitted patient.
    pub fn admit(&mut self, patient: Patient) {
        tracing::info!(id = %patient.id, ruangan = %patient.ruangan, "patient admitted");
        self.patients.insert(0, patient);
    }

    /// Read-only view of the roster.
    pub fn snapshot(&self) -> &[Patient] {
        &self.patients
    }

    pub fn get(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Replace an existing record in place.
    ///
    /// The record keeps its position; `createdAt` cannot change.
    pub fn update(&mut self, patient: Patient) -> StoreResult<()> {
        let existing = self
            .patients
            .iter_mut()
            .find(|p| p.id == patient.id)
            .ok_or_else(|| StoreError::NotFound(patient.id.clone()))?;

        if existing.created_at != patient.created_at {
            return Err(StoreError::Immutable("createdAt"));
        }

        tracing::info!(id = %patient.id, status = patient.status.as_str(), "patient updated");
        *existing = patient;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn count_by_status(&self, status: PatientStatus) -> usize {
        self.patients.iter().filter(|p| p.status == status).count()
    }
}
