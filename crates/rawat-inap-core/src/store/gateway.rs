//! Admission submission gateway.
//!
//! Stands in for the network round trip that turns an accepted draft into a
//! stored record. A real backend implements [`AdmissionGateway`]; the flow
//! and the validator do not change.

use std::time::Duration;

use thiserror::Error;

use crate::models::{Patient, PatientDraft};

/// Gateway errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Submit an accepted draft and get the created record back.
pub trait AdmissionGateway {
    fn submit(&self, draft: PatientDraft) -> GatewayResult<Patient>;
}

/// Gateway that creates records locally after a fixed, blocking delay.
#[derive(Debug, Clone)]
pub struct InMemoryGateway {
    delay: Duration,
}

impl InMemoryGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No delay (for tests).
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl AdmissionGateway for InMemoryGateway {
    fn submit(&self, draft: PatientDraft) -> GatewayResult<Patient> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        draft
            .into_patient()
            .ok_or_else(|| GatewayError::Rejected("Tanggal masuk tidak valid".into()))
    }
}
