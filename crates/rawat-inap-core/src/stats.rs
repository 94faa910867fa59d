//! Aggregate counts for the ward and landing pages.

use serde::Serialize;

use crate::models::{HisModule, PatientStatus, ReferenceData};
use crate::store::PatientStore;

/// Quick stats under the inpatient roster.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WardStats {
    pub total_patients: usize,
    pub active_patients: usize,
    pub available_rooms: usize,
    pub total_rooms: usize,
}

impl WardStats {
    pub fn compute(store: &PatientStore, reference: &ReferenceData) -> Self {
        Self {
            total_patients: store.len(),
            active_patients: store.count_by_status(PatientStatus::Aktif),
            available_rooms: reference.available_room_count(),
            total_rooms: reference.rooms.len(),
        }
    }
}

/// System overview on the landing page.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SystemStats {
    pub active_modules: usize,
    pub inpatients: usize,
    pub doctors: usize,
    pub total_rooms: usize,
}

impl SystemStats {
    pub fn compute(modules: &[HisModule], store: &PatientStore, reference: &ReferenceData) -> Self {
        Self {
            active_modules: modules.iter().filter(|m| m.enabled).count(),
            inpatients: store.count_by_status(PatientStatus::Aktif),
            doctors: reference.doctors.len(),
            total_rooms: reference.rooms.len(),
        }
    }
}
