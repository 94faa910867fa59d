//! Inpatient models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the admission form (`<input type="date">`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inpatient status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    /// Currently admitted
    Aktif,
    /// Discharged
    Pulang,
    /// Deceased
    Meninggal,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Aktif => "aktif",
            PatientStatus::Pulang => "pulang",
            PatientStatus::Meninggal => "meninggal",
        }
    }
}

/// A registered inpatient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Opaque unique ID (UUID v4)
    pub id: String,
    /// Full name, trimmed
    pub nama: String,
    /// 16-digit national identity number
    pub nik: String,
    /// Admission diagnosis, trimmed
    pub diagnosa_masuk: String,
    /// Admission date
    pub tanggal_masuk: NaiveDate,
    /// Attending doctor name, as listed in the reference data
    pub dokter_penanggung_jawab: String,
    /// Room number, as listed in the reference data
    pub ruangan: String,
    /// Inpatient status
    pub status: PatientStatus,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl Patient {
    pub fn is_active(&self) -> bool {
        self.status == PatientStatus::Aktif
    }

    /// Admission date as shown in the roster (`dd/mm/yyyy`).
    pub fn display_tanggal_masuk(&self) -> String {
        self.tanggal_masuk.format("%d/%m/%Y").to_string()
    }
}

/// User-entered, not yet validated admission data.
///
/// Every field is kept as the raw text the user typed; conversion into a
/// [`Patient`] happens only after the validator accepts the draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientDraft {
    pub nama: String,
    pub nik: String,
    pub diagnosa_masuk: String,
    /// ISO date (`YYYY-MM-DD`)
    pub tanggal_masuk: String,
    pub dokter_penanggung_jawab: String,
    pub ruangan: String,
}

impl PatientDraft {
    /// Create an empty draft with the admission date preset to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            tanggal_masuk: today.format(DATE_FORMAT).to_string(),
            ..Default::default()
        }
    }

    /// Parse the admission date, if present and well-formed.
    pub fn parsed_tanggal_masuk(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.tanggal_masuk.trim(), DATE_FORMAT).ok()
    }

    /// Build a new active patient from this draft.
    ///
    /// Returns `None` when the admission date does not parse; callers run the
    /// validator first, which reports that case as a field error.
    pub fn into_patient(self) -> Option<Patient> {
        let tanggal_masuk = self.parsed_tanggal_masuk()?;
        Some(Patient {
            id: uuid::Uuid::new_v4().to_string(),
            nama: self.nama.trim().to_string(),
            nik: self.nik.trim().to_string(),
            diagnosa_masuk: self.diagnosa_masuk.trim().to_string(),
            tanggal_masuk,
            dokter_penanggung_jawab: self.dokter_penanggung_jawab,
            ruangan: self.ruangan,
            status: PatientStatus::Aktif,
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}
