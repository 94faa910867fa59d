//! Admission form state: the draft being edited and its field errors.

use chrono::NaiveDate;

use crate::models::PatientDraft;
use crate::validation::{DraftField, ValidationErrors};

/// An open admission form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionForm {
    draft: PatientDraft,
    errors: ValidationErrors,
}

impl AdmissionForm {
    /// Blank form with the admission date preset to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: PatientDraft::new(today),
            errors: ValidationErrors::new(),
        }
    }

    pub fn draft(&self) -> &PatientDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Apply a user edit. Any error shown for that field is dropped at once.
    pub fn edit(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Nama => self.draft.nama = value,
            DraftField::Nik => self.draft.nik = value,
            DraftField::DiagnosaMasuk => self.draft.diagnosa_masuk = value,
            DraftField::TanggalMasuk => self.draft.tanggal_masuk = value,
            DraftField::DokterPenanggungJawab => self.draft.dokter_penanggung_jawab = value,
            DraftField::Ruangan => self.draft.ruangan = value,
        }
        self.errors.clear(field);
    }

    pub(crate) fn set_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }
}
