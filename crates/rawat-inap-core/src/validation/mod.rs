//! Admission draft validation.
//!
//! Every rule is evaluated independently so that all field errors surface at
//! once. Validation is pure and never fails; an empty [`ValidationErrors`]
//! means the draft may be submitted.

mod errors;

pub use errors::*;

use chrono::NaiveDate;

use crate::models::{PatientDraft, ReferenceData};

/// Minimum trimmed length of a patient name.
pub const MIN_NAMA_LEN: usize = 3;
/// Minimum trimmed length of an admission diagnosis.
pub const MIN_DIAGNOSA_LEN: usize = 5;
/// Exact number of digits in a NIK.
pub const NIK_LEN: usize = 16;

/// Validator for admission drafts.
///
/// In strict mode the doctor and room selections are also checked against
/// the reference data; otherwise only their presence is required.
pub struct AdmissionValidator<'a> {
    reference: &'a ReferenceData,
    strict: bool,
}

impl<'a> AdmissionValidator<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self {
            reference,
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validate a draft as of `today`.
    pub fn validate(&self, draft: &PatientDraft, today: NaiveDate) -> ValidationErrors {
        let mut errors = validate_draft(draft, today);

        if self.strict {
            let doctor = draft.dokter_penanggung_jawab.as_str();
            if !doctor.is_empty() && self.reference.find_doctor(doctor).is_none() {
                errors.insert(DraftField::DokterPenanggungJawab, "Dokter tidak terdaftar");
            }

            let room = draft.ruangan.as_str();
            let available = self
                .reference
                .available_rooms()
                .any(|r| r.nomor == room);
            if !room.is_empty() && !available {
                errors.insert(DraftField::Ruangan, "Ruangan tidak tersedia");
            }
        }

        errors
    }
}

/// Current local calendar day.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Validate the shape of a draft without consulting reference data.
pub fn validate_draft(draft: &PatientDraft, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let nama = draft.nama.trim();
    if nama.is_empty() {
        errors.insert(DraftField::Nama, "Nama wajib diisi");
    } else if nama.chars().count() < MIN_NAMA_LEN {
        errors.insert(DraftField::Nama, "Nama minimal 3 karakter");
    }

    let nik = draft.nik.trim();
    if nik.is_empty() {
        errors.insert(DraftField::Nik, "NIK wajib diisi");
    } else if !is_valid_nik(nik) {
        errors.insert(DraftField::Nik, "NIK harus 16 digit angka");
    }

    let diagnosa = draft.diagnosa_masuk.trim();
    if diagnosa.is_empty() {
        errors.insert(DraftField::DiagnosaMasuk, "Diagnosa masuk wajib diisi");
    } else if diagnosa.chars().count() < MIN_DIAGNOSA_LEN {
        errors.insert(DraftField::DiagnosaMasuk, "Diagnosa minimal 5 karakter");
    }

    if draft.tanggal_masuk.trim().is_empty() {
        errors.insert(DraftField::TanggalMasuk, "Tanggal masuk wajib diisi");
    } else {
        match draft.parsed_tanggal_masuk() {
            None => errors.insert(DraftField::TanggalMasuk, "Format tanggal masuk tidak valid"),
            Some(date) if date < today => {
                errors.insert(DraftField::TanggalMasuk, "Tanggal masuk tidak boleh di masa lalu")
            }
            Some(_) => {}
        }
    }

    if draft.dokter_penanggung_jawab.is_empty() {
        errors.insert(
            DraftField::DokterPenanggungJawab,
            "Dokter penanggung jawab wajib dipilih",
        );
    }

    if draft.ruangan.is_empty() {
        errors.insert(DraftField::Ruangan, "Ruangan wajib dipilih");
    }

    errors
}

/// Exactly [`NIK_LEN`] ASCII digits.
pub fn is_valid_nik(nik: &str) -> bool {
    nik.len() == NIK_LEN && nik.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn valid_draft() -> PatientDraft {
        PatientDraft {
            nama: "Siti Aminah".into(),
            nik: "3174012345678901".into(),
            diagnosa_masuk: "Demam berdarah dengue".into(),
            tanggal_masuk: "2026-10-17".into(),
            dokter_penanggung_jawab: "dr. Sarah Wijaya".into(),
            ruangan: "301".into(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let errors = validate_draft(&valid_draft(), today());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_all_six_errors_surface_together() {
        let draft = PatientDraft {
            nama: "Jo".into(),
            nik: "123".into(),
            diagnosa_masuk: "flu".into(),
            tanggal_masuk: "2026-10-16".into(),
            dokter_penanggung_jawab: String::new(),
            ruangan: String::new(),
        };
        let errors = validate_draft(&draft, today());
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(DraftField::Nama), Some("Nama minimal 3 karakter"));
        assert_eq!(errors.get(DraftField::Nik), Some("NIK harus 16 digit angka"));
        assert_eq!(
            errors.get(DraftField::DiagnosaMasuk),
            Some("Diagnosa minimal 5 karakter")
        );
        assert_eq!(
            errors.get(DraftField::TanggalMasuk),
            Some("Tanggal masuk tidak boleh di masa lalu")
        );
        assert!(errors.contains(DraftField::DokterPenanggungJawab));
        assert!(errors.contains(DraftField::Ruangan));
    }

    #[test]
    fn test_required_messages() {
        let draft = PatientDraft::default();
        let errors = validate_draft(&draft, today());
        assert_eq!(errors.get(DraftField::Nama), Some("Nama wajib diisi"));
        assert_eq!(errors.get(DraftField::Nik), Some("NIK wajib diisi"));
        assert_eq!(
            errors.get(DraftField::DiagnosaMasuk),
            Some("Diagnosa masuk wajib diisi")
        );
        assert_eq!(
            errors.get(DraftField::TanggalMasuk),
            Some("Tanggal masuk wajib diisi")
        );
    }

    #[test]
    fn test_whitespace_only_name_is_missing() {
        let mut draft = valid_draft();
        draft.nama = "    ".into();
        let errors = validate_draft(&draft, today());
        assert_eq!(errors.get(DraftField::Nama), Some("Nama wajib diisi"));
    }

    #[test]
    fn test_name_length_counts_trimmed_chars() {
        let mut draft = valid_draft();
        draft.nama = "  Ani  ".into();
        assert!(validate_draft(&draft, today()).is_empty());

        draft.nama = " Al ".into();
        assert!(validate_draft(&draft, today()).contains(DraftField::Nama));
    }

    #[test]
    fn test_nik_rules() {
        assert!(is_valid_nik("3174012345678901"));
        assert!(!is_valid_nik("317401234567890"));
        assert!(!is_valid_nik("31740123456789012"));
        assert!(!is_valid_nik("31740123456789O1"));
        assert!(!is_valid_nik("３１７４０１２３４５６７８９０１"));

        let mut draft = valid_draft();
        draft.nik = " 3174012345678901 ".into();
        assert!(validate_draft(&draft, today()).is_empty());
    }

    #[test]
    fn test_admission_date_today_and_future_allowed() {
        let mut draft = valid_draft();
        draft.tanggal_masuk = "2026-12-01".into();
        assert!(validate_draft(&draft, today()).is_empty());
    }

    #[test]
    fn test_admission_date_bad_format() {
        let mut draft = valid_draft();
        draft.tanggal_masuk = "besok".into();
        let errors = validate_draft(&draft, today());
        assert_eq!(
            errors.get(DraftField::TanggalMasuk),
            Some("Format tanggal masuk tidak valid")
        );
    }

    #[test]
    fn test_strict_mode_checks_reference() {
        let reference = ReferenceData::builtin();
        let validator = AdmissionValidator::new(&reference).strict(true);

        assert!(validator.validate(&valid_draft(), today()).is_empty());

        let mut draft = valid_draft();
        draft.dokter_penanggung_jawab = "dr. Tidak Ada".into();
        draft.ruangan = "VIP-02".into();
        let errors = validator.validate(&draft, today());
        assert_eq!(
            errors.get(DraftField::DokterPenanggungJawab),
            Some("Dokter tidak terdaftar")
        );
        assert_eq!(errors.get(DraftField::Ruangan), Some("Ruangan tidak tersedia"));
    }

    #[test]
    fn test_lenient_mode_ignores_reference() {
        let reference = ReferenceData::builtin();
        let validator = AdmissionValidator::new(&reference);

        let mut draft = valid_draft();
        draft.ruangan = "VIP-02".into();
        assert!(validator.validate(&draft, today()).is_empty());
    }
}
