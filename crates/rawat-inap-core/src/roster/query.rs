//! Roster query parameters.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Patient;

/// Sortable roster column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Nama,
    Nik,
    #[default]
    TanggalMasuk,
}

impl SortField {
    /// Natural ascending order of two patients on this column.
    pub fn compare(&self, a: &Patient, b: &Patient) -> Ordering {
        match self {
            SortField::Nama => a.nama.cmp(&b.nama),
            SortField::Nik => a.nik.cmp(&b.nik),
            SortField::TanggalMasuk => a.tanggal_masuk.cmp(&b.tanggal_masuk),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Everything the roster view needs besides the patient list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RosterQuery {
    /// Free-text search over name and NIK
    pub search: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// 1-based page number
    pub page: usize,
}

impl Default for RosterQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            page: 1,
        }
    }
}

impl RosterQuery {
    /// Case-insensitive substring match on name or NIK.
    pub fn matches(&self, patient: &Patient) -> bool {
        let term = self.search.to_lowercase();
        if term.is_empty() {
            return true;
        }
        patient.nama.to_lowercase().contains(&term) || patient.nik.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PatientDraft, Patient};

    fn patient(nama: &str, nik: &str) -> Patient {
        PatientDraft {
            nama: nama.into(),
            nik: nik.into(),
            diagnosa_masuk: "Observasi".into(),
            tanggal_masuk: "2026-10-17".into(),
            dokter_penanggung_jawab: "dr. Sarah Wijaya".into(),
            ruangan: "301".into(),
        }
        .into_patient()
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let query = RosterQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.sort_field, SortField::TanggalMasuk);
        assert_eq!(query.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let p = patient("Budi Hartono", "3174000000000001");
        let query = RosterQuery {
            search: "HART".into(),
            ..Default::default()
        };
        assert!(query.matches(&p));
    }

    #[test]
    fn test_matches_nik_substring() {
        let p = patient("Budi Hartono", "3174000000000001");
        let query = RosterQuery {
            search: "0001".into(),
            ..Default::default()
        };
        assert!(query.matches(&p));

        let query = RosterQuery {
            search: "9999".into(),
            ..Default::default()
        };
        assert!(!query.matches(&p));
    }

    #[test]
    fn test_flipped() {
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.flipped(), SortDirection::Asc);
    }
}
