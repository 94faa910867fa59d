//! Property tests for the validator and the roster view.

use chrono::NaiveDate;
use proptest::prelude::*;
use rawat_inap_core::models::{Patient, PatientDraft, PatientStatus};
use rawat_inap_core::roster::{roster_page, RosterQuery, SortDirection, SortField};
use rawat_inap_core::validation::{validate_draft, DraftField};

const PAGE_SIZE: usize = 10;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn arb_patient() -> impl Strategy<Value = Patient> {
    ("[A-Za-z ]{3,12}", "[0-9]{16}", 0i64..30).prop_map(|(nama, nik, offset)| Patient {
        id: uuid::Uuid::new_v4().to_string(),
        nama,
        nik,
        diagnosa_masuk: "Observasi".into(),
        tanggal_masuk: today() + chrono::Duration::days(offset),
        dokter_penanggung_jawab: "dr. Sarah Wijaya".into(),
        ruangan: "301".into(),
        status: PatientStatus::Aktif,
        created_at: "2026-10-17T00:00:00+00:00".into(),
    })
}

fn arb_sort_field() -> impl Strategy<Value = SortField> {
    prop_oneof![
        Just(SortField::Nama),
        Just(SortField::Nik),
        Just(SortField::TanggalMasuk),
    ]
}

fn valid_draft() -> PatientDraft {
    PatientDraft {
        nama: "Siti Aminah".into(),
        nik: "3174012345678901".into(),
        diagnosa_masuk: "Demam berdarah".into(),
        tanggal_masuk: "2026-10-17".into(),
        dokter_penanggung_jawab: "dr. Sarah Wijaya".into(),
        ruangan: "301".into(),
    }
}

proptest! {
    #[test]
    fn short_names_are_rejected(nama in "[ ]{0,3}[A-Za-z]{0,2}[ ]{0,3}") {
        let mut draft = valid_draft();
        draft.nama = nama;
        let errors = validate_draft(&draft, today());
        prop_assert!(errors.contains(DraftField::Nama));
        prop_assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_niks_are_rejected(nik in "[0-9]{0,15}|[0-9]{17,20}|[0-9]{8}[a-z][0-9]{7}") {
        let mut draft = valid_draft();
        draft.nik = nik;
        prop_assert!(validate_draft(&draft, today()).contains(DraftField::Nik));
    }

    #[test]
    fn well_formed_niks_are_accepted(nik in "[0-9]{16}") {
        let mut draft = valid_draft();
        draft.nik = nik;
        prop_assert!(validate_draft(&draft, today()).is_empty());
    }

    #[test]
    fn filter_keeps_exactly_the_matches(
        patients in prop::collection::vec(arb_patient(), 0..40),
        search in "[a-zA-Z0-9]{0,3}",
    ) {
        let query = RosterQuery { search: search.clone(), ..Default::default() };
        let page = roster_page(&patients, &query, usize::MAX);
        let term = search.to_lowercase();
        let hit = |p: &Patient| p.nama.to_lowercase().contains(&term) || p.nik.contains(&term);

        prop_assert!(page.rows.iter().all(|p| hit(*p)));
        let expected = patients.iter().filter(|p| hit(*p)).count();
        prop_assert_eq!(page.total_filtered, expected);
        prop_assert_eq!(page.rows.len(), expected);
    }

    #[test]
    fn flipping_direction_reverses_order(
        patients in prop::collection::vec(arb_patient(), 0..40),
        field in arb_sort_field(),
    ) {
        let asc = RosterQuery {
            sort_field: field,
            sort_direction: SortDirection::Asc,
            ..Default::default()
        };
        let desc = RosterQuery { sort_direction: SortDirection::Desc, ..asc.clone() };

        let asc_ids: Vec<&str> = roster_page(&patients, &asc, usize::MAX)
            .rows.into_iter().map(|p| p.id.as_str()).collect();
        let mut desc_ids: Vec<&str> = roster_page(&patients, &desc, usize::MAX)
            .rows.into_iter().map(|p| p.id.as_str()).collect();
        desc_ids.reverse();
        prop_assert_eq!(asc_ids, desc_ids);
    }

    #[test]
    fn page_count_is_ceiling(
        patients in prop::collection::vec(arb_patient(), 0..60),
        page in 1usize..8,
    ) {
        let query = RosterQuery { page, ..Default::default() };
        let view = roster_page(&patients, &query, PAGE_SIZE);
        let n = patients.len();

        prop_assert_eq!(view.total_pages, (n + PAGE_SIZE - 1) / PAGE_SIZE);
        prop_assert!(view.rows.len() <= PAGE_SIZE);
        prop_assert_eq!(view.rows.len(), view.end_index - view.start_index);
        if n == 0 {
            prop_assert!(view.is_empty());
        }
    }
}
