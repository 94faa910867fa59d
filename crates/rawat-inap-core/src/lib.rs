//! Rawat Inap Core Library
//!
//! Inpatient admission and roster management for a hospital information
//! system. All state is held in memory for the lifetime of the host session.
//!
//! # Architecture
//!
//! ```text
//!   Staff input ──▶ PatientDraft ──▶ AdmissionValidator
//!                                          │
//!                          errors? ◀───────┤ (all rules, field-keyed)
//!                                          │ valid
//!                                          ▼
//!                                 AdmissionGateway::submit
//!                                          │
//!                                          ▼
//!                                PatientStore (newest first)
//!                                          │
//!                  ┌───────────────────────┼───────────────────────┐
//!                  ▼                       ▼                       ▼
//!             Roster View             Ward Stats             System Stats
//!     (filter → sort → paginate)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, PatientDraft, Doctor, Room, HisModule)
//! - [`validation`]: Admission draft validator
//! - [`roster`]: Roster view (search, sort, pagination) and table state
//! - [`store`]: In-memory roster store and submission gateway
//! - [`admission`]: Admission flow state machine
//! - [`stats`]: Ward and landing-page counts
//! - [`config`]: Core configuration
//! - [`logging`]: Subscriber setup for host applications

pub mod admission;
pub mod config;
pub mod logging;
pub mod models;
pub mod roster;
pub mod stats;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use admission::{AdmissionFlow, AdmissionForm, FlowError, FlowState};
pub use config::CoreConfig;
pub use models::{Doctor, HisModule, Patient, PatientDraft, PatientStatus, ReferenceData, Room};
pub use roster::{roster_page, RosterPage, RosterQuery, RosterState, SortDirection, SortField};
pub use stats::{SystemStats, WardStats};
pub use store::{AdmissionGateway, GatewayError, InMemoryGateway, PatientStore};
pub use validation::{validate_draft, AdmissionValidator, DraftField, ValidationErrors};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum RawatInapError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Submission error: {0}")]
    SubmissionError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<FlowError> for RawatInapError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::Invalid(errors) => RawatInapError::ValidationFailed(errors.to_string()),
            FlowError::Gateway(e) => RawatInapError::SubmissionError(e.to_string()),
            other => RawatInapError::InvalidState(other.to_string()),
        }
    }
}

impl From<config::ConfigError> for RawatInapError {
    fn from(e: config::ConfigError) -> Self {
        RawatInapError::ConfigurationError(e.to_string())
    }
}

impl From<serde_json::Error> for RawatInapError {
    fn from(e: serde_json::Error) -> Self {
        RawatInapError::InvalidInput(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for RawatInapError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        RawatInapError::InvalidState(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open a core with default configuration and the built-in reference data.
#[uniffi::export]
pub fn open_core() -> Arc<RawatInapCore> {
    Arc::new(RawatInapCore::new(CoreConfig::default(), ReferenceData::builtin()))
}

/// Open a core from JSON configuration and, optionally, JSON reference data.
#[uniffi::export]
pub fn open_core_with_config(
    config_json: String,
    reference_json: Option<String>,
) -> Result<Arc<RawatInapCore>, RawatInapError> {
    let config = CoreConfig::from_json(&config_json)?;
    let reference = match reference_json {
        Some(json) => ReferenceData::from_json(&json)?,
        None => ReferenceData::builtin(),
    };
    Ok(Arc::new(RawatInapCore::new(config, reference)))
}

/// Install a log subscriber; returns false if one was already installed.
#[uniffi::export]
pub fn init_logging(filter: String) -> bool {
    logging::init_logging(&filter)
}

/// The landing-page module catalog.
#[uniffi::export]
pub fn modules() -> Vec<FfiModule> {
    models::module_catalog().into_iter().map(|m| m.into()).collect()
}

// =========================================================================
// Main API Object
// =========================================================================

struct CoreState {
    flow: AdmissionFlow,
    roster: RosterState,
}

/// Thread-safe admission module wrapper for FFI.
#[derive(uniffi::Object)]
pub struct RawatInapCore {
    state: Arc<Mutex<CoreState>>,
    gateway: InMemoryGateway,
}

impl RawatInapCore {
    pub fn new(config: CoreConfig, reference: ReferenceData) -> Self {
        let flow = AdmissionFlow::new(PatientStore::new(), reference)
            .with_strict_reference(config.strict_reference);
        Self {
            state: Arc::new(Mutex::new(CoreState {
                flow,
                roster: RosterState::new(config.page_size),
            })),
            gateway: InMemoryGateway::new(config.submit_delay()),
        }
    }
}

#[uniffi::export]
impl RawatInapCore {
    // =========================================================================
    // Reference Data & Stats
    // =========================================================================

    /// All doctors.
    pub fn doctors(&self) -> Result<Vec<FfiDoctor>, RawatInapError> {
        let state = self.state.lock()?;
        Ok(state.flow.reference().doctors.iter().map(|d| d.into()).collect())
    }

    /// All rooms, including occupied ones.
    pub fn rooms(&self) -> Result<Vec<FfiRoom>, RawatInapError> {
        let state = self.state.lock()?;
        Ok(state.flow.reference().rooms.iter().map(|r| r.into()).collect())
    }

    /// Rooms that can be picked on the admission form.
    pub fn available_rooms(&self) -> Result<Vec<FfiRoom>, RawatInapError> {
        let state = self.state.lock()?;
        Ok(state.flow.reference().available_rooms().map(|r| r.into()).collect())
    }

    pub fn ward_stats(&self) -> Result<FfiWardStats, RawatInapError> {
        let state = self.state.lock()?;
        let stats = WardStats::compute(state.flow.store(), state.flow.reference());
        Ok(stats.into())
    }

    pub fn system_stats(&self) -> Result<FfiSystemStats, RawatInapError> {
        let state = self.state.lock()?;
        let stats = SystemStats::compute(
            &models::module_catalog(),
            state.flow.store(),
            state.flow.reference(),
        );
        Ok(stats.into())
    }

    // =========================================================================
    // Admission Form
    // =========================================================================

    pub fn flow_state(&self) -> Result<FfiFlowState, RawatInapError> {
        let state = self.state.lock()?;
        Ok(state.flow.state().into())
    }

    /// Show a blank admission form dated today.
    pub fn open_form(&self) -> Result<(), RawatInapError> {
        let mut state = self.state.lock()?;
        state.flow.open_form(validation::today())?;
        Ok(())
    }

    pub fn cancel_form(&self) -> Result<(), RawatInapError> {
        let mut state = self.state.lock()?;
        state.flow.cancel()?;
        Ok(())
    }

    /// Set one draft field by its form name (e.g. "diagnosaMasuk").
    pub fn edit_field(&self, field: String, value: String) -> Result<(), RawatInapError> {
        let field: DraftField = field
            .parse()
            .map_err(|e: validation::UnknownField| RawatInapError::InvalidInput(e.to_string()))?;
        let mut state = self.state.lock()?;
        state.flow.edit_field(field, value)?;
        Ok(())
    }

    pub fn current_draft(&self) -> Result<Option<FfiDraft>, RawatInapError> {
        let state = self.state.lock()?;
        Ok(state.flow.form().map(|f| f.draft().clone().into()))
    }

    /// Field errors currently shown on the form, in form order.
    pub fn current_errors(&self) -> Result<Vec<FfiFieldError>, RawatInapError> {
        let state = self.state.lock()?;
        Ok(state
            .flow
            .form()
            .map(|f| {
                f.errors()
                    .iter()
                    .map(|(field, message)| FfiFieldError {
                        field: field.as_str().to_string(),
                        message: message.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Validate and submit the open form.
    ///
    /// The gateway round trip runs without holding the core lock, so the host
    /// can keep rendering (and sees `Submitting`) while it is in flight. On
    /// success the roster goes back to page 1 so the new patient is visible.
    pub fn submit(&self) -> Result<FfiPatient, RawatInapError> {
        let draft = self.state.lock()?.flow.begin_submit(validation::today())?;

        let result = self.gateway.submit(draft);

        let mut state = self.state.lock()?;
        let patient = state.flow.complete_submit(result)?;
        state.roster.reset_page();
        Ok(patient.into())
    }

    // =========================================================================
    // Roster
    // =========================================================================

    pub fn roster_page(&self) -> Result<FfiRosterPage, RawatInapError> {
        let state = self.state.lock()?;
        let page = state.roster.view(state.flow.store().snapshot());
        Ok(FfiRosterPage::from_page(&page, state.roster.query()))
    }

    pub fn search(&self, term: String) -> Result<FfiRosterPage, RawatInapError> {
        let mut state = self.state.lock()?;
        state.roster.set_search(term);
        let page = state.roster.view(state.flow.store().snapshot());
        Ok(FfiRosterPage::from_page(&page, state.roster.query()))
    }

    /// Header click on a sortable column.
    pub fn sort_by(&self, field: FfiSortField) -> Result<FfiRosterPage, RawatInapError> {
        let mut state = self.state.lock()?;
        state.roster.sort_by(field.into());
        let page = state.roster.view(state.flow.store().snapshot());
        Ok(FfiRosterPage::from_page(&page, state.roster.query()))
    }

    pub fn go_to_page(&self, page: u32) -> Result<FfiRosterPage, RawatInapError> {
        let mut guard = self.state.lock()?;
        let state = &mut *guard;
        state.roster.go_to_page(state.flow.store().snapshot(), page as usize);
        let page = state.roster.view(state.flow.store().snapshot());
        Ok(FfiRosterPage::from_page(&page, state.roster.query()))
    }

    /// Full roster, newest first.
    pub fn patients(&self) -> Result<Vec<FfiPatient>, RawatInapError> {
        let state = self.state.lock()?;
        Ok(state.flow.store().snapshot().iter().map(|p| p.into()).collect())
    }

    pub fn get_patient(&self, id: String) -> Result<FfiPatient, RawatInapError> {
        let state = self.state.lock()?;
        state
            .flow
            .store()
            .get(&id)
            .map(|p| p.into())
            .ok_or(RawatInapError::NotFound(id))
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// Counts cross the FFI as u32; saturate rather than wrap.
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: String,
    pub nama: String,
    pub nik: String,
    pub diagnosa_masuk: String,
    /// ISO date (YYYY-MM-DD)
    pub tanggal_masuk: String,
    /// dd/mm/yyyy
    pub tanggal_masuk_display: String,
    pub dokter_penanggung_jawab: String,
    pub ruangan: String,
    pub status: String,
    pub created_at: String,
}

impl From<&Patient> for FfiPatient {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id.clone(),
            nama: patient.nama.clone(),
            nik: patient.nik.clone(),
            diagnosa_masuk: patient.diagnosa_masuk.clone(),
            tanggal_masuk: patient.tanggal_masuk.format(models::DATE_FORMAT).to_string(),
            tanggal_masuk_display: patient.display_tanggal_masuk(),
            dokter_penanggung_jawab: patient.dokter_penanggung_jawab.clone(),
            ruangan: patient.ruangan.clone(),
            status: patient.status.as_str().to_string(),
            created_at: patient.created_at.clone(),
        }
    }
}

impl From<Patient> for FfiPatient {
    fn from(patient: Patient) -> Self {
        (&patient).into()
    }
}

/// FFI-safe admission draft.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDraft {
    pub nama: String,
    pub nik: String,
    pub diagnosa_masuk: String,
    pub tanggal_masuk: String,
    pub dokter_penanggung_jawab: String,
    pub ruangan: String,
}

impl From<PatientDraft> for FfiDraft {
    fn from(draft: PatientDraft) -> Self {
        Self {
            nama: draft.nama,
            nik: draft.nik,
            diagnosa_masuk: draft.diagnosa_masuk,
            tanggal_masuk: draft.tanggal_masuk,
            dokter_penanggung_jawab: draft.dokter_penanggung_jawab,
            ruangan: draft.ruangan,
        }
    }
}

/// FFI-safe field error.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFieldError {
    /// Form field name (e.g. "nik")
    pub field: String,
    pub message: String,
}

/// FFI-safe flow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiFlowState {
    ViewingRoster,
    ShowingForm,
    Submitting,
}

impl From<FlowState> for FfiFlowState {
    fn from(state: FlowState) -> Self {
        match state {
            FlowState::ViewingRoster => FfiFlowState::ViewingRoster,
            FlowState::ShowingForm => FfiFlowState::ShowingForm,
            FlowState::Submitting => FfiFlowState::Submitting,
        }
    }
}

/// FFI-safe sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiSortField {
    Nama,
    Nik,
    TanggalMasuk,
}

impl From<FfiSortField> for SortField {
    fn from(field: FfiSortField) -> Self {
        match field {
            FfiSortField::Nama => SortField::Nama,
            FfiSortField::Nik => SortField::Nik,
            FfiSortField::TanggalMasuk => SortField::TanggalMasuk,
        }
    }
}

impl From<SortField> for FfiSortField {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Nama => FfiSortField::Nama,
            SortField::Nik => FfiSortField::Nik,
            SortField::TanggalMasuk => FfiSortField::TanggalMasuk,
        }
    }
}

/// FFI-safe roster page.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRosterPage {
    pub rows: Vec<FfiPatient>,
    pub page: u32,
    pub total_filtered: u32,
    pub total_patients: u32,
    pub total_pages: u32,
    pub start_index: u32,
    pub end_index: u32,
    /// "Menampilkan X - Y dari Z hasil"; absent when the page is empty
    pub caption: Option<String>,
    pub summary: String,
    pub is_empty: bool,
    pub shows_pagination: bool,
    pub search: String,
    pub sort_field: FfiSortField,
    pub sort_ascending: bool,
}

impl FfiRosterPage {
    fn from_page(page: &RosterPage<'_>, query: &RosterQuery) -> Self {
        Self {
            rows: page.rows.iter().map(|p| (*p).into()).collect(),
            page: to_u32(page.page),
            total_filtered: to_u32(page.total_filtered),
            total_patients: to_u32(page.total_patients),
            total_pages: to_u32(page.total_pages),
            start_index: to_u32(page.start_index),
            end_index: to_u32(page.end_index),
            caption: page.caption(),
            summary: page.summary(),
            is_empty: page.is_empty(),
            shows_pagination: page.shows_pagination(),
            search: query.search.clone(),
            sort_field: query.sort_field.into(),
            sort_ascending: query.sort_direction == SortDirection::Asc,
        }
    }
}

/// FFI-safe doctor.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctor {
    pub id: String,
    pub nama: String,
    pub spesialisasi: String,
    pub label: String,
}

impl From<&Doctor> for FfiDoctor {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            nama: doctor.nama.clone(),
            spesialisasi: doctor.spesialisasi.clone(),
            label: doctor.label(),
        }
    }
}

/// FFI-safe room.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRoom {
    pub id: String,
    pub nomor: String,
    pub kelas: String,
    pub tersedia: bool,
    pub label: String,
}

impl From<&Room> for FfiRoom {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.clone(),
            nomor: room.nomor.clone(),
            kelas: room.kelas.clone(),
            tersedia: room.tersedia,
            label: room.label(),
        }
    }
}

/// FFI-safe landing-page module.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiModule {
    pub key: String,
    pub title: String,
    pub description: String,
    pub enabled: bool,
    pub badge: String,
}

impl From<HisModule> for FfiModule {
    fn from(module: HisModule) -> Self {
        Self {
            badge: module.badge().to_string(),
            key: module.key,
            title: module.title,
            description: module.description,
            enabled: module.enabled,
        }
    }
}

/// FFI-safe ward statistics.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiWardStats {
    pub total_patients: u32,
    pub active_patients: u32,
    pub available_rooms: u32,
    pub total_rooms: u32,
}

impl From<WardStats> for FfiWardStats {
    fn from(stats: WardStats) -> Self {
        Self {
            total_patients: to_u32(stats.total_patients),
            active_patients: to_u32(stats.active_patients),
            available_rooms: to_u32(stats.available_rooms),
            total_rooms: to_u32(stats.total_rooms),
        }
    }
}

/// FFI-safe landing-page statistics.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSystemStats {
    pub active_modules: u32,
    pub inpatients: u32,
    pub doctors: u32,
    pub total_rooms: u32,
}

impl From<SystemStats> for FfiSystemStats {
    fn from(stats: SystemStats) -> Self {
        Self {
            active_modules: to_u32(stats.active_modules),
            inpatients: to_u32(stats.inpatients),
            doctors: to_u32(stats.doctors),
            total_rooms: to_u32(stats.total_rooms),
        }
    }
}
