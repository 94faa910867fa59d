//! Administrative module catalog shown on the landing page.

use serde::{Deserialize, Serialize};

/// One administrative module of the hospital information system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HisModule {
    /// Stable key (also the route segment for enabled modules)
    pub key: String,
    pub title: String,
    pub description: String,
    /// Only enabled modules can be opened
    pub enabled: bool,
}

impl HisModule {
    fn new(key: &str, title: &str, description: &str, enabled: bool) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: description.into(),
            enabled,
        }
    }

    /// Badge text on the module card.
    pub fn badge(&self) -> &'static str {
        if self.enabled {
            "Aktif"
        } else {
            "Coming Soon"
        }
    }
}

/// The module catalog. Inpatient admission is the only enabled module.
pub fn module_catalog() -> Vec<HisModule> {
    vec![
        HisModule::new(
            "rawat-inap",
            "Modul Rawat Inap",
            "Kelola data pasien rawat inap, pendaftaran pasien baru, dan monitoring ruangan",
            true,
        ),
        HisModule::new(
            "dokter",
            "Modul Dokter",
            "Kelola data dokter, jadwal praktik, dan spesialisasi",
            false,
        ),
        HisModule::new(
            "farmasi",
            "Modul Farmasi",
            "Kelola stok obat, resep, dan distribusi obat",
            false,
        ),
        HisModule::new(
            "laporan",
            "Laporan & Analitik",
            "Generate laporan, dashboard, dan analisis data",
            false,
        ),
        HisModule::new(
            "pengaturan",
            "Pengaturan Sistem",
            "Konfigurasi sistem, user management, dan backup",
            false,
        ),
        HisModule::new(
            "keamanan",
            "Keamanan",
            "Manajemen hak akses, audit log, dan enkripsi data",
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_rawat_inap_enabled() {
        let catalog = module_catalog();
        assert_eq!(catalog.len(), 6);
        let enabled: Vec<_> = catalog.iter().filter(|m| m.enabled).collect();
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].key, "rawat-inap");
        assert_eq!(enabled[0].badge(), "Aktif");
        assert_eq!(catalog[1].badge(), "Coming Soon");
    }
}
