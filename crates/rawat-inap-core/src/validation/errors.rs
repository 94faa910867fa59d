//! Field-keyed validation errors.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An editable field of the admission form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Nama,
    Nik,
    DiagnosaMasuk,
    TanggalMasuk,
    DokterPenanggungJawab,
    Ruangan,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::Nama,
        DraftField::Nik,
        DraftField::DiagnosaMasuk,
        DraftField::TanggalMasuk,
        DraftField::DokterPenanggungJawab,
        DraftField::Ruangan,
    ];

    /// Form input name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Nama => "nama",
            DraftField::Nik => "nik",
            DraftField::DiagnosaMasuk => "diagnosaMasuk",
            DraftField::TanggalMasuk => "tanggalMasuk",
            DraftField::DokterPenanggungJawab => "dokterPenanggungJawab",
            DraftField::Ruangan => "ruangan",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown form field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Human-readable messages keyed by field. Empty means valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<DraftField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the error for a field the user just edited.
    ///
    /// The rule is not re-run; the field is re-checked on the next submit.
    pub fn clear(&mut self, field: DraftField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}
