//! Reference data: doctors and rooms.
//!
//! Supplied from outside the core and never mutated by it.

use serde::{Deserialize, Serialize};

/// An attending doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Doctor {
    pub id: String,
    /// Display name; this is the value a doctor selection stores
    pub nama: String,
    /// Specialty (e.g., "Kardiologi")
    pub spesialisasi: String,
}

impl Doctor {
    pub fn new(id: &str, nama: &str, spesialisasi: &str) -> Self {
        Self {
            id: id.into(),
            nama: nama.into(),
            spesialisasi: spesialisasi.into(),
        }
    }

    /// Option label as shown in the doctor picker.
    pub fn label(&self) -> String {
        format!("{} - {}", self.nama, self.spesialisasi)
    }
}

/// An inpatient room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    pub id: String,
    /// Room number; this is the value a room selection stores
    pub nomor: String,
    /// Class/tier (e.g., "Kelas 1", "VIP")
    pub kelas: String,
    /// Whether the room can take a new admission
    pub tersedia: bool,
}

impl Room {
    pub fn new(id: &str, nomor: &str, kelas: &str, tersedia: bool) -> Self {
        Self {
            id: id.into(),
            nomor: nomor.into(),
            kelas: kelas.into(),
            tersedia,
        }
    }

    /// Option label as shown in the room picker.
    pub fn label(&self) -> String {
        format!("{} - {}", self.nomor, self.kelas)
    }
}

/// Read-only doctor and room lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReferenceData {
    pub doctors: Vec<Doctor>,
    pub rooms: Vec<Room>,
}

impl ReferenceData {
    /// Built-in demo lists used when the host supplies nothing else.
    pub fn builtin() -> Self {
        Self {
            doctors: vec![
                Doctor::new("1", "dr. Sarah Wijaya", "Penyakit Dalam"),
                Doctor::new("2", "dr. Budi Santoso", "Kardiologi"),
                Doctor::new("3", "dr. Rina Kartika", "Bedah Umum"),
                Doctor::new("4", "dr. Ahmad Hidayat", "Neurologi"),
            ],
            rooms: vec![
                Room::new("1", "301", "Kelas 1", true),
                Room::new("2", "302", "Kelas 1", true),
                Room::new("3", "VIP-01", "VIP", true),
                Room::new("4", "VIP-02", "VIP", false),
                Room::new("5", "201", "Kelas 2", true),
                Room::new("6", "202", "Kelas 2", true),
            ],
        }
    }

    /// Parse reference data from JSON (`{"doctors": [...], "rooms": [...]}`).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Rooms currently marked available, in reference order.
    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.tersedia)
    }

    pub fn available_room_count(&self) -> usize {
        self.available_rooms().count()
    }

    pub fn find_doctor(&self, nama: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.nama == nama)
    }

    pub fn find_room(&self, nomor: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.nomor == nomor)
    }

    /// Caption under the room picker.
    pub fn room_availability_caption(&self) -> String {
        format!(
            "Tersedia {} ruangan dari {} total ruangan",
            self.available_room_count(),
            self.rooms.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let data = ReferenceData::builtin();
        assert_eq!(data.doctors.len(), 4);
        assert_eq!(data.rooms.len(), 6);
        assert_eq!(data.available_room_count(), 5);
        assert_eq!(
            data.room_availability_caption(),
            "Tersedia 5 ruangan dari 6 total ruangan"
        );
    }

    #[test]
    fn test_available_rooms_skip_occupied() {
        let data = ReferenceData::builtin();
        assert!(data.available_rooms().all(|r| r.nomor != "VIP-02"));
        assert!(data.find_room("VIP-02").is_some());
    }

    #[test]
    fn test_labels() {
        let data = ReferenceData::builtin();
        assert_eq!(data.doctors[1].label(), "dr. Budi Santoso - Kardiologi");
        assert_eq!(data.rooms[2].label(), "VIP-01 - VIP");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "doctors": [{"id": "9", "nama": "dr. Lina", "spesialisasi": "Anak"}],
            "rooms": [{"id": "1", "nomor": "101", "kelas": "Kelas 3", "tersedia": false}]
        }"#;
        let data = ReferenceData::from_json(json).unwrap();
        assert_eq!(data.find_doctor("dr. Lina").unwrap().id, "9");
        assert_eq!(data.available_room_count(), 0);
    }
}
