use serde::{Deserialize, Serialize};

use crate::utils::geo::Coordinate;

/// Whether a technician can take a new assignment.
///
/// Legacy data files store the status as free-form Spanish text, with
/// `"disponible"` marking an available technician; any other value is
/// treated as busy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TechnicianStatus {
    Available,
    Busy,
}

impl From<String> for TechnicianStatus {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("disponible") || value.eq_ignore_ascii_case("available") {
            TechnicianStatus::Available
        } else {
            TechnicianStatus::Busy
        }
    }
}

impl TechnicianStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, TechnicianStatus::Available)
    }
}

/// A field technician record, immutable after load.
///
/// Field aliases match the legacy data files (`nombre`, `especialidad`,
/// `estado`), which also store the coordinate as flat `lat`/`lon` keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "especialidad")]
    pub specialty: String,
    #[serde(alias = "estado")]
    pub status: TechnicianStatus,
    #[serde(flatten)]
    pub position: Coordinate,
}
