use serde::{Deserialize, Serialize};

use crate::utils::geo::Coordinate;

/// A home or local business shown on the map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(flatten)]
    pub position: Coordinate,
}
