use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::entities::place::Place;
use crate::entities::technician::Technician;
use crate::error::{AppError, AppResult};
use crate::utils::geo::Coordinate;

/// Everything the map serves, loaded once at startup and immutable afterwards
#[derive(Clone, Debug)]
pub struct Directory {
    pub technicians: Vec<Technician>,
    pub homes: Vec<Place>,
    pub businesses: Vec<Place>,
    pub loaded_at: DateTime<Utc>,
}

/// Load the directory from the JSON data files under `config.data_dir`.
///
/// `technicians.json` is required; `homes.json` and `businesses.json` may be
/// absent, in which case the map simply has no markers of that kind.
/// Malformed records are rejected here so request handlers never see them.
pub async fn load(config: &Config) -> AppResult<Directory> {
    let data_dir = Path::new(&config.data_dir);

    let technicians: Vec<Technician> =
        read_records(data_dir.join("technicians.json"), true).await?;
    validate_technicians(&technicians)?;

    let homes: Vec<Place> = read_records(data_dir.join("homes.json"), false).await?;
    validate_places(&homes, "homes.json")?;

    let businesses: Vec<Place> = read_records(data_dir.join("businesses.json"), false).await?;
    validate_places(&businesses, "businesses.json")?;

    Ok(Directory {
        technicians,
        homes,
        businesses,
        loaded_at: Utc::now(),
    })
}

async fn read_records<T: DeserializeOwned>(path: PathBuf, required: bool) -> AppResult<Vec<T>> {
    let contents = match tokio::fs::read_to_string(&path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            tracing::warn!("Data file {} not found, skipping", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(AppError::Internal(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )));
        }
    };

    serde_json::from_str(&contents)
        .map_err(|e| AppError::Internal(format!("Failed to parse {}: {}", path.display(), e)))
}

fn validate_technicians(technicians: &[Technician]) -> AppResult<()> {
    let mut names = HashSet::new();

    for technician in technicians {
        validate_record(&technician.name, technician.position, "technicians.json")?;

        if !names.insert(technician.name.to_lowercase()) {
            return Err(AppError::Internal(format!(
                "Duplicate technician name '{}' in technicians.json",
                technician.name
            )));
        }
    }

    Ok(())
}

fn validate_places(places: &[Place], file: &str) -> AppResult<()> {
    for place in places {
        validate_record(&place.name, place.position, file)?;
    }

    Ok(())
}

fn validate_record(name: &str, position: Coordinate, file: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Internal(format!(
            "Record with empty name in {}",
            file
        )));
    }

    if !position.is_valid() {
        return Err(AppError::Internal(format!(
            "Record '{}' in {} has an out-of-range coordinate ({}, {})",
            name, file, position.lat, position.lng
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::technician::TechnicianStatus;

    fn technician(name: &str, lat: f64, lng: f64) -> Technician {
        Technician {
            name: name.to_string(),
            specialty: "electricidad".to_string(),
            status: TechnicianStatus::Available,
            position: Coordinate::new(lat, lng),
        }
    }

    #[test]
    fn test_accepts_valid_technicians() {
        let technicians = vec![
            technician("Pedro Soto", -36.82, -73.05),
            technician("Ana Rivas", -36.83, -73.06),
        ];

        assert!(validate_technicians(&technicians).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let technicians = vec![
            technician("Pedro Soto", -36.82, -73.05),
            technician("pedro soto", -36.83, -73.06),
        ];

        assert!(validate_technicians(&technicians).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_coordinate() {
        let technicians = vec![technician("Pedro Soto", -96.82, -73.05)];

        assert!(validate_technicians(&technicians).is_err());
    }

    #[test]
    fn test_rejects_empty_name() {
        let places = vec![Place {
            name: "  ".to_string(),
            position: Coordinate::new(-36.81, -73.04),
        }];

        assert!(validate_places(&places, "homes.json").is_err());
    }
}
