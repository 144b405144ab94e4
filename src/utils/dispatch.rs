use crate::entities::technician::Technician;
use crate::utils::geo::{self, Coordinate};

/// Result of a nearest-technician selection
#[derive(Clone, Copy, Debug)]
pub struct Selection<'a> {
    pub technician: &'a Technician,
    pub distance_km: f64,
}

/// Pick the closest available technician to `user`.
///
/// Busy technicians are skipped. Ties go to the first candidate in input
/// order. Returns `None` when no technician is available. The input records
/// are never modified; the computed distance travels in the returned
/// `Selection`.
pub fn select_nearest<'a, I>(user: Coordinate, technicians: I) -> Option<Selection<'a>>
where
    I: IntoIterator<Item = &'a Technician>,
{
    let mut nearest: Option<Selection<'a>> = None;

    for technician in technicians {
        if !technician.status.is_available() {
            continue;
        }

        let distance_km = geo::distance_km(user, technician.position);
        if nearest
            .as_ref()
            .map_or(true, |current| distance_km < current.distance_km)
        {
            nearest = Some(Selection {
                technician,
                distance_km,
            });
        }
    }

    nearest
}

/// Estimated travel time in whole minutes at a constant assumed speed
pub fn eta_minutes(distance_km: f64, speed_km_per_minute: f64) -> u32 {
    (distance_km / speed_km_per_minute).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::technician::TechnicianStatus;

    fn technician(name: &str, status: TechnicianStatus, lat: f64, lng: f64) -> Technician {
        Technician {
            name: name.to_string(),
            specialty: "electricidad".to_string(),
            status,
            position: Coordinate::new(lat, lng),
        }
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        let user = Coordinate::new(-36.82, -73.05);
        assert!(select_nearest(user, &[]).is_none());
    }

    #[test]
    fn test_all_busy_selects_nothing() {
        let user = Coordinate::new(-36.82, -73.05);
        let technicians = vec![
            technician("A", TechnicianStatus::Busy, -36.83, -73.06),
            technician("B", TechnicianStatus::Busy, -36.82, -73.05),
        ];

        assert!(select_nearest(user, &technicians).is_none());
    }

    #[test]
    fn test_selects_closest_available() {
        let user = Coordinate::new(-36.82, -73.05);
        let technicians = vec![
            technician("A", TechnicianStatus::Available, -36.83, -73.06),
            technician("B", TechnicianStatus::Available, -36.90, -73.10),
            // C sits exactly at the user's position but is busy
            technician("C", TechnicianStatus::Busy, -36.82, -73.05),
        ];

        let selection = select_nearest(user, &technicians).unwrap();
        assert_eq!(selection.technician.name, "A");

        let expected = geo::distance_km(user, technicians[0].position);
        assert_eq!(selection.distance_km, expected);
    }

    #[test]
    fn test_tie_goes_to_first_in_input_order() {
        let user = Coordinate::new(-36.82, -73.05);
        let technicians = vec![
            technician("first", TechnicianStatus::Available, -36.83, -73.05),
            technician("second", TechnicianStatus::Available, -36.83, -73.05),
        ];

        let selection = select_nearest(user, &technicians).unwrap();
        assert_eq!(selection.technician.name, "first");
    }

    #[test]
    fn test_selection_is_idempotent() {
        let user = Coordinate::new(-36.82, -73.05);
        let technicians = vec![
            technician("A", TechnicianStatus::Available, -36.83, -73.06),
            technician("B", TechnicianStatus::Available, -36.90, -73.10),
        ];

        let first = select_nearest(user, &technicians).unwrap();
        let second = select_nearest(user, &technicians).unwrap();

        assert_eq!(first.technician, second.technician);
        assert_eq!(first.distance_km, second.distance_km);
    }

    #[test]
    fn test_eta_rounds_up_to_whole_minutes() {
        // 30 km/h -> 0.5 km per minute
        assert_eq!(eta_minutes(1.0, 0.5), 2);
        assert_eq!(eta_minutes(1.2, 0.5), 3);
        assert_eq!(eta_minutes(0.0, 0.5), 0);
        assert_eq!(eta_minutes(10.0, 0.5), 20);
    }
}
