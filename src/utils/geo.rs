use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    #[serde(alias = "lon")]
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components finite, latitude in [-90, 90], longitude in [-180, 180]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Calculate distance between two coordinates using the Haversine formula
/// Returns distance in kilometers
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let x = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * x.sqrt().atan2((1.0 - x).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let concepcion = Coordinate::new(-36.82, -73.05);
        assert!(distance_km(concepcion, concepcion).abs() < 1e-6);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinate::new(-36.82, -73.05);
        let b = Coordinate::new(-33.45, -70.66);

        assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    #[test]
    fn test_distance_concepcion_santiago() {
        // Concepción to Santiago is roughly 440 km in a straight line
        let concepcion = Coordinate::new(-36.8201, -73.0444);
        let santiago = Coordinate::new(-33.4489, -70.6693);

        let distance = distance_km(concepcion, santiago);
        assert!(distance > 400.0 && distance < 480.0);
    }

    #[test]
    fn test_distance_is_non_negative() {
        let points = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(90.0, 0.0),
            Coordinate::new(-90.0, 180.0),
            Coordinate::new(-36.82, -73.05),
        ];

        for a in points {
            for b in points {
                assert!(distance_km(a, b) >= 0.0);
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let a = Coordinate::new(-36.82, -73.05);
        let b = Coordinate::new(-36.90, -73.10);
        let c = Coordinate::new(-36.70, -72.95);

        let tolerance = 1e-6;
        assert!(distance_km(a, c) <= distance_km(a, b) + distance_km(b, c) + tolerance);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(-36.82, -73.05).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(!Coordinate::new(90.1, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }
}
