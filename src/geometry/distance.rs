//! Great-circle distance on a spherical Earth.

use super::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two positions, in kilometers.
///
/// Symmetric in its arguments and never negative.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Total length of a path, in kilometers.
///
/// Sums the haversine distance over consecutive pairs; a path of zero or
/// one points has zero length.
pub fn path_length_km(path: &[Coordinate]) -> f64 {
    path.windows(2)
        .map(|pair| haversine_km(pair[0], pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EQUATOR_DEGREE_KM: f64 = 111.19;

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let a = Coordinate { lat: 0.0, lon: 0.0 };
        let b = Coordinate { lat: 0.0, lon: 1.0 };
        assert!((haversine_km(a, b) - EQUATOR_DEGREE_KM).abs() < 0.5);
    }

    #[test]
    fn test_symmetry() {
        let a = Coordinate {
            lat: 48.85,
            lon: 2.35,
        };
        let b = Coordinate {
            lat: 51.51,
            lon: -0.13,
        };
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[test]
    fn test_zero_distance_for_identical_points() {
        let p = Coordinate {
            lat: 12.5,
            lon: -7.25,
        };
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_short_paths_have_zero_length() {
        assert_eq!(path_length_km(&[]), 0.0);
        assert_eq!(path_length_km(&[Coordinate { lat: 1.0, lon: 1.0 }]), 0.0);
    }

    #[test]
    fn test_two_leg_path_accumulates() {
        let path = [
            Coordinate { lat: 0.0, lon: 0.0 },
            Coordinate { lat: 0.0, lon: 1.0 },
            Coordinate { lat: 0.0, lon: 2.0 },
        ];
        assert!((path_length_km(&path) - 2.0 * EQUATOR_DEGREE_KM).abs() < 1.0);
    }
}
