//! Great-circle distance used by the route optimizer.

use geo::Coord;

use crate::Stop;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two WGS84 points, in kilometres.
///
/// Coordinates use the workspace convention `x = longitude`, `y = latitude`
/// in degrees. The metric is symmetric and zero for identical points.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfinder_core::haversine_km;
///
/// let london = Coord { x: -0.1278, y: 51.5074 };
/// let paris = Coord { x: 2.3522, y: 48.8566 };
/// let d = haversine_km(london, paris);
/// assert!((d - 343.5).abs() < 1.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine is inherently floating-point"
)]
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Total haversine length of a stop sequence, in kilometres.
///
/// Sums the distance between each consecutive pair; sequences shorter than
/// two stops have zero length.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "summing a floating-point metric")]
pub fn path_length_km(stops: &[Stop]) -> f64 {
    stops
        .windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some(haversine_km(from.location, to.location)),
            _ => None,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn stop(x: f64, y: f64) -> Stop {
        Stop::new("test", Coord { x, y })
    }

    #[rstest]
    fn identical_points_have_zero_distance() {
        let p = Coord { x: 13.4, y: 52.5 };
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Coord { x: -0.1278, y: 51.5074 };
        let b = Coord { x: 2.3522, y: 48.8566 };
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[rstest]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 0.0, y: 1.0 };
        let d = haversine_km(a, b);
        assert!((d - 111.19).abs() < 0.1, "got {d}");
    }

    #[rstest]
    fn path_length_sums_consecutive_legs() {
        let stops = vec![stop(0.0, 0.0), stop(0.0, 1.0), stop(0.0, 2.0)];
        let total = path_length_km(&stops);
        let legs = haversine_km(Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: 1.0 })
            + haversine_km(Coord { x: 0.0, y: 1.0 }, Coord { x: 0.0, y: 2.0 });
        assert!((total - legs).abs() < 1e-9);
    }

    #[rstest]
    fn short_sequences_have_zero_length() {
        assert_eq!(path_length_km(&[]), 0.0);
        assert_eq!(path_length_km(&[stop(1.0, 1.0)]), 0.0);
    }
}
