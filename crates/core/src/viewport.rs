//! Map region fitting for a coordinate sequence.

use geo::{BoundingRect, MultiPoint, Point};
use titan_rush_campus::Coordinate;

pub use crate::config::DEFAULT_PADDING_DEG;

/// A map display region, in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingRegion {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Smallest region containing every coordinate, padded so a single point
/// still gets a visible span. `None` for an empty sequence.
pub fn fit_region(coordinates: &[Coordinate]) -> Option<BoundingRegion> {
    fit_region_with_padding(coordinates, DEFAULT_PADDING_DEG)
}

/// Like [`fit_region`] with a caller-chosen padding. A padding that is not a
/// positive finite number falls back to [`DEFAULT_PADDING_DEG`].
pub fn fit_region_with_padding(
    coordinates: &[Coordinate],
    padding_deg: f64,
) -> Option<BoundingRegion> {
    let padding_deg = if padding_deg.is_finite() && padding_deg > 0.0 {
        padding_deg
    } else {
        DEFAULT_PADDING_DEG
    };
    let points: MultiPoint = coordinates.iter().copied().map(Point::from).collect();
    let rect = points.bounding_rect()?;
    let center = rect.center();

    Some(BoundingRegion {
        // x is longitude
        center: Coordinate::new(center.y, center.x)?,
        latitude_delta: rect.height() + padding_deg,
        longitude_delta: rect.width() + padding_deg,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_empty_has_no_region() {
        assert_eq!(fit_region(&[]), None);
    }

    #[test]
    fn test_single_point_has_padding() {
        let region = fit_region(&[coord(1.0, 1.0)]).unwrap();

        assert_eq!(region.center, coord(1.0, 1.0));
        assert_relative_eq!(region.latitude_delta, DEFAULT_PADDING_DEG);
        assert_relative_eq!(region.longitude_delta, DEFAULT_PADDING_DEG);
    }

    #[test]
    fn test_route_region() {
        let route = [
            coord(33.8700, -117.9000),
            coord(33.8750, -117.8950),
            coord(33.8792, -117.8885),
        ];

        let region = fit_region(&route).unwrap();

        assert_relative_eq!(region.center.latitude(), 33.8746, epsilon = 1e-9);
        assert_relative_eq!(region.center.longitude(), -117.89425, epsilon = 1e-9);
        assert_relative_eq!(
            region.latitude_delta,
            0.0092 + DEFAULT_PADDING_DEG,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            region.longitude_delta,
            0.0115 + DEFAULT_PADDING_DEG,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_order_independent_and_pure() {
        let a = [coord(33.87, -117.90), coord(33.88, -117.88)];
        let b = [coord(33.88, -117.88), coord(33.87, -117.90)];

        assert_eq!(fit_region(&a), fit_region(&b));
        assert_eq!(fit_region(&a), fit_region(&a));
    }

    #[test]
    fn test_custom_padding() {
        let region = fit_region_with_padding(&[coord(1.0, 1.0)], 0.01).unwrap();
        assert_relative_eq!(region.latitude_delta, 0.01);
    }

    #[test]
    fn test_unusable_padding_never_collapses() {
        for padding in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let region = fit_region_with_padding(&[coord(1.0, 1.0)], padding).unwrap();
            assert_relative_eq!(region.latitude_delta, DEFAULT_PADDING_DEG);
            assert_relative_eq!(region.longitude_delta, DEFAULT_PADDING_DEG);
        }
    }
}
