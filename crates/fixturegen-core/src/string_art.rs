//! String-art coordinate generation.
//!
//! Points sit on a circle. Consecutive points are connected by jumping a
//! fixed stride around the circle, which produces a chord pattern when the
//! sequence is drawn as a single thread.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::FixtureError;

/// Default stride multiplier between consecutive thread points.
pub const DEFAULT_STRIDE: u32 = 137;

/// An integer pixel coordinate. Serializes as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Parameters for [`generate_string_art`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringArtParams {
    /// Number of points around the circle.
    pub num_points: u32,
    pub radius: f64,
    pub center_x: f64,
    pub center_y: f64,
    /// Index multiplier used to pick the next point.
    pub stride: u32,
}

impl Default for StringArtParams {
    fn default() -> Self {
        Self {
            num_points: 500,
            radius: 200.0,
            center_x: 250.0,
            center_y: 250.0,
            stride: DEFAULT_STRIDE,
        }
    }
}

/// Output document: `{"coordinates": [[x, y], ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringArtDocument {
    pub coordinates: Vec<Point>,
}

/// Generate the coordinate sequence.
///
/// The sequence has `num_points + 1` entries: the point at angle zero is
/// emitted once as the seed, then the stride target of every index follows.
pub fn generate_string_art(params: &StringArtParams) -> Result<StringArtDocument, FixtureError> {
    validate_params(params)?;

    let n = params.num_points as u64;
    let angle_step = 2.0 * PI / params.num_points as f64;
    let point_at = |angle: f64| {
        Point::new(
            (params.center_x + params.radius * angle.cos()) as i32,
            (params.center_y + params.radius * angle.sin()) as i32,
        )
    };

    let mut coordinates = Vec::with_capacity(params.num_points as usize + 1);
    for i in 0..n {
        let next_index = (i * params.stride as u64) % n;
        if i == 0 {
            coordinates.push(point_at(0.0));
        }
        coordinates.push(point_at(next_index as f64 * angle_step));
    }

    Ok(StringArtDocument { coordinates })
}

fn validate_params(params: &StringArtParams) -> Result<(), FixtureError> {
    if params.num_points == 0 {
        return Err(FixtureError::InvalidParameter(
            "num_points must be greater than zero".to_string(),
        ));
    }
    for (name, value) in [
        ("radius", params.radius),
        ("center_x", params.center_x),
        ("center_y", params.center_y),
    ] {
        if !value.is_finite() {
            return Err(FixtureError::InvalidParameter(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }
    }

    // Every point must fit in an i32 pixel coordinate
    let limit = i32::MAX as f64;
    let reach = params.radius.abs();
    if params.center_x.abs() + reach > limit || params.center_y.abs() + reach > limit {
        return Err(FixtureError::InvalidParameter(format!(
            "circle at ({}, {}) with radius {} exceeds the i32 coordinate range",
            params.center_x, params.center_y, params.radius
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(num_points: u32, radius: f64, cx: f64, cy: f64) -> StringArtParams {
        StringArtParams {
            num_points,
            radius,
            center_x: cx,
            center_y: cy,
            ..Default::default()
        }
    }

    #[test]
    fn test_four_points_around_origin() {
        let doc = generate_string_art(&params(4, 10.0, 0.0, 0.0)).unwrap();
        assert_eq!(
            doc.coordinates,
            vec![
                Point::new(10, 0),
                Point::new(10, 0),
                Point::new(0, 10),
                Point::new(-10, 0),
                Point::new(0, -10),
            ]
        );
    }

    #[test]
    fn test_default_length() {
        let doc = generate_string_art(&StringArtParams::default()).unwrap();
        assert_eq!(doc.coordinates.len(), 501);
        assert_eq!(doc.coordinates[0], Point::new(450, 250));
    }

    #[test]
    fn test_points_stay_within_radius_bounds() {
        for n in [1, 2, 3, 7, 64, 500] {
            let p = params(n, 200.0, 250.0, 250.0);
            let doc = generate_string_art(&p).unwrap();
            assert_eq!(doc.coordinates.len(), n as usize + 1);
            for point in &doc.coordinates {
                assert!((50..=450).contains(&point.x), "x out of range: {:?}", point);
                assert!((50..=450).contains(&point.y), "y out of range: {:?}", point);
            }
        }
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 7 points, radius 10: cos(2pi/7)*10 = 6.23 -> 6, sin = 7.81 -> 7
        let p = StringArtParams {
            stride: 1,
            ..params(7, 10.0, 0.0, 0.0)
        };
        let doc = generate_string_art(&p).unwrap();
        assert_eq!(doc.coordinates[2], Point::new(6, 7));
        // Negative values truncate up: index 3 -> (-9.009, 4.338)
        assert_eq!(doc.coordinates[4], Point::new(-9, 4));
    }

    #[test]
    fn test_zero_points_rejected() {
        let err = generate_string_art(&params(0, 10.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidParameter(_)));
    }

    #[test]
    fn test_non_finite_radius_rejected() {
        let err = generate_string_art(&params(4, f64::NAN, 0.0, 0.0)).unwrap_err();
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn test_radius_beyond_i32_rejected() {
        let err = generate_string_art(&params(4, 3e9, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidParameter(_)));

        let err = generate_string_art(&params(4, 10.0, 2_147_483_640.0, 0.0)).unwrap_err();
        assert!(err.to_string().contains("i32"));

        // Largest circle that still fits
        let doc = generate_string_art(&params(4, i32::MAX as f64, 0.0, 0.0)).unwrap();
        assert_eq!(doc.coordinates[0], Point::new(i32::MAX, 0));
    }

    #[test]
    fn test_document_shape() {
        let doc = generate_string_art(&params(2, 10.0, 0.0, 0.0)).unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json, serde_json::json!({"coordinates": [[10, 0], [10, 0], [-10, 0]]}));
    }
}
