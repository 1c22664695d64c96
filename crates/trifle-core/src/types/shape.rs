//! Shape tagged union and area calculation.
//!
//! Shapes are discriminated by a `shape` field when (de)serialized:
//! `{"shape": "circle", "radius": 2}` or
//! `{"shape": "rectangle", "height": 3, "width": 4}`. Any other tag decodes
//! as [`Shape::Unknown`], whose area is zero.

use crate::utils::round_to_places;
use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};
use std::f64::consts::PI;
use tracing::debug;

/// Decimal places used when reporting an area
pub const DEFAULT_AREA_PRECISION: u32 = 2;

/// A two-dimensional shape
#[derive(Debug, Clone, PartialEq, Archive, Deserialize, Serialize, SerdeDeserialize, SerdeSerialize)]
#[archive(check_bytes)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { height: f64, width: f64 },
    /// Any shape tag this crate does not know how to measure
    #[serde(other)]
    Unknown,
}

impl Shape {
    /// Create a circle
    pub fn circle(radius: f64) -> Self {
        Self::Circle { radius }
    }

    /// Create a rectangle
    pub fn rectangle(height: f64, width: f64) -> Self {
        Self::Rectangle { height, width }
    }

    /// Tag name as it appears in serialized form
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Unknown => "unknown",
        }
    }

    /// Exact area, without rounding. Unknown shapes measure zero.
    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle { radius } => PI * radius.powi(2),
            Shape::Rectangle { height, width } => height * width,
            Shape::Unknown => {
                debug!("Unrecognized shape variant, reporting zero area");
                0.0
            },
        }
    }
}

/// Area of `shape` rounded to two decimal places
pub fn calculate_shape_area(shape: &Shape) -> f64 {
    calculate_shape_area_with_precision(shape, DEFAULT_AREA_PRECISION)
}

/// Area of `shape` rounded to `places` decimal places
pub fn calculate_shape_area_with_precision(shape: &Shape, places: u32) -> f64 {
    round_to_places(shape.area(), places)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area() {
        assert_eq!(calculate_shape_area(&Shape::circle(2.0)), 12.57);
        assert_eq!(calculate_shape_area(&Shape::circle(0.0)), 0.0);
        assert_eq!(calculate_shape_area(&Shape::circle(1.0)), 3.14);
    }

    #[test]
    fn test_rectangle_area() {
        assert_eq!(calculate_shape_area(&Shape::rectangle(3.0, 4.0)), 12.0);
        assert_eq!(calculate_shape_area(&Shape::rectangle(1.111, 1.0)), 1.11);
    }

    #[test]
    fn test_area_rounds_exact_decimal_value() {
        assert_eq!(calculate_shape_area(&Shape::rectangle(1.0, 0.015)), 0.01);
        assert_eq!(calculate_shape_area(&Shape::rectangle(1.0, 0.155)), 0.15);
        assert_eq!(calculate_shape_area(&Shape::rectangle(1.0, 8.345)), 8.35);
    }

    #[test]
    fn test_huge_precision_is_clamped() {
        let circle = Shape::circle(2.0);
        assert_eq!(calculate_shape_area_with_precision(&circle, u32::MAX), circle.area());
    }

    #[test]
    fn test_unknown_shape_is_zero() {
        assert_eq!(calculate_shape_area(&Shape::Unknown), 0.0);
    }

    #[test]
    fn test_custom_precision() {
        let circle = Shape::circle(2.0);
        assert_eq!(calculate_shape_area_with_precision(&circle, 0), 13.0);
        assert_eq!(calculate_shape_area_with_precision(&circle, 4), 12.5664);
    }

    #[test]
    fn test_deserialize_tagged() {
        let circle: Shape = serde_json::from_str(r#"{"shape":"circle","radius":2}"#).unwrap();
        assert_eq!(circle, Shape::circle(2.0));

        let rect: Shape =
            serde_json::from_str(r#"{"shape":"rectangle","height":3,"width":4}"#).unwrap();
        assert_eq!(rect, Shape::rectangle(3.0, 4.0));
        assert_eq!(rect.tag(), "rectangle");
    }

    #[test]
    fn test_deserialize_unrecognized_tag() {
        let shape: Shape = serde_json::from_str(r#"{"shape":"triangle"}"#).unwrap();
        assert_eq!(shape, Shape::Unknown);
        assert_eq!(calculate_shape_area(&shape), 0.0);
    }

    #[test]
    fn test_serialize_tagged() {
        let value = serde_json::to_value(Shape::circle(1.5)).unwrap();
        assert_eq!(value, serde_json::json!({"shape": "circle", "radius": 1.5}));
    }
}
