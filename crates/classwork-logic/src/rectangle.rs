//! Rectangle geometry.
//!
//! Dimensions are stored as given. Zero or negative sides are not
//! rejected; they flow straight through the arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn perimeter(&self) -> f64 {
        self.length * 2.0 + self.width * 2.0
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Snapshot of dimensions and derived values, computed fresh on each call.
    pub fn summary(&self) -> RectangleSummary {
        RectangleSummary {
            length: self.length(),
            width: self.width(),
            perimeter: self.perimeter(),
            area: self.area(),
        }
    }
}

/// Structured rectangle summary.
///
/// Field order is `length, width, perimeter, area` both in serialized
/// form and in the `Display` output, which prints as a hash literal:
/// `{:length=>3, :width=>4, :perimeter=>14, :area=>12}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleSummary {
    pub length: f64,
    pub width: f64,
    pub perimeter: f64,
    pub area: f64,
}

impl fmt::Display for RectangleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{:length=>{}, :width=>{}, :perimeter=>{}, :area=>{}}}",
            self.length, self.width, self.perimeter, self.area
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_perimeter_and_area() {
        let r = Rectangle::new(3.0, 4.0);
        assert!((r.perimeter() - 14.0).abs() < f64::EPSILON);
        assert!((r.area() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_dimensions_propagate() {
        let r = Rectangle::new(-2.0, 5.0);
        assert!((r.perimeter() - 6.0).abs() < f64::EPSILON);
        assert!((r.area() + 10.0).abs() < f64::EPSILON);

        let flat = Rectangle::new(0.0, 7.0);
        assert_eq!(flat.area(), 0.0);
    }

    #[test]
    fn test_summary_display() {
        let r = Rectangle::new(3.0, 4.0);
        assert_eq!(
            r.summary().to_string(),
            "{:length=>3, :width=>4, :perimeter=>14, :area=>12}"
        );
    }

    #[test]
    fn test_summary_display_fractional() {
        let r = Rectangle::new(1.5, 2.0);
        assert_eq!(
            r.summary().to_string(),
            "{:length=>1.5, :width=>2, :perimeter=>7, :area=>3}"
        );
    }

    #[test]
    fn test_summary_serializes_in_field_order() {
        let json = serde_json::to_string(&Rectangle::new(3.0, 4.0).summary()).unwrap();
        assert_eq!(
            json,
            r#"{"length":3.0,"width":4.0,"perimeter":14.0,"area":12.0}"#
        );
    }

    proptest! {
        #[test]
        fn derived_values_match_formulas(length in -1.0e6f64..1.0e6, width in -1.0e6f64..1.0e6) {
            let r = Rectangle::new(length, width);
            prop_assert_eq!(r.perimeter(), 2.0 * (length + width));
            prop_assert_eq!(r.area(), length * width);

            let summary = r.summary();
            prop_assert_eq!(summary.length, length);
            prop_assert_eq!(summary.width, width);
            prop_assert_eq!(summary.perimeter, r.perimeter());
            prop_assert_eq!(summary.area, r.area());
        }
    }
}
