//! Acquisition query filters.

use chrono::NaiveDate;
use std::ops::RangeInclusive;

/// Date format expected in the filter inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Allowed cloud coverage values, percent. Both cloud sliders and the
/// notification payload hold values to this range.
pub const CLOUD_COVERAGE_RANGE: RangeInclusive<u8> = 0..=100;

/// Clamps a cloud coverage value into [`CLOUD_COVERAGE_RANGE`].
pub fn clamp_cloud_coverage(value: u8) -> u8 {
    value.clamp(*CLOUD_COVERAGE_RANGE.start(), *CLOUD_COVERAGE_RANGE.end())
}

/// Requested image footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    /// A 3x3 tile neighborhood around the target.
    #[default]
    ThreeByThree,
    /// The full scene.
    Full,
}

impl ImageSize {
    pub fn label(&self) -> &'static str {
        match self {
            ImageSize::ThreeByThree => "3x3",
            ImageSize::Full => "Full",
        }
    }

    /// Value the acquisition service expects for this size.
    pub fn request_value(&self) -> &'static str {
        match self {
            ImageSize::ThreeByThree => "3x3",
            ImageSize::Full => "full",
        }
    }

    pub fn all() -> &'static [ImageSize] {
        &[ImageSize::ThreeByThree, ImageSize::Full]
    }
}

/// Filters applied to an imagery query.
#[derive(Default)]
pub struct QueryFilters {
    /// Inclusive start of the acquisition window, `YYYY-MM-DD`.
    pub start_date: String,
    /// Inclusive end of the acquisition window, `YYYY-MM-DD`.
    pub end_date: String,
    pub image_size: ImageSize,
    /// Maximum acceptable cloud coverage, percent.
    pub cloud_coverage: u8,
}

impl QueryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that both dates are present and well-formed.
    pub fn validate(&self) -> Result<(), String> {
        if parse_date(&self.start_date).is_none() || parse_date(&self.end_date).is_none() {
            return Err("Please fill all required fields.".to_string());
        }

        Ok(())
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters() {
        let filters = QueryFilters::new();
        assert_eq!(filters.image_size, ImageSize::ThreeByThree);
        assert_eq!(filters.cloud_coverage, 0);
        assert!(filters.start_date.is_empty());
    }

    #[test]
    fn test_cloud_coverage_range_ends() {
        assert_eq!(*CLOUD_COVERAGE_RANGE.start(), 0);
        assert_eq!(*CLOUD_COVERAGE_RANGE.end(), 100);
    }

    #[test]
    fn test_clamp_cloud_coverage_at_extremes() {
        assert_eq!(clamp_cloud_coverage(0), 0);
        assert_eq!(clamp_cloud_coverage(42), 42);
        assert_eq!(clamp_cloud_coverage(100), 100);
        assert_eq!(clamp_cloud_coverage(255), 100);
    }

    #[test]
    fn test_validate_requires_both_dates() {
        let mut filters = QueryFilters::new();
        assert!(filters.validate().is_err());

        filters.start_date = "2024-01-01".to_string();
        assert!(filters.validate().is_err());

        filters.end_date = "2024-02-15".to_string();
        assert!(filters.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_dates() {
        let mut filters = QueryFilters::new();
        filters.start_date = "01/01/2024".to_string();
        filters.end_date = "2024-02-15".to_string();

        let message = filters.validate().unwrap_err();
        assert_eq!(message, "Please fill all required fields.");
    }

    #[test]
    fn test_validate_rejects_impossible_dates() {
        let mut filters = QueryFilters::new();
        filters.start_date = "2024-02-30".to_string();
        filters.end_date = "2024-03-01".to_string();

        assert!(filters.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_padded_input() {
        let mut filters = QueryFilters::new();
        filters.start_date = " 2024-01-01 ".to_string();
        filters.end_date = "2024-02-15".to_string();

        assert!(filters.validate().is_ok());
    }

    #[test]
    fn test_image_size_request_values() {
        assert_eq!(ImageSize::ThreeByThree.request_value(), "3x3");
        assert_eq!(ImageSize::Full.request_value(), "full");
    }
}
