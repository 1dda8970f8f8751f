//! Literal chart datasets
//!
//! A dataset is a list of records: record `i` is `categories[i]` together
//! with `values[i]` of every series. Everything is `'static` so slides can
//! declare their data as constants.

use egui::Color32;
use thiserror::Error;

/// Authoring mistakes in a literal dataset
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("dataset '{dataset}' has no records")]
    EmptyDataset { dataset: &'static str },

    #[error("series '{series}' in '{dataset}' has {actual} values, expected {expected}")]
    SeriesLengthMismatch {
        dataset: &'static str,
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("series '{series}' in '{dataset}' has {actual} point colors, expected {expected}")]
    PointColorMismatch {
        dataset: &'static str,
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("series '{series}' in '{dataset}' holds a non-finite value at record {index}")]
    NonFinite {
        dataset: &'static str,
        series: &'static str,
        index: usize,
    },
}

/// One named numeric field across all records
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color32,
    pub values: &'static [f64],
    /// Per-record colors; empty means every record uses `color`
    pub point_colors: &'static [Color32],
    /// Stroke width for line and area charts
    pub width: f32,
    /// Draw a marker on every point of a line chart
    pub markers: bool,
}

impl Series {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        color: Color32,
        values: &'static [f64],
    ) -> Self {
        Self {
            key,
            label,
            color,
            values,
            point_colors: &[],
            width: 2.0,
            markers: false,
        }
    }

    pub const fn with_point_colors(mut self, colors: &'static [Color32]) -> Self {
        self.point_colors = colors;
        self
    }

    pub const fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub const fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }

    /// Color of a single record
    pub fn color_at(&self, index: usize) -> Color32 {
        self.point_colors.get(index).copied().unwrap_or(self.color)
    }
}

/// Ordered records shared by all series of a chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dataset {
    pub name: &'static str,
    pub categories: &'static [&'static str],
    pub series: &'static [Series],
}

/// A borrowed view of one record
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    pub category: &'static str,
    pub values: Vec<(&'a str, f64)>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Check that every series lines up with the categories
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.categories.is_empty() || self.series.is_empty() {
            return Err(ChartError::EmptyDataset { dataset: self.name });
        }

        let expected = self.categories.len();
        for series in self.series {
            if series.values.len() != expected {
                return Err(ChartError::SeriesLengthMismatch {
                    dataset: self.name,
                    series: series.key,
                    expected,
                    actual: series.values.len(),
                });
            }
            if !series.point_colors.is_empty() && series.point_colors.len() != expected {
                return Err(ChartError::PointColorMismatch {
                    dataset: self.name,
                    series: series.key,
                    expected,
                    actual: series.point_colors.len(),
                });
            }
            if let Some(index) = series.values.iter().position(|v| !v.is_finite()) {
                return Err(ChartError::NonFinite {
                    dataset: self.name,
                    series: series.key,
                    index,
                });
            }
        }
        Ok(())
    }

    /// Record at a position, with one value per series
    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        let category = *self.categories.get(index)?;
        let values = self
            .series
            .iter()
            .filter_map(|s| s.values.get(index).map(|v| (s.key, *v)))
            .collect();
        Some(Record { category, values })
    }

    /// Series by key
    pub fn series(&self, key: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.key == key)
    }

    /// Sum of one series, e.g. the total of a pie
    pub fn total(&self, key: &str) -> f64 {
        self.series(key)
            .map(|s| s.values.iter().sum())
            .unwrap_or(0.0)
    }

    /// Largest value across all series
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Category label for a plot coordinate, if it sits on a record
    pub fn category_at(&self, coordinate: f64) -> Option<&'static str> {
        let rounded = coordinate.round();
        if (coordinate - rounded).abs() > 1e-6 || rounded < 0.0 {
            return None;
        }
        self.categories.get(rounded as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORES: Dataset = Dataset {
        name: "scores",
        categories: &["a", "b", "c"],
        series: &[
            Series::new("f1", "F1", Color32::RED, &[0.5, 0.7, 0.9]),
            Series::new("auc", "AUC", Color32::BLUE, &[0.6, 0.8, 1.0]),
        ],
    };

    #[test]
    fn test_valid_dataset() {
        assert_eq!(SCORES.validate(), Ok(()));
        assert_eq!(SCORES.len(), 3);
        assert_eq!(SCORES.max_value(), 1.0);
        assert!((SCORES.total("f1") - 2.1).abs() < 1e-9);
        assert_eq!(SCORES.total("missing"), 0.0);
    }

    #[test]
    fn test_record_lookup() {
        let record = SCORES.record(1).unwrap();
        assert_eq!(record.category, "b");
        assert_eq!(record.values, vec![("f1", 0.7), ("auc", 0.8)]);
        assert!(SCORES.record(3).is_none());
    }

    #[test]
    fn test_length_mismatch() {
        const SHORT: Dataset = Dataset {
            name: "short",
            categories: &["a", "b"],
            series: &[Series::new("v", "V", Color32::RED, &[1.0])],
        };
        assert_eq!(
            SHORT.validate(),
            Err(ChartError::SeriesLengthMismatch {
                dataset: "short",
                series: "v",
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_point_color_mismatch() {
        const COLORS: Dataset = Dataset {
            name: "colors",
            categories: &["a", "b"],
            series: &[Series::new("v", "V", Color32::RED, &[1.0, 2.0])
                .with_point_colors(&[Color32::GREEN])],
        };
        assert!(matches!(
            COLORS.validate(),
            Err(ChartError::PointColorMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_empty_and_non_finite() {
        const EMPTY: Dataset = Dataset { name: "empty", categories: &[], series: &[] };
        assert_eq!(EMPTY.validate(), Err(ChartError::EmptyDataset { dataset: "empty" }));

        const NAN: Dataset = Dataset {
            name: "nan",
            categories: &["a", "b"],
            series: &[Series::new("v", "V", Color32::RED, &[1.0, f64::NAN])],
        };
        assert!(matches!(NAN.validate(), Err(ChartError::NonFinite { index: 1, .. })));
    }

    #[test]
    fn test_point_colors_fall_back() {
        let series = Series::new("v", "V", Color32::RED, &[1.0, 2.0])
            .with_point_colors(&[Color32::GREEN]);
        assert_eq!(series.color_at(0), Color32::GREEN);
        assert_eq!(series.color_at(1), Color32::RED);
    }

    #[test]
    fn test_category_at_integer_positions_only() {
        assert_eq!(SCORES.category_at(2.0), Some("c"));
        assert_eq!(SCORES.category_at(0.5), None);
        assert_eq!(SCORES.category_at(-1.0), None);
        assert_eq!(SCORES.category_at(3.0), None);
    }
}
