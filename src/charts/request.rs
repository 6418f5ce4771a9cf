//! Chart Request Module
//! The input record for one grouped bar chart: category labels plus two aligned series.

use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two comparison series a bar or value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    Left,
    Right,
}

impl Series {
    pub const BOTH: [Series; 2] = [Series::Left, Series::Right];
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Series::Left => write!(f, "left"),
            Series::Right => write!(f, "right"),
        }
    }
}

/// Everything needed to draw one grouped, dual-series bar chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartRequest {
    pub labels: Vec<String>,
    pub left_series_name: String,
    pub right_series_name: String,
    pub left_values: Vec<f64>,
    pub right_values: Vec<f64>,
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

impl ChartRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_left(mut self, name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        self.left_series_name = name.into();
        self.left_values = values.into();
        self
    }

    pub fn with_right(mut self, name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        self.right_series_name = name.into();
        self.right_values = values.into();
        self
    }

    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_label = x.into();
        self.y_axis_label = y.into();
        self
    }

    /// Number of bar groups.
    pub fn category_count(&self) -> usize {
        self.labels.len()
    }

    pub fn series_name(&self, series: Series) -> &str {
        match series {
            Series::Left => &self.left_series_name,
            Series::Right => &self.right_series_name,
        }
    }

    pub fn values(&self, series: Series) -> &[f64] {
        match series {
            Series::Left => &self.left_values,
            Series::Right => &self.right_values,
        }
    }

    /// Check that both series line up with the labels and hold only finite numbers.
    pub fn validate(&self) -> Result<()> {
        let expected = self.labels.len();
        if expected == 0 {
            return Err(ChartError::NoCategories);
        }

        for series in Series::BOTH {
            let values = self.values(series);
            if values.len() != expected {
                return Err(ChartError::LengthMismatch {
                    series,
                    expected,
                    actual: values.len(),
                });
            }
            if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite())
            {
                return Err(ChartError::NonFiniteValue {
                    series,
                    index,
                    value,
                });
            }
        }

        Ok(())
    }
}

/// Default string form of a measurement, as drawn above its bar.
///
/// Whole numbers keep their fractional part (`580.0`), everything else is the
/// shortest decimal that reads back to the same value (`428.75`).
pub fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_groups() -> ChartRequest {
        ChartRequest::new("t")
            .with_labels(["a", "b", "c"])
            .with_left("GPU", vec![1.0, 2.0, 3.0])
            .with_right("CPU", vec![4.0, 5.0, 6.0])
    }

    #[test]
    fn valid_request_passes() {
        assert!(three_groups().validate().is_ok());
    }

    #[test]
    fn empty_labels_rejected() {
        let req = ChartRequest::new("t");
        assert!(matches!(req.validate(), Err(ChartError::NoCategories)));
    }

    #[test]
    fn short_right_series_rejected() {
        let req = three_groups().with_right("CPU", vec![4.0, 5.0]);
        match req.validate() {
            Err(ChartError::LengthMismatch {
                series,
                expected,
                actual,
            }) => {
                assert_eq!(series, Series::Right);
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn nan_rejected_with_position() {
        let req = three_groups().with_left("GPU", vec![1.0, f64::NAN, 3.0]);
        assert!(matches!(
            req.validate(),
            Err(ChartError::NonFiniteValue {
                series: Series::Left,
                index: 1,
                ..
            })
        ));
    }

    #[test]
    fn negative_and_zero_values_allowed() {
        let req = three_groups().with_left("GPU", vec![-1.0, 0.0, 2.5]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn value_formatting() {
        assert_eq!(format_value(428.75), "428.75");
        assert_eq!(format_value(580.0), "580.0");
        assert_eq!(format_value(21540.33), "21540.33");
        assert_eq!(format_value(-2.5), "-2.5");
        assert_eq!(format_value(0.0), "0.0");
    }
}
