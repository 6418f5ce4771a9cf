//! Error types for chart construction and rendering

use crate::charts::Series;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chart needs at least one category")]
    NoCategories,

    #[error("{series} series has {actual} values but there are {expected} categories")]
    LengthMismatch {
        series: Series,
        expected: usize,
        actual: usize,
    },

    #[error("{series} series value at index {index} is not finite: {value}")]
    NonFiniteValue {
        series: Series,
        index: usize,
        value: f64,
    },

    #[error("Chart rendering failed: {message}")]
    Rendering { message: String },

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chart window failed: {message}")]
    Display { message: String },
}

impl From<eframe::Error> for ChartError {
    fn from(err: eframe::Error) -> Self {
        ChartError::Display {
            message: err.to_string(),
        }
    }
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ChartError
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ChartError::Rendering {
            message: format!("Drawing area error: {}", err),
        }
    }
}
