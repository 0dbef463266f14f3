use crate::duration::TimeError;
use crate::expr::SplitError;
use crate::pace::PaceError;
use crate::units::UnitError;
use std::fmt;

/// Errors surfaced by the conversion pipeline, one variant per failure
/// kind; each stage fails fast and no partial result is produced
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    MalformedExpression(SplitError),
    InvalidDistanceValue(String),
    UnknownUnit(String),
    InvalidTimeFormat(TimeError),
    DivisionByZeroDistance,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::MalformedExpression(e) => {
                write!(f, "malformed expression: {}", e)
            }
            ConversionError::InvalidDistanceValue(s) => {
                write!(f, "invalid distance value '{}'", s)
            }
            ConversionError::UnknownUnit(s) => write!(f, "unknown unit '{}'", s),
            ConversionError::InvalidTimeFormat(e) => {
                write!(f, "invalid time format: {}", e)
            }
            ConversionError::DivisionByZeroDistance => {
                write!(f, "distance must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<SplitError> for ConversionError {
    fn from(e: SplitError) -> Self {
        ConversionError::MalformedExpression(e)
    }
}

impl From<UnitError> for ConversionError {
    fn from(e: UnitError) -> Self {
        match e {
            UnitError::InvalidValue(s) => ConversionError::InvalidDistanceValue(s),
            UnitError::UnknownUnit(s) => ConversionError::UnknownUnit(s),
        }
    }
}

impl From<TimeError> for ConversionError {
    fn from(e: TimeError) -> Self {
        ConversionError::InvalidTimeFormat(e)
    }
}

impl From<PaceError> for ConversionError {
    fn from(e: PaceError) -> Self {
        match e {
            PaceError::DivisionByZeroDistance => ConversionError::DivisionByZeroDistance,
        }
    }
}
