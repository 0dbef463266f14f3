use crate::duration::ElapsedTime;
use crate::units::CanonicalDistance;
use std::fmt;

/// Time required to cover one mile, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaceResult {
    pub seconds_per_mile: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaceError {
    DivisionByZeroDistance,
}

impl fmt::Display for PaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaceError::DivisionByZeroDistance => {
                write!(f, "cannot compute a pace over zero distance")
            }
        }
    }
}

impl std::error::Error for PaceError {}

/// Compute seconds-per-mile for a distance and elapsed time
/// Fails on zero distance; the distance parser never produces one
pub fn compute_pace(
    distance: CanonicalDistance,
    time: ElapsedTime,
) -> Result<PaceResult, PaceError> {
    if distance.miles == 0.0 {
        return Err(PaceError::DivisionByZeroDistance);
    }

    Ok(PaceResult {
        seconds_per_mile: time.total_seconds as f64 / distance.miles,
    })
}
