pub mod error;


pub use error::ConversionError;

use crate::duration;
use crate::expr;
use crate::pace;
use crate::units;
use serde::Serialize;

/// Everything a conversion produced, for machine-readable output
#[derive(Debug, Clone, Serialize)]
pub struct PaceReport {
    /// The raw expression as supplied
    pub input: String,
    /// Distance normalized to miles
    pub miles: f64,
    /// Elapsed time normalized to seconds
    pub total_seconds: u64,
    /// Pace rounded to the nearest whole second
    pub seconds_per_mile: u64,
    /// Pace rendered as "M:SS"
    pub pace: String,
    pub unit: &'static str,
}

/// Convert a raw expression like "800m@4:37" into a minutes-per-mile
/// pace string
pub fn convert(raw: &str) -> Result<String, ConversionError> {
    Ok(convert_report(raw)?.pace)
}

/// Run the full pipeline and keep the intermediate quantities
pub fn convert_report(raw: &str) -> Result<PaceReport, ConversionError> {
    let (distance_part, time_part) = expr::split_expression(raw)?;
    let distance = units::parse_distance(distance_part)?;
    let time = duration::parse_time(time_part)?;
    let result = pace::compute_pace(distance, time)?;

    Ok(PaceReport {
        input: raw.to_string(),
        miles: distance.miles,
        total_seconds: time.total_seconds,
        seconds_per_mile: pace::round_pace(result),
        pace: pace::format_pace(result),
        unit: "minutes per mile",
    })
}
