use crate::pace::calculator::PaceResult;

/// Round a pace to the nearest whole second, ties rounding up
pub fn round_pace(pace: PaceResult) -> u64 {
    (pace.seconds_per_mile + 0.5).floor() as u64
}

/// Render a pace as "M:SS": minutes unpadded and unbounded, seconds
/// always two digits
pub fn format_pace(pace: PaceResult) -> String {
    let whole_seconds = round_pace(pace);
    let minutes = whole_seconds / 60;
    let seconds = whole_seconds % 60;

    format!("{}:{:02}", minutes, seconds)
}
