use std::fmt;

/// Total duration of the run, normalized to whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTime {
    pub total_seconds: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TimeError {
    // Expected 2 fields (MM:SS) or 3 (H:MM:SS)
    FieldCount(usize),
    InvalidField(String),
    MinutesOutOfRange(u32),
    SecondsOutOfRange(u32),
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::FieldCount(n) => {
                write!(f, "expected MM:SS or H:MM:SS, found {} field(s)", n)
            }
            TimeError::InvalidField(s) => write!(f, "'{}' is not a whole number", s),
            TimeError::MinutesOutOfRange(m) => {
                write!(f, "minutes must be below 60, found {}", m)
            }
            TimeError::SecondsOutOfRange(s) => {
                write!(f, "seconds must be below 60, found {}", s)
            }
        }
    }
}

impl std::error::Error for TimeError {}

/// Parse a clock-style duration: "M:SS", "MM:SS" or "H:MM:SS"
pub fn parse_time(input: &str) -> Result<ElapsedTime, TimeError> {
    let fields = input
        .split(':')
        .map(parse_field)
        .collect::<Result<Vec<u32>, TimeError>>()?;

    let total_seconds = match fields[..] {
        [minutes, seconds] => {
            if seconds >= 60 {
                return Err(TimeError::SecondsOutOfRange(seconds));
            }
            u64::from(minutes) * 60 + u64::from(seconds)
        }
        [hours, minutes, seconds] => {
            if minutes >= 60 {
                return Err(TimeError::MinutesOutOfRange(minutes));
            }
            if seconds >= 60 {
                return Err(TimeError::SecondsOutOfRange(seconds));
            }
            u64::from(hours) * 3600 + u64::from(minutes) * 60 + u64::from(seconds)
        }
        _ => return Err(TimeError::FieldCount(fields.len())),
    };

    Ok(ElapsedTime { total_seconds })
}

/// A field is one or more ASCII digits; signs, blanks and decimals are
/// all rejected
fn parse_field(field: &str) -> Result<u32, TimeError> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
        return Err(TimeError::InvalidField(field.to_string()));
    }
    field
        .parse()
        .map_err(|_| TimeError::InvalidField(field.to_string()))
}
