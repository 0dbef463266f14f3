use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    MissingSeparator,
    ExtraSeparator(usize),
    EmptyDistance,
    EmptyTime,
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::MissingSeparator => {
                write!(f, "expected a '@' between distance and time")
            }
            SplitError::ExtraSeparator(n) => {
                write!(f, "expected a single '@', found {}", n)
            }
            SplitError::EmptyDistance => write!(f, "missing distance before '@'"),
            SplitError::EmptyTime => write!(f, "missing time after '@'"),
        }
    }
}

impl std::error::Error for SplitError {}

/// Split a raw expression into its distance and time halves
/// Exactly one '@' separator is required; both halves are trimmed
pub fn split_expression(raw: &str) -> Result<(&str, &str), SplitError> {
    let separators = raw.matches('@').count();
    if separators > 1 {
        return Err(SplitError::ExtraSeparator(separators));
    }

    let (distance, time) = raw
        .split_once('@')
        .ok_or(SplitError::MissingSeparator)?;

    let distance = distance.trim();
    let time = time.trim();

    if distance.is_empty() {
        return Err(SplitError::EmptyDistance);
    }
    if time.is_empty() {
        return Err(SplitError::EmptyTime);
    }

    Ok((distance, time))
}
