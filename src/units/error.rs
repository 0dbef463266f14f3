use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    InvalidValue(String),
    UnknownUnit(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::InvalidValue(s) => write!(f, "invalid distance value '{}'", s),
            UnitError::UnknownUnit(s) => write!(f, "unknown unit '{}'", s),
        }
    }
}

impl std::error::Error for UnitError {}
