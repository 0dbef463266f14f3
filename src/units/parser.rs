use crate::units::error::UnitError;
use crate::units::types::{CanonicalDistance, DistanceQuantity, Unit};

/// Parse a distance string (e.g., "800m", "5 km", "26.2 miles")
/// Returns the distance normalized to miles
pub fn parse_distance(input: &str) -> Result<CanonicalDistance, UnitError> {
    let trimmed = input.trim();

    // The numeric portion runs up to the first character that is neither
    // an ASCII digit nor a decimal point
    let split_at = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(trimmed.len());
    let (number, token) = trimmed.split_at(split_at);

    let value = parse_magnitude(number)?;
    let unit = Unit::from_token(token)
        .ok_or_else(|| UnitError::UnknownUnit(token.trim().to_string()))?;

    Ok(DistanceQuantity { value, unit }.to_miles())
}

/// Validate the numeric portion: at least one digit, at most one decimal
/// point, strictly positive
fn parse_magnitude(number: &str) -> Result<f64, UnitError> {
    if !number.contains(|c: char| c.is_ascii_digit()) {
        return Err(UnitError::InvalidValue(number.to_string()));
    }
    if number.matches('.').count() > 1 {
        return Err(UnitError::InvalidValue(number.to_string()));
    }

    let value: f64 = number
        .parse()
        .map_err(|_| UnitError::InvalidValue(number.to_string()))?;

    if value <= 0.0 {
        return Err(UnitError::InvalidValue(number.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_number() {
        let result = parse_distance("800m").unwrap();
        assert!((result.miles - 0.4970968).abs() < 1e-6);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let result = parse_distance(" 5 km ").unwrap();
        assert!((result.miles - 3.106855).abs() < 1e-6);
    }

    #[test]
    fn test_parse_decimal() {
        let result = parse_distance("26.2mi").unwrap();
        assert!((result.miles - 26.2).abs() < 1e-9);

        // Leading dot is a legal decimal
        let result = parse_distance(".5mi").unwrap();
        assert!((result.miles - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_case_insensitive_unit() {
        let result = parse_distance("1KM").unwrap();
        assert!((result.miles - 0.621371).abs() < 1e-9);
    }

    #[test]
    fn test_parse_word_units() {
        let result = parse_distance("1 mile").unwrap();
        assert!((result.miles - 1.0).abs() < 1e-9);

        let result = parse_distance("3 miles").unwrap();
        assert!((result.miles - 3.0).abs() < 1e-9);

        let result = parse_distance("220yd").unwrap();
        assert!((result.miles - 0.12500004).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            parse_distance("800ft"),
            Err(UnitError::UnknownUnit("ft".to_string()))
        );
        // No unit token at all
        assert_eq!(
            parse_distance("800"),
            Err(UnitError::UnknownUnit("".to_string()))
        );
    }

    #[test]
    fn test_missing_number() {
        assert!(matches!(
            parse_distance("km"),
            Err(UnitError::InvalidValue(_))
        ));
        assert!(matches!(parse_distance(""), Err(UnitError::InvalidValue(_))));
    }

    #[test]
    fn test_rejects_sign() {
        // A sign is not part of the numeric grammar; it lands in the
        // unit token position and the magnitude comes up empty
        assert!(matches!(
            parse_distance("-5km"),
            Err(UnitError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_rejects_zero() {
        assert_eq!(
            parse_distance("0km"),
            Err(UnitError::InvalidValue("0".to_string()))
        );
        assert_eq!(
            parse_distance("0.0mi"),
            Err(UnitError::InvalidValue("0.0".to_string()))
        );
    }

    #[test]
    fn test_rejects_malformed_number() {
        assert_eq!(
            parse_distance("1.2.3km"),
            Err(UnitError::InvalidValue("1.2.3".to_string()))
        );
    }
}
