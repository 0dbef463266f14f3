/// Distance units accepted in the input grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Meters,
    Kilometers,
    Miles,
    Yards,
}

impl Unit {
    /// Look up a unit by its token (case-insensitive, trimmed)
    /// Returns None for tokens outside the supported set
    pub fn from_token(token: &str) -> Option<Unit> {
        match token.trim().to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" => Some(Unit::Meters),
            "km" | "kilometer" | "kilometers" => Some(Unit::Kilometers),
            "mi" | "mile" | "miles" => Some(Unit::Miles),
            "yd" | "yard" | "yards" => Some(Unit::Yards),
            _ => None,
        }
    }

    /// Conversion factor from one of this unit to miles
    /// Adding a unit means adding one arm here and one in from_token
    pub fn miles_per_unit(self) -> f64 {
        match self {
            Unit::Meters => 0.000621371,
            Unit::Kilometers => 0.621371,
            Unit::Miles => 1.0,
            Unit::Yards => 0.000568182,
        }
    }
}

/// A parsed distance: numeric magnitude plus the unit it was written in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceQuantity {
    pub value: f64,
    pub unit: Unit,
}

impl DistanceQuantity {
    /// Normalize to miles, the unit all pace math runs in
    pub fn to_miles(self) -> CanonicalDistance {
        CanonicalDistance {
            miles: self.value * self.unit.miles_per_unit(),
        }
    }
}

/// A distance normalized to miles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalDistance {
    pub miles: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lookup() {
        assert_eq!(Unit::from_token("m"), Some(Unit::Meters));
        assert_eq!(Unit::from_token("km"), Some(Unit::Kilometers));
        assert_eq!(Unit::from_token("mi"), Some(Unit::Miles));
        assert_eq!(Unit::from_token("mile"), Some(Unit::Miles));
        assert_eq!(Unit::from_token("miles"), Some(Unit::Miles));
        assert_eq!(Unit::from_token("yd"), Some(Unit::Yards));

        // Case-insensitive, trimmed
        assert_eq!(Unit::from_token("KM"), Some(Unit::Kilometers));
        assert_eq!(Unit::from_token(" Miles "), Some(Unit::Miles));

        assert_eq!(Unit::from_token("ft"), None);
        assert_eq!(Unit::from_token(""), None);
    }

    #[test]
    fn test_full_word_aliases() {
        assert_eq!(Unit::from_token("meters"), Some(Unit::Meters));
        assert_eq!(Unit::from_token("kilometer"), Some(Unit::Kilometers));
        assert_eq!(Unit::from_token("yards"), Some(Unit::Yards));
    }

    #[test]
    fn test_normalization() {
        let one_km = DistanceQuantity {
            value: 1.0,
            unit: Unit::Kilometers,
        };
        assert!((one_km.to_miles().miles - 0.621371).abs() < 1e-9);

        let marathon = DistanceQuantity {
            value: 26.2,
            unit: Unit::Miles,
        };
        assert!((marathon.to_miles().miles - 26.2).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_per_unit() {
        // Converting to miles and back with the same factor reproduces
        // the original value within floating-point tolerance
        let units = [Unit::Meters, Unit::Kilometers, Unit::Miles, Unit::Yards];
        for unit in units {
            for value in [0.5, 1.0, 800.0, 42195.0] {
                let miles = DistanceQuantity { value, unit }.to_miles().miles;
                let back = miles / unit.miles_per_unit();
                assert!(
                    (back - value).abs() < 1e-9 * value,
                    "round trip failed for {:?}: {} -> {}",
                    unit,
                    value,
                    back
                );
            }
        }
    }
}
