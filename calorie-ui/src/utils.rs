/// Parses the weight field into whole kilograms.
///
/// Trims whitespace first. Empty input is 0; non-empty input that does not
/// parse as an integer (including fractional values) is also coerced to 0
/// and logged at WARN. No bounds are enforced.
pub fn parse_weight_kg(s: &str) -> i32 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "invalid weight, using 0: {}", e);
        0
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_weight_kg_accepts_integers() {
        assert_eq!(parse_weight_kg("70"), 70);
    }

    #[test]
    fn parse_weight_kg_trims_whitespace() {
        assert_eq!(parse_weight_kg("  70  "), 70);
    }

    #[test]
    fn parse_weight_kg_empty_is_zero() {
        assert_eq!(parse_weight_kg(""), 0);
        assert_eq!(parse_weight_kg("   "), 0);
    }

    #[test]
    fn parse_weight_kg_non_numeric_is_zero() {
        assert_eq!(parse_weight_kg("seventy"), 0);
    }

    #[test]
    fn parse_weight_kg_fractional_is_zero() {
        // The field is integer kilograms; "70.5" is not an integer.
        assert_eq!(parse_weight_kg("70.5"), 0);
    }

    #[test]
    fn parse_weight_kg_allows_negatives() {
        // No bound enforcement; the estimator handles negatives.
        assert_eq!(parse_weight_kg("-5"), -5);
    }
}
