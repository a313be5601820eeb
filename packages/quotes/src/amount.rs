// ABOUTME: Free-text quote amount parsing
// ABOUTME: Reads the leading number from user input such as "1500 per unit"

use vendorworld_core::ValidationError;

const NUMERIC_CHARS: &str = "0123456789+-.eE";

/// Parse the longest leading floating-point prefix of `text`.
///
/// Whitespace around the input is ignored and trailing text after the number
/// is dropped, so `"1500.50 USD"` yields `1500.5`. Input with no leading
/// number, or one that overflows to infinity, is rejected.
pub fn parse_amount(text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required("amount"));
    }

    let candidate_len = trimmed
        .char_indices()
        .find(|(_, c)| !NUMERIC_CHARS.contains(*c))
        .map_or(trimmed.len(), |(idx, _)| idx);
    let candidate = &trimmed[..candidate_len];

    let value = (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .ok_or_else(|| ValidationError::Invalid {
            field: "amount",
            reason: "must start with a number".to_string(),
        })?;

    if !value.is_finite() {
        return Err(ValidationError::Invalid {
            field: "amount",
            reason: "must be a finite number".to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_amount("1500").unwrap(), 1500.0);
        assert_eq!(parse_amount(" 99.95 ").unwrap(), 99.95);
        assert_eq!(parse_amount(".5").unwrap(), 0.5);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
        assert_eq!(parse_amount("2e3").unwrap(), 2000.0);
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        assert_eq!(parse_amount("1500.50 USD").unwrap(), 1500.5);
        assert_eq!(parse_amount("12abc").unwrap(), 12.0);
        assert_eq!(parse_amount("1.2.3").unwrap(), 1.2);
        assert_eq!(parse_amount("7e").unwrap(), 7.0);
    }

    #[test]
    fn test_rejects_empty_and_non_numeric() {
        assert_eq!(parse_amount("   "), Err(ValidationError::Required("amount")));
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("$100").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(parse_amount("1e999").is_err());
    }
}
