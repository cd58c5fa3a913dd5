//! Comma-grouped amount text: formatting for display, parsing form input

use thiserror::Error;

use super::currency::Currency;

/// Form text that could not be read as a number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a valid number: {text:?}")]
pub struct ParseAmountError {
    pub text: String,
}

/// Two decimals with comma thousands separators, e.g. `1,234,567.89`
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Amount prefixed with the currency symbol, e.g. `₹ 717,647.06`
pub fn format_money(currency: Currency, value: f64) -> String {
    format!("{} {}", currency.symbol(), format_amount(value))
}

/// Strip thousands separators and whitespace, then parse
pub fn parse_amount(text: &str) -> Result<f64, ParseAmountError> {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    cleaned.parse::<f64>().map_err(|_| ParseAmountError {
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouping() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(717_647.0588), "717,647.06");
        assert_eq!(format_amount(100_000.0), "100,000.00");
        assert_eq!(format_amount(-25_000.5), "-25,000.50");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Currency::USD, 2_000.0), "$ 2,000.00");
        assert_eq!(format_money(Currency::CAD, 12.5), "C$ 12.50");
    }

    #[test]
    fn test_parse_strips_separators() {
        assert_eq!(parse_amount("1,000,000.00").unwrap(), 1_000_000.0);
        assert_eq!(parse_amount(" 30 000 ").unwrap(), 30_000.0);
        assert_eq!(parse_amount("9.5").unwrap(), 9.5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_amount("ten lakh").unwrap_err();
        assert_eq!(err.text, "ten lakh");
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_format_then_parse() {
        let text = format_amount(640_000.0);
        assert_eq!(parse_amount(&text).unwrap(), 640_000.0);
    }
}
