//! Human-readable formatting for money amounts.

/// Group digits in thousands with commas: `1234567` -> `1,234,567`.
pub fn intcomma(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Prefix an amount with a division's currency unit, e.g. `$ 1,500`.
pub fn format_currency(unit: &str, amount: i64) -> String {
    let unit = unit.trim();
    if unit.is_empty() {
        intcomma(amount)
    } else {
        format!("{} {}", unit, intcomma(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intcomma() {
        assert_eq!(intcomma(0), "0");
        assert_eq!(intcomma(999), "999");
        assert_eq!(intcomma(1000), "1,000");
        assert_eq!(intcomma(1234567), "1,234,567");
        assert_eq!(intcomma(100000), "100,000");
    }

    #[test]
    fn test_intcomma_negative() {
        assert_eq!(intcomma(-1234), "-1,234");
        assert_eq!(intcomma(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("$", 46), "$ 46");
        assert_eq!(format_currency("$", 2500000), "$ 2,500,000");
        assert_eq!(format_currency("", 1500), "1,500");
        assert_eq!(format_currency("  ", 1500), "1,500");
    }
}
