//! Number formatting for human-readable display.
//!
//! Dollar amounts, token amounts, and percentage changes as shown in the
//! dashboard's stat cards and table cells. Large magnitudes are abbreviated
//! with K/M/B suffixes; small magnitudes fall back to a `<$0.001` floor.

/// Trims trailing zeros, adds thousands separators.
pub fn group_thousands(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let parts = trimmed.split('.').collect::<Vec<_>>();

    let integer_part = parts[0]
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    let integer_part = integer_part
        .strip_prefix("-,")
        .map(|rest| format!("-{rest}"))
        .unwrap_or(integer_part);

    if parts.len() > 1 {
        format!("{}.{}", integer_part, parts[1])
    } else {
        integer_part
    }
}

/// Magnitude suffix for abbreviated display.
fn abbreviate(abs: f64) -> (f64, &'static str) {
    if abs >= 1_000_000_000.0 {
        (abs / 1_000_000_000.0, "B")
    } else if abs >= 1_000_000.0 {
        (abs / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (abs / 1_000.0, "K")
    } else {
        (abs, "")
    }
}

/// Format a USD value the way the dashboard stat cards do.
///
/// Zero and non-finite values render as `$0.00`; magnitudes below a tenth of
/// a cent render as `<$0.001`; thousands and above are abbreviated.
pub fn format_dollar(amount: f64, digits: usize) -> String {
    if amount == 0.0 || !amount.is_finite() {
        return "$0.00".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    if abs < 0.001 {
        return "<$0.001".to_string();
    }
    let (scaled, suffix) = abbreviate(abs);
    if suffix.is_empty() {
        format!("{sign}${}", group_thousands(format!("{scaled:.digits$}")))
    } else {
        format!("{sign}${scaled:.digits$}{suffix}")
    }
}

/// Format a raw token amount (no currency sign, same abbreviation rules).
pub fn format_amount(amount: f64, digits: usize) -> String {
    if amount == 0.0 || !amount.is_finite() {
        return "0".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    if abs < 0.001 {
        return "<0.001".to_string();
    }
    let (scaled, suffix) = abbreviate(abs);
    if suffix.is_empty() {
        format!("{sign}{}", group_thousands(format!("{scaled:.digits$}")))
    } else {
        format!("{sign}{scaled:.digits$}{suffix}")
    }
}

/// Format a percentage change with an explicit sign, two decimal places.
pub fn format_percent(change: f64) -> String {
    if !change.is_finite() {
        return "0.00%".to_string();
    }
    if change < 0.0 {
        format!("-{:.2}%", change.abs())
    } else {
        format!("+{change:.2}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands_integers() {
        assert_eq!(group_thousands("0".to_string()), "0");
        assert_eq!(group_thousands("123".to_string()), "123");
        assert_eq!(group_thousands("1000".to_string()), "1,000");
        assert_eq!(group_thousands("1234567890".to_string()), "1,234,567,890");
    }

    #[test]
    fn test_group_thousands_trailing_zeros_trimmed() {
        assert_eq!(group_thousands("1.50".to_string()), "1.5");
        assert_eq!(group_thousands("1.00".to_string()), "1");
        assert_eq!(group_thousands("1000.00".to_string()), "1,000");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands("-1000".to_string()), "-1,000");
        assert_eq!(group_thousands("-1234.56".to_string()), "-1,234.56");
    }

    #[test]
    fn test_format_dollar_plain() {
        assert_eq!(format_dollar(0.0, 2), "$0.00");
        assert_eq!(format_dollar(f64::NAN, 2), "$0.00");
        assert_eq!(format_dollar(1.5, 2), "$1.5");
        assert_eq!(format_dollar(999.99, 2), "$999.99");
    }

    #[test]
    fn test_format_dollar_abbreviated() {
        assert_eq!(format_dollar(1_234.0, 2), "$1.23K");
        assert_eq!(format_dollar(1_234_567.0, 2), "$1.23M");
        assert_eq!(format_dollar(4_500_000_000.0, 1), "$4.5B");
    }

    #[test]
    fn test_format_dollar_small_and_negative() {
        assert_eq!(format_dollar(0.0004, 2), "<$0.001");
        assert_eq!(format_dollar(-1_234.0, 2), "-$1.23K");
        assert_eq!(format_dollar(-12.5, 2), "-$12.5");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0, 2), "0");
        assert_eq!(format_amount(1_234.0, 2), "1.23K");
        assert_eq!(format_amount(42.0, 2), "42");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.234), "+1.23%");
        assert_eq!(format_percent(-5.678), "-5.68%");
        assert_eq!(format_percent(0.0), "+0.00%");
        assert_eq!(format_percent(f64::NAN), "0.00%");
    }
}
