//! Money formatting for prices and totals (en-US, USD)

/// Format a number with `,` thousands separators and the given number of decimals
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    // -0.0 would otherwise print as "-0.00"
    let value = if value == 0.0 || !value.is_finite() {
        0.0
    } else {
        value
    };
    let formatted = format!("{:.*}", decimals, value.abs());

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| matches!(c, '1'..='9')) {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format an amount as US dollars: `$1,234.56`, `-$5.00`
pub fn format_usd(value: f64) -> String {
    let number = format_number_with_decimals(value, 2);
    match number.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1234.56), "$1,234.56");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(109.95), "$109.95");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(-0.0), "$0.00");
        assert_eq!(format_usd(-5.0), "-$5.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(999.0, 2), "999.00");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_non_finite_formats_as_zero() {
        assert_eq!(format_usd(f64::NAN), "$0.00");
    }
}
