//! Number rounding and display formatting.

/// Fractional digits kept when rounding results.
pub const PRECISION: usize = 7;

/// Magnitudes below this are rounded in exponential form.
const SMALL_MAGNITUDE: f64 = 1e-7;

/// Magnitudes above this are rounded in exponential form.
const LARGE_MAGNITUDE: f64 = 1e10;

/// Default thousands separator.
pub const THOUSANDS_SEPARATOR: char = ',';

/// Round a computed value to a stable precision.
///
/// Very small or very large magnitudes keep [`PRECISION`] fractional digits
/// of their exponential form. Everything else is rounded to [`PRECISION`]
/// decimal places by shifting the decimal point through the value's string
/// form, which sidesteps binary representation error (`1.005` stays `1.005`
/// instead of drifting to `1.00499999`).
pub fn round_result(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let magnitude = value.abs();
    if magnitude < SMALL_MAGNITUDE || magnitude > LARGE_MAGNITUDE {
        return format!("{:.*e}", PRECISION, value)
            .parse()
            .unwrap_or(value);
    }

    let shifted: f64 = format!("{}e{}", value, PRECISION)
        .parse()
        .unwrap_or(value * 1e7);
    let rounded = round_half_up(shifted);
    format!("{}e-{}", rounded, PRECISION)
        .parse()
        .unwrap_or(rounded / 1e7)
}

/// Round to the nearest integer, ties toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if (rounded - value).abs() == 0.5 {
        value.ceil()
    } else {
        rounded
    }
}

/// Render a number as a plain decimal string.
///
/// Never uses exponential notation, so the result survives the evaluator's
/// character allow-list. Negative zero renders as `"0"`.
pub fn number_to_string(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Format a display string with the default thousands separator.
pub fn format_display(input: &str) -> String {
    format_display_with(input, THOUSANDS_SEPARATOR)
}

/// Format a display string, grouping the integer digits in threes.
///
/// The fraction (anything after the first `.`) is reattached untouched.
/// Input whose integer part is not numeric, like the `"Error"` sentinel,
/// is returned as-is.
pub fn format_display_with(input: &str, separator: char) -> String {
    if input.is_empty() {
        return String::new();
    }

    let (integer, fraction) = match input.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (input, None),
    };

    let (sign, digits) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer),
    };

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return input.to_string();
    }

    let mut result = String::from(sign);
    result.push_str(&group_digits(digits, separator));
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

/// Insert `separator` between every group of three digits, counting from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
