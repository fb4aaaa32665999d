/// Significant digits used when printing a number.
pub const PRECISION: i32 = 6;

/// Formats a number with [`PRECISION`] significant digits in `%g` style.
///
/// Fixed notation is used when the decimal exponent lies in `-4..PRECISION`,
/// exponent notation otherwise. Trailing zeros of the fraction are removed in
/// both cases, and the exponent has at least two digits.
///
/// ## Parameters
/// - `value`: The number to format.
///
/// ## Returns
/// The textual representation, without a trailing newline.
///
/// ## Example
/// ```
/// use quill::util::num::format_number;
///
/// assert_eq!(format_number(512.0), "512");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(1e20), "1e+20");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Rounding to the target precision first makes the exponent reflect
    // carries such as 999999.5 -> 1e+06.
    let scientific = format!("{value:.prec$e}", prec = decimals(PRECISION - 1));
    let Some((mantissa, exponent)) = scientific.split_once('e')
    else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..PRECISION).contains(&exponent) {
        let fixed = format!("{value:.prec$}", prec = decimals(PRECISION - 1 - exponent));
        trim_fraction(&fixed).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    }
}

fn decimals(digits: i32) -> usize {
    usize::try_from(digits).unwrap_or(0)
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
