// Canonical numeric rendering for quantities

/// Magnitudes at or above this switch to scientific notation.
pub const SCIENTIFIC_THRESHOLD: f64 = 1000.0;
/// Digits after the decimal point in both notations.
pub const DECIMALS: usize = 3;

/// Fixed-point with three decimals below 1000, scientific (`1.500e+03`) otherwise.
///
/// `Quantity` passes the value in its base prefix, not the raw value, so the
/// threshold applies to the number that is printed: a 2 kg mass (raw 2000 g)
/// renders as `2.000 kg`.
pub fn format_value(value: f64) -> String {
    if value.abs() < SCIENTIFIC_THRESHOLD {
        format!("{:.*}", DECIMALS, value)
    } else {
        format_scientific(value)
    }
}

/// Scientific notation with a signed, zero-padded exponent of at least two digits.
pub fn format_scientific(value: f64) -> String {
    // Rust renders 1500.0 as "1.500e3"
    let formatted = format!("{:.*e}", DECIMALS, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => formatted,
        },
        None => formatted, // inf, NaN
    }
}
