//! printf-style `%g` formatting.
//!
//! Rust's `{}` float formatting prints every digit needed for an exact
//! round trip (`0.1 + 0.2` shows as `0.30000000000000004`). The
//! calculator's report lines want C `%g` behavior instead: round to a
//! number of significant digits and trim trailing zeros, switching to
//! scientific notation for extreme exponents. That behavior is
//! reproduced here.

/// Formats `value` like C `printf("%.<sig_digits>g")`.
pub fn format_g(value: f64, sig_digits: usize) -> String {
    let digits = sig_digits.max(1);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Scientific formatting rounds to the requested significant digits
    // and exposes the decimal exponent, which decides the notation.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        // %g scientific form: trimmed mantissa, signed two-digit exponent
        format!("{}e{:+03}", trim_trailing_zeros(mantissa), exponent)
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        let fixed = format!("{:.*}", decimals, value);
        trim_trailing_zeros(&fixed).to_string()
    }
}

/// Drops trailing fractional zeros, and the dot itself when nothing is
/// left behind it.
fn trim_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
