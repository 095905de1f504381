//! Fixed-point formatting compatible with Java's `%.Nf`
//!
//! Java's `Formatter` does not round the exact binary value of a double.
//! It takes the shortest decimal digits that round-trip and rounds those
//! HALF_UP. Rust's `{:.N}` rounds the exact binary value instead, which differs
//! on ties such as `0.000244140625` (2^-12) and on values whose shortest
//! digits end in 5 just past the cut.

use crate::constants::DOUBLE_PRECISION;

/// Format `value` with exactly `precision` fractional digits, Java style
pub fn format_fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // Display never uses exponent notation for f64
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes())
        .map(|b| b - b'0')
        .collect();
    let mut point = int_part.len();
    let keep = point + precision;

    if digits.len() > keep {
        let round_up = digits[keep] >= 5;
        digits.truncate(keep);
        if round_up && increment(&mut digits) {
            digits.insert(0, 1);
            point += 1;
        }
    } else {
        digits.resize(keep, 0);
    }

    let int_digits = &digits[..point];
    let first_nonzero = int_digits
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(int_digits.len().saturating_sub(1));

    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(int_digits[first_nonzero..].iter().map(|&d| char::from(b'0' + d)));
    if precision > 0 {
        out.push('.');
        out.extend(digits[point..].iter().map(|&d| char::from(b'0' + d)));
    }
    out
}

/// Format a double the way the dump prints it
pub fn format_double(value: f64) -> String {
    format_fixed(value, DOUBLE_PRECISION)
}

/// Add one to a big-endian decimal digit string; returns the carry out
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}
