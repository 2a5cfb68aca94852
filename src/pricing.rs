// src/pricing.rs
//! Lenient number parsing and fixed-point display for the text fields a
//! product is stored with. Prices and quantities are kept as the text the
//! user typed; everything numeric is derived on read, and bad input turns
//! into NaN instead of an error.

/// Parses the longest leading decimal literal of `text`.
///
/// Leading whitespace is skipped, trailing garbage is ignored, and text
/// with no numeric prefix yields NaN (`"12abc"` is 12, `"abc"` is NaN).
pub fn parse_price(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Parses the leading integer of `text`, truncating any fraction.
///
/// Accepts an optional sign and a `0x` prefix for hex; no digits yields NaN.
/// The result stays an `f64` so NaN can flow into the stock total.
pub fn parse_quantity(text: &str) -> f64 {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: Option<f64> = None;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = Some(value.unwrap_or(0.0) * f64::from(radix) + f64::from(d)),
            None => break,
        }
    }

    match value {
        Some(v) if negative => -v,
        Some(v) => v,
        None => f64::NAN,
    }
}

/// Formats `value` with two decimals; NaN and infinities keep their names.
///
/// An exact tie rounds away from zero (`1.125` is `1.13`). Magnitudes of
/// 1e21 and up switch to exponent form.
pub fn fixed2(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        infinity(value)
    } else if value == 0.0 {
        // negative zero prints without a sign
        "0.00".to_string()
    } else if value.abs() >= EXPONENT_FROM {
        exponent_form(value)
    } else {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{sign}{}", fixed2_magnitude(value.abs()))
    }
}

/// Formats a whole-number total such as the stock count.
pub fn plain_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        infinity(value)
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= EXPONENT_FROM {
        exponent_form(value)
    } else {
        format!("{value}")
    }
}

const EXPONENT_FROM: f64 = 1e21;

fn fixed2_magnitude(abs: f64) -> String {
    // A two-decimal tie is only representable when abs is a multiple of
    // 1/8, and then abs * 100 is exact.
    let scaled = abs * 100.0;
    if scaled.fract() == 0.5 && (abs * 8.0).fract() == 0.0 {
        let cents = scaled.floor() as u128 + 1;
        format!("{}.{:02}", cents / 100, cents % 100)
    } else {
        format!("{abs:.2}")
    }
}

/// Shortest exponent form with an explicit exponent sign, e.g. `1.5e+21`.
fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

fn infinity(value: f64) -> String {
    let name = if value.is_sign_negative() { "-Infinity" } else { "Infinity" };
    name.to_string()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
