//! Row-count validation for the generate form.
//!
//! The input text is coerced the way the browser's `Number(string)` does it,
//! then range-checked. Fractional counts inside the range are accepted.

use contracts::usecases::u001_generate_table::{MAX_ROWS, MIN_ROWS};

/// `true` iff `value` is a number in `MIN_ROWS..=MAX_ROWS`
pub fn is_valid_row_count(value: f64) -> bool {
    if value.is_nan() {
        return false;
    }
    (MIN_ROWS..=MAX_ROWS).contains(&value)
}

/// Coerce raw input text to a number.
///
/// Empty (or whitespace-only) input is `0`, unparseable input is `NaN`.
/// Supports `0x`/`0o`/`0b` integer literals and `Infinity` with an optional sign.
pub fn coerce_number(input: &str) -> f64 {
    let s = input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }

    if let Some(v) = parse_radix_literal(s) {
        return v;
    }

    let (sign, unsigned) = match s.as_bytes()[0] {
        b'-' => (-1.0, &s[1..]),
        b'+' => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    if is_decimal_literal(unsigned) {
        unsigned.parse::<f64>().map(|v| sign * v).unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Parse the raw text and range-check it in one go
pub fn validate_rows_input(input: &str) -> Option<f64> {
    let value = coerce_number(input);
    is_valid_row_count(value).then_some(value)
}

// Signed radix literals are NaN in the browser, so no sign handling here
fn parse_radix_literal(s: &str) -> Option<f64> {
    let prefix = s.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let mut acc = 0.0_f64;
    for ch in digits.chars() {
        match ch.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }
    Some(acc)
}

// digits [ "." digits ] [ (e|E) [+-] digits ], at least one mantissa digit
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let mut seen_dot = false;
    let mut mantissa_digits = 0;
    for ch in mantissa.chars() {
        match ch {
            '0'..='9' => mantissa_digits += 1,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    if mantissa_digits == 0 {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
        }
    }
}
