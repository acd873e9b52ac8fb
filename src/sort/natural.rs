//! Natural (alphanumeric-aware) string ordering

use std::cmp::Ordering;

/// Digits kept from a decimal fraction
const FRACTION_DIGITS: usize = 12;

/// Build the normalized comparison key for `s`
///
/// Lowercases the string and rewrites every digit run as its value with
/// leading zeros stripped, followed by a `.` and a fixed-width fraction.
/// A `.` directly after a digit run introduces the fraction; runs without
/// one get an all-zero fraction, so `1` and `1.5` share the same layout.
/// The fraction is prefixed with a `1` so it never starts with a zero.
pub fn natural_key(s: &str) -> String {
    let chars: Vec<char> = s.to_lowercase().chars().collect();
    let mut key = String::with_capacity(s.len() + 16);
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            key.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let run: String = chars[start..i].iter().collect();
        key.push_str(match run.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        });

        let mut fraction = String::new();
        if chars.get(i) == Some(&'.') {
            i += 1;
            while i < chars.len() && chars[i].is_ascii_digit() {
                if fraction.len() < FRACTION_DIGITS {
                    fraction.push(chars[i]);
                }
                i += 1;
            }
        }
        key.push_str(&format!(".1{:0<width$}", fraction, width = FRACTION_DIGITS));
    }

    key
}

/// Compare two strings given their precomputed [`natural_key`]s
///
/// Digit runs are compared by value with `natord`. Ties on the key are
/// broken by length, then by plain lexicographic order, so the ordering is
/// total.
pub fn natural_cmp_keyed(a_key: &str, a: &str, b_key: &str, b: &str) -> Ordering {
    natord::compare(a_key, b_key)
        .then_with(|| a.len().cmp(&b.len()))
        .then_with(|| a.cmp(b))
}

/// Compare two strings in natural order
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_cmp_keyed(&natural_key(a), a, &natural_key(b), b)
}
