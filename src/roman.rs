//! Roman numeral detection and conversion (spec §4.2, §8 "Roman round-trip").

use once_cell::sync::Lazy;
use regex::Regex;

static ROMAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$").unwrap());

const TABLE: &[(i64, &str)] = &[
    (1000, "M"), (900, "CM"), (500, "D"), (400, "CD"),
    (100, "C"), (90, "XC"), (50, "L"), (40, "XL"),
    (10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I"),
];

/// Is `text` a (non-empty) valid Roman numeral per the canonical pattern in
/// spec §4.2?
pub fn is_roman_numeral(text: &str) -> bool {
    !text.is_empty() && ROMAN_RE.is_match(text)
}

/// Convert an already-validated Roman numeral to an integer by greedy
/// subtraction over the descending table (spec §4.2).
pub fn roman_to_int(text: &str) -> Option<i64> {
    if !is_roman_numeral(text) {
        return None;
    }
    let mut value = 0i64;
    let mut rest = text;
    for &(n, numeral) in TABLE {
        while let Some(stripped) = rest.strip_prefix(numeral) {
            value += n;
            rest = stripped;
        }
    }
    if rest.is_empty() {
        Some(value)
    } else {
        None
    }
}

/// Inverse conversion, needed for the round-trip property in spec §8.
pub fn int_to_roman(mut value: i64) -> Option<String> {
    if !(1..=3999).contains(&value) {
        return None;
    }
    let mut out = String::new();
    for &(n, numeral) in TABLE {
        while value >= n {
            out.push_str(numeral);
            value -= n;
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_every_value() {
        for i in 1..=3999i64 {
            let roman = int_to_roman(i).unwrap();
            assert!(is_roman_numeral(&roman), "{roman} should be recognized");
            assert_eq!(roman_to_int(&roman), Some(i), "round trip failed for {i}");
        }
    }

    #[test]
    fn rejects_malformed_numerals() {
        assert!(!is_roman_numeral("IIII"));
        assert!(!is_roman_numeral("VV"));
        assert!(!is_roman_numeral(""));
        assert!(!is_roman_numeral("ABC"));
    }

    #[test]
    fn known_values() {
        assert_eq!(roman_to_int("XIV"), Some(14));
        assert_eq!(roman_to_int("MCMXCIX"), Some(1999));
        assert_eq!(int_to_roman(1999), Some("MCMXCIX".to_string()));
    }
}
