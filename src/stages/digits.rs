//! The digits sub-parser (spec §4.1.1): given a digit-leading remainder of
//! a lexeme, try a fixed sequence of patterns, greedy-left, and return the
//! first that matches along with how many bytes it consumed.

use crate::dateutil::is_valid_date;
use crate::token::{CaseSet, DateVal, GenderSet, NumberVal, TimeVal, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static TIME_HMS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-2]?\d):([0-5]?\d):([0-5]?\d)").unwrap());
static TIME_HM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-2]?\d):([0-5]?\d)").unwrap());
static DATE_DMY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[./](\d{1,2})[./](\d{2}|\d{4})").unwrap());
static NUMBER_IS_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3}(?:\.\d{3})+),(\d+)").unwrap());
static NUMBER_IS_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,3}(?:\.\d{3})+)").unwrap());
static DATE_DM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})").unwrap());
static TELNO_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{3})-(\d{4})").unwrap());
static TELNO_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{7})").unwrap());
static ORDINAL_DOTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2}(?:\.\d{1,2}){2,})").unwrap());
static NUMBER_US_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3}(?:,\d{3})+)\.(\d+)").unwrap());
static NUMBER_US_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,3}(?:,\d{3})+)").unwrap());

/// Common D/M fractions recognized by rule 6 (spec §4.1.1): a D/M pair reads
/// as a fraction, not a date, whenever D and M are both small (at most 5 and
/// 6 respectively) or D is 1 and M is at most 10.
fn common_fraction(d: u32, m: u32) -> Option<f64> {
    if m == 0 {
        return None;
    }
    if (d <= 5 && m <= 6) || (d == 1 && m <= 10) {
        Some(d as f64 / m as f64)
    } else {
        None
    }
}

fn no_cases() -> (CaseSet, GenderSet) {
    (CaseSet::new(), GenderSet::new())
}

pub struct DigitMatch {
    pub kind: TokenKind,
    pub txt: String,
    pub consumed: usize,
}

/// Try each rule from spec §4.1.1 in order; return the first match.
pub fn parse_digits(input: &str) -> Option<DigitMatch> {
    if let Some(caps) = TIME_HMS.captures(input) {
        let h: u8 = caps[1].parse().ok()?;
        let m: u8 = caps[2].parse().ok()?;
        let s: u8 = caps[3].parse().ok()?;
        let whole = caps.get(0).unwrap();
        return Some(DigitMatch {
            kind: TokenKind::Time(TimeVal { h, m, s }),
            txt: whole.as_str().to_string(),
            consumed: whole.end(),
        });
    }
    if let Some(caps) = TIME_HM.captures(input) {
        let h: u8 = caps[1].parse().ok()?;
        let m: u8 = caps[2].parse().ok()?;
        let whole = caps.get(0).unwrap();
        return Some(DigitMatch {
            kind: TokenKind::Time(TimeVal { h, m, s: 0 }),
            txt: whole.as_str().to_string(),
            consumed: whole.end(),
        });
    }
    if let Some(caps) = DATE_DMY.captures(input) {
        let mut d: u8 = caps[1].parse().ok()?;
        let mut m: u8 = caps[2].parse().ok()?;
        let y_raw = &caps[3];
        let y: i32 = if y_raw.len() == 2 {
            2000 + y_raw.parse::<i32>().ok()?
        } else {
            y_raw.parse().ok()?
        };
        if m > 12 && d <= 12 {
            std::mem::swap(&mut d, &mut m);
        }
        let whole = caps.get(0).unwrap();
        if is_valid_date(y, m, d) {
            return Some(DigitMatch {
                kind: TokenKind::Date(DateVal { y, mo: m, d }),
                txt: whole.as_str().to_string(),
                consumed: whole.end(),
            });
        }
        // Falls through to later rules per spec §4.1.1 rule 3.
    }
    if let Some(caps) = NUMBER_IS_FLOAT.captures(input) {
        let int_part: f64 = caps[1].replace('.', "").parse().ok()?;
        let frac_digits = &caps[2];
        let frac: f64 = format!("0.{frac_digits}").parse().ok()?;
        let (cases, genders) = no_cases();
        let whole = caps.get(0).unwrap();
        return Some(DigitMatch {
            kind: TokenKind::Number(NumberVal { value: int_part + frac, cases, genders }),
            txt: whole.as_str().to_string(),
            consumed: whole.end(),
        });
    }
    if let Some(caps) = NUMBER_IS_INT.captures(input) {
        let value: f64 = caps[1].replace('.', "").parse().ok()?;
        let (cases, genders) = no_cases();
        let whole = caps.get(0).unwrap();
        return Some(DigitMatch {
            kind: TokenKind::Number(NumberVal { value, cases, genders }),
            txt: whole.as_str().to_string(),
            consumed: whole.end(),
        });
    }
    if let Some(caps) = DATE_DM.captures(input) {
        let whole = caps.get(0).unwrap();
        // Only fires with no trailing digit (the matched slash pattern is
        // not itself followed by another digit, which DATE_DMY would have
        // already consumed above).
        let d: u32 = caps[1].parse().ok()?;
        let m: u32 = caps[2].parse().ok()?;
        if let Some(value) = common_fraction(d, m) {
            let (cases, genders) = no_cases();
            return Some(DigitMatch {
                kind: TokenKind::Number(NumberVal { value, cases, genders }),
                txt: whole.as_str().to_string(),
                consumed: whole.end(),
            });
        }
        if (1..=31).contains(&d) && (1..=12).contains(&m) {
            return Some(DigitMatch {
                kind: TokenKind::Date(DateVal { y: 0, mo: m as u8, d: d as u8 }),
                txt: whole.as_str().to_string(),
                consumed: whole.end(),
            });
        }
    }
    if let Some(caps) = YEAR_RE.captures(input) {
        let n: i32 = caps[1].parse().ok()?;
        if (1776..=2100).contains(&n) {
            let whole = caps.get(0).unwrap();
            return Some(DigitMatch {
                kind: TokenKind::Year(n),
                txt: whole.as_str().to_string(),
                consumed: whole.end(),
            });
        }
    }
    if let Some(caps) = TELNO_SPLIT.captures(input) {
        let whole = caps.get(0).unwrap();
        return Some(DigitMatch {
            kind: TokenKind::Telno,
            txt: whole.as_str().to_string(),
            consumed: whole.end(),
        });
    }
    if let Some(caps) = TELNO_BARE.captures(input) {
        let digits = &caps[1];
        let txt = format!("{}-{}", &digits[0..3], &digits[3..7]);
        let whole = caps.get(0).unwrap();
        return Some(DigitMatch { kind: TokenKind::Telno, txt, consumed: whole.end() });
    }
    if let Some(caps) = ORDINAL_DOTS.captures(input) {
        let whole = caps.get(0).unwrap();
        let digits: String = whole.as_str().chars().filter(|c| *c != '.').collect();
        let value: i64 = digits.parse().ok()?;
        return Some(DigitMatch {
            kind: TokenKind::Ordinal(value),
            txt: whole.as_str().to_string(),
            consumed: whole.end(),
        });
    }
    if let Some(caps) = NUMBER_US_FLOAT.captures(input) {
        let int_part: f64 = caps[1].replace(',', "").parse().ok()?;
        let frac_digits = &caps[2];
        let frac: f64 = format!("0.{frac_digits}").parse().ok()?;
        let (cases, genders) = no_cases();
        let whole = caps.get(0).unwrap();
        let txt = whole.as_str().replace('.', ",");
        return Some(DigitMatch {
            kind: TokenKind::Number(NumberVal { value: int_part + frac, cases, genders }),
            txt,
            consumed: whole.end(),
        });
    }
    if let Some(caps) = NUMBER_US_INT.captures(input) {
        let value: f64 = caps[1].replace(',', "").parse().ok()?;
        let (cases, genders) = no_cases();
        let whole = caps.get(0).unwrap();
        return Some(DigitMatch {
            kind: TokenKind::Number(NumberVal { value, cases, genders }),
            txt: whole.as_str().to_string(),
            consumed: whole.end(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_24h_clock() {
        let m = parse_digits("14:30 restOfText").unwrap();
        assert!(matches!(m.kind, TokenKind::Time(TimeVal { h: 14, m: 30, s: 0 })));
        assert_eq!(m.txt, "14:30");
    }

    #[test]
    fn parses_thousands_and_decimal_comma() {
        let m = parse_digits("1.234,56 kr.").unwrap();
        match m.kind {
            TokenKind::Number(NumberVal { value, .. }) => assert!((value - 1234.56).abs() < 1e-9),
            _ => panic!("expected NUMBER"),
        }
    }

    #[test]
    fn parses_year() {
        let m = parse_digits("2023 var gott ár").unwrap();
        assert!(matches!(m.kind, TokenKind::Year(2023)));
    }

    #[test]
    fn parses_bare_telno() {
        let m = parse_digits("5551234").unwrap();
        assert!(matches!(m.kind, TokenKind::Telno));
        assert_eq!(m.txt, "555-1234");
    }

    #[test]
    fn parses_common_fraction() {
        let m = parse_digits("1/2 af köku").unwrap();
        match m.kind {
            TokenKind::Number(NumberVal { value, .. }) => assert!((value - 0.5).abs() < 1e-9),
            _ => panic!("expected NUMBER"),
        }
    }
}
