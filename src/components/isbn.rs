use isbn2::Isbn13;
use log::debug;

/// Outcome of validating one ISBN-like string.
///
/// Invalid input yields `valid == false` and no derived fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IsbnResult {
    pub valid: bool,
    pub isbn10: Option<String>,
    pub isbn13: Option<String>,
    /// The supplied form with hyphens and spaces removed.
    pub isbn_combined: Option<String>,
    pub isbn_pretty: Option<String>,
}

impl IsbnResult {
    pub fn invalid() -> IsbnResult {
        IsbnResult::default()
    }

    /// The ISBN-13 as an integer identifier.
    pub fn id(&self) -> Option<u64> {
        self.isbn13.as_deref().and_then(|isbn13| isbn13.parse().ok())
    }
}

fn strip(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

fn digits(text: &str) -> Option<Vec<u32>> {
    text.chars().map(|c| c.to_digit(10)).collect()
}

fn isbn13_check(first12: &[u32]) -> u32 {
    let sum: u32 = first12
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();

    (10 - sum % 10) % 10
}

fn isbn10_check(first9: &[u32]) -> char {
    let sum: u32 = first9
        .iter()
        .enumerate()
        .map(|(i, d)| (10 - i as u32) * d)
        .sum();

    match (11 - sum % 11) % 11 {
        10 => 'X',
        check => char::from_digit(check, 10).unwrap_or('0'),
    }
}

fn join_digits(digits: &[u32]) -> String {
    digits.iter().map(|d| d.to_string()).collect()
}

fn parse_isbn13(stripped: &str) -> Option<(Option<String>, String)> {
    let digits = digits(stripped)?;

    if isbn13_check(&digits[..12]) != digits[12] {
        return None;
    }

    let isbn10 = if stripped.starts_with("978") {
        let first9 = &digits[3..12];
        let mut isbn10 = join_digits(first9);
        isbn10.push(isbn10_check(first9));
        Some(isbn10)
    } else {
        None
    };

    Some((isbn10, stripped.to_string()))
}

fn parse_isbn10(stripped: &str) -> Option<(Option<String>, String)> {
    let first9 = digits(&stripped[..9])?;
    let last = stripped.chars().last()?;

    if !(last.is_ascii_digit() || last == 'X') || isbn10_check(&first9) != last {
        return None;
    }

    let mut digits13 = vec![9, 7, 8];
    digits13.extend_from_slice(&first9);
    let check = isbn13_check(&digits13);
    digits13.push(check);

    Some((Some(stripped.to_string()), join_digits(&digits13)))
}

/// Dashed ISBN-13 using the registration group ranges, or the plain ISBN-13
/// when the number falls outside any known range.
fn pretty(isbn13: &str) -> String {
    isbn13
        .parse::<Isbn13>()
        .ok()
        .and_then(|isbn| isbn.hyphenate().ok())
        .map(|hyphenated| hyphenated.to_string())
        .unwrap_or_else(|| isbn13.to_string())
}

pub fn check_isbn(raw: Option<&str>) -> IsbnResult {
    let raw = match raw {
        Some(raw) => raw,
        None => return IsbnResult::invalid(),
    };

    let stripped = strip(raw);

    let parsed = match stripped.len() {
        13 => parse_isbn13(&stripped),
        10 if stripped.is_ascii() => parse_isbn10(&stripped),
        _ => None,
    };

    match parsed {
        Some((isbn10, isbn13)) => IsbnResult {
            valid: true,
            isbn10,
            isbn_pretty: Some(pretty(&isbn13)),
            isbn13: Some(isbn13),
            isbn_combined: Some(stripped),
        },
        None => {
            debug!("invalid isbn {:?}", raw);
            IsbnResult::invalid()
        }
    }
}
