use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATORS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[:?/\\<>"|*]+"#).expect("valid separators regex"));

static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("valid spaces regex"));

static LEADING_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid leading integer regex"));

/// Makes `text` safe to use in a file name.
///
/// Runs of `: ? / \ < > " | *` become `" - "`, trailing separators are dropped
/// and repeated spaces collapse to one.
pub fn normalize(text: &str) -> String {
    let mut parts = SEPARATORS_RE.split(text).collect::<Vec<_>>();

    while parts.last().map_or(false, |part| part.is_empty()) {
        parts.pop();
    }

    collapse_spaces(&parts.join(" - "))
}

pub fn collapse_spaces(text: &str) -> String {
    SPACES_RE.replace_all(text, " ").into_owned()
}

/// Leading integer of `text`: `"12"`, `" 12 "` and `"12abc"` all give `12`.
fn leading_int(text: &str) -> Option<i64> {
    LEADING_INT_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// [`leading_int`], `0` when there is none.
pub fn to_int(text: &str) -> i64 {
    leading_int(text).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{collapse_spaces, leading_int, normalize, to_int};

    #[test]
    fn normalize_collapses_separators() {
        assert_eq!("Foo - Bar - Baz", normalize("Foo: Bar/Baz"));
    }

    #[test]
    fn normalize_collapses_runs() {
        assert_eq!("A - B", normalize("A?/*B"));
        assert_eq!("A - B", normalize("A   ::  B"));
    }

    #[test]
    fn normalize_drops_trailing_separator() {
        assert_eq!("Why", normalize("Why?"));
        assert_eq!(" - Lead", normalize(":Lead"));
    }

    #[test]
    fn normalize_keeps_plain_text() {
        assert_eq!("Prologue", normalize("Prologue"));
        assert_eq!("", normalize(""));
    }

    #[test]
    fn to_int_is_permissive() {
        assert_eq!(1, to_int("1"));
        assert_eq!(12, to_int(" 12 "));
        assert_eq!(12, to_int("12abc"));
        assert_eq!(-3, to_int("-3"));
        assert_eq!(0, to_int("abc"));
        assert_eq!(0, to_int("Volume 1 - Prologue_9781234567897"));
        assert_eq!(0, to_int(""));
    }

    #[test]
    fn collapse_spaces_keeps_separators() {
        assert_eq!("Volume 1 - - Question", collapse_spaces("Volume 1 -  - Question"));
        assert_eq!("a b", collapse_spaces("a    b"));
    }

    #[test]
    fn leading_int_distinguishes_zero_from_missing() {
        assert_eq!(Some(0), leading_int("0"));
        assert_eq!(None, leading_int("Volume 1"));
    }
}
