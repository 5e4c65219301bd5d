use std::sync::LazyLock;

use regex::{Captures, Regex};

static SPACE_BEFORE_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+,").unwrap());
static OVERSPACED_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s{2,})([A-Z])").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());
static COMMA_WITHOUT_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",(\S)").unwrap());
static WIDE_COMMA_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s{2,}").unwrap());
static JOINED_SENTENCES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([.!?])([A-Z])").unwrap());
static TRAILING_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([.!?])\s+$").unwrap());

/// Repair the spacing, casing and terminal punctuation of a raw transcript
///
/// The repairs run in a fixed order:
/// 1. Drop whitespace before a comma
/// 2. Treat a comma followed by two-or-more spaces and a capital as an
///    over-spaced clause join: collapse to ", " and lowercase the letter
/// 3. Collapse whitespace runs to a single space
/// 4. Insert the missing space after a comma
/// 5. Collapse extra spaces after a comma
/// 6. Insert a space between a sentence terminator and a following capital
/// 7. Uppercase the first letter
/// 8. Append a period when no terminator ends the text
/// 9. Strip trailing whitespace after a terminator
///
/// The whole transform is idempotent and an empty input stays empty.
pub fn punctuate(text: &str) -> String {
    let text = SPACE_BEFORE_COMMA.replace_all(text, ",");
    let text = OVERSPACED_CLAUSE.replace_all(&text, |caps: &Captures| {
        format!(", {}", caps[2].to_lowercase())
    });
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let text = COMMA_WITHOUT_SPACE.replace_all(&text, ", $1");
    let text = WIDE_COMMA_SPACE.replace_all(&text, ", ");
    let text = JOINED_SENTENCES.replace_all(&text, "$1 $2");
    let mut text = text.into_owned();

    if let Some(first) = text.chars().next() {
        if first.is_lowercase() {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&text[first.len_utf8()..]);
            text = capitalized;
        }
    }

    if !text.is_empty() && !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }

    TRAILING_SPACE.replace_all(&text, "$1").into_owned()
}
