//! Human-readable label helpers.

use std::borrow::Cow;

/// Suffix appended to truncated text.
pub const ELLIPSIS: char = '…';

/// Converts a `snake_case` key into a label by replacing underscores with
/// spaces and capitalizing every word.
///
/// Empty words (produced by repeated underscores) are kept as empty, so the
/// amount of separators is preserved.
#[must_use]
pub fn humanize(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates the provided `text` to at most `max` characters (including the
/// [`ELLIPSIS`] suffix).
#[must_use]
pub fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    if text.chars().count() <= max {
        return Cow::Borrowed(text);
    }
    if max == 0 {
        return Cow::Borrowed("");
    }

    let mut out = text
        .chars()
        .take(max - 1)
        .collect::<String>()
        .trim_end()
        .to_owned();
    out.push(ELLIPSIS);
    Cow::Owned(out)
}

#[cfg(test)]
mod spec {
    use super::{humanize, truncate};

    #[test]
    fn humanizes_snake_case() {
        assert_eq!(humanize("under_review_with_buyer"), "Under Review With Buyer");
        assert_eq!(humanize("submitted"), "Submitted");
        assert_eq!(humanize("mls_active"), "Mls Active");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn keeps_short_text() {
        assert_eq!(truncate("12 Oak St", 30), "12 Oak St");
        assert_eq!(truncate("12345", 5), "12345");
    }

    #[test]
    fn truncates_long_text() {
        assert_eq!(truncate("1234 Long Country Road", 10), "1234 Long…");
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abcdef", 0), "");
    }
}
