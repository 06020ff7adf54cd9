//! Text normalization for keyword search.

use std::sync::LazyLock;

use regex::Regex;

/// Anything other than a letter, digit, underscore or whitespace. Marks and
/// joiners such as U+FE0F and U+200D are replaced too.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("valid non-word regex"));

/// Lowercase `text` and replace every punctuation/symbol character with a
/// single space.
///
/// Missing text normalizes to the empty string. Whitespace is neither
/// trimmed nor collapsed, so `"a, b"` becomes `"a  b"`. The function is
/// idempotent.
#[must_use]
pub fn normalize_text(text: Option<&str>) -> String {
    match text {
        None => String::new(),
        Some(raw) => {
            let lower = raw.to_lowercase();
            NON_WORD.replace_all(&lower, " ").into_owned()
        }
    }
}
