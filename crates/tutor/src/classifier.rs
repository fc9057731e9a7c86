//! Decides how a raw text input should be routed.

use std::sync::LazyLock;

use regex::Regex;

/// How a text submission is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Looks like English prose; route to the grammar checker.
    GrammarCheck,
    /// Everything else; route to general chat.
    GeneralChat,
}

/// At least two whitespace-separated runs of five-or-more characters drawn
/// from Latin letters, apostrophes and spaces. A heuristic for "primarily
/// English", not a language detector; false positives are acceptable, the
/// contract is that the same input always classifies the same way.
static ENGLISH_MESSAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z\s']{5,}(?:\s[A-Za-z\s']{5,}){1,}").unwrap());

pub fn classify(text: &str) -> TextMode {
    if ENGLISH_MESSAGE_RE.is_match(text) {
        TextMode::GrammarCheck
    } else {
        TextMode::GeneralChat
    }
}
