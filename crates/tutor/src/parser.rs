//! Extracts structured vocabulary items from a vision reply.
//!
//! The vision system instruction asks the model to present each identified
//! object as a three-line block:
//!
//! ```text
//! **English Object Name** (Türkçesi: Turkish Translation)
//! Example: 'Sentence using the object.'
//! ```
//!
//! Extraction is purely structural; nothing validates the captured text.

use std::sync::LazyLock;

use regex::Regex;
use shared::{IdentifiedTerm, TutorError};

static VISION_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^*]+)\*\* \(Türkçesi: ([^)]+)\)\nExample: '(.*?)'").unwrap()
});

/// Scans `raw` for every non-overlapping block occurrence, in document
/// order, trimming each captured span. Zero occurrences is a failure:
/// callers never see an empty-but-successful result.
pub fn parse_vision_reply(raw: &str) -> Result<Vec<IdentifiedTerm>, TutorError> {
    let terms: Vec<IdentifiedTerm> = VISION_BLOCK_RE
        .captures_iter(raw)
        .map(|caps| IdentifiedTerm {
            english: caps[1].trim().to_string(),
            turkish: caps[2].trim().to_string(),
            sentence: caps[3].trim().to_string(),
        })
        .collect();

    if terms.is_empty() {
        tracing::warn!(reply_len = raw.len(), "vision reply matched no blocks");
        return Err(TutorError::UnparseableResponse);
    }
    Ok(terms)
}
