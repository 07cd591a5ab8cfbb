//! Email-like token extraction from raw text
//!
//! Matching is heuristic: a run of word/dot/percent/plus/hyphen characters,
//! an `@`, a dotted domain and a final alphabetic label of two or more
//! letters. Nothing here checks deliverability or RFC 5322 conformance.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

static EMAIL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"\b[\w.%+-]+@[\w.-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// A single match found in the scanned text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailToken {
    /// Matched substring, exactly as it appears in the text
    pub value: String,

    /// Byte offset of the match start
    pub position: usize,
}

/// Casing applied to tokens that survive deduplication
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DedupCasing {
    /// Lower-case, then upper-case the first letter of every word segment.
    /// `john.doe@example.com` becomes `John.Doe@Example.Com`.
    #[default]
    TitleCase,

    /// Keep the spelling of the first occurrence
    PreserveFirst,
}

/// Options controlling a single extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Collapse case-insensitive repeats to their first occurrence
    pub deduplicate: bool,

    /// Casing of deduplicated tokens; ignored when `deduplicate` is off
    pub casing: DedupCasing,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            deduplicate: true,
            casing: DedupCasing::TitleCase,
        }
    }
}

impl ExtractOptions {
    /// Options with the given dedupe flag and title-case normalization
    #[must_use]
    pub const fn new(deduplicate: bool) -> Self {
        Self {
            deduplicate,
            casing: DedupCasing::TitleCase,
        }
    }

    #[must_use]
    pub const fn with_casing(mut self, casing: DedupCasing) -> Self {
        self.casing = casing;
        self
    }
}

/// Scan `text` left to right and return every non-overlapping match
pub fn scan(text: &str) -> Vec<EmailToken> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| EmailToken {
            value: m.as_str().to_string(),
            position: m.start(),
        })
        .collect()
}

/// Extract email-like tokens from `text`.
///
/// Without deduplication every match is returned in scan order with its
/// original spelling. With deduplication, repeats are collapsed
/// case-insensitively and the survivors are title-cased.
pub fn extract(text: &str, deduplicate: bool) -> Vec<String> {
    extract_with(text, &ExtractOptions::new(deduplicate))
}

/// Extract with explicit options
pub fn extract_with(text: &str, options: &ExtractOptions) -> Vec<String> {
    let matches: Vec<String> = scan(text).into_iter().map(|t| t.value).collect();
    let total = matches.len();

    let emails = if options.deduplicate {
        dedupe(matches, options.casing)
    } else {
        matches
    };

    debug!(
        "Extracted {} emails ({} raw matches, deduplicate={})",
        emails.len(),
        total,
        options.deduplicate
    );

    emails
}

/// Drop case-insensitive repeats, keeping first-occurrence order
pub fn dedupe(tokens: Vec<String>, casing: DedupCasing) -> Vec<String> {
    let mut seen = HashSet::with_capacity(tokens.len());
    let mut out = Vec::new();

    for token in tokens {
        let lower = token.to_lowercase();
        if !seen.insert(lower.clone()) {
            continue;
        }
        out.push(match casing {
            DedupCasing::TitleCase => title_case(&lower),
            DedupCasing::PreserveFirst => token,
        });
    }

    out
}

/// Title-case a letter when the previous character is not cased,
/// lower-case it otherwise. Word-initial letters use the Unicode titlecase
/// mapping, so `ß` becomes `Ss` and `ǆ` becomes `ǅ`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;

    for c in s.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(&mut out, c);
        }
        prev_cased = is_cased(c);
    }

    out
}

fn push_titlecase(out: &mut String, c: char) {
    let mapped = unicode_case_mapping::to_titlecase(c);
    if mapped[0] == 0 {
        // No explicit titlecase mapping: it defaults to the uppercase one
        out.extend(c.to_uppercase());
        return;
    }
    out.extend(
        mapped
            .iter()
            .take_while(|&&cp| cp != 0)
            .filter_map(|&cp| char::from_u32(cp)),
    );
}

/// Lowercase, Uppercase or titlecase letter (general category Lt)
fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || is_titlecase_letter(c)
}

const fn is_titlecase_letter(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}
