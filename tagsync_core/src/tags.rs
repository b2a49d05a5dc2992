//! Tag classification
//!
//! Splits the raw tags found on a file into the DOI tag (`uuid:<uuid>`) and
//! the single tag (a bare UUID). Only the first match of each kind counts;
//! later matches are collected separately so callers can report them.

use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

/// Prefix that marks a DOI-style tag
pub const DOI_PREFIX: &str = "uuid:";

const UUID_SHAPE: &str = r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

// Trailing punctuation is captured so it can be cleaned off before parsing.
static DOI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^uuid:\s*({UUID_SHAPE}\W*)$")).expect("valid DOI tag pattern")
});

static SINGLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^({UUID_SHAPE}\W*)$")).expect("valid single tag pattern")
});

static CANONICAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^{UUID_SHAPE}$")).expect("valid canonical UUID pattern")
});

/// A UUID-shaped tag found on a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundTag {
    /// Tag exactly as the tag reader reported it (trimmed)
    pub raw: String,
    /// Parsed identifier
    pub uuid: Uuid,
}

/// Result of classifying a file's tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// First DOI tag in original order
    pub doi: Option<FoundTag>,
    /// First single tag in original order
    pub single: Option<FoundTag>,
    /// Further DOI tags that were ignored
    pub extra_doi: Vec<String>,
    /// Further single tags that were ignored
    pub extra_single: Vec<String>,
}

impl Classification {
    /// True when neither kind of tag was found
    pub fn is_untagged(&self) -> bool {
        self.doi.is_none() && self.single.is_none()
    }

    /// True when extra matches were skipped
    pub fn has_duplicates(&self) -> bool {
        !self.extra_doi.is_empty() || !self.extra_single.is_empty()
    }
}

/// Strip everything except ASCII letters, digits, commas and hyphens
pub fn clean_uuid(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ',' || *c == '-')
        .collect()
}

/// Clean `value` and parse it as a canonical hyphenated UUID
pub fn parse_uuid(value: &str) -> Result<Uuid, ValidationError> {
    let cleaned = clean_uuid(value);
    if !CANONICAL_PATTERN.is_match(&cleaned) {
        return Err(ValidationError::invalid_uuid(value));
    }
    Uuid::parse_str(&cleaned).map_err(|_| ValidationError::invalid_uuid(value))
}

/// Bare tag text for `uuid`
pub fn single_tag(uuid: &Uuid) -> String {
    uuid.hyphenated().to_string()
}

/// DOI tag text for `uuid`
pub fn doi_tag(uuid: &Uuid) -> String {
    format!("{DOI_PREFIX}{}", uuid.hyphenated())
}

/// Classify `tags` in order
pub fn classify<S: AsRef<str>>(tags: &[S]) -> Classification {
    let mut classification = Classification::default();

    for tag in tags {
        let raw = tag.as_ref().trim();

        if let Some(captures) = DOI_PATTERN.captures(raw) {
            let Some(found) = found_tag(raw, &captures[1]) else {
                continue;
            };
            if classification.doi.is_none() {
                classification.doi = Some(found);
            } else {
                classification.extra_doi.push(raw.to_string());
            }
        } else if let Some(captures) = SINGLE_PATTERN.captures(raw) {
            let Some(found) = found_tag(raw, &captures[1]) else {
                continue;
            };
            if classification.single.is_none() {
                classification.single = Some(found);
            } else {
                classification.extra_single.push(raw.to_string());
            }
        }
    }

    classification
}

fn found_tag(raw: &str, candidate: &str) -> Option<FoundTag> {
    match parse_uuid(candidate) {
        Ok(uuid) => Some(FoundTag {
            raw: raw.to_string(),
            uuid,
        }),
        Err(e) => {
            log::warn!("Ignoring tag '{raw}': {e}");
            None
        }
    }
}
