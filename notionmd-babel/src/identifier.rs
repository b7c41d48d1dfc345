//! Page identifier validation and normalization
//!
//! Page ids reach us in three shapes: a hyphenated UUID, a compact 32-hex
//! UUID, or a page URL with the id embedded in its last path segment. All of
//! them reduce to one canonical lowercase hyphenated form.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

const EMPTY_INPUT_ERROR: &str = "Input must be a non-empty string";
const FORMAT_ERROR: &str =
    "Invalid UUID format. Expected standard UUID, compact UUID, or Notion URL";

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?notion\.(?:so|site)/(?:[^/]*/)?([a-f0-9-]+)(?:\?|#|$)")
        .expect("url pattern compiles")
});

// `…/Some-Page-Title-<32 hex>` style links
static SLUG_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)notion\.(?:so|site)/(?:[^/?#]*/)?[^/?#]*-([a-f0-9]{32})(?:\?|#|$)")
        .expect("slug url pattern compiles")
});

static STANDARD_UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid pattern compiles")
});

static COMPACT_UUID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[0-9a-f]{32}$").expect("compact uuid pattern compiles"));

/// Result of [`validate_and_normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdValidation {
    pub is_valid: bool,
    pub normalized_id: Option<String>,
    pub error: Option<String>,
}

impl IdValidation {
    fn valid(id: String) -> Self {
        IdValidation {
            is_valid: true,
            normalized_id: Some(id),
            error: None,
        }
    }

    fn invalid(message: &str) -> Self {
        IdValidation {
            is_valid: false,
            normalized_id: None,
            error: Some(message.to_string()),
        }
    }
}

/// Error raised by [`normalize_page_id`] and [`PageId::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierError {
    message: String,
}

impl IdentifierError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for IdentifierError {}

/// Validate `input` and reduce it to the canonical hyphenated lowercase form.
pub fn validate_and_normalize(input: &str) -> IdValidation {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return IdValidation::invalid(EMPTY_INPUT_ERROR);
    }

    // Hex-only slugs (`Bad-Cafe-<id>`) also match the plain URL pattern, so a
    // capture that fails validation falls through to the slug pattern.
    let mut url_rejection = None;
    for pattern in [&*URL_PATTERN, &*SLUG_URL_PATTERN] {
        let Some(id) = pattern.captures(trimmed).and_then(|caps| caps.get(1)) else {
            continue;
        };
        let validation = validate_bare(id.as_str());
        if validation.is_valid {
            return validation;
        }
        url_rejection.get_or_insert(validation);
    }

    url_rejection.unwrap_or_else(|| validate_bare(trimmed))
}

fn validate_bare(input: &str) -> IdValidation {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return IdValidation::invalid(EMPTY_INPUT_ERROR);
    }

    let clean = trimmed
        .split('?')
        .next()
        .and_then(|s| s.split('#').next())
        .unwrap_or_default();

    if STANDARD_UUID.is_match(clean) {
        return IdValidation::valid(clean.to_lowercase());
    }

    if COMPACT_UUID.is_match(clean) {
        let hyphenated = format!(
            "{}-{}-{}-{}-{}",
            &clean[0..8],
            &clean[8..12],
            &clean[12..16],
            &clean[16..20],
            &clean[20..32]
        );
        return IdValidation::valid(hyphenated.to_lowercase());
    }

    IdValidation::invalid(FORMAT_ERROR)
}

pub fn is_valid_page_id(input: &str) -> bool {
    validate_and_normalize(input).is_valid
}

/// Normalize `input`, returning the validation error message on failure.
pub fn normalize_page_id(input: &str) -> Result<String, IdentifierError> {
    let validation = validate_and_normalize(input);
    match validation.normalized_id {
        Some(id) if validation.is_valid => Ok(id),
        _ => Err(IdentifierError {
            message: validation
                .error
                .unwrap_or_else(|| FORMAT_ERROR.to_string()),
        }),
    }
}

/// A page identifier already in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        normalize_page_id(input).map(PageId)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PageId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::parse(s)
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
