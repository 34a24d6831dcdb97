//! Regex account-number / IFSC extraction.
//!
//! Looks for labelled account numbers (`A/C No: …`, `Account Number: …`,
//! masked digits included since many statements print `XXXXXX1234`) and
//! standalone IFSC codes (`AAAA0xxxxxx`). First match wins for each field.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::pipeline::batch::error::EngineError;
use crate::pipeline::batch::traits::AccountExtractor;
use crate::pipeline::batch::types::AccountFields;

use super::text::read_pdf_text;

static ACCOUNT_NO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:a/c|acc(?:ount)?|acct)\.?\s*(?:no|number|num|#)?\.?\s*[:\-]?\s*(?P<acc>[\dXx*]{6,20})",
    )
    .unwrap()
});

static IFSC_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?P<ifsc>[A-Z]{4}0[A-Z0-9]{6})\b").unwrap());

pub struct RegexAccountExtractor;

impl RegexAccountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RegexAccountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountExtractor for RegexAccountExtractor {
    fn extract_account(&self, path: &Path) -> Result<AccountFields, EngineError> {
        let text = read_pdf_text(path)?;
        Ok(account_from_text(&text))
    }
}

fn account_from_text(text: &str) -> AccountFields {
    // A fully masked run is no use; require at least one real digit.
    let acc = ACCOUNT_NO
        .captures_iter(text)
        .filter_map(|caps| caps.name("acc"))
        .map(|m| m.as_str())
        .find(|acc| acc.chars().any(|c| c.is_ascii_digit()))
        .map(str::to_string);
    let ifsc = IFSC_CODE
        .captures(text)
        .and_then(|caps| caps.name("ifsc"))
        .map(|m| m.as_str().to_string());

    AccountFields { acc, ifsc }
}
