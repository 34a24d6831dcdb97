//! Pattern-based account holder name recognition.
//!
//! Produces candidate names in document order from two signal shapes:
//! labelled fields (`Account Holder: …`, `Customer Name: …`) and honorific
//! runs of uppercase words (`MR RAMESH KUMAR`). Candidates are deduplicated
//! preserving first appearance; the resolver takes the first one.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::pipeline::batch::error::EngineError;
use crate::pipeline::batch::traits::NameRecognizer;

use super::text::read_pdf_text;

static LABELLED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:account\s+holder|customer\s+name|account\s+name|name)\s*[:\-]\s*(?P<name>[A-Za-z][A-Za-z. ]{1,60}?)\s*$",
    )
    .unwrap()
});

static HONORIFIC_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:MR|MRS|MS|M/S|SHRI|SMT)\.?\s+(?P<name>[A-Z][A-Z.]*\b(?:\s+[A-Z][A-Z.]*\b){0,4})",
    )
    .unwrap()
});

pub struct PatternNameRecognizer;

impl PatternNameRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PatternNameRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl NameRecognizer for PatternNameRecognizer {
    fn extract_names(&self, path: &Path) -> Result<Vec<String>, EngineError> {
        let text = read_pdf_text(path)?;
        Ok(names_from_text(&text))
    }
}

fn names_from_text(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for line in text.lines() {
        let line = line.trim();

        if let Some(caps) = LABELLED_NAME.captures(line) {
            if let Some(name) = caps.name("name") {
                push_candidate(name.as_str(), &mut seen, &mut names);
            }
        }

        for caps in HONORIFIC_NAME.captures_iter(line) {
            if let Some(name) = caps.name("name") {
                push_candidate(name.as_str(), &mut seen, &mut names);
            }
        }
    }

    names
}

fn push_candidate(raw: &str, seen: &mut HashSet<String>, names: &mut Vec<String>) {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.len() < 2 {
        return;
    }
    if seen.insert(cleaned.to_uppercase()) {
        names.push(cleaned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extraction::testpdf;

    #[test]
    fn labelled_field_is_recognized() {
        let names = names_from_text("Account Holder: Ramesh Kumar\nBranch: MG Road");
        assert_eq!(names, vec!["Ramesh Kumar"]);
    }

    #[test]
    fn honorific_run_is_recognized() {
        let names = names_from_text("Statement for MR RAMESH KUMAR for April 2023");
        assert_eq!(names, vec!["RAMESH KUMAR"]);
    }

    #[test]
    fn candidates_keep_document_order_and_dedupe() {
        let text = "Customer Name: SUNITA DEVI\n\
                    Joint holder MR RAJESH SINGH\n\
                    Customer Name: SUNITA DEVI";
        let names = names_from_text(text);
        assert_eq!(names, vec!["SUNITA DEVI", "RAJESH SINGH"]);
    }

    #[test]
    fn no_signal_yields_empty() {
        assert!(names_from_text("Opening balance 1,000.00").is_empty());
    }

    #[test]
    fn honorific_stops_at_lowercase_words() {
        let names = names_from_text("MR ANIL VERMA Account Summary follows");
        assert_eq!(names, vec!["ANIL VERMA"]);
    }

    #[test]
    fn reads_names_from_pdf() {
        let tmp = tempfile::tempdir().unwrap();
        let path = testpdf::write_pdf(
            tmp.path(),
            "named.pdf",
            &["Account Holder: Priya Sharma", "A/C No: 123456789012"],
        );

        let names = PatternNameRecognizer::new().extract_names(&path).unwrap();
        assert_eq!(names, vec!["Priya Sharma"]);
    }
}
