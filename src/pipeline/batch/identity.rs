//! Per-document identity resolution.
//!
//! Runs name recognition and account extraction for one document and applies
//! the fallback rules. This component never fails the batch: every internal
//! error is caught here, logged, and downgraded to "absent", which triggers
//! the placeholder value.

use std::path::Path;

use super::traits::{AccountExtractor, NameRecognizer};
use super::types::{AccountFields, IdentityResult, PLACEHOLDER_ACCOUNT};

/// Resolve `(name, account_number)` for one document.
///
/// `position` is the document's 1-based position within the batch, used for
/// the `"Statement {n}"` name placeholder.
pub fn resolve_identity(
    names: &dyn NameRecognizer,
    accounts: &dyn AccountExtractor,
    path: &Path,
    position: usize,
) -> IdentityResult {
    let candidates = match names.extract_names(path) {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Name recognition failed");
            Vec::new()
        }
    };
    let name = candidates
        .into_iter()
        .next()
        .unwrap_or_else(|| format!("Statement {position}"));

    let fields = match accounts.extract_account(path) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Account extraction failed");
            AccountFields::default()
        }
    };
    let account_number = fields
        .acc
        .filter(|acc| !acc.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_ACCOUNT.to_string());

    IdentityResult {
        name,
        account_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::batch::error::EngineError;

    struct FixedNames(Vec<String>);
    impl NameRecognizer for FixedNames {
        fn extract_names(&self, _path: &Path) -> Result<Vec<String>, EngineError> {
            Ok(self.0.clone())
        }
    }

    struct FailingNames;
    impl NameRecognizer for FailingNames {
        fn extract_names(&self, _path: &Path) -> Result<Vec<String>, EngineError> {
            Err(EngineError::Pdf("garbled text layer".into()))
        }
    }

    struct FixedAccount(AccountFields);
    impl AccountExtractor for FixedAccount {
        fn extract_account(&self, _path: &Path) -> Result<AccountFields, EngineError> {
            Ok(self.0.clone())
        }
    }

    struct FailingAccount;
    impl AccountExtractor for FailingAccount {
        fn extract_account(&self, _path: &Path) -> Result<AccountFields, EngineError> {
            Err(EngineError::Internal("model not loaded".into()))
        }
    }

    #[test]
    fn first_name_candidate_wins() {
        let identity = resolve_identity(
            &FixedNames(vec!["RAMESH KUMAR".into(), "SUNITA KUMAR".into()]),
            &FixedAccount(AccountFields {
                acc: Some("123456789012".into()),
                ifsc: None,
            }),
            Path::new("/tmp/a.pdf"),
            1,
        );
        assert_eq!(identity.name, "RAMESH KUMAR");
        assert_eq!(identity.account_number, "123456789012");
    }

    #[test]
    fn empty_candidates_synthesize_positional_placeholder() {
        let identity = resolve_identity(
            &FixedNames(vec![]),
            &FixedAccount(AccountFields::default()),
            Path::new("/tmp/a.pdf"),
            3,
        );
        assert_eq!(identity.name, "Statement 3");
        assert_eq!(identity.account_number, PLACEHOLDER_ACCOUNT);
    }

    #[test]
    fn recognizer_errors_are_swallowed() {
        let identity = resolve_identity(
            &FailingNames,
            &FailingAccount,
            Path::new("/tmp/a.pdf"),
            1,
        );
        assert_eq!(identity.name, "Statement 1");
        assert_eq!(identity.account_number, PLACEHOLDER_ACCOUNT);
    }

    #[test]
    fn blank_account_field_triggers_placeholder() {
        let identity = resolve_identity(
            &FixedNames(vec!["A B".into()]),
            &FixedAccount(AccountFields {
                acc: Some("   ".into()),
                ifsc: Some("HDFC0001234".into()),
            }),
            Path::new("/tmp/a.pdf"),
            1,
        );
        assert_eq!(identity.account_number, PLACEHOLDER_ACCOUNT);
    }
}
