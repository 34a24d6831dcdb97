//! Structural validation of a batch request.
//!
//! Fail-fast by policy: later per-document errors are non-fatal, but a
//! count mismatch means the request itself is malformed, so it is rejected
//! before any extraction or identity work starts. No side effects.

use super::error::BatchError;
use super::types::BatchRequest;

/// Check the positional-alignment invariants of a batch request.
///
/// Rejects when `passwords` is non-empty but not aligned with `pdf_paths`,
/// or when any of the four positional sequences disagree in length.
pub fn validate(request: &BatchRequest) -> Result<(), BatchError> {
    let documents = request.pdf_paths.len();

    if !request.passwords.is_empty() && request.passwords.len() != documents {
        return Err(BatchError::Validation(format!(
            "Number of passwords ({}) must match number of PDFs ({})",
            request.passwords.len(),
            documents
        )));
    }

    let aligned = [
        ("bank_names", request.bank_names.len()),
        ("start_dates", request.start_dates.len()),
        ("end_dates", request.end_dates.len()),
    ];
    for (field, len) in aligned {
        if len != documents {
            return Err(BatchError::Validation(format!(
                "{field} has {len} entries for {documents} PDFs"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(documents: usize, passwords: usize) -> BatchRequest {
        BatchRequest {
            bank_names: (0..documents).map(|i| format!("BANK{i}")).collect(),
            pdf_paths: (0..documents).map(|i| format!("/tmp/{i}.pdf").into()).collect(),
            passwords: (0..passwords).map(|i| format!("pw{i}")).collect(),
            start_dates: vec!["2023-01-01".into(); documents],
            end_dates: vec!["2023-12-31".into(); documents],
            owner_id: "CA-1".into(),
        }
    }

    #[test]
    fn accepts_aligned_request() {
        assert!(validate(&request(3, 3)).is_ok());
    }

    #[test]
    fn accepts_empty_password_list() {
        assert!(validate(&request(3, 0)).is_ok());
    }

    #[test]
    fn accepts_empty_batch() {
        assert!(validate(&request(0, 0)).is_ok());
    }

    #[test]
    fn rejects_password_count_mismatch_naming_both_counts() {
        let err = validate(&request(2, 1)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains('1'), "message should name the password count: {msg}");
        assert!(msg.contains('2'), "message should name the document count: {msg}");
    }

    #[test]
    fn rejects_misaligned_bank_names() {
        let mut req = request(2, 2);
        req.bank_names.pop();
        let err = validate(&req).unwrap_err();
        assert!(err.to_string().contains("bank_names"));
    }

    #[test]
    fn rejects_misaligned_date_ranges() {
        let mut req = request(2, 0);
        req.end_dates.push("2024-01-01".into());
        let err = validate(&req).unwrap_err();
        assert!(err.to_string().contains("end_dates"));
    }
}
