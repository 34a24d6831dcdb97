//! PDF text layer access shared by the bundled engines.
//!
//! Uses `pdf-extract` for digital PDFs with an embedded text layer. A
//! document whose text layer cannot be unlocked (encryption beyond the
//! standard empty-password handler) is reported as a password failure so it
//! lands in the batch's not-extracted list with a useful reason; scanned
//! PDFs without a text layer come back empty and fall through to the layout
//! check downstream.

use std::path::Path;

use crate::pipeline::batch::error::EngineError;

/// Read a document and extract its full text layer.
pub fn read_pdf_text(path: &Path) -> Result<String, EngineError> {
    let bytes = std::fs::read(path)?;
    extract_text(&bytes)
}

fn extract_text(bytes: &[u8]) -> Result<String, EngineError> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            let msg = e.to_string();
            let lower = msg.to_ascii_lowercase();
            if lower.contains("encrypt") || lower.contains("password") || lower.contains("decrypt")
            {
                Err(EngineError::Password)
            } else {
                Err(EngineError::Pdf(msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extraction::testpdf;

    #[test]
    fn reads_text_layer() {
        let tmp = tempfile::tempdir().unwrap();
        let path = testpdf::write_pdf(
            tmp.path(),
            "stmt.pdf",
            &["Account Holder: RAMESH KUMAR", "01-04-2023 UPI PAYMENT 500.00"],
        );

        let text = read_pdf_text(&path).unwrap();
        assert!(text.contains("RAMESH KUMAR"));
        assert!(text.contains("UPI PAYMENT"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_pdf_text(Path::new("/nonexistent/doc.pdf")).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }

    #[test]
    fn garbage_bytes_are_pdf_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();

        let err = read_pdf_text(&path).unwrap_err();
        assert!(matches!(err, EngineError::Pdf(_)));
    }
}
