//
//  gitlab-cli
//  api/file_response.rs
//

//! Binary download payloads.
//!
//! Download endpoints (project export archives, raw snippet files served as
//! octet-stream) return bytes rather than JSON. A [`FileResponse`] carries
//! the payload plus the filename advertised in `Content-Disposition`.

use once_cell::sync::Lazy;
use regex::Regex;

static FILENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"filename="?([^";]+)"?"#).expect("valid filename regex"));

/// A binary payload returned by a download endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResponse {
    filename: Option<String>,
    data: Vec<u8>,
}

impl FileResponse {
    pub fn new(filename: Option<String>, data: Vec<u8>) -> Self {
        Self { filename, data }
    }

    /// Extracts the filename from a `Content-Disposition` header value.
    pub fn filename_from_disposition(header: &str) -> Option<String> {
        FILENAME_RE
            .captures(header)
            .map(|caps| caps[1].to_string())
    }

    /// The server-advertised filename, if any.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_quoted_disposition() {
        let header = r#"attachment; filename="2024-01-01_export.tar.gz""#;
        assert_eq!(
            FileResponse::filename_from_disposition(header).as_deref(),
            Some("2024-01-01_export.tar.gz")
        );
    }

    #[test]
    fn test_filename_from_bare_disposition() {
        let header = "attachment; filename=export.tar.gz";
        assert_eq!(
            FileResponse::filename_from_disposition(header).as_deref(),
            Some("export.tar.gz")
        );
    }

    #[test]
    fn test_no_filename() {
        assert!(FileResponse::filename_from_disposition("inline").is_none());
    }
}
