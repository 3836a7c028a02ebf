//! Decoded EDID records.

use sha2::{Digest, Sha256};

/// Name given to a log-dialect EDID that has no `--- End of EDID for` footer.
pub const UNKNOWN_DISPLAY_NAME: &str = "unknown";

/// One decoded EDID and the display name it was reported under.
///
/// `bytes` is never empty and never longer than
/// [`MAX_EDID_SIZE`](crate::error::MAX_EDID_SIZE); `name` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdidRecord {
    pub bytes: Vec<u8>,
    pub name: String,
}

impl EdidRecord {
    pub fn new(bytes: Vec<u8>, name: impl Into<String>) -> Self {
        Self { bytes, name: name.into() }
    }

    /// Number of decoded bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Lowercase hex SHA-256 of the raw bytes.
    pub fn sha256_hex(&self) -> String {
        let digest = Sha256::digest(&self.bytes);
        format!("{:x}", digest)
    }
}

/// Longest display name accepted from a footer or `Monitor Name` field.
pub const MAX_NAME_LEN: usize = 512;

/// Turn a captured name span into an owned name, enforcing `1..=MAX_NAME_LEN`.
pub(crate) fn display_name(span: &[u8], offset: usize) -> crate::error::ParseResult<String> {
    if span.is_empty() || span.len() > MAX_NAME_LEN {
        return Err(crate::error::ParseError::MalformedFooter { offset });
    }
    Ok(String::from_utf8_lossy(span).into_owned())
}
