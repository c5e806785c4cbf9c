//! Binary content detection for uploaded files.

/// Number of leading bytes checked for null bytes when detecting binary
/// content. Binary formats almost always carry nulls in their headers.
const BINARY_CHECK_BYTES: usize = 8000;

/// Returns `true` if the first [`BINARY_CHECK_BYTES`] of `content` contain
/// a null byte, which strongly indicates a mislabelled binary upload.
#[must_use]
pub fn is_binary_content(content: &str) -> bool {
    is_binary_bytes(content.as_bytes())
}

/// Returns `true` if the first [`BINARY_CHECK_BYTES`] of `bytes` contain
/// a null byte.
#[must_use]
pub fn is_binary_bytes(bytes: &[u8]) -> bool {
    let check_len = bytes.len().min(BINARY_CHECK_BYTES);
    bytes[..check_len].contains(&0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_binary_content_detects_null_bytes() {
        assert!(is_binary_content("hello\0world"));
        assert!(is_binary_content("\0binary"));
    }

    #[test]
    fn is_binary_content_allows_text() {
        assert!(!is_binary_content("var x = 1;"));
        assert!(!is_binary_content("line1\nline2\nline3"));
        assert!(!is_binary_content(""));
    }

    #[test]
    fn is_binary_content_checks_limited_bytes() {
        let mut content = "a".repeat(BINARY_CHECK_BYTES + 100);
        content.push('\0');
        assert!(!is_binary_content(&content));
    }

    #[test]
    fn is_binary_bytes_detects_leading_null() {
        assert!(is_binary_bytes(&[0x89, 0x50, 0x4e, 0x47, 0x00, 0x0d]));
        assert!(!is_binary_bytes(b"<!doctype html>"));
    }
}
