//! Scan input files and file-type inference.

use std::str::Utf8Error;

use powerscan_rules::FileType;
use thiserror::Error;

use crate::binary::is_binary_content;

/// Infers the file-type tag for a filename from its extension.
///
/// Everything after the last `.` is looked up in the extension table;
/// names without an extension map to [`FileType::Unknown`].
#[must_use]
pub fn file_type_for_name(name: &str) -> FileType {
    name.rsplit_once('.')
        .map_or(FileType::Unknown, |(_, ext)| FileType::from_extension(ext))
}

/// Errors that can occur when decoding an uploaded file into scannable text.
///
/// These never abort a scan run; the offending file is reported as
/// `unreadable` and contributes zero findings.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file's bytes are not valid UTF-8.
    #[error("content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    /// The file decodes but looks like binary data (null bytes in the
    /// leading window).
    #[error("content appears to be binary")]
    Binary,
}

/// A raw scan input: the original filename plus its uploaded bytes.
///
/// This is the `(filename, content)` pair of the scan input contract.
/// Decoding into a [`ScannedFile`] happens inside the engine so that a
/// corrupt upload degrades that one file instead of failing the batch.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Original filename, used for type inference and reporting.
    pub name: String,
    /// Raw content bytes as uploaded.
    pub bytes: Vec<u8>,
}

impl SourceFile {
    /// Creates a source file from a name and raw bytes.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Creates a source file from already-decoded text.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            bytes: text.as_bytes().to_vec(),
        }
    }
}

/// A decoded file ready for rule matching.
///
/// Constructed fresh per scan run and never mutated; byte offsets and
/// line/column positions in findings are computed against `content`.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// Original filename.
    pub name: String,
    /// Type tag inferred from the filename extension.
    pub file_type: FileType,
    /// Decoded UTF-8 content.
    pub content: String,
}

impl ScannedFile {
    /// Decodes a [`SourceFile`] into scannable text.
    ///
    /// Fails if the bytes are not valid UTF-8 or look like binary data.
    pub fn decode(source: &SourceFile) -> Result<Self, DecodeError> {
        let content = std::str::from_utf8(&source.bytes)?;
        if is_binary_content(content) {
            return Err(DecodeError::Binary);
        }

        Ok(Self {
            name: source.name.clone(),
            file_type: file_type_for_name(&source.name),
            content: content.to_owned(),
        })
    }
}
