//! File reading with byte-order-mark handling.
//!
//! GEDCOM files may begin with a byte-order mark. The reader classifies
//! and strips it, decodes the text (UTF-8 and both UTF-16 endians), and
//! hands the parser an ordered sequence of lines with terminators
//! removed.

use std::fs;
use std::path::Path;

use crate::error::{GedError, Result};

/// The byte-order mark found at the start of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrderMark {
    None,
    Utf8,
    Utf16Be,
    Utf16Le,
    Utf32Be,
    Utf32Le,
}

impl ByteOrderMark {
    /// Classify the mark at the start of `bytes` and return it together
    /// with the remaining content. UTF-32 marks are checked before
    /// UTF-16 because `FF FE` prefixes `FF FE 00 00`.
    pub fn strip(bytes: &[u8]) -> (ByteOrderMark, &[u8]) {
        const UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
        const UTF32_BE: &[u8] = &[0x00, 0x00, 0xFE, 0xFF];
        const UTF32_LE: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];
        const UTF16_BE: &[u8] = &[0xFE, 0xFF];
        const UTF16_LE: &[u8] = &[0xFF, 0xFE];

        for (mark, prefix) in [
            (ByteOrderMark::Utf8, UTF8),
            (ByteOrderMark::Utf32Be, UTF32_BE),
            (ByteOrderMark::Utf32Le, UTF32_LE),
            (ByteOrderMark::Utf16Be, UTF16_BE),
            (ByteOrderMark::Utf16Le, UTF16_LE),
        ] {
            if bytes.starts_with(prefix) {
                return (mark, &bytes[prefix.len()..]);
            }
        }
        (ByteOrderMark::None, bytes)
    }
}

/// Read a file into lines, stripping the byte-order mark and decoding
/// the text. Line terminators are removed.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| GedError::Io {
        path: path.to_path_buf(),
        message: format!("Cannot open file: {}", e),
    })?;

    let (mark, content) = ByteOrderMark::strip(&bytes);
    let text = decode(mark, content, path)?;

    Ok(text.lines().map(str::to_string).collect())
}

fn decode(mark: ByteOrderMark, content: &[u8], path: &Path) -> Result<String> {
    match mark {
        ByteOrderMark::None | ByteOrderMark::Utf8 => {
            String::from_utf8(content.to_vec()).map_err(|_| GedError::Io {
                path: path.to_path_buf(),
                message: "File is not valid UTF-8".to_string(),
            })
        }
        ByteOrderMark::Utf16Be => decode_utf16(content, path, u16::from_be_bytes),
        ByteOrderMark::Utf16Le => decode_utf16(content, path, u16::from_le_bytes),
        ByteOrderMark::Utf32Be | ByteOrderMark::Utf32Le => Err(GedError::Io {
            path: path.to_path_buf(),
            message: "UTF-32 encoded files are not supported".to_string(),
        }),
    }
}

fn decode_utf16(content: &[u8], path: &Path, combine: fn([u8; 2]) -> u16) -> Result<String> {
    if content.len() % 2 != 0 {
        return Err(GedError::Io {
            path: path.to_path_buf(),
            message: "Truncated UTF-16 content".to_string(),
        });
    }

    let units: Vec<u16> = content
        .chunks_exact(2)
        .map(|pair| combine([pair[0], pair[1]]))
        .collect();

    String::from_utf16(&units).map_err(|_| GedError::Io {
        path: path.to_path_buf(),
        message: "File is not valid UTF-16".to_string(),
    })
}
