//! Ordered text-decoding fallbacks for plain-text uploads.

use std::str::FromStr;

use encoding_rs::WINDOWS_1252;
use serde::Serialize;
use tracing::debug;

use crate::config::ConfigError;

use super::error::ExtractionError;

/// Bytes with no assigned character in Windows-1252.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Default decode order: UTF-8, then Latin-1, then Windows-1252.
pub const DEFAULT_TEXT_ENCODINGS: [TextEncoding; 3] = [
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
];

/// A text encoding the plain-text extractor can try.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextEncoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "latin-1")]
    Latin1,
    #[serde(rename = "cp1252")]
    Windows1252,
}

impl TextEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Windows1252 => "cp1252",
        }
    }

    /// Decodes `bytes`, returning `None` if any byte is invalid for this encoding.
    pub fn decode_strict(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes)
                .ok()
                .map(|s| s.strip_prefix('\u{feff}').unwrap_or(s).to_string()),
            TextEncoding::Latin1 => Some(decode_latin1(bytes)),
            TextEncoding::Windows1252 => {
                if bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
                    None
                } else {
                    Some(decode_cp1252(bytes))
                }
            }
        }
    }

    /// Decodes `bytes`, silently dropping anything invalid for this encoding.
    pub fn decode_lossy(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => {
                let mut out = String::with_capacity(bytes.len());
                for chunk in bytes.utf8_chunks() {
                    out.push_str(chunk.valid());
                }
                match out.strip_prefix('\u{feff}') {
                    Some(rest) => rest.to_string(),
                    None => out,
                }
            }
            TextEncoding::Latin1 => decode_latin1(bytes),
            TextEncoding::Windows1252 => {
                let kept: Vec<u8> = bytes
                    .iter()
                    .copied()
                    .filter(|b| !CP1252_UNDEFINED.contains(b))
                    .collect();
                decode_cp1252(&kept)
            }
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            "cp1252" | "windows-1252" => Ok(TextEncoding::Windows1252),
            _ => Err(ConfigError::UnknownEncoding {
                name: s.trim().to_string(),
            }),
        }
    }
}

/// Tries each encoding in order; the last one is decoded lossily and cannot fail.
pub fn decode_with_fallback(
    bytes: &[u8],
    encodings: &[TextEncoding],
) -> Result<(String, TextEncoding), ExtractionError> {
    let Some((last, preferred)) = encodings.split_last() else {
        return Err(ExtractionError::ExtractionFailed {
            reason: "no text encodings configured".to_string(),
        });
    };

    for encoding in preferred {
        if let Some(text) = encoding.decode_strict(bytes) {
            return Ok((text, *encoding));
        }
        debug!(encoding = %encoding, "Decode attempt failed, trying next encoding");
    }

    Ok((last.decode_lossy(bytes), *last))
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn decode_cp1252(bytes: &[u8]) -> String {
    let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}
