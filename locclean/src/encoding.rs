//! Character encoding detection and strict decoding/encoding.
//!
//! Detection is a heuristic: a byte-order mark wins, otherwise the guess of
//! [`chardetng`] is taken. The guessed label is never trusted blindly,
//! decoding refuses malformed input instead of substituting U+FFFD.

use encoding_rs::{Encoding, REPLACEMENT, UTF_8, UTF_16BE, UTF_16LE};
use log::debug;

use crate::error::Error;

/// The encoding a localization file was read with, reused to write it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingLabel {
    pub encoding: &'static Encoding,
    /// Whether the input started with a byte-order mark. The mark is stripped
    /// on decode and written again on encode.
    pub bom: bool,
}

impl EncodingLabel {
    pub fn new(encoding: &'static Encoding) -> Self {
        EncodingLabel {
            encoding,
            bom: false,
        }
    }

    /// Resolves a WHATWG encoding label such as `utf-8`, `latin1` or `shift_jis`.
    pub fn from_label(label: &str) -> Result<Self, Error> {
        match Encoding::for_label(label.trim().as_bytes()) {
            Some(encoding) if encoding != REPLACEMENT => Ok(EncodingLabel::new(encoding)),
            _ => Err(Error::UnknownEncoding(label.to_string())),
        }
    }

    /// Canonical name of the encoding, e.g. `UTF-8` or `windows-1252`.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Marks the label as BOM-prefixed when `bytes` start with this
    /// encoding's byte-order mark.
    pub fn sniff_bom(self, bytes: &[u8]) -> Self {
        match Encoding::for_bom(bytes) {
            Some((encoding, _)) if encoding == self.encoding => EncodingLabel {
                encoding,
                bom: true,
            },
            _ => self,
        }
    }

    /// Decodes `bytes` without replacement characters.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, Error> {
        let body = if self.bom {
            &bytes[bom_bytes(self.encoding).len().min(bytes.len())..]
        } else {
            bytes
        };

        self.encoding
            .decode_without_bom_handling_and_without_replacement(body)
            .map(|text| text.into_owned())
            .ok_or(Error::Decode {
                encoding: self.name(),
            })
    }

    /// Encodes `text`, prefixed by the byte-order mark if the input had one.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, Error> {
        let mut out = Vec::with_capacity(text.len() + 3);
        if self.bom {
            out.extend_from_slice(bom_bytes(self.encoding));
        }

        // encoding_rs only encodes to UTF-16 as UTF-8, so those are done by hand.
        if self.encoding == UTF_16LE {
            out.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
        } else if self.encoding == UTF_16BE {
            out.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
        } else {
            let (bytes, _, had_errors) = self.encoding.encode(text);
            if had_errors {
                return Err(Error::Encode {
                    encoding: self.name(),
                });
            }
            out.extend_from_slice(&bytes);
        }

        Ok(out)
    }
}

impl std::fmt::Display for EncodingLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.bom {
            write!(f, "{} (BOM)", self.name())
        } else {
            write!(f, "{}", self.name())
        }
    }
}

fn bom_bytes(encoding: &'static Encoding) -> &'static [u8] {
    if encoding == UTF_8 {
        b"\xEF\xBB\xBF"
    } else if encoding == UTF_16LE {
        b"\xFF\xFE"
    } else if encoding == UTF_16BE {
        b"\xFE\xFF"
    } else {
        b""
    }
}

/// Guesses the encoding of a raw localization file.
pub fn detect_encoding(bytes: &[u8]) -> EncodingLabel {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        debug!("byte-order mark found: {}", encoding.name());
        return EncodingLabel {
            encoding,
            bom: true,
        };
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    debug!("guessed encoding: {}", encoding.name());
    EncodingLabel::new(encoding)
}
