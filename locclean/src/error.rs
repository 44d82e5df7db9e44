//! All error types for the locclean crate.
//!
//! Every fallible step of cleaning a file (detection, decoding, encoding, I/O)
//! reports through this single enum.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported localization `{0}`")]
    UnsupportedLocalization(String),

    #[error("unknown encoding label `{0}`")]
    UnknownEncoding(String),

    #[error("input is not valid {encoding}")]
    Decode { encoding: &'static str },

    #[error("cleaned text cannot be represented in {encoding}")]
    Encode { encoding: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_unsupported_localization_error() {
        let error = Error::UnsupportedLocalization(".xyz".to_string());
        assert_eq!(error.to_string(), "unsupported localization `.xyz`");
    }

    #[test]
    fn test_unknown_encoding_error() {
        let error = Error::UnknownEncoding("klingon".to_string());
        assert_eq!(error.to_string(), "unknown encoding label `klingon`");
    }

    #[test]
    fn test_decode_error() {
        let error = Error::Decode { encoding: "UTF-8" };
        assert_eq!(error.to_string(), "input is not valid UTF-8");
    }

    #[test]
    fn test_encode_error() {
        let error = Error::Encode {
            encoding: "windows-1252",
        };
        assert_eq!(
            error.to_string(),
            "cleaned text cannot be represented in windows-1252"
        );
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::from(io_error);
        assert!(error.to_string().contains("I/O error"));
        assert!(error.to_string().contains("File not found"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnsupportedLocalization(".txt".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnsupportedLocalization"));
        assert!(debug.contains(".txt"));
    }
}
