#![forbid(unsafe_code)]
//! Cleaner for game localization text files.
//!
//! Localization files store dialogue as `key=value` lines sprinkled with
//! engine tags such as `[color=red]`. This crate strips the keys and tags,
//! tidies whitespace and punctuation spacing, and collapses blank lines, so
//! the remaining text can be proofread or reused.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use locclean::{Localization, clean_file, cleaned_path};
//!
//! let path = "Localization/INT/subtitles.int";
//! let localization = Localization::from_path(path)?;
//! let doc = clean_file(path, None)?;
//! doc.write_to(cleaned_path(path))?;
//! println!("{} lines of {} text", doc.lines.len(), localization);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Supported Files
//!
//! `.chn`, `.deu`, `.esn`, `.fra`, `.int`, `.ita`, `.jpn`, `.kor` and `.ptb`,
//! see [`SUPPORTED_LOCALIZATIONS`].

pub mod cleaner;
pub mod document;
pub mod encoding;
pub mod error;
pub mod localization;

// Re-export most used types for easy consumption
pub use crate::{
    cleaner::{clean_line, clean_lines, clean_text, collapse_blank_lines, split_lines},
    document::{
        CLEANED_SUFFIX, CleanedDocument, clean_bytes, clean_bytes_with, clean_file, cleaned_path,
    },
    encoding::{EncodingLabel, detect_encoding},
    error::Error,
    localization::{Localization, SUPPORTED_LOCALIZATIONS, supported_localizations_listing},
};
