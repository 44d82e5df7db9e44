//! Supported localization files, keyed by file extension.
//!
//! Each localization file carries its language in the extension
//! (`Subtitles.int`, `Subtitles.deu`, ...). Only the extensions in
//! [`SUPPORTED_LOCALIZATIONS`] are accepted for cleaning.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    path::Path,
};

use lazy_static::lazy_static;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// A language a localization file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Localization {
    Chinese,
    German,
    Spanish,
    French,
    English,
    Italian,
    Japanese,
    Korean,
    Portuguese,
}

lazy_static! {
    /// Extension (with leading dot) → localization, ordered by extension.
    pub static ref SUPPORTED_LOCALIZATIONS: BTreeMap<&'static str, Localization> = {
        use Localization::*;
        [Chinese, German, Spanish, French, English, Italian, Japanese, Korean, Portuguese]
            .into_iter()
            .map(|l| (l.extension(), l))
            .collect()
    };
}

impl Localization {
    /// Returns the file extension for this localization, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Localization::Chinese => ".chn",
            Localization::German => ".deu",
            Localization::Spanish => ".esn",
            Localization::French => ".fra",
            Localization::English => ".int",
            Localization::Italian => ".ita",
            Localization::Japanese => ".jpn",
            Localization::Korean => ".kor",
            Localization::Portuguese => ".ptb",
        }
    }

    /// Human-readable language name.
    pub fn language_name(&self) -> &'static str {
        match self {
            Localization::Chinese => "Chinese",
            Localization::German => "German",
            Localization::Spanish => "Spanish",
            Localization::French => "French",
            Localization::English => "English",
            Localization::Italian => "Italian",
            Localization::Japanese => "Japanese",
            Localization::Korean => "Korean",
            Localization::Portuguese => "Portuguese",
        }
    }

    /// BCP 47 tag of the language. `.ptb` files are Brazilian Portuguese.
    pub fn language_tag(&self) -> &'static str {
        match self {
            Localization::Chinese => "zh",
            Localization::German => "de",
            Localization::Spanish => "es",
            Localization::French => "fr",
            Localization::English => "en",
            Localization::Italian => "it",
            Localization::Japanese => "ja",
            Localization::Korean => "ko",
            Localization::Portuguese => "pt-BR",
        }
    }

    pub fn language_id(&self) -> LanguageIdentifier {
        self.language_tag().parse().unwrap_or_default()
    }

    /// Looks up a localization by extension. The match is exact and
    /// case-sensitive; the leading dot is required.
    pub fn from_extension(ext: &str) -> Result<Self, Error> {
        SUPPORTED_LOCALIZATIONS
            .get(ext)
            .copied()
            .ok_or_else(|| Error::UnsupportedLocalization(ext.to_string()))
    }

    /// Infers the localization from the extension of `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Localization::from_extension(&path_extension(path.as_ref()))
    }
}

/// Returns the extension of `path` with its leading dot, or an empty string
/// when the file name has none. A leading dot alone (`.int`) is a hidden
/// file name, not an extension.
pub fn path_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default()
}

/// Renders the supported table, one ` - Language (.ext)` line per entry.
pub fn supported_localizations_listing() -> String {
    SUPPORTED_LOCALIZATIONS
        .iter()
        .map(|(ext, l)| format!(" - {} ({})", l.language_name(), ext))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Display for Localization {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.language_name())
    }
}
