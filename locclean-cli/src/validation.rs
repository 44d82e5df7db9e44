use locclean::{Localization, localization::path_extension, supported_localizations_listing};
use std::path::Path;

/// Check that `path` names a non-empty file with a supported localization
/// extension, in that order. The returned message is meant to be printed
/// after an `Error: ` prefix.
pub fn validate_localization_file(path: &str) -> Result<Localization, String> {
    let path_obj = Path::new(path);

    if path_obj.is_dir() {
        return Err("Given localization file is a directory...".to_string());
    }

    let metadata = path_obj
        .metadata()
        .map_err(|_| format!("Localization file {} does not exist...", path))?;

    if metadata.len() == 0 {
        return Err(format!("Localization file {} is empty...", path));
    }

    validate_localization_extension(path)
}

/// Map the extension of `path` to a supported localization.
pub fn validate_localization_extension(path: &str) -> Result<Localization, String> {
    Localization::from_path(path).map_err(|_| {
        let ext = path_extension(Path::new(path));
        let shown = if ext.is_empty() { "none".to_string() } else { ext };
        format!(
            "Localization Unknown ({}) is not supported...\nSupported localizations:\n{}",
            shown,
            supported_localizations_listing()
        )
    })
}

const ENCODING_HINT: &str =
    "Expected a WHATWG encoding label such as utf-8, utf-16le, windows-1252 or shift_jis";

/// Validate an encoding override such as `utf-8` or `shift_jis`.
pub fn validate_encoding_label(label: &str) -> Result<locclean::EncodingLabel, String> {
    if label.trim().is_empty() {
        return Err("Encoding label cannot be empty".to_string());
    }

    locclean::EncodingLabel::from_label(label).map_err(|e| format!("{}. {}", e, ENCODING_HINT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_error_lists_every_localization() {
        let err = validate_localization_extension("notes.xyz").unwrap_err();
        let lines: Vec<_> = err.lines().collect();
        assert_eq!(lines[0], "Localization Unknown (.xyz) is not supported...");
        assert_eq!(lines[1], "Supported localizations:");
        assert_eq!(lines.len(), 2 + 9);
        assert!(lines.contains(&" - Japanese (.jpn)"));
    }

    #[test]
    fn test_extension_missing() {
        let err = validate_localization_extension("subtitles").unwrap_err();
        assert!(err.starts_with("Localization Unknown (none) is not supported..."));
    }

    #[test]
    fn test_encoding_label() {
        assert!(validate_encoding_label("utf-16le").is_ok());
        assert!(validate_encoding_label("").is_err());
        let err = validate_encoding_label("ebcdic-martian").unwrap_err();
        assert!(err.contains("unknown encoding label `ebcdic-martian`"));
    }
}
