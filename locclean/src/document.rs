//! Reading a localization file, cleaning it, and writing the result back.
//!
//! The whole input is read in one go, cleaned in memory, and written out in
//! a single call, so a failure at any stage leaves no partial output file.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    cleaner::{clean_lines, split_lines},
    encoding::{EncodingLabel, detect_encoding},
    error::Error,
};

/// Suffix appended to the input path to name the cleaned output.
pub const CLEANED_SUFFIX: &str = ".cleaned";

/// The cleaned lines of a localization file together with the encoding they
/// were decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedDocument {
    pub encoding: EncodingLabel,
    pub lines: Vec<String>,
}

impl CleanedDocument {
    /// Serializes every line followed by `\n`, in the document's encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        self.encoding.encode(&text)
    }

    /// Writes the document to `path`. The output is fully encoded before the
    /// file is created.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let bytes = self.to_bytes()?;
        fs::write(path.as_ref(), bytes)?;
        debug!(
            "wrote {} line(s) to {} as {}",
            self.lines.len(),
            path.as_ref().display(),
            self.encoding
        );
        Ok(())
    }
}

/// Detects the encoding of `bytes`, decodes them and cleans every line.
pub fn clean_bytes(bytes: &[u8]) -> Result<CleanedDocument, Error> {
    clean_bytes_with(bytes, None)
}

/// Like [`clean_bytes`], but a given encoding replaces detection.
pub fn clean_bytes_with(
    bytes: &[u8],
    encoding: Option<EncodingLabel>,
) -> Result<CleanedDocument, Error> {
    let encoding = match encoding {
        Some(forced) => forced.sniff_bom(bytes),
        None => detect_encoding(bytes),
    };

    let text = encoding.decode(bytes)?;
    let raw_lines = split_lines(&text);
    let lines = clean_lines(&raw_lines);
    debug!(
        "cleaned {} line(s) into {} using {}",
        raw_lines.len(),
        lines.len(),
        encoding
    );

    Ok(CleanedDocument { encoding, lines })
}

/// Reads the file at `path` and cleans it.
pub fn clean_file<P: AsRef<Path>>(
    path: P,
    encoding: Option<EncodingLabel>,
) -> Result<CleanedDocument, Error> {
    let bytes = fs::read(path.as_ref())?;
    clean_bytes_with(&bytes, encoding)
}

/// Output path for a cleaned file: the input path with `.cleaned` appended.
pub fn cleaned_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut name = OsString::from(path.as_ref().as_os_str());
    name.push(CLEANED_SUFFIX);
    PathBuf::from(name)
}
