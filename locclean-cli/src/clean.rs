use indicatif::{ProgressBar, ProgressStyle};
use locclean::{clean_file, cleaned_path};
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::validation::{validate_encoding_label, validate_localization_file};

/// Options for a single cleaning run.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Localization file to clean
    pub file: String,
    /// Print the cleaned lines instead of writing `<file>.cleaned`
    pub print: bool,
    /// Encoding label that replaces detection
    pub encoding: Option<String>,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    Printed { lines: usize },
    Written { path: PathBuf, lines: usize },
}

/// Run the clean command: validate the input, clean it, then print or write.
///
/// Nothing is written when any step fails.
pub fn run_clean_command(options: &CleanOptions) -> Result<CleanOutcome, String> {
    let localization = validate_localization_file(&options.file)?;
    let forced = options
        .encoding
        .as_deref()
        .map(validate_encoding_label)
        .transpose()?;
    debug!(
        "{} is a {} ({}) localization file",
        options.file,
        localization,
        localization.language_id()
    );

    if options.print {
        let doc = clean_file(&options.file, forced).map_err(|e| e.to_string())?;
        let mut out = io::stdout().lock();
        for line in &doc.lines {
            writeln!(out, "{}", line).map_err(stdout_error)?;
        }
        out.flush().map_err(stdout_error)?;
        return Ok(CleanOutcome::Printed {
            lines: doc.lines.len(),
        });
    }

    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap(),
    );
    progress_bar.set_message(format!("Cleaning {} ({})...", options.file, localization));

    let doc = match clean_file(&options.file, forced) {
        Ok(doc) => doc,
        Err(e) => {
            progress_bar.finish_with_message("❌ Error cleaning localization file");
            return Err(e.to_string());
        }
    };

    let output = cleaned_path(&options.file);
    progress_bar.set_message(format!("Writing {}...", output.display()));
    if let Err(e) = doc.write_to(&output) {
        progress_bar.finish_with_message("❌ Error writing cleaned file");
        return Err(e.to_string());
    }
    progress_bar.finish_and_clear();

    info!(
        "{} line(s) written to {} as {}",
        doc.lines.len(),
        output.display(),
        doc.encoding
    );
    Ok(CleanOutcome::Written {
        path: output,
        lines: doc.lines.len(),
    })
}

fn stdout_error(e: io::Error) -> String {
    format!("cannot write to stdout: {}", e)
}
