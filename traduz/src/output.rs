//! Rendering translations for the terminal.

use std::fmt::{self, Display};
use std::io::Write;
use std::str::FromStr;

use wordreference::{FromWord, ToWord, Translation};

use crate::error::Error;

/// The format results are printed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A JSON array of translations.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{other}`, expected text or json")),
        }
    }
}

/// Formats a list of translations as text, one headword line followed by indented targets.
pub struct TextFormatter<'a>(pub &'a [Translation]);

struct SourceFormatter<'a>(&'a FromWord);
struct TargetFormatter<'a>(&'a ToWord);

impl Display for SourceFormatter<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = self.0;
        write!(fmt, "{}", word.text)?;

        if !word.part_of_speech.is_empty() {
            write!(fmt, " ({})", word.part_of_speech)?;
        }

        if !word.qualifier.is_empty() {
            write!(fmt, " [{}]", word.qualifier)?;
        }

        if !word.definition.is_empty() {
            write!(fmt, ": {}", word.definition)?;
        }

        Ok(())
    }
}

impl Display for TargetFormatter<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = self.0;
        write!(fmt, "{}", word.text)?;

        if !word.part_of_speech.is_empty() {
            write!(fmt, " ({})", word.part_of_speech)?;
        }

        if !word.sense.is_empty() {
            write!(fmt, " [{}]", word.sense)?;
        }

        Ok(())
    }
}

impl Display for TextFormatter<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(fmt, "No results");
        }

        for translation in self.0 {
            writeln!(fmt, "{}", SourceFormatter(&translation.source))?;

            for target in &translation.targets {
                writeln!(fmt, "  - {}", TargetFormatter(target))?;
            }
        }

        Ok(())
    }
}

/// Writes `translations` to `out` in the given `format`.
///
/// # Errors
///
/// Returns an error if the translations cannot be serialized or written.
pub fn write(
    out: &mut impl Write,
    format: OutputFormat,
    translations: &[Translation],
) -> Result<(), Error> {
    match format {
        OutputFormat::Text => write!(out, "{}", TextFormatter(translations)).map_err(Error::Write),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, translations).map_err(Error::Serialize)?;
            writeln!(out).map_err(Error::Write)
        }
    }
}
