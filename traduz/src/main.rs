//! Command line front end for looking up translations on WordReference.

use std::io;
use std::path::{Path, PathBuf};

use argh::FromArgs;
use miette::IntoDiagnostic;
use wordreference::{Direction, Parser, Section};

mod config;
mod consts;
mod error;
mod http;
mod output;
mod tracing;

use config::Config;
use error::Error;
use output::OutputFormat;

/// Look up translations of a word on WordReference.
#[derive(Debug, FromArgs)]
struct Opts {
    /// path to config file
    #[argh(option, short = 'c', default = "PathBuf::from(consts::DEFAULT_CONFIG_PATH)")]
    config: PathBuf,
    /// translation direction, e.g. en-es (default: from config)
    #[argh(option, short = 'd')]
    direction: Option<Direction>,
    /// parse a saved results page instead of fetching one
    #[argh(option, short = 'f')]
    file: Option<PathBuf>,
    /// result section to read: regular, additional, compounds or phrasal (repeatable, default:
    /// regular)
    #[argh(option, short = 's')]
    section: Vec<Section>,
    /// output format: text or json (default: text)
    #[argh(option, default = "OutputFormat::Text")]
    format: OutputFormat,
    /// fail on the first malformed entry instead of skipping it
    #[argh(switch)]
    strict: bool,
    /// the word or phrase to look up
    #[argh(positional)]
    words: Vec<String>,
}

/// Reads a saved results page from `path`.
fn read_html(path: &Path) -> Result<String, Error> {
    ::tracing::trace!(?path, "reading results page");

    std::fs::read_to_string(path).map_err(|source| Error::ReadHtml {
        path: path.display().to_string(),
        source,
    })
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Parse command-line arguments
    let opts: Opts = argh::from_env();

    let config = Config::load(&opts.config).map_err(Error::from)?;

    tracing::try_init(&config.tracing)?;

    let direction = opts.direction.unwrap_or(config.direction);
    let sections = if opts.section.is_empty() {
        vec![Section::Regular]
    } else {
        opts.section
    };
    let parser = Parser::new(direction).with_sections(sections);
    let word = opts.words.join(" ");

    let html = if let Some(path) = &opts.file {
        read_html(path)?
    } else {
        if word.trim().is_empty() {
            return Err(Error::MissingWord.into());
        }

        let client = http::build_client(&config.http)?;

        client.fetch(&word, direction).await.map_err(Error::from)?
    };

    let translations = if opts.strict {
        parser.try_parse(&html).map_err(Error::from)?
    } else {
        parser.parse(&html)
    };

    ::tracing::info!(
        %direction,
        num_translations = translations.len(),
        "parsed results page"
    );

    let mut stdout = io::stdout().lock();

    output::write(&mut stdout, opts.format, &translations)?;

    io::Write::flush(&mut stdout).into_diagnostic()?;

    Ok(())
}
