//! Error types

use miette::Diagnostic;
use thiserror::Error;

/// Application errors for configuration, lookups and output.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The configuration could not be loaded.
    #[error("Could not load configuration")]
    #[diagnostic(
        code(traduz::config),
        help("check the configuration file and the TRADUZ_* environment variables")
    )]
    Config(#[source] Box<figment::Error>),
    /// A saved results page could not be read.
    #[error("Could not read results page from {path}")]
    #[diagnostic(code(traduz::read_html))]
    ReadHtml {
        /// The path of the page.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Neither a word nor a results page was given.
    #[error("Nothing to look up")]
    #[diagnostic(
        code(traduz::usage),
        help("pass a word to look up, or --file to parse a saved results page")
    )]
    MissingWord,
    /// Failed to create the HTTP client.
    #[error("Could not create HTTP client")]
    HttpClient(#[source] reqwest::Error),
    /// Fetching or parsing the results page failed.
    #[error("Lookup failed")]
    #[diagnostic(code(traduz::lookup))]
    Lookup(#[from] wordreference::Error),
    /// The translations could not be serialized.
    #[error("Could not serialize translations")]
    Serialize(#[source] serde_json::Error),
    /// The output could not be written.
    #[error("Could not write output")]
    Write(#[source] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
