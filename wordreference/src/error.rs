use thiserror::Error;

/// Error.
#[derive(Debug, Error)]
pub enum Error {
    /// A row group could not be turned into a [`Translation`](crate::Translation).
    #[error("malformed entry: {0}")]
    MalformedEntry(#[from] Malformed),
    /// The language code is not one of the supported [`Language`](crate::Language)s.
    #[error("unknown language code: {0:?}")]
    UnknownLanguage(String),
    /// The string does not describe a translation direction.
    #[error("invalid translation direction: {0:?}")]
    InvalidDirection(String),
    /// The string does not name a result section.
    #[error("unknown result section: {0:?}")]
    UnknownSection(String),
    /// The underlying http client could not be built.
    #[cfg(feature = "client")]
    #[error("could not construct http client: {0}")]
    BuildClient(#[source] reqwest::Error),
    /// The request failed or the server responded with a non-success status.
    #[cfg(feature = "client")]
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),
    /// The server answered with a redirect, which the client does not follow.
    #[cfg(feature = "client")]
    #[error("server redirected with status {status} to {location:?}")]
    Redirect {
        /// The HTTP status code.
        status: u16,
        /// The `Location` header, if present.
        location: Option<String>,
    },
    /// The server answered with a status that is neither a success nor a redirect.
    #[cfg(feature = "client")]
    #[error("server responded with status {0}")]
    UnexpectedStatus(u16),
    /// The base url cannot be used to build lookup urls.
    #[cfg(feature = "client")]
    #[error("invalid base url: {0:?}")]
    InvalidBaseUrl(String),
}

/// The reason a row group was rejected as a malformed entry.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Malformed {
    /// The third cell of a full translation row is not a target term cell.
    #[error("target cell is missing the `ToWrd` marker")]
    MissingTargetMarker,
    /// The target term cell holds no text once its label is excluded.
    #[error("target cell has no term")]
    EmptyTarget,
    /// The headword cell holds no emphasized headword.
    #[error("source cell has no headword")]
    EmptyHeadword,
    /// No row in the group carried the source headword marker.
    #[error("no row supplied a source headword")]
    MissingHeadword,
    /// The row has a number of cells none of the known row shapes use.
    #[error("unrecognized row shape with {0} cells")]
    UnrecognizedRowShape(usize),
}
