//! Error taxonomy for the harvest pipeline.
//!
//! Two failure families exist: fetching a homepage ([`ExtractError`]) and
//! writing the CSV output ([`WriteError`]). Parse problems are not a failure
//! family at all - a document with missing headings, paragraphs, or anchors
//! degrades to optional/empty values in the extracted data instead of
//! erroring.

use std::path::PathBuf;
use thiserror::Error;

/// A homepage fetch that did not produce a parseable body.
///
/// Any variant aborts the pipeline for that site only; sibling sites are
/// unaffected.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The configured URL is not well-formed.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be read as text.
    #[error("failed reading response body from {url}: {source}")]
    Body {
        url: String,
        source: reqwest::Error,
    },
}

/// A CSV destination that could not be written.
///
/// Aborts only the write step; the extraction result is not retried.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The destination file could not be created (permissions, missing
    /// directory, disk full).
    #[error("cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A record or the final flush failed mid-write.
    #[error("failed writing csv to {path}: {source}")]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
}
