use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

/// Which of the two generated collections an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collection {
    Known,
    Unknown,
}

impl Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collection::Known => write!(f, "known"),
            Collection::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("domain exhausted: only {accepted} of {requested} {collection} points could be placed")]
    DomainExhausted {
        collection: Collection,
        accepted: usize,
        requested: usize,
    },

    #[error("could not read config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("i/o error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not serialize points to {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
