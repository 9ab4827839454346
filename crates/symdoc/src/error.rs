use std::path::PathBuf;

use thiserror::Error;

/// Raised while normalizing a raw symbol record into a descriptor.
///
/// The walk recovers from it by skipping the offending symbol, so a
/// descriptor handed to the encoder or renderer is always complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedSymbolError {
    #[error("symbol has an empty name")]
    EmptyName,
    #[error("generic arity marker without a count in `{name}`")]
    MissingArity {
        name: String,
    },
    #[error("generic arity marker `{suffix}` in `{name}` is not a count")]
    InvalidArity {
        name: String,
        suffix: String,
    },
    #[error("array type `{name}` has no element type")]
    MissingElementType {
        name: String,
    },
    #[error("array type `{name}` declares rank 0")]
    ZeroArrayRank {
        name: String,
    },
    #[error("{kind} type `{name}` has no element type")]
    MissingModifierTarget {
        kind: &'static str,
        name: String,
    },
    #[error("`{name}` is not a named type definition")]
    NotATypeDefinition {
        name: String,
    },
    #[error("in {context}: {source}")]
    Within {
        context: String,
        #[source]
        source: Box<MalformedSymbolError>,
    },
}

impl MalformedSymbolError {
    /// Wrap the error with the symbol that was being built when it occurred.
    pub fn within(
        self,
        context: impl Into<String>,
    ) -> Self {
        Self::Within {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Raised by the path tree when a path contains an empty or blank segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("path `{path}` has an empty segment at position {index}")]
pub struct PathInsertionError {
    pub path: String,
    pub index: usize,
}

/// Why a page could not be placed in the path tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error(transparent)]
    InvalidPath(#[from] PathInsertionError),
    /// Another page already sits at the path; the first one placed is kept.
    #[error("path `{path}` is already taken by {occupant}")]
    Occupied {
        path: String,
        occupant: String,
    },
}

/// Fatal failures of the generator front end (input loading and settings).
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse settings {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to start the output thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
