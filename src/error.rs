use std::path::PathBuf;

/// Errors surfaced by the crate's public API.
///
/// `NotFound` from the informal taxonomy never escapes here: `contains`,
/// `weight_of`, and friends report absence with `bool`/`Option`, not an
/// error.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// A caller-supplied argument is out of range (e.g. a negative
    /// distance or prefix that can't be represented).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The dictionary file couldn't be opened or read.
    #[error("failed to read dictionary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dictionary line's weight token wasn't a valid decimal number.
    #[error("invalid weight {token:?} on line {line} of dictionary")]
    Parse { line: usize, token: String },
}
