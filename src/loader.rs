use std::fs;
use std::path::Path;

use crate::error::TrieError;

/// Loads `(word, weight)` pairs from a dictionary file.
///
/// Format: UTF-8 text. The first line is a decimal word count, purely
/// informational — a mismatch against the actual number of entry lines
/// is logged and otherwise ignored. Each subsequent line holds one
/// entry, tokens separated by any character in `delimiters`. When
/// `has_weights` is true, a line's first token is the word and the
/// second is a decimal weight (parsed as `f64`, not truncated to an
/// integer); a weight token that fails to parse is a hard error rather
/// than a silently-skipped or coerced line. When `has_weights` is false,
/// each line is a single word with weight `0.0`.
pub(crate) fn load_dictionary(
    path: &Path,
    has_weights: bool,
    delimiters: &[char],
) -> Result<Vec<(String, f64)>, TrieError> {
    let contents = fs::read_to_string(path).map_err(|source| TrieError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = contents.lines();
    let declared_count = lines.next().and_then(|first| first.trim().parse::<usize>().ok());

    let mut entries = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line_number = offset + 2; // 1-indexed, after the count line
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split(|c: char| delimiters.contains(&c)).filter(|t| !t.is_empty());
        let Some(word) = tokens.next() else {
            continue;
        };

        let weight = if has_weights {
            let Some(token) = tokens.next() else {
                return Err(TrieError::Parse {
                    line: line_number,
                    token: String::new(),
                });
            };
            token.parse::<f64>().map_err(|_| TrieError::Parse {
                line: line_number,
                token: token.to_string(),
            })?
        } else {
            0.0
        };

        entries.push((word.to_string(), weight));
    }

    if let Some(declared) = declared_count {
        if declared != entries.len() {
            log::warn!(
                "dictionary {} declares {} entries but {} were read",
                path.display(),
                declared,
                entries.len()
            );
        }
    }

    log::debug!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}
