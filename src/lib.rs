//! # predictrie
//!
//! A weighted trie supporting three operations: exact membership with an
//! associated weight, prefix-ordered completion (top-k completions of a
//! prefix ranked by weight), and bounded-edit-distance correction (top
//! matches within a Levenshtein threshold of a possibly misspelled query,
//! ranked by edit distance then weight).
//!
//! The core is the weighted trie itself ([`Trie`]) and the two search
//! algorithms it hosts:
//! - a best-first prefix enumeration driven by a per-node cached maximum
//!   descendant weight ([`Trie::complete`]);
//! - a Levenshtein-bounded traversal using rolling DP rows with subtree
//!   pruning ([`Trie::correct`]).
//!
//! ## License
//!
//! The software is licensed under the MIT license.

mod completion;
mod correction;
mod error;
mod loader;
mod node;
mod ranking;
mod trie;

pub use error::TrieError;
pub use ranking::Suggestion;
pub use trie::Trie;
