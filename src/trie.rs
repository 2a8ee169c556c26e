use std::path::Path;

use crate::completion::complete_from;
use crate::correction::correct_from;
use crate::error::TrieError;
use crate::loader;
use crate::node::Node;
use crate::ranking::Suggestion;

/// A weighted-string index: exact membership with an associated weight,
/// prefix-ordered completion, and bounded-edit-distance correction.
///
/// The root is a synthetic, always-non-terminal node; it exists for the
/// lifetime of the trie.
#[derive(Debug, Clone)]
pub struct Trie {
    pub(crate) root: Node,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Trie {
    /// Returns a new, empty trie.
    pub fn new() -> Self {
        Trie {
            root: Node::new(),
            len: 0,
        }
    }

    /// Inserts `word` with a default weight of `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use predictrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("word", 0.0);
    /// assert!(trie.contains("word"));
    /// ```
    pub fn insert(&mut self, word: &str, weight: f64) -> bool {
        let existed = self.contains(word);
        let changed = self.root.insert(word.chars(), weight);
        if changed && !existed {
            self.len += 1;
        }
        changed
    }

    /// Loads `(word, weight)` pairs from a dictionary file. See the crate
    /// documentation for the file format. Returns the number of entries
    /// inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use predictrie::Trie;
    /// use std::io::Write;
    ///
    /// let mut path = std::env::temp_dir();
    /// path.push("predictrie_doctest_insert_from_file.txt");
    /// let mut file = std::fs::File::create(&path).unwrap();
    /// write!(file, "2\nalpha 5\nbeta 10\n").unwrap();
    ///
    /// let mut trie = Trie::new();
    /// let inserted = trie.insert_from_file(&path, true, &[' ', '\t']).unwrap();
    /// assert_eq!(2, inserted);
    /// assert_eq!(Some(5.0), trie.weight_of("alpha"));
    ///
    /// std::fs::remove_file(&path).unwrap();
    /// ```
    pub fn insert_from_file(
        &mut self,
        path: impl AsRef<Path>,
        has_weights: bool,
        delimiters: &[char],
    ) -> Result<usize, TrieError> {
        let entries = loader::load_dictionary(path.as_ref(), has_weights, delimiters)?;
        let mut inserted = 0;
        for (word, weight) in entries {
            if self.insert(&word, weight) {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// True iff `word` is stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use predictrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("word", 0.0);
    /// assert!(trie.contains("word"));
    /// assert!(!trie.contains("nope"));
    /// ```
    pub fn contains(&self, word: &str) -> bool {
        self.root.contains(word.chars())
    }

    /// Removes `word`. Returns true iff it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use predictrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("word", 1.0);
    /// assert!(trie.remove("word"));
    /// assert!(!trie.contains("word"));
    /// assert!(!trie.remove("word"));
    /// ```
    pub fn remove(&mut self, word: &str) -> bool {
        let removed = self.root.remove(word.chars());
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns the stored weight for `word`, or `None` if absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use predictrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("word", 3.5);
    /// assert_eq!(Some(3.5), trie.weight_of("word"));
    /// assert_eq!(None, trie.weight_of("missing"));
    /// ```
    pub fn weight_of(&self, word: &str) -> Option<f64> {
        self.root.weight_of(word.chars())
    }

    /// Replaces the weight of `word` with `f(old_weight)`. Returns
    /// whether `word` was present. Refreshes the cached max-weight
    /// summary along the affected path.
    ///
    /// # Examples
    ///
    /// ```
    /// use predictrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("word", 1.0);
    /// assert!(trie.update_weight("word", |w| w + 10.0));
    /// assert_eq!(Some(11.0), trie.weight_of("word"));
    /// assert!(!trie.update_weight("missing", |w| w));
    /// ```
    pub fn update_weight(&mut self, word: &str, f: impl FnOnce(f64) -> f64 + Copy) -> bool {
        self.root.update_weight(word.chars(), f)
    }

    /// Number of distinct words stored in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True iff no words are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Best-first prefix completion: the top `k` stored words starting
    /// with `prefix`, ranked non-increasing by weight. See module
    /// `completion` for the algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use predictrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("spite", 20.0);
    /// trie.insert("spit", 15.0);
    /// trie.insert("sad", 12.0);
    ///
    /// assert_eq!(
    ///     vec!["spite".to_string(), "spit".to_string()],
    ///     trie.complete("sp", 2)
    /// );
    /// ```
    pub fn complete(&self, prefix: &str, k: usize) -> Vec<String> {
        complete_from(&self.root, prefix, k)
    }

    /// Bounded-edit-distance correction: every stored word within
    /// `max_distance` of `word`, ranked by `(distance asc, weight desc)`.
    /// See module `correction` for the algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use predictrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("cat", 1.0);
    /// trie.insert("bat", 2.0);
    ///
    /// let mut results = trie.correct("hat", 1);
    /// results.sort();
    /// assert_eq!(vec!["bat".to_string(), "cat".to_string()], results);
    /// ```
    pub fn correct(&self, word: &str, max_distance: usize) -> Vec<String> {
        self.correct_ranked(word, max_distance, false)
            .into_iter()
            .map(|s| s.word)
            .collect()
    }

    /// Same as [`Trie::correct`] but returns the full [`Suggestion`]
    /// records (word, weight, distance), optionally applying the
    /// keyboard-proximity tiebreak.
    ///
    /// # Examples
    ///
    /// ```
    /// use predictrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("cat", 1.0);
    /// trie.insert("bat", 10.0);
    ///
    /// let results = trie.correct_ranked("hat", 1, false);
    /// assert_eq!("bat", results[0].word);
    /// assert_eq!(1, results[0].distance);
    /// ```
    pub fn correct_ranked(
        &self,
        word: &str,
        max_distance: usize,
        keyboard_proximity: bool,
    ) -> Vec<Suggestion> {
        correct_from(&self.root, word, max_distance, keyboard_proximity)
    }
}
