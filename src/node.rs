use fxhash::FxHashMap;

/// A single trie node: an end-of-word marker, the terminal weight (only
/// meaningful when `end` is true), the child edges keyed by input symbol,
/// and the cached maximum terminal weight across the whole subtree rooted
/// here.
///
/// `max_weight` defaults to `f64::NEG_INFINITY`, meaning "no terminal in
/// this subtree". It lives on the node itself rather than in a side
/// table keyed by node identity, so it moves and drops with the node.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    end: bool,
    weight: f64,
    pub(crate) children: FxHashMap<char, Node>,
    pub(crate) max_weight: f64,
}

impl Default for Node {
    fn default() -> Self {
        Node::new()
    }
}

impl Node {
    pub(crate) fn new() -> Self {
        Node {
            end: false,
            weight: 0.0,
            children: FxHashMap::default(),
            max_weight: f64::NEG_INFINITY,
        }
    }

    pub(crate) fn is_end(&self) -> bool {
        self.end
    }

    /// Weight at this node. Only meaningful when `is_end()` is true;
    /// callers must not read this on a non-terminal node.
    pub(crate) fn weight(&self) -> f64 {
        debug_assert!(self.end, "reading weight of a non-terminal node");
        self.weight
    }

    /// Inserts `word` (as a sequence of `chars`) beneath this node with
    /// the given weight. Returns whether the trie's observable state
    /// changed (word was absent, or present with a different weight).
    pub(crate) fn insert(&mut self, mut word: impl Iterator<Item = char>, weight: f64) -> bool {
        if weight > self.max_weight {
            self.max_weight = weight;
        }

        match word.next() {
            None => {
                if self.end && self.weight == weight {
                    return false;
                }
                self.end = true;
                self.weight = weight;
                true
            }
            Some(c) => {
                let child = self.children.entry(c).or_default();
                child.insert(word, weight)
            }
        }
    }

    /// True iff some descendant path spells `word` and is terminal.
    pub(crate) fn contains(&self, mut word: impl Iterator<Item = char>) -> bool {
        match word.next() {
            None => self.end,
            Some(c) => self
                .children
                .get(&c)
                .is_some_and(|child| child.contains(word)),
        }
    }

    /// Returns the terminal weight for `word`, or `None` if absent.
    pub(crate) fn weight_of(&self, mut word: impl Iterator<Item = char>) -> Option<f64> {
        match word.next() {
            None => self.end.then_some(self.weight),
            Some(c) => self.children.get(&c).and_then(|child| child.weight_of(word)),
        }
    }

    /// Removes `word` from beneath this node. Returns true iff it was
    /// present. Recomputes `max_weight` on every frame on the way back up,
    /// since a deleted terminal may have been the subtree maximum.
    pub(crate) fn remove(&mut self, mut word: impl Iterator<Item = char>) -> bool {
        let removed = match word.next() {
            None => {
                if !self.end {
                    return false;
                }
                self.end = false;
                self.weight = 0.0;
                true
            }
            Some(c) => {
                let Some(child) = self.children.get_mut(&c) else {
                    return false;
                };
                let removed = child.remove(word);
                if removed && !child.is_end() && child.children.is_empty() {
                    self.children.remove(&c);
                }
                removed
            }
        };

        if removed {
            self.recompute_max_weight();
        }

        removed
    }

    /// Recomputes `max_weight` on this node from its current children and
    /// own terminal weight. Does not recurse: callers walk the path and
    /// call this bottom-up.
    fn recompute_max_weight(&mut self) {
        let mut best = if self.end { self.weight } else { f64::NEG_INFINITY };
        for child in self.children.values() {
            if child.max_weight > best {
                best = child.max_weight;
            }
        }
        self.max_weight = best;
    }

    /// If `word` is terminal in this subtree, replaces its weight with
    /// `f(old_weight)` and refreshes `max_weight` along the path from the
    /// root of this call down to the affected terminal, then back up to
    /// `self`. Returns whether the word was found.
    pub(crate) fn update_weight(
        &mut self,
        mut word: impl Iterator<Item = char>,
        f: impl FnOnce(f64) -> f64 + Copy,
    ) -> bool {
        let found = match word.next() {
            None => {
                if !self.end {
                    return false;
                }
                self.weight = f(self.weight);
                true
            }
            Some(c) => match self.children.get_mut(&c) {
                None => return false,
                Some(child) => child.update_weight(word, f),
            },
        };

        if found {
            self.recompute_max_weight();
        }

        found
    }

    /// Recursively checks that `max_weight` at this node and every
    /// descendant equals the maximum terminal weight reachable from it
    /// (`NEG_INFINITY` if none exists). Panics with the offending node's
    /// expected and actual values on the first mismatch found.
    #[cfg(test)]
    pub(crate) fn assert_max_weight_invariant(&self) {
        let mut expected = if self.end { self.weight } else { f64::NEG_INFINITY };
        for child in self.children.values() {
            child.assert_max_weight_invariant();
            if child.max_weight > expected {
                expected = child.max_weight;
            }
        }
        assert_eq!(
            expected, self.max_weight,
            "max_weight invariant violated: expected {expected}, got {}",
            self.max_weight
        );
    }
}
