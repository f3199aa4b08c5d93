use super::node::Node;
use super::Lexicon;
use crate::error::Error;
use regex::RegexBuilder;
use std::collections::HashSet;

/// One pending branch of the correction walk.
#[derive(Debug)]
struct Step<'a> {
    node: &'a Node,
    depth: usize,
    budget: i32,
    word: String,
}

impl Lexicon {
    /// Return the set of words matched by `pattern`.
    ///
    /// The pattern is compiled case-insensitively and applied to every
    /// stored word with find semantics: a word matches when the pattern
    /// matches anywhere in it. Anchor with `^` and `$` to restrict matches
    /// to the start or end of a word.
    ///
    /// ## Errors
    /// [`Error::InvalidPattern`] if `pattern` is not valid regex syntax.
    /// ## Examples
    /// ```
    /// use bookworm_solver::{Error, Lexicon};
    /// let lexicon = Lexicon::from_words(&["apple", "maple", "ample"]);
    /// let starts_with_ap = lexicon.match_pattern("^ap")?;
    /// assert_eq!(starts_with_ap.len(), 1);
    /// assert!(starts_with_ap.contains("apple"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn match_pattern(&self, pattern: &str) -> Result<HashSet<String>, Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: String::from(pattern),
                source,
            })?;
        Ok(self.iter().filter(|word| regex.is_match(word)).collect())
    }

    /// Return every stored word of the same length as `target` within
    /// `max_distance` single-character substitutions of it.
    ///
    /// The walk descends the trie in lockstep with `target`, spending one
    /// unit of budget per mismatched position; a branch is abandoned as soon
    /// as its budget runs out, so whole subtrees are skipped without being
    /// enumerated. A negative `max_distance` yields the empty set.
    pub fn suggest_corrections(&self, target: &str, max_distance: i32) -> HashSet<String> {
        let mut corrections = HashSet::new();
        if max_distance < 0 {
            return corrections;
        }
        let target: Vec<char> = target.chars().collect();
        let mut pending = vec![Step {
            node: self.root(),
            depth: 0,
            budget: max_distance,
            word: String::new(),
        }];
        while let Some(step) = pending.pop() {
            if step.depth == target.len() {
                if step.node.terminal() {
                    corrections.insert(step.word);
                }
                continue;
            }
            for child in step.node.children() {
                let cost = if child.label() == target[step.depth] { 0 } else { 1 };
                if step.budget < cost {
                    continue;
                }
                let mut word = step.word.clone();
                word.push(child.label());
                pending.push(Step {
                    node: child,
                    depth: step.depth + 1,
                    budget: step.budget - cost,
                    word,
                });
            }
        }
        corrections
    }
}
