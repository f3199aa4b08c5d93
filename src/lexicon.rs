mod iter;
mod node;
mod search;

pub use self::iter::WordIter;

use self::node::Node;
use crate::error::Error;
use rand::Rng;
use std::fmt;
use std::fs::read_to_string;

/// An ordered set of words stored as a trie.
///
/// Words sharing a prefix share the nodes that spell it, children are kept
/// in alphabetical order, and branches that no longer lead to any word are
/// pruned as soon as a removal creates them. Alongside membership tests the
/// lexicon supports ordered iteration, uniform random selection, regex
/// pattern search and bounded-distance correction search.
///
/// Lookups are case-sensitive: `"Ant"` and `"ant"` are different words. The
/// bulk loaders ([`from_words`](Lexicon::from_words),
/// [`from_file`](Lexicon::from_file), [`add_words`](Lexicon::add_words))
/// lower-case their input by convention; the single-word operations never
/// touch case, so callers normalize before calling.
#[derive(Debug, Clone)]
pub struct Lexicon {
    root: Node,
    word_count: usize,
    node_count: usize,
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Lexicon: {} words, {} nodes>",
            self.word_count, self.node_count
        )
    }
}

impl Default for Lexicon {
    fn default() -> Lexicon {
        Lexicon::new()
    }
}

impl Lexicon {
    /// Return a new empty lexicon.
    pub fn new() -> Lexicon {
        Lexicon {
            // sentinel label, never part of a word
            root: Node::new('\0'),
            word_count: 0,
            node_count: 1,
        }
    }

    /// Build a lexicon from a list of words. Words are trimmed and
    /// lower-cased; blank and duplicate entries are skipped.
    pub fn from_words(words: &[&str]) -> Lexicon {
        let mut lexicon = Lexicon::new();
        lexicon.add_words(words.iter().copied());
        lexicon
    }

    /// Build a lexicon by reading `path`. The file must be encoded in utf-8
    /// and have one word per line.
    /// ## Errors
    /// Fails with [`Error::ReadError`] if the file can not be read.
    pub fn from_file(path: &str) -> Result<Lexicon, Error> {
        let mut lexicon = Lexicon::new();
        lexicon.add_words_from_file(path)?;
        Ok(lexicon)
    }

    /// Add a word. Returns false, without changing anything, when the word
    /// is already present.
    ///
    /// The empty word is a valid entry; it is stored on the root.
    /// ## Examples
    /// ```
    /// use bookworm_solver::Lexicon;
    /// let mut lexicon = Lexicon::new();
    /// assert!(lexicon.insert("hello"));
    /// assert!(!lexicon.insert("hello"));
    /// assert_eq!(lexicon.len(), 1);
    /// ```
    pub fn insert(&mut self, word: &str) -> bool {
        if self.contains_word(word) {
            return false;
        }
        let mut node = &mut self.root;
        let mut created = 0;
        for label in word.chars() {
            let (child, was_new) = node.child_or_insert(label);
            if was_new {
                created += 1;
            }
            node = child;
        }
        node.set_terminal(true);
        self.word_count += 1;
        self.node_count += created;
        true
    }

    /// Remove a word. Returns false, without changing anything, when the
    /// word is not present.
    ///
    /// Nodes that no longer lead to any word are deleted: after un-marking
    /// the final node, the path is pruned bottom-up until a node is reached
    /// that is itself a word or still has other children.
    pub fn remove(&mut self, word: &str) -> bool {
        // walk down, recording the child position taken at every step
        let mut positions = Vec::new();
        {
            let mut node = &self.root;
            for label in word.chars() {
                match node.position(label) {
                    Some(index) => {
                        positions.push(index);
                        node = &node.children()[index];
                    }
                    None => return false,
                }
            }
            if !node.terminal() {
                return false;
            }
        }
        if positions.is_empty() {
            // the empty word lives on the root, which is never pruned
            self.root.set_terminal(false);
            self.word_count -= 1;
            return true;
        }
        // terminal flag and child count per path node, root excluded
        let mut info = Vec::with_capacity(positions.len());
        {
            let mut node = &self.root;
            for &index in &positions {
                node = &node.children()[index];
                info.push((node.terminal(), node.children().len()));
            }
        }
        // `keep` = how many path nodes survive. The final node dies when it
        // is a leaf; each ancestor dies while it is a non-word whose only
        // child is the dying one.
        let depth = positions.len();
        let mut keep = depth;
        if info[depth - 1].1 == 0 {
            keep = depth - 1;
            while keep > 0 && !info[keep - 1].0 && info[keep - 1].1 == 1 {
                keep -= 1;
            }
        }
        if keep == depth {
            // still a prefix of other words: just un-mark it
            self.node_mut_at(&positions).set_terminal(false);
        } else {
            self.node_mut_at(&positions[..keep])
                .remove_child_at(positions[keep]);
            self.node_count -= depth - keep;
        }
        self.word_count -= 1;
        true
    }

    /// Add every line of `lines` as a word: trimmed, lower-cased, with blank
    /// lines and duplicates skipped. Returns the number of lines processed,
    /// which can exceed the number of words actually added.
    pub fn add_words<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut processed = 0;
        for line in lines {
            processed += 1;
            let word = line.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            self.insert(&word);
        }
        processed
    }

    /// Add all words listed in the file at `path`, one word per line, with
    /// the same conventions as [`add_words`](Lexicon::add_words). The whole
    /// file is read before the first insert, so a failed read never leaves a
    /// partial load behind.
    ///
    /// Returns the number of lines processed.
    /// ## Errors
    /// Fails with [`Error::ReadError`] if the file can not be read. This is
    /// distinct from a readable file containing no valid words, which
    /// returns `Ok` with nothing added.
    pub fn add_words_from_file(&mut self, path: &str) -> Result<usize, Error> {
        let contents = read_to_string(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        Ok(self.add_words(contents.lines()))
    }

    /// Returns true if `word` is stored in the lexicon.
    pub fn contains_word(&self, word: &str) -> bool {
        self.node_at(word).map_or(false, Node::terminal)
    }

    /// Returns true if `prefix` is a prefix of any stored word (or a word
    /// itself).
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.node_at(prefix).is_some()
    }

    /// The number of stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The number of trie nodes, root included. An empty lexicon has one.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Iterate over all words in alphabetical order. Each call starts a
    /// fresh traversal.
    pub fn iter(&self) -> WordIter {
        WordIter::new(self)
    }

    /// Return a word selected uniformly at random.
    /// ## Errors
    /// Fails with [`Error::EmptyLexicon`] when no words are stored.
    pub fn random_word<R: Rng>(&self, rng: &mut R) -> Result<String, Error> {
        if self.word_count == 0 {
            return Err(Error::EmptyLexicon);
        }
        let ordinal = rng.gen_range(0..self.word_count);
        // ordinal is within bounds, so the traversal always yields a word
        Ok(self.iter().nth(ordinal).unwrap())
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// The node reached by walking `word` from the root, if the whole path
    /// exists.
    fn node_at(&self, word: &str) -> Option<&Node> {
        let mut node = &self.root;
        for label in word.chars() {
            node = node.child(label)?;
        }
        Some(node)
    }

    fn node_mut_at(&mut self, positions: &[usize]) -> &mut Node {
        let mut node = &mut self.root;
        for &index in positions {
            node = node.child_at_mut(index);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    /// Walk the whole trie and check the structural invariants: no
    /// reachable dead branch, and the maintained counts match reality.
    fn assert_invariants(lexicon: &Lexicon) {
        let mut stack = vec![lexicon.root()];
        let mut nodes = 0;
        let mut terminals = 0;
        while let Some(node) = stack.pop() {
            nodes += 1;
            if node.terminal() {
                terminals += 1;
            }
            assert!(
                !(node.is_leaf() && !node.terminal()) || nodes == 1,
                "dead branch at '{}'",
                node.label()
            );
            stack.extend(node.children());
        }
        assert_eq!(nodes, lexicon.node_count());
        assert_eq!(terminals, lexicon.len());
    }

    #[test]
    fn test_insert_and_contains() {
        let mut lexicon = Lexicon::new();
        for &word in WORDS {
            assert!(lexicon.insert(word));
        }
        for &word in WORDS {
            assert!(lexicon.contains_word(word));
        }
        assert!(!lexicon.contains_word("a"));
        assert!(!lexicon.contains_word("belts"));
        assert_eq!(lexicon.len(), WORDS.len());
        assert_invariants(&lexicon);
    }

    #[test]
    fn test_duplicate_insert() {
        let mut lexicon = Lexicon::from_words(&["ant"]);
        assert!(!lexicon.insert("ant"));
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.node_count(), 4);
    }

    #[test]
    fn test_case_sensitive() {
        let mut lexicon = Lexicon::new();
        assert!(lexicon.insert("Ant"));
        assert!(lexicon.insert("ant"));
        assert_eq!(lexicon.len(), 2);
        assert!(!lexicon.contains_word("ANT"));
    }

    #[test]
    fn test_contains_prefix() {
        let lexicon = Lexicon::from_words(&["bear"]);
        for prefix in &["", "b", "be", "bea", "bear"] {
            assert!(lexicon.contains_prefix(prefix));
        }
        assert!(!lexicon.contains_prefix("bears"));
        assert!(!lexicon.contains_prefix("x"));
        assert!(!lexicon.contains_word("bea"));
    }

    #[test]
    fn test_remove_restores_node_count() {
        let mut lexicon = Lexicon::from_words(WORDS);
        let words = lexicon.len();
        let nodes = lexicon.node_count();

        assert!(lexicon.insert("ahoy"));
        assert!(lexicon.contains_word("ahoy"));
        assert!(lexicon.remove("ahoy"));
        assert!(!lexicon.contains_word("ahoy"));
        assert_eq!(lexicon.len(), words);
        assert_eq!(lexicon.node_count(), nodes);
        assert_invariants(&lexicon);
    }

    #[test]
    fn test_remove_absent() {
        let mut lexicon = Lexicon::from_words(&["bear"]);
        assert!(!lexicon.remove("bee"));
        assert!(!lexicon.remove("b"));
        assert!(!lexicon.remove(""));
        assert_eq!(lexicon.len(), 1);
        assert_invariants(&lexicon);
    }

    #[test]
    fn test_remove_keeps_surviving_prefix_word() {
        let mut lexicon = Lexicon::from_words(&["plan", "planet"]);
        assert!(lexicon.remove("planet"));
        assert!(lexicon.contains_word("plan"));
        assert!(!lexicon.contains_prefix("plane"));
        assert_eq!(lexicon.node_count(), 5);
        assert_invariants(&lexicon);
    }

    #[test]
    fn test_remove_keeps_longer_word() {
        let mut lexicon = Lexicon::from_words(&["plan", "planet"]);
        assert!(lexicon.remove("plan"));
        assert!(lexicon.contains_word("planet"));
        assert!(lexicon.contains_prefix("plan"));
        assert_eq!(lexicon.node_count(), 7);
        assert_invariants(&lexicon);
    }

    #[test]
    fn test_remove_shared_prefix_chain() {
        let mut lexicon = Lexicon::from_words(&["prefab", "prefix", "preform"]);
        assert!(lexicon.remove("prefix"));
        assert!(lexicon.remove("preform"));
        assert!(lexicon.remove("prefab"));
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.node_count(), 1);
        assert_invariants(&lexicon);
    }

    #[test]
    fn test_empty_word() {
        let mut lexicon = Lexicon::new();
        assert!(!lexicon.contains_word(""));
        assert!(lexicon.insert(""));
        assert!(lexicon.contains_word(""));
        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.remove(""));
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.node_count(), 1);
    }

    #[test]
    fn test_bulk_load_normalizes() {
        let mut lexicon = Lexicon::new();
        let processed = lexicon.add_words(vec!["  Bear ", "ANT", "ant", "", "bee"]);
        assert_eq!(processed, 5);
        assert_eq!(lexicon.len(), 3);
        for word in &["ant", "bear", "bee"] {
            assert!(lexicon.contains_word(word));
        }
    }

    #[test]
    fn test_from_file() {
        let lexicon = Lexicon::from_file("wordlists/sample.txt").unwrap();
        assert_eq!(lexicon.len(), 40);
        assert!(lexicon.contains_word("quash"));
        assert!(lexicon.contains_prefix("re"));
    }

    #[test]
    fn test_from_missing_file() {
        match Lexicon::from_file("wordlists/no-such-file.txt") {
            Err(Error::ReadError { path, .. }) => {
                assert_eq!(path, "wordlists/no-such-file.txt")
            }
            other => panic!("expected ReadError, got {:?}", other),
        }
    }

    #[test]
    fn test_random_word_empty() {
        let lexicon = Lexicon::new();
        let mut rng = StdRng::seed_from_u64(1);
        match lexicon.random_word(&mut rng) {
            Err(Error::EmptyLexicon) => {}
            other => panic!("expected EmptyLexicon, got {:?}", other),
        }
    }

    #[test]
    fn test_random_word_uniform() {
        let lexicon = Lexicon::from_words(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..3000 {
            let word = lexicon.random_word(&mut rng).unwrap();
            *counts.entry(word).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 3);
        for (word, count) in counts {
            assert!(
                count > 800 && count < 1200,
                "{} drawn {} times",
                word,
                count
            );
        }
    }

    #[test]
    fn test_display() {
        let lexicon = Lexicon::from_words(&["to", "ton"]);
        assert_eq!(format!("{}", lexicon), "<Lexicon: 2 words, 4 nodes>");
    }
}
