//! Prefix tree over the word list
//!
//! Nodes live in a flat arena and are addressed by `NodeId`, so descending
//! one letter is a single hash lookup regardless of dictionary size.

use crate::wordlists::WORDS;
use crate::wordlists::loader::words_from_slice;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Handle to a trie node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node of every dictionary
    pub const ROOT: Self = Self(0);

    /// Id for the node at arena slot `index`, if it fits in a `NodeId`
    #[inline]
    fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single trie node
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: FxHashMap<u8, NodeId>,
    is_word: bool,
}

impl TrieNode {
    /// Child reached by `letter`, if any word continues that way
    #[inline]
    #[must_use]
    pub fn child(&self, letter: u8) -> Option<NodeId> {
        self.children.get(&letter).copied()
    }

    /// True if a complete word ends at this node
    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.is_word
    }
}

/// Error type for words rejected by the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters(String),
    TooManyNodes,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacters(word) => {
                write!(f, "Word '{word}' must contain only ASCII letters")
            }
            Self::TooManyNodes => write!(f, "Dictionary has run out of node ids"),
        }
    }
}

impl std::error::Error for WordError {}

/// Immutable-after-build word index
#[derive(Debug, Clone)]
pub struct Dictionary {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Create an empty dictionary holding only the root node
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Build a dictionary from words, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::core::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["cat", "CATS", "c4t"]);
    /// assert!(dict.contains("CAT"));
    /// assert!(dict.contains("cats"));
    /// assert_eq!(dict.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for word in words {
            // Invalid entries are dropped, matching the word list loader
            let _ = dict.insert(word.as_ref());
        }
        dict
    }

    /// The dictionary compiled into the binary
    ///
    /// Built on first use and shared read-only for the rest of the process.
    pub fn embedded() -> &'static Self {
        static EMBEDDED: OnceLock<Dictionary> = OnceLock::new();
        EMBEDDED.get_or_init(|| Self::from_words(words_from_slice(WORDS)))
    }

    /// Insert a word, normalising it to uppercase
    ///
    /// Inserting a word twice is a no-op.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains non-letters, or
    /// if the trie has no node ids left.
    pub fn insert(&mut self, word: &str) -> Result<(), WordError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters(word.to_string()));
        }

        let mut current = NodeId::ROOT;
        for letter in word.bytes().map(|b| b.to_ascii_uppercase()) {
            current = match self.nodes[current.index()].child(letter) {
                Some(next) => next,
                None => {
                    let next =
                        NodeId::from_index(self.nodes.len()).ok_or(WordError::TooManyNodes)?;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.index()].children.insert(letter, next);
                    next
                }
            };
        }

        let terminal = &mut self.nodes[current.index()];
        if !terminal.is_word {
            terminal.is_word = true;
            self.word_count += 1;
        }
        Ok(())
    }

    /// Look up a node by id
    ///
    /// Returns `None` for ids that did not come from this dictionary.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id.index())
    }

    /// Follow the edge labelled `letter` out of `node`
    #[inline]
    #[must_use]
    pub fn descend(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        self.node(node).and_then(|n| n.child(letter))
    }

    /// True if `node` terminates a complete word
    #[inline]
    #[must_use]
    pub fn is_word(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(TrieNode::is_word)
    }

    /// Node reached by spelling `prefix` from the root
    #[must_use]
    pub fn find_prefix(&self, prefix: &str) -> Option<NodeId> {
        prefix.bytes().try_fold(NodeId::ROOT, |node, b| {
            self.descend(node, b.to_ascii_uppercase())
        })
    }

    /// Check whether `word` is in the dictionary (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find_prefix(word).is_some_and(|node| self.is_word(node))
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of trie nodes including the root
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_stop_at_u32_range() {
        assert_eq!(NodeId::from_index(0), Some(NodeId::ROOT));
        assert_eq!(
            NodeId::from_index(u32::MAX as usize),
            Some(NodeId(u32::MAX))
        );
        assert_eq!(NodeId::from_index(u32::MAX as usize + 1), None);
    }

    #[test]
    fn insert_and_contains() {
        let mut dict = Dictionary::new();
        dict.insert("cat").unwrap();
        dict.insert("CATS").unwrap();

        assert!(dict.contains("CAT"));
        assert!(dict.contains("cats"));
        assert!(!dict.contains("CA"));
        assert!(!dict.contains("DOG"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn insert_rejects_invalid() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.insert(""), Err(WordError::Empty));
        assert_eq!(dict.insert("   "), Err(WordError::Empty));
        assert!(matches!(
            dict.insert("can't"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(dict.is_empty());
        assert_eq!(dict.node_count(), 1);
    }

    #[test]
    fn duplicate_insert_counts_once() {
        let mut dict = Dictionary::new();
        dict.insert("tea").unwrap();
        dict.insert("TEA").unwrap();
        assert_eq!(dict.len(), 1);
        // Root + T + E + A
        assert_eq!(dict.node_count(), 4);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let dict = Dictionary::from_words(["tea", "ten", "tent"]);
        // Root, T, E, A, N, T
        assert_eq!(dict.node_count(), 6);
    }

    #[test]
    fn descend_walks_one_letter() {
        let dict = Dictionary::from_words(["cat"]);
        let c = dict.descend(NodeId::ROOT, b'C').unwrap();
        let a = dict.descend(c, b'A').unwrap();
        let t = dict.descend(a, b'T').unwrap();

        assert!(!dict.is_word(c));
        assert!(!dict.is_word(a));
        assert!(dict.is_word(t));
        assert_eq!(dict.descend(a, b'R'), None);
        assert_eq!(dict.descend(t, b'S'), None);
    }

    #[test]
    fn descend_is_case_sensitive_on_bytes() {
        // The search only ever feeds uppercase bytes
        let dict = Dictionary::from_words(["cat"]);
        assert_eq!(dict.descend(NodeId::ROOT, b'c'), None);
    }

    #[test]
    fn foreign_node_ids_are_rejected() {
        let big = Dictionary::from_words(["abcdefgh"]);
        let small = Dictionary::from_words(["a"]);
        let deep = big.find_prefix("ABCDEF").unwrap();

        assert!(small.node(deep).is_none());
        assert_eq!(small.descend(deep, b'G'), None);
        assert!(!small.is_word(deep));
    }

    #[test]
    fn from_words_skips_invalid() {
        let dict = Dictionary::from_words(["dog", "d0g", "", "cat"]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn embedded_dictionary_is_shared() {
        let first = Dictionary::embedded();
        let second = Dictionary::embedded();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), WORDS.len());
        assert!(first.contains("CAT"));
    }
}
