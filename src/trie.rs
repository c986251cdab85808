//! Trie data structure for dictionary-based segmentation.
//!
//! The Trie stores words as sequences of characters and allows for efficient
//! longest-match lookups during Thai word and syllable segmentation.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

/// A node in the Trie
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Children nodes, keyed by character
    pub children: HashMap<char, TrieNode>,
    /// Whether this node marks the end of a valid word
    pub is_leaf: bool,
}

impl TrieNode {
    /// Create a new empty node
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Check if this node is a valid word ending
    pub fn is_match(&self) -> bool {
        self.is_leaf
    }
}

/// A Trie for storing and looking up dictionary words
#[derive(Debug, Default, Clone)]
pub struct Trie {
    /// The root node
    root: TrieNode,
    /// Number of words in the trie
    word_count: usize,
}

impl Trie {
    /// Create a new empty Trie
    pub fn new() -> Self {
        Trie::default()
    }

    /// Get the number of words in the trie
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check if the trie is empty
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Add a word to the trie
    pub fn add(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.children.entry(c).or_insert_with(TrieNode::new);
        }

        if !current.is_leaf {
            self.word_count += 1;
        }
        current.is_leaf = true;
    }

    /// Walk the trie by one character, returning the next node if it exists
    pub fn walk<'a>(&'a self, c: char, current: Option<&'a TrieNode>) -> Option<&'a TrieNode> {
        let node = current.unwrap_or(&self.root);
        node.children.get(&c)
    }

    /// Lengths in chars of every dictionary word starting at `start`, shortest first
    pub fn prefix_matches(&self, chars: &[char], start: usize) -> Vec<usize> {
        let mut current: Option<&TrieNode> = None;
        let mut matches = Vec::new();
        let mut walker = start;

        while walker < chars.len() {
            match self.walk(chars[walker], current) {
                Some(next) => {
                    walker += 1;
                    if next.is_match() {
                        matches.push(walker - start);
                    }
                    current = Some(next);
                }
                None => break,
            }
        }

        matches
    }
}

/// Builder for loading a Trie from word lists
pub struct TrieBuilder {
    trie: Trie,
}

impl TrieBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        TrieBuilder { trie: Trie::new() }
    }

    /// Load words from a list with one word per line.
    ///
    /// Lines starting with `#` are comments. Only the first tab-separated
    /// column is used, so frequency lists load as plain word lists.
    pub fn load_word_list(&mut self, content: &str) {
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let form = line.split('\t').next().unwrap_or(line).trim();
            self.add_word(form);
        }
    }

    /// Add a single word (NFC-normalized)
    pub fn add_word(&mut self, word: &str) {
        let normalized: String = word.nfc().collect();
        self.trie.add(&normalized);
    }

    /// Number of words loaded so far
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Check if no words were loaded
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Build and return the Trie
    pub fn build(self) -> Trie {
        self.trie
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut builder = TrieBuilder::new();
        for word in iter {
            builder.add_word(word.as_ref());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(trie: &Trie, text: &str, start: usize) -> Vec<usize> {
        let chars: Vec<char> = text.chars().collect();
        trie.prefix_matches(&chars, start)
    }

    #[test]
    fn test_trie_add_and_lookup() {
        let mut trie = Trie::new();

        trie.add("ภาษา");
        trie.add("ภาษาไทย");

        assert_eq!(matches(&trie, "ภาษาไทยดี", 0), vec![4, 7]);
        assert!(matches(&trie, "ภา", 0).is_empty()); // Partial word
        assert!(matches(&trie, "ภาษาไทยดี", 7).is_empty());
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_trie_walk() {
        let mut trie = Trie::new();
        trie.add("กา");

        let node1 = trie.walk('ก', None);
        assert!(node1.is_some());
        assert!(!node1.unwrap().is_match());

        let node2 = trie.walk('า', node1);
        assert!(node2.is_some());
        assert!(node2.unwrap().is_match());
        assert!(trie.walk('ข', None).is_none());
    }

    #[test]
    fn test_prefix_matches_mid_text() {
        let trie: Trie = ["ดี", "ดีมาก", "มาก"].into_iter().collect();
        assert_eq!(matches(&trie, "ไม่ดีมาก", 3), vec![2, 5]);
        assert_eq!(matches(&trie, "ไม่ดีมาก", 5), vec![3]);
        assert!(matches(&trie, "ไม่ดีมาก", 0).is_empty());
        assert!(matches(&trie, "ดี", 2).is_empty());
    }

    #[test]
    fn test_duplicate_words_counted_once() {
        let mut trie = Trie::new();
        trie.add("ดี");
        trie.add("ดี");
        trie.add("");
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_trie_builder() {
        let list = "# Thai words\nภาษา\nไทย\t120\n\n";

        let mut builder = TrieBuilder::new();
        builder.load_word_list(list);
        assert_eq!(builder.len(), 2);
        let trie = builder.build();

        assert_eq!(matches(&trie, "ภาษา", 0), vec![4]);
        assert_eq!(matches(&trie, "ไทย", 0), vec![3]);
        assert!(matches(&trie, "120", 0).is_empty());
    }
}
