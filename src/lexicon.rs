//! Prefix tree over the known words.
//!
//! The lexicon is built once, before any search, and is then only read. The
//! word finder walks it one letter at a time, so the API exposes nodes rather
//! than whole-word lookups.

use std::collections::HashMap;
use std::io::BufRead;

use crate::errors::GridError;

/// Prefix tree node
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    next: HashMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Returns the child reached by `letter`, if any word continues that way.
    pub fn next_node(&self, letter: char) -> Option<&TrieNode> {
        self.next.get(&letter)
    }

    /// True if a word ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// True if no word continues past this node.
    pub fn is_leaf(&self) -> bool {
        self.next.is_empty()
    }
}

/// The dictionary: a trie root plus a count of distinct words.
///
/// # Examples
///
/// ```
/// use wordgrid_solver::lexicon::Lexicon;
///
/// let lexicon: Lexicon = ["cat", "car"].into_iter().collect();
/// let c = lexicon.walk(lexicon.root(), 'c').unwrap();
/// let a = lexicon.walk(c, 'a').unwrap();
/// assert!(!lexicon.is_terminal(a));
/// let t = lexicon.walk(a, 't').unwrap();
/// assert!(lexicon.is_terminal(t));
/// assert!(lexicon.walk(a, 'x').is_none());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    root: TrieNode,
    words: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word. Empty words are ignored; re-inserting a word is a no-op.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for letter in word.chars() {
            node = node.next.entry(letter).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Steps from `node` along `letter`.
    pub fn walk<'a>(&self, node: &'a TrieNode, letter: char) -> Option<&'a TrieNode> {
        node.next_node(letter)
    }

    pub fn is_terminal(&self, node: &TrieNode) -> bool {
        node.is_terminal()
    }

    /// Whole-word membership.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for letter in word.chars() {
            match node.next_node(letter) {
                Some(next) => node = next,
                None => return false,
            }
        }
        !word.is_empty() && node.is_terminal()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Builds a lexicon from a line-oriented word list.
    ///
    /// Each line is trimmed and lowercased. Single-letter entries and entries
    /// containing anything other than alphabetic characters are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, GridError> {
        let mut lexicon = Lexicon::new();
        let mut skipped = 0usize;
        for line in reader.lines() {
            let line = line?;
            match normalize_entry(&line) {
                Some(word) => lexicon.insert(&word),
                None => skipped += 1,
            }
        }
        log::debug!(
            "lexicon built: {} words, {} entries skipped",
            lexicon.len(),
            skipped
        );
        Ok(lexicon)
    }
}

/// Normalizes one word-list entry, or rejects it.
fn normalize_entry(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.chars().count() < 2 || !word.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(word)
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut lexicon = Lexicon::new();
        for word in iter {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_insert_and_contains() {
        let vocab = ["cat", "dog", "mouse", "moose", "laptop"];
        let lexicon: Lexicon = vocab.iter().collect();

        assert_eq!(lexicon.len(), 5);
        for word in vocab {
            assert!(lexicon.contains(word), "missing {}", word);
        }
        assert!(!lexicon.contains("ca"));
        assert!(!lexicon.contains("cats"));
        assert!(!lexicon.contains("moo"));
        assert!(!lexicon.contains(""));
    }

    #[test]
    fn test_prefix_is_not_a_word_until_inserted() {
        let mut lexicon: Lexicon = ["cart"].into_iter().collect();
        assert!(!lexicon.contains("car"));
        lexicon.insert("car");
        assert!(lexicon.contains("car"));
        assert!(lexicon.contains("cart"));
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn test_duplicate_and_empty_inserts() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("");
        assert!(lexicon.is_empty());
        lexicon.insert("art");
        lexicon.insert("art");
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_walk_dead_end() {
        let lexicon: Lexicon = ["cat"].into_iter().collect();
        let root = lexicon.root();
        assert!(lexicon.walk(root, 'a').is_none());
        let t = lexicon
            .walk(root, 'c')
            .and_then(|n| lexicon.walk(n, 'a'))
            .and_then(|n| lexicon.walk(n, 't'))
            .unwrap();
        assert!(lexicon.is_terminal(t));
        assert!(t.is_leaf());
    }

    #[test]
    fn test_from_reader_filters_entries() {
        let data = "Cat\n a\nit's\ncar\n\nDOG  \nx-ray\nart\n";
        let lexicon = Lexicon::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(lexicon.len(), 4);
        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("dog"));
        assert!(lexicon.contains("car"));
        assert!(lexicon.contains("art"));
        assert!(!lexicon.contains("a"));
        assert!(!lexicon.contains("its"));
    }
}
