//! Finding dictionary words that can be spelled from a bag of letters.
//!
//! A query draws a bounded random sample from the available letters and
//! collects every word that some ordering of the sample spells as a prefix.
//! Orderings are walked through the lexicon one letter at a time, so a dead
//! prefix cuts off every ordering that starts with it, and equal letters are
//! never permuted against each other.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::SolverConfig;
use crate::lexicon::{Lexicon, TrieNode};

/// Word queries against a borrowed lexicon.
#[derive(Clone, Copy, Debug)]
pub struct WordFinder<'a> {
    lexicon: &'a Lexicon,
    attempts: usize,
    sample_size: usize,
}

impl<'a> WordFinder<'a> {
    pub fn new(lexicon: &'a Lexicon, config: &SolverConfig) -> Self {
        WordFinder {
            lexicon,
            attempts: config.attempts,
            sample_size: config.sample_size,
        }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Draws one random sample of `letters` and returns the words it spells.
    ///
    /// See [`WordFinder::words_from_sample`] for the filtering rules.
    pub fn find_words<R: Rng + ?Sized>(
        &self,
        letters: &[char],
        min_length: usize,
        must_contain: Option<char>,
        stop_at_first: bool,
        rng: &mut R,
    ) -> Vec<String> {
        let amount = self.sample_size.min(letters.len());
        let sample: Vec<char> = letters.choose_multiple(rng, amount).copied().collect();
        self.words_from_sample(&sample, min_length, must_contain, stop_at_first)
    }

    /// Returns every word spelled by a prefix of some ordering of `sample`.
    ///
    /// A word qualifies if it has at least `min_length` letters and, when
    /// `must_contain` is given, contains that letter. With `stop_at_first`
    /// the result holds at most one word. Otherwise words are unique and
    /// ordered longest first, alphabetically within a length.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid_solver::config::SolverConfig;
    /// use wordgrid_solver::finder::WordFinder;
    /// use wordgrid_solver::lexicon::Lexicon;
    ///
    /// let lexicon: Lexicon = ["cat", "act", "at", "cart"].into_iter().collect();
    /// let finder = WordFinder::new(&lexicon, &SolverConfig::default());
    /// let words = finder.words_from_sample(&['t', 'a', 'c'], 2, None, false);
    /// assert_eq!(words, vec!["act", "cat", "at"]);
    /// ```
    pub fn words_from_sample(
        &self,
        sample: &[char],
        min_length: usize,
        must_contain: Option<char>,
        stop_at_first: bool,
    ) -> Vec<String> {
        // Distinct letters in order of first appearance, with their counts.
        let mut pool: Vec<(char, usize)> = Vec::new();
        for &letter in sample {
            match pool.iter_mut().find(|(l, _)| *l == letter) {
                Some((_, n)) => *n += 1,
                None => pool.push((letter, 1)),
            }
        }

        let mut walk = PermutationWalk {
            min_length,
            must_contain,
            stop_at_first,
            prefix: String::new(),
            depth: 0,
            found: BTreeSet::new(),
        };
        walk.descend(self.lexicon.root(), &mut pool);

        let mut words: Vec<String> = walk.found.into_iter().collect();
        words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
        words
    }

    /// Picks a seed word, preferring long ones.
    ///
    /// Starting at `start_len`, runs the configured number of random samples
    /// per target length and returns the first qualifying word. The target
    /// shrinks by one while it stays above `floor`, so the shortest seed word
    /// has `floor + 1` letters.
    pub fn pick_first_word<R: Rng + ?Sized>(
        &self,
        letters: &[char],
        start_len: usize,
        floor: usize,
        rng: &mut R,
    ) -> Option<String> {
        let mut word_length = start_len;
        while word_length > floor {
            for _ in 0..self.attempts {
                let words = self.find_words(letters, word_length, None, true, rng);
                if let Some(word) = words.into_iter().next() {
                    return Some(word);
                }
            }
            word_length -= 1;
        }
        None
    }

    /// Collects candidate words containing `must_contain`.
    ///
    /// Every target length from `start_len` down to `min_len` runs all its
    /// random samples; results from all of them are merged. The returned list
    /// is unique and ordered longest first.
    pub fn pick_words<R: Rng + ?Sized>(
        &self,
        letters: &[char],
        start_len: usize,
        min_len: usize,
        must_contain: Option<char>,
        rng: &mut R,
    ) -> Vec<String> {
        let mut result = BTreeSet::new();
        for word_length in (min_len..=start_len).rev() {
            for _ in 0..self.attempts {
                let words = self.find_words(letters, word_length, must_contain, false, rng);
                result.extend(words);
            }
        }

        let mut words: Vec<String> = result.into_iter().collect();
        words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
        words
    }
}

/// Depth-first walk over orderings of a letter pool, guided by the trie.
struct PermutationWalk {
    min_length: usize,
    must_contain: Option<char>,
    stop_at_first: bool,
    prefix: String,
    depth: usize,
    found: BTreeSet<String>,
}

impl PermutationWalk {
    /// Returns true once the walk should stop.
    fn descend(&mut self, node: &TrieNode, pool: &mut [(char, usize)]) -> bool {
        for i in 0..pool.len() {
            let (letter, remaining) = pool[i];
            if remaining == 0 {
                continue;
            }
            let child = match node.next_node(letter) {
                Some(child) => child,
                None => continue,
            };

            pool[i].1 -= 1;
            self.prefix.push(letter);
            self.depth += 1;

            if child.is_terminal() && self.accepts() {
                self.found.insert(self.prefix.clone());
                if self.stop_at_first {
                    return true;
                }
            }

            let stop = !child.is_leaf() && self.descend(child, pool);

            self.depth -= 1;
            self.prefix.pop();
            pool[i].1 += 1;

            if stop {
                return true;
            }
        }
        false
    }

    fn accepts(&self) -> bool {
        self.depth >= self.min_length
            && self
                .must_contain
                .map_or(true, |letter| self.prefix.contains(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn lexicon(words: &[&str]) -> Lexicon {
        words.iter().collect()
    }

    #[test]
    fn test_no_word_when_sample_too_short() {
        let lex = lexicon(&["cat"]);
        let finder = WordFinder::new(&lex, &SolverConfig::default());
        let mut rng = SmallRng::seed_from_u64(1);
        let words = finder.find_words(&['a', 'c'], 3, Some('a'), false, &mut rng);
        assert!(words.is_empty());
    }

    #[test]
    fn test_words_respect_letter_counts() {
        let lex = lexicon(&["tat", "at", "att"]);
        let finder = WordFinder::new(&lex, &SolverConfig::default());
        let words = finder.words_from_sample(&['t', 'a'], 2, None, false);
        assert_eq!(words, vec!["at"]);
        let words = finder.words_from_sample(&['t', 'a', 't'], 2, None, false);
        assert_eq!(words, vec!["att", "tat", "at"]);
    }

    #[test]
    fn test_min_length_filters_short_words() {
        let lex = lexicon(&["at", "cat", "cart"]);
        let finder = WordFinder::new(&lex, &SolverConfig::default());
        let words = finder.words_from_sample(&['c', 'a', 'r', 't'], 3, None, false);
        assert_eq!(words, vec!["cart", "cat"]);
    }

    #[test]
    fn test_must_contain_checked_on_word() {
        let lex = lexicon(&["at", "tar", "rat", "art"]);
        let finder = WordFinder::new(&lex, &SolverConfig::default());
        // The sample holds 'r' but only words containing it are accepted.
        let words = finder.words_from_sample(&['a', 'r', 't'], 2, Some('r'), false);
        assert_eq!(words, vec!["art", "rat", "tar"]);
        let words = finder.words_from_sample(&['a', 't'], 2, Some('r'), false);
        assert!(words.is_empty());
    }

    #[test]
    fn test_stop_at_first_returns_single_word() {
        let lex = lexicon(&["tar", "rat", "art"]);
        let finder = WordFinder::new(&lex, &SolverConfig::default());
        let words = finder.words_from_sample(&['a', 'r', 't'], 3, None, true);
        assert_eq!(words.len(), 1);
        assert!(lex.contains(&words[0]));
    }

    #[test]
    fn test_same_seed_same_results() {
        let lex = lexicon(&["stone", "notes", "tones", "one", "ten", "net", "sent", "nest"]);
        let finder = WordFinder::new(&lex, &SolverConfig::default());
        let letters: Vec<char> = "stonexyzqwk".chars().collect();

        let mut rng_a = SmallRng::seed_from_u64(42);
        let mut rng_b = SmallRng::seed_from_u64(42);
        let a = finder.pick_words(&letters, 6, 3, None, &mut rng_a);
        let b = finder.pick_words(&letters, 6, 3, None, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_is_capped() {
        let lex = lexicon(&["abcdefghi"]);
        let finder = WordFinder::new(&lex, &SolverConfig::default());
        let letters: Vec<char> = "abcdefghi".chars().collect();
        let mut rng = SmallRng::seed_from_u64(7);
        // Nine letters are needed, but at most eight are ever sampled.
        for _ in 0..20 {
            assert!(finder.find_words(&letters, 1, None, false, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_pick_first_word_prefers_long_words() {
        let lex = lexicon(&["cart", "carts", "car"]);
        let finder = WordFinder::new(&lex, &SolverConfig::default());
        let letters: Vec<char> = "scart".chars().collect();
        let mut rng = SmallRng::seed_from_u64(3);
        let word = finder.pick_first_word(&letters, 7, 3, &mut rng);
        assert_eq!(word.as_deref(), Some("carts"));
    }

    #[test]
    fn test_pick_first_word_respects_floor() {
        let lex = lexicon(&["cat"]);
        let finder = WordFinder::new(&lex, &SolverConfig::default());
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(finder.pick_first_word(&['c', 'a', 't'], 7, 3, &mut rng), None);
        assert_eq!(
            finder.pick_first_word(&['c', 'a', 't'], 7, 2, &mut rng).as_deref(),
            Some("cat")
        );
    }

    #[test]
    fn test_pick_words_sorted_longest_first() {
        let lex = lexicon(&["art", "tart", "rat", "start"]);
        let finder = WordFinder::new(&lex, &SolverConfig::default());
        let letters: Vec<char> = "attrs".chars().collect();
        let mut rng = SmallRng::seed_from_u64(11);
        let words = finder.pick_words(&letters, 6, 3, Some('a'), &mut rng);
        assert_eq!(words, vec!["start", "tart", "art", "rat"]);
    }
}
