//! Tunable limits for the word finder and the backtracking search.

/// Search limits. The defaults reproduce the reference behavior: first words
/// of 7 letters shrinking to 4, crossing words of 6 shrinking to 3, ten random
/// samples of up to eight letters per target length, four anchors and ten
/// candidates per step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Random samples drawn per target word length.
    pub attempts: usize,
    /// Upper bound on letters per sample; orderings grow as `sample_size!`.
    pub sample_size: usize,
    /// Target length the seed word search starts at.
    pub first_word_start_len: usize,
    /// Seed words must be strictly longer than this.
    pub first_word_floor: usize,
    /// Target length the crossing word search starts at.
    pub word_start_len: usize,
    /// Shortest crossing word accepted (inclusive).
    pub word_min_len: usize,
    /// Anchors tried per step.
    pub anchor_limit: usize,
    /// Candidate words tried per anchor.
    pub candidate_limit: usize,
    /// Stop expanding once this many steps have run. `None` searches until the
    /// tree is exhausted.
    pub max_steps: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            attempts: 10,
            sample_size: 8,
            first_word_start_len: 7,
            first_word_floor: 3,
            word_start_len: 6,
            word_min_len: 3,
            anchor_limit: 4,
            candidate_limit: 10,
            max_steps: None,
        }
    }
}
