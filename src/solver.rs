//! Backtracking search that grows a letter grid one crossing word at a time.
//!
//! The search runs through these states:
//! - *Seeding*: pick the first word (the longest that can be found) and write
//!   it horizontally at the origin.
//! - *Extending*: on a private copy of the grid and inventory, write the chosen
//!   word, then try crossing words through the least crowded anchors.
//! - *Solved*: the inventory is empty. The grid is returned at once and every
//!   pending branch unwinds without exploring further siblings.
//! - *PartiallySolved*: at most one letter is left. The state is recorded as
//!   good enough and the search goes on looking for a full solution.
//! - *Exhausted*: no anchor, candidate or orientation leads to a solution;
//!   the parent moves on to its next alternative.
//!
//! Every call owns its grid and inventory snapshots, so backtracking is just
//! returning from the call.

use log::{debug, info, trace, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::SolverConfig;
use crate::errors::GridError;
use crate::finder::WordFinder;
use crate::grid::{Grid, Orientation, Placement};
use crate::heuristics::{can_place, select_anchors};
use crate::inventory::Inventory;
use crate::lexicon::Lexicon;

/// A terminal grid together with the letters that were not placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub grid: Grid,
    pub leftover: Inventory,
}

impl Solution {
    /// Every letter was placed.
    pub fn is_ideal(&self) -> bool {
        self.leftover.is_empty()
    }

    /// At most one letter was left over.
    pub fn is_good_enough(&self) -> bool {
        self.leftover.len() <= 1
    }
}

/// What a finished search hands back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveReport {
    /// The first grid found that uses every letter.
    Solved(Solution),
    /// Grids leaving one letter over, fewest leftovers first, then in the
    /// order they were found.
    PartiallySolved(Vec<Solution>),
    /// A first word was placed but nothing good enough followed.
    NoSolution,
}

/// Counters collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Extending steps run (the seed word counts as one).
    pub steps: u64,
    /// Placements checked by the validator.
    pub placements_tried: u64,
    /// Placements the validator turned down.
    pub placements_rejected: u64,
    /// Deepest recursion reached; the seed word is depth 0.
    pub max_depth: usize,
    /// Good-enough states recorded.
    pub good_enough_found: usize,
    /// Set when `max_steps` cut the search short.
    pub truncated: bool,
}

/// Depth-first solver over a borrowed lexicon with an injected random source.
pub struct Solver<'a, R: Rng> {
    finder: WordFinder<'a>,
    config: SolverConfig,
    rng: R,
    stats: SearchStats,
    good_enough: Vec<Solution>,
}

impl<'a, R: Rng> Solver<'a, R> {
    pub fn new(lexicon: &'a Lexicon, config: SolverConfig, rng: R) -> Self {
        Solver {
            finder: WordFinder::new(lexicon, &config),
            config,
            rng,
            stats: SearchStats::default(),
            good_enough: Vec::new(),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Counters from the most recent call to [`Solver::solve`].
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Builds a grid from `letters`.
    ///
    /// # Returns
    /// * `Ok(SolveReport)` describing the best outcome found.
    /// * `Err(GridError::NoFirstWord)` when no seed word longer than
    ///   `first_word_floor` can be formed; no grid exists in that case.
    pub fn solve(&mut self, letters: &[char]) -> Result<SolveReport, GridError> {
        self.stats = SearchStats::default();
        self.good_enough.clear();

        let first_word = self
            .finder
            .pick_first_word(
                letters,
                self.config.first_word_start_len,
                self.config.first_word_floor,
                &mut self.rng,
            )
            .ok_or_else(|| GridError::NoFirstWord {
                letters: letters.iter().collect(),
            })?;
        info!("first word: {}", first_word);

        let inventory: Inventory = letters.iter().copied().collect();
        let seed = Placement::new((0, 0), Orientation::Horizontal, &first_word);
        let solved = self.put_word_and_step(&Grid::new(), &inventory, &seed, None, 0);

        info!(
            "search finished: {} steps, {} placements tried ({} rejected), max depth {}",
            self.stats.steps,
            self.stats.placements_tried,
            self.stats.placements_rejected,
            self.stats.max_depth
        );

        if let Some(grid) = solved {
            return Ok(SolveReport::Solved(Solution {
                grid,
                leftover: Inventory::new(),
            }));
        }
        if self.good_enough.is_empty() {
            return Ok(SolveReport::NoSolution);
        }
        let mut ranked = std::mem::take(&mut self.good_enough);
        ranked.sort_by_key(|s| s.leftover.len());
        Ok(SolveReport::PartiallySolved(ranked))
    }

    /// One Extending step: writes `placement` on copies of `grid` and
    /// `letters`, then recurses into every crossing word that fits.
    ///
    /// `reuse` is the anchor letter shared with an existing word; its first
    /// occurrence in the word is already on the grid and is not taken from
    /// the inventory.
    fn put_word_and_step(
        &mut self,
        grid: &Grid,
        letters: &Inventory,
        placement: &Placement,
        reuse: Option<char>,
        depth: usize,
    ) -> Option<Grid> {
        if let Some(max_steps) = self.config.max_steps {
            if self.stats.steps >= max_steps {
                if !self.stats.truncated {
                    warn!("step limit of {} reached, stopping search", max_steps);
                    self.stats.truncated = true;
                }
                return None;
            }
        }
        self.stats.steps += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let mut new_grid = grid.clone();
        let mut new_letters = letters.clone();

        let mut reuse = reuse;
        for letter in placement.word.chars() {
            if reuse == Some(letter) {
                reuse = None;
            } else if !new_letters.remove(letter) {
                debug!("'{}' needs a '{}' that is not left", placement.word, letter);
                return None;
            }
        }
        if let Err(e) = new_grid.place_word(placement) {
            debug!("cannot write '{}': {}", placement.word, e);
            return None;
        }

        if new_letters.is_empty() {
            return Some(new_grid);
        }

        if new_letters.len() <= 1 {
            debug!("good enough grid found, letters left: {}", new_letters);
            self.stats.good_enough_found += 1;
            self.good_enough.push(Solution {
                grid: new_grid.clone(),
                leftover: new_letters.clone(),
            });
        }

        trace!(
            "depth {} after '{}', letters left {}:\n{}",
            depth,
            placement.word,
            new_letters,
            new_grid
        );

        let anchors = select_anchors(&new_grid);
        for anchor in anchors.iter().take(self.config.anchor_limit) {
            let mut pool = vec![anchor.letter];
            pool.extend(new_letters.letters());
            let words = self.finder.pick_words(
                &pool,
                self.config.word_start_len,
                self.config.word_min_len,
                Some(anchor.letter),
                &mut self.rng,
            );

            for word in words.iter().take(self.config.candidate_limit) {
                for orientation in Orientation::ALL {
                    self.stats.placements_tried += 1;
                    let origin = match can_place(&new_grid, anchor.x, anchor.y, word, orientation) {
                        Some(origin) => origin,
                        None => {
                            self.stats.placements_rejected += 1;
                            continue;
                        }
                    };
                    let next = Placement::new(origin, orientation, word);
                    if let Some(solution) = self.put_word_and_step(
                        &new_grid,
                        &new_letters,
                        &next,
                        Some(anchor.letter),
                        depth + 1,
                    ) {
                        return Some(solution);
                    }
                    if self.stats.truncated {
                        return None;
                    }
                }
            }
        }

        None
    }
}

/// Runs a solver seeded with `seed` and returns its report and counters.
///
/// # Examples
/// ```
/// use wordgrid_solver::config::SolverConfig;
/// use wordgrid_solver::lexicon::Lexicon;
/// use wordgrid_solver::solver::{solve_with_seed, SolveReport};
///
/// let lexicon: Lexicon = ["cart", "tee"].into_iter().collect();
/// let letters: Vec<char> = "cartee".chars().collect();
/// let (report, stats) = solve_with_seed(&lexicon, &letters, SolverConfig::default(), 7).unwrap();
/// assert!(matches!(report, SolveReport::Solved(_)));
/// assert_eq!(stats.steps, 2);
/// ```
pub fn solve_with_seed(
    lexicon: &Lexicon,
    letters: &[char],
    config: SolverConfig,
    seed: u64,
) -> Result<(SolveReport, SearchStats), GridError> {
    let mut solver = Solver::new(lexicon, config, SmallRng::seed_from_u64(seed));
    let report = solver.solve(letters)?;
    Ok((report, solver.stats().clone()))
}
