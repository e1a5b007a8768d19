//! # Word Grid Solver Library
//!
//! This library builds crossword-like letter grids from a fixed bag of
//! letters. Dictionary words are placed on a sparse, unbounded grid so that
//! crossing words share a letter, and every placed letter is taken from the
//! bag. The search stops at the first grid that uses the whole bag; grids
//! leaving a single letter over are kept as a fallback.
//!
//! It is used by the `wordgrid` binary, which loads a word list, seeds the
//! random source and prints the resulting grid.
//!
//! ## Modules
//! - `lexicon`: the prefix trie holding the dictionary.
//! - `inventory`: the multiset of letters still available.
//! - `finder`: random-sample word discovery over the trie.
//! - `grid`: the sparse grid (`Grid`), orientations and placements.
//! - `heuristics`: anchor ranking and placement clearance checks.
//! - `solver`: the backtracking search and its report types.
//! - `config`: search limits.
//! - `errors`: the crate's error type.
//! - `utils`: parsing letter bags and grids, loading word lists.
//! - `log`: logger setup for the binaries.

pub mod config;
pub mod errors;
pub mod finder;
pub mod grid;
pub mod heuristics;
pub mod inventory;
pub mod lexicon;
pub mod log;
pub mod solver;
pub mod utils;
