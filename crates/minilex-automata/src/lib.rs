//! Finite automata for minilex token classification.
//!
//! The back half of the compilation pipeline:
//! - `nfa` - state arena, epsilon-aware transition maps, two-endpoint fragments
//! - `thompson` - Thompson construction from a parsed pattern
//! - `determinize` - subset construction plus the final-state merge
//! - `dfa` - the deterministic automaton and its whole-string matcher
//!
//! Compilation is single-threaded and deterministic. A compiled [`Dfa`] is
//! immutable; matching borrows it shared, so it can be used concurrently
//! without locking.

pub mod determinize;
pub mod dfa;
pub mod nfa;
pub mod thompson;

#[cfg(test)]
mod determinize_tests;
#[cfg(test)]
mod matcher_tests;

pub use determinize::determinize;
pub use dfa::Dfa;
pub use nfa::{Fragment, Input, Nfa, StateId};

use minilex_syntax::Regex;

/// Compile a parsed pattern all the way to a normalized DFA.
pub fn compile(regex: &Regex) -> Dfa {
    determinize(&thompson::compile(regex))
}
