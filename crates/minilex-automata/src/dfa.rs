//! Deterministic automaton and whole-string matcher.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::nfa::StateId;

/// A normalized DFA: one start state, exactly one accepting state, and a
/// partial transition table (a missing entry means "no such transition").
///
/// Immutable after construction; [`Dfa::is_match`] only borrows shared, so a
/// compiled automaton can serve any number of threads without locking.
#[derive(Debug, Clone)]
pub struct Dfa {
    start: StateId,
    accept: StateId,
    /// Row per state id; at most one destination per symbol by construction.
    transitions: Vec<BTreeMap<char, StateId>>,
}

impl Dfa {
    pub(crate) fn new(
        start: StateId,
        accept: StateId,
        transitions: Vec<BTreeMap<char, StateId>>,
    ) -> Self {
        Self {
            start,
            accept,
            transitions,
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn transition(&self, from: StateId, symbol: char) -> Option<StateId> {
        self.transitions[from.index()].get(&symbol).copied()
    }

    /// Whole-string anchored match: consume every character of `candidate`
    /// in order, rejecting immediately on a missing transition, and accept
    /// iff the walk ends in the accepting state.
    ///
    /// Total and pure; rejection is the `false` return, never an error.
    pub fn is_match(&self, candidate: &str) -> bool {
        let mut current = self.start;
        for c in candidate.chars() {
            match self.transition(current, c) {
                Some(next) => current = next,
                None => return false,
            }
        }
        current == self.accept
    }

    /// Textual transition table in state-id order, for tests and debugging.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        for (from, row) in self.transitions.iter().enumerate() {
            for (symbol, to) in row {
                writeln!(out, "{from} -{symbol:?}-> {}", to.index())
                    .expect("String write never fails");
            }
        }
        writeln!(out, "start: {}", self.start.index()).expect("String write never fails");
        writeln!(out, "accept: {}", self.accept.index()).expect("String write never fails");
        out
    }
}
