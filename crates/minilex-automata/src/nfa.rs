//! Nondeterministic automaton representation.
//!
//! States live in an arena addressed by small integer ids; ids are scoped to
//! one pattern's compilation (each [`crate::thompson::compile`] call starts
//! from a fresh arena, so ids start at zero per pattern). Epsilon edges use an
//! explicit [`Input::Epsilon`] variant rather than a sentinel character, so
//! they can never collide with a real input symbol.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

/// Arena index of an automaton state.
///
/// Shared between NFA and DFA; the two id spaces are unrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub u32);

impl StateId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A transition label: either a real input symbol or the epsilon marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Input {
    Epsilon,
    Symbol(char),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct NfaState {
    pub(crate) accepting: bool,
    /// Symbol (or epsilon) to destination set. Nondeterministic: several
    /// destinations per label are allowed.
    pub(crate) transitions: BTreeMap<Input, BTreeSet<StateId>>,
}

/// A two-endpoint piece of an NFA under construction.
///
/// Every fragment has exactly one start and one final state; composition in
/// Thompson construction relies on this invariant. `start == accept` is legal
/// (the empty-string fragment).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub accept: StateId,
}

/// A complete nondeterministic automaton with a single accepting state.
#[derive(Debug, Clone)]
pub struct Nfa {
    pub(crate) states: Vec<NfaState>,
    start: StateId,
    accept: StateId,
}

impl Nfa {
    pub(crate) fn new(states: Vec<NfaState>, fragment: Fragment) -> Self {
        Self {
            states,
            start: fragment.start,
            accept: fragment.accept,
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn is_accepting(&self, id: StateId) -> bool {
        self.states[id.index()].accepting
    }

    /// Destinations reachable from `id` on `input`, empty if none recorded.
    pub fn targets(&self, id: StateId, input: Input) -> impl Iterator<Item = StateId> + '_ {
        self.states[id.index()]
            .transitions
            .get(&input)
            .into_iter()
            .flatten()
            .copied()
    }

    /// Non-epsilon symbols with at least one outgoing edge from `id`.
    pub fn symbols(&self, id: StateId) -> impl Iterator<Item = char> + '_ {
        self.states[id.index()]
            .transitions
            .keys()
            .filter_map(|input| match input {
                Input::Epsilon => None,
                Input::Symbol(c) => Some(*c),
            })
    }

    /// Textual transition table in state-id order, for tests and debugging.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        for (from, state) in self.states.iter().enumerate() {
            for (input, targets) in &state.transitions {
                for to in targets {
                    match input {
                        Input::Epsilon => {
                            writeln!(out, "{from} -ε-> {}", to.index())
                        }
                        Input::Symbol(c) => {
                            writeln!(out, "{from} -{c:?}-> {}", to.index())
                        }
                    }
                    .expect("String write never fails");
                }
            }
        }
        writeln!(out, "start: {}", self.start.index()).expect("String write never fails");
        writeln!(out, "accept: {}", self.accept.index()).expect("String write never fails");
        out
    }
}
