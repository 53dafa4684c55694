//! Subset construction and the final-state merge.
//!
//! Closures are content-addressed: two discovered epsilon-closures with the
//! same member states are the same DFA state. Sorted member sets
//! (`BTreeSet<StateId>`) keyed in an `IndexMap` give cheap equality and
//! stable, insertion-ordered DFA state numbering, so determinization of the
//! same NFA always produces the same table.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use indexmap::IndexMap;

use crate::dfa::Dfa;
use crate::nfa::{Input, Nfa, StateId};

/// Convert an NFA into a normalized DFA: worklist subset construction, then
/// the final-state merge.
pub fn determinize(nfa: &Nfa) -> Dfa {
    merge_finals(subset_construction(nfa))
}

/// DFA as it comes out of subset construction: possibly several final
/// states (or none, for patterns accepting nothing).
#[derive(Debug)]
pub(crate) struct RawDfa {
    pub(crate) start: StateId,
    pub(crate) finals: BTreeSet<StateId>,
    pub(crate) transitions: Vec<BTreeMap<char, StateId>>,
}

impl RawDfa {
    /// Pre-merge acceptance, against the final-state *set*. Only used to
    /// check that the merge preserves the language.
    #[cfg(test)]
    pub(crate) fn accepts(&self, candidate: &str) -> bool {
        let mut current = self.start;
        for c in candidate.chars() {
            match self.transitions[current.index()].get(&c) {
                Some(&next) => current = next,
                None => return false,
            }
        }
        self.finals.contains(&current)
    }
}

/// Smallest superset of `set` closed under epsilon edges (worklist BFS).
/// Idempotent: the closure of a closure is itself.
pub(crate) fn epsilon_closure(nfa: &Nfa, set: BTreeSet<StateId>) -> BTreeSet<StateId> {
    let mut closure = set.clone();
    let mut worklist: VecDeque<StateId> = set.into_iter().collect();

    while let Some(state) = worklist.pop_front() {
        for target in nfa.targets(state, Input::Epsilon) {
            if closure.insert(target) {
                worklist.push_back(target);
            }
        }
    }
    closure
}

/// Union of `symbol`-labeled destinations over all states in `set`.
fn move_set(nfa: &Nfa, set: &BTreeSet<StateId>, symbol: char) -> BTreeSet<StateId> {
    set.iter()
        .flat_map(|&state| nfa.targets(state, Input::Symbol(symbol)))
        .collect()
}

/// Non-epsilon symbols appearing on any state in `set`, deduplicated and
/// sorted (drives deterministic transition discovery order).
fn outgoing_symbols(nfa: &Nfa, set: &BTreeSet<StateId>) -> BTreeSet<char> {
    set.iter().flat_map(|&state| nfa.symbols(state)).collect()
}

/// Worklist subset construction. Terminates because distinct closures are
/// bounded by the powerset of NFA states and each is processed once.
pub(crate) fn subset_construction(nfa: &Nfa) -> RawDfa {
    let mut seen: IndexMap<BTreeSet<StateId>, StateId> = IndexMap::new();
    let mut transitions: Vec<BTreeMap<char, StateId>> = Vec::new();
    let mut finals = BTreeSet::new();
    let mut worklist = VecDeque::new();

    let start_closure = epsilon_closure(nfa, BTreeSet::from([nfa.start()]));
    let start = StateId(0);
    seen.insert(start_closure.clone(), start);
    transitions.push(BTreeMap::new());
    worklist.push_back(start_closure);

    while let Some(closure) = worklist.pop_front() {
        let current = seen[&closure];
        if closure.iter().any(|&state| nfa.is_accepting(state)) {
            finals.insert(current);
        }

        for symbol in outgoing_symbols(nfa, &closure) {
            let next_closure = epsilon_closure(nfa, move_set(nfa, &closure, symbol));
            let next = match seen.get(&next_closure) {
                Some(&id) => id,
                None => {
                    let id = StateId(seen.len() as u32);
                    seen.insert(next_closure.clone(), id);
                    transitions.push(BTreeMap::new());
                    worklist.push_back(next_closure);
                    id
                }
            };
            transitions[current.index()].insert(symbol, next);
        }
    }

    RawDfa {
        start,
        finals,
        transitions,
    }
}

/// Collapse the final-state set into exactly one accepting state, as a pure
/// transform producing a new table.
///
/// With several finals, a fresh representative `r` is appended: every
/// transition into an eliminated final is retargeted to `r`, and the
/// eliminated finals' outgoing rows are re-homed onto `r`. Re-homing visits
/// finals in ascending id order and the first writer of a symbol wins; later
/// conflicting entries are dropped (for subset-construction output the
/// conflicting rows describe the same onward language, see determinize
/// tests). If the start state was final, `r` becomes the start. A DFA with
/// no final state at all gets a fresh unreachable accepting state, so the
/// "exactly one final" post-condition holds there too.
pub(crate) fn merge_finals(raw: RawDfa) -> Dfa {
    if raw.finals.len() == 1 {
        let accept = *raw
            .finals
            .iter()
            .next()
            .expect("finals is non-empty in this branch");
        return Dfa::new(raw.start, accept, raw.transitions);
    }

    let representative = StateId(raw.transitions.len() as u32);

    if raw.finals.is_empty() {
        let mut transitions = raw.transitions;
        transitions.push(BTreeMap::new());
        return Dfa::new(raw.start, representative, transitions);
    }

    let retarget = |to: StateId| -> StateId {
        if raw.finals.contains(&to) {
            representative
        } else {
            to
        }
    };

    let mut transitions: Vec<BTreeMap<char, StateId>> =
        Vec::with_capacity(raw.transitions.len() + 1);
    for (index, row) in raw.transitions.iter().enumerate() {
        if raw.finals.contains(&StateId(index as u32)) {
            // eliminated final: its row moves to the representative below
            transitions.push(BTreeMap::new());
        } else {
            transitions.push(
                row.iter()
                    .map(|(&symbol, &to)| (symbol, retarget(to)))
                    .collect(),
            );
        }
    }

    let mut merged_row: BTreeMap<char, StateId> = BTreeMap::new();
    for &final_state in &raw.finals {
        for (&symbol, &to) in &raw.transitions[final_state.index()] {
            merged_row.entry(symbol).or_insert_with(|| retarget(to));
        }
    }
    transitions.push(merged_row);

    let start = retarget(raw.start);
    Dfa::new(start, representative, transitions)
}
