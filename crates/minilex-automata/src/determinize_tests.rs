use std::collections::{BTreeMap, BTreeSet};

use insta::assert_snapshot;
use minilex_syntax::parse;

use crate::determinize::{RawDfa, epsilon_closure, merge_finals, subset_construction};
use crate::nfa::{Nfa, StateId};
use crate::thompson;

fn build(pattern: &str) -> Nfa {
    thompson::compile(&parse(pattern).expect("pattern should parse"))
}

#[test]
fn concat_subset_table() {
    let dfa = crate::determinize(&build("ab"));
    assert_snapshot!(dfa.render_table(), @r"
    0 -'a'-> 1
    1 -'b'-> 2
    start: 0
    accept: 2
    ");
}

#[test]
fn union_finals_are_merged() {
    // both alternatives end final after subset construction; the merge
    // collapses them into the fresh state 3
    let dfa = crate::determinize(&build("0|1"));
    assert_snapshot!(dfa.render_table(), @r"
    0 -'0'-> 3
    0 -'1'-> 3
    start: 0
    accept: 3
    ");
}

#[test]
fn star_merges_final_start_into_representative() {
    // the start closure of `a*` is itself final, so the representative
    // becomes the new start
    let dfa = crate::determinize(&build("a*"));
    assert_snapshot!(dfa.render_table(), @r"
    2 -'a'-> 2
    start: 2
    accept: 2
    ");
}

#[test]
fn epsilon_closure_is_idempotent() {
    let nfa = build("(a|b)*");
    let once = epsilon_closure(&nfa, BTreeSet::from([nfa.start()]));
    let twice = epsilon_closure(&nfa, once.clone());
    assert_eq!(once, twice);
}

#[test]
fn epsilon_closure_contains_seed() {
    let nfa = build("ab");
    for id in 0..nfa.state_count() as u32 {
        let seed = BTreeSet::from([StateId(id)]);
        let closure = epsilon_closure(&nfa, seed.clone());
        assert!(closure.is_superset(&seed));
    }
}

#[test]
fn merge_preserves_language() {
    let patterns = [
        "a*",
        "0|1",
        "int|float|global|char|bool",
        "[0-9]+",
        "(a|b)*abb",
        "@[a-zA-Z0-9]*@",
    ];
    let candidates = [
        "", "a", "b", "0", "1", "01", "int", "float", "integer", "123", "12a", "abb", "aabb",
        "ab", "@@", "@a1B@", "@a",
    ];

    for pattern in patterns {
        let raw = subset_construction(&build(pattern));
        let before: Vec<bool> = candidates.iter().map(|c| raw.accepts(c)).collect();
        let dfa = merge_finals(raw);
        for (candidate, expected) in candidates.iter().zip(before) {
            assert_eq!(
                dfa.is_match(candidate),
                expected,
                "pattern {pattern:?}, candidate {candidate:?}"
            );
        }
    }
}

#[test]
fn merge_conflict_keeps_lowest_final_entry() {
    // two finals with conflicting rows on 'z': the lower id wins when
    // re-homing onto the representative
    let raw = RawDfa {
        start: StateId(0),
        finals: BTreeSet::from([StateId(1), StateId(2)]),
        transitions: vec![
            BTreeMap::from([('x', StateId(1)), ('y', StateId(2))]),
            BTreeMap::from([('z', StateId(1))]),
            BTreeMap::from([('z', StateId(0))]),
        ],
    };
    let dfa = merge_finals(raw);
    let representative = StateId(3);
    assert_eq!(dfa.accept(), representative);
    assert_eq!(dfa.transition(StateId(0), 'x'), Some(representative));
    assert_eq!(dfa.transition(StateId(0), 'y'), Some(representative));
    // state 1's entry won; state 2's `z -> 0` was dropped
    assert_eq!(dfa.transition(representative, 'z'), Some(representative));
}

#[test]
fn zero_final_dfa_gets_unreachable_accept() {
    // `[]` accepts nothing; subset construction discovers no final state
    let raw = subset_construction(&build("[]"));
    assert!(raw.finals.is_empty());
    let dfa = merge_finals(raw);
    assert_eq!(dfa.state_count(), 2);
    assert!(!dfa.is_match(""));
    assert!(!dfa.is_match("a"));
}

#[test]
fn determinization_is_deterministic() {
    for pattern in ["(a|b)*abb", "int|float|global|char|bool", "[0-9]+(\\.[0-9]+)*"] {
        let first = crate::determinize(&build(pattern));
        let second = crate::determinize(&build(pattern));
        assert_eq!(first.render_table(), second.render_table());
    }
}

#[test]
fn classic_subset_construction_example() {
    // (a|b)*abb, the textbook NFA-to-DFA exercise
    let dfa = crate::determinize(&build("(a|b)*abb"));
    assert!(dfa.is_match("abb"));
    assert!(dfa.is_match("aabb"));
    assert!(dfa.is_match("babb"));
    assert!(dfa.is_match("abababb"));
    assert!(!dfa.is_match(""));
    assert!(!dfa.is_match("ab"));
    assert!(!dfa.is_match("abba"));
}
