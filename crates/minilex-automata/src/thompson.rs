//! Thompson construction: pattern AST to NFA fragments.
//!
//! Each node type yields a two-endpoint fragment. Literal, class, union,
//! star, and plus allocate two fresh states and wire the child fragments'
//! existing endpoints with epsilon edges; concatenation chains its children
//! without fresh states.

use minilex_syntax::{CharClass, Regex};

use crate::nfa::{Fragment, Input, Nfa, NfaState, StateId};

/// Build the NFA for one pattern. The arena (and thus state numbering) is
/// fresh per call.
pub fn compile(regex: &Regex) -> Nfa {
    let mut builder = ThompsonBuilder::default();
    let fragment = builder.fragment(regex);
    Nfa::new(builder.states, fragment)
}

#[derive(Default)]
struct ThompsonBuilder {
    states: Vec<NfaState>,
}

impl ThompsonBuilder {
    fn fresh_state(&mut self, accepting: bool) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(NfaState {
            accepting,
            ..NfaState::default()
        });
        id
    }

    fn connect(&mut self, from: StateId, input: Input, to: StateId) {
        self.states[from.index()]
            .transitions
            .entry(input)
            .or_default()
            .insert(to);
    }

    fn set_accepting(&mut self, id: StateId, accepting: bool) {
        self.states[id.index()].accepting = accepting;
    }

    fn fragment(&mut self, regex: &Regex) -> Fragment {
        match regex {
            Regex::Literal(c) => self.literal(*c),
            Regex::Class(class) => self.class(class),
            Regex::Concat(nodes) => self.concat(nodes),
            Regex::Union(alternatives) => self.union(alternatives),
            Regex::Star(inner) => self.repeat(inner, true),
            Regex::Plus(inner) => self.repeat(inner, false),
        }
    }

    fn literal(&mut self, c: char) -> Fragment {
        let start = self.fresh_state(false);
        let accept = self.fresh_state(true);
        self.connect(start, Input::Symbol(c), accept);
        Fragment { start, accept }
    }

    /// A class is language-equivalent to a union of one literal per matched
    /// character; one shared start/accept pair with a direct edge per member
    /// keeps the arena small. An empty member set accepts nothing.
    fn class(&mut self, class: &CharClass) -> Fragment {
        let start = self.fresh_state(false);
        let accept = self.fresh_state(true);
        for c in class.matched_chars() {
            self.connect(start, Input::Symbol(c), accept);
        }
        Fragment { start, accept }
    }

    /// Chain fragments with epsilon edges, unmarking every final but the
    /// last. An empty sequence is a single self-final state: the empty-string
    /// fragment.
    fn concat(&mut self, nodes: &[Regex]) -> Fragment {
        let Some(first) = nodes.first() else {
            let state = self.fresh_state(true);
            return Fragment {
                start: state,
                accept: state,
            };
        };

        let mut result = self.fragment(first);
        for node in &nodes[1..] {
            let next = self.fragment(node);
            self.set_accepting(result.accept, false);
            self.connect(result.accept, Input::Epsilon, next.start);
            result.accept = next.accept;
        }
        result
    }

    fn union(&mut self, alternatives: &[Regex]) -> Fragment {
        let start = self.fresh_state(false);
        let accept = self.fresh_state(true);
        for alternative in alternatives {
            let alt = self.fragment(alternative);
            self.connect(start, Input::Epsilon, alt.start);
            self.set_accepting(alt.accept, false);
            self.connect(alt.accept, Input::Epsilon, accept);
        }
        Fragment { start, accept }
    }

    /// Star and plus share the loop shape; star adds the direct bypass edge
    /// that admits zero occurrences.
    fn repeat(&mut self, inner: &Regex, allow_empty: bool) -> Fragment {
        let inner = self.fragment(inner);
        let start = self.fresh_state(false);
        let accept = self.fresh_state(true);

        self.connect(start, Input::Epsilon, inner.start);
        if allow_empty {
            self.connect(start, Input::Epsilon, accept);
        }
        self.set_accepting(inner.accept, false);
        self.connect(inner.accept, Input::Epsilon, inner.start);
        self.connect(inner.accept, Input::Epsilon, accept);

        Fragment { start, accept }
    }
}
