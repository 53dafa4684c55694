//! Parsed pattern representation.
//!
//! A `Regex` is a closed sum type; the NFA builder is a single structural
//! recursion over it. Nodes are immutable once parsed.

use std::collections::BTreeSet;
use std::fmt::Write;

/// A parsed regex pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Regex {
    /// A single character.
    Literal(char),
    /// Juxtaposed sub-patterns, in textual order. An empty sequence matches
    /// exactly the empty string.
    Concat(Vec<Regex>),
    /// `a|b|c` alternatives, in textual order.
    Union(Vec<Regex>),
    /// `x*` - zero or more occurrences.
    Star(Box<Regex>),
    /// `x+` - one or more occurrences.
    Plus(Box<Regex>),
    /// `[...]` bracket character class.
    Class(CharClass),
}

/// A bracket character class: an enumerated member set plus a negation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    /// Member characters, with `a-b` ranges already expanded inclusively.
    pub chars: BTreeSet<char>,
    /// Leading `^` was present.
    pub negated: bool,
}

/// Characters a negated class complements against.
///
/// Printable ASCII plus tab, newline, and carriage return. Members of a
/// non-negated class are not restricted to this set; it only bounds the
/// complement so `[^"]` stays a finite enumeration.
pub fn effective_alphabet() -> impl Iterator<Item = char> {
    (' '..='~').chain(['\t', '\n', '\r'])
}

impl CharClass {
    /// The concrete set of characters this class accepts, with negation
    /// applied against [`effective_alphabet`].
    pub fn matched_chars(&self) -> BTreeSet<char> {
        if self.negated {
            effective_alphabet()
                .filter(|c| !self.chars.contains(c))
                .collect()
        } else {
            self.chars.clone()
        }
    }
}

impl Regex {
    /// Indented tree rendering, used by snapshot tests.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            Regex::Literal(c) => {
                writeln!(out, "{indent}Literal {c:?}").expect("String write never fails");
            }
            Regex::Concat(nodes) => {
                writeln!(out, "{indent}Concat").expect("String write never fails");
                for node in nodes {
                    node.dump_into(out, depth + 1);
                }
            }
            Regex::Union(alternatives) => {
                writeln!(out, "{indent}Union").expect("String write never fails");
                for alt in alternatives {
                    alt.dump_into(out, depth + 1);
                }
            }
            Regex::Star(inner) => {
                writeln!(out, "{indent}Star").expect("String write never fails");
                inner.dump_into(out, depth + 1);
            }
            Regex::Plus(inner) => {
                writeln!(out, "{indent}Plus").expect("String write never fails");
                inner.dump_into(out, depth + 1);
            }
            Regex::Class(class) => {
                let members: String = class.chars.iter().collect();
                let caret = if class.negated { "^" } else { "" };
                writeln!(out, "{indent}Class [{caret}{members}]").expect("String write never fails");
            }
        }
    }
}
