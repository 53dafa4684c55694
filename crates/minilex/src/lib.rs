//! minilex: compiles small regex patterns into DFAs and classifies candidate
//! substrings into named token categories.
//!
//! The pipeline is pattern string → AST ([`minilex_syntax`]) → Thompson NFA →
//! subset-constructed, final-state-merged DFA ([`minilex_automata`]). This
//! crate adds the [`Registry`]: one-time eager compilation of a fixed set of
//! named category patterns, read-only thereafter.
//!
//! The character-stream scanner that walks source text is an external
//! collaborator; it calls [`Registry::lookup`] once per category and then
//! runs [`Dfa::is_match`] per classification request, concurrently if it
//! likes; compiled automata are immutable.

pub mod categories;
pub mod registry;


pub use minilex_automata::Dfa;
pub use minilex_syntax::{CharClass, ParseError, Regex};
pub use registry::{Registry, RegistryBuilder, RegistryError};

/// Compile one pattern string to a normalized DFA.
pub fn compile(pattern: &str) -> Result<Dfa, ParseError> {
    let regex = minilex_syntax::parse(pattern)?;
    Ok(minilex_automata::compile(&regex))
}
