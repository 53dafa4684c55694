//! Named token-category registry.
//!
//! Built once during startup via [`RegistryBuilder`], immutable after
//! [`RegistryBuilder::build`]. Registration is eager and fail-fast: a
//! malformed pattern aborts registry construction with the offending
//! category named, rather than leaving a silently missing category behind.

use indexmap::IndexMap;

use minilex_automata::Dfa;
use minilex_syntax::ParseError;

/// Errors at the registry boundary.
///
/// Matching itself never fails; rejection is [`Dfa::is_match`] returning
/// `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A category's pattern failed to compile (registration time).
    #[error("invalid pattern for token category `{category}`: {source}")]
    InvalidPattern {
        category: String,
        source: ParseError,
    },

    /// Lookup of a category that was never registered (configuration error,
    /// raised at matching-setup time).
    #[error("unknown token category `{0}`")]
    UnknownCategory(String),
}

/// Accumulates categories, compiling each pattern as it is registered.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    automata: IndexMap<String, Dfa>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `pattern` and record it under `category`. Re-registering a
    /// category replaces its automaton.
    pub fn register(
        &mut self,
        category: impl Into<String>,
        pattern: &str,
    ) -> Result<(), RegistryError> {
        let category = category.into();
        let regex = minilex_syntax::parse(pattern).map_err(|source| {
            RegistryError::InvalidPattern {
                category: category.clone(),
                source,
            }
        })?;
        self.automata.insert(category, minilex_automata::compile(&regex));
        Ok(())
    }

    pub fn build(self) -> Registry {
        Registry {
            automata: self.automata,
        }
    }
}

/// Immutable mapping from token-category name to compiled DFA.
///
/// `Registry` is `Send + Sync`; lookups and matches borrow shared and need
/// no locking.
#[derive(Debug)]
pub struct Registry {
    automata: IndexMap<String, Dfa>,
}

impl Registry {
    /// A registry preloaded with [`crate::categories::BUILTIN`].
    pub fn with_builtin_categories() -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::new();
        for &(category, pattern) in crate::categories::BUILTIN {
            builder.register(category, pattern)?;
        }
        Ok(builder.build())
    }

    /// The automaton handle for `category`. Matching goes through the
    /// returned [`Dfa`] directly.
    pub fn lookup(&self, category: &str) -> Result<&Dfa, RegistryError> {
        self.automata
            .get(category)
            .ok_or_else(|| RegistryError::UnknownCategory(category.to_string()))
    }

    /// Convenience for lookup-then-match.
    pub fn is_match(&self, category: &str, candidate: &str) -> Result<bool, RegistryError> {
        Ok(self.lookup(category)?.is_match(candidate))
    }

    /// Registered category names, in registration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.automata.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.automata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.automata.is_empty()
    }
}
