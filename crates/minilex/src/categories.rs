//! The builtin token-category table.
//!
//! Each category is matched by its own independent automaton; deciding which
//! category to try for a given lexeme (and any cross-category precedence) is
//! the scanner's job, not this crate's.

/// `(category, pattern)` pairs registered by
/// [`crate::Registry::with_builtin_categories`].
pub const BUILTIN: &[(&str, &str)] = &[
    ("IDENTIFIER", "[a-z]+"),
    ("WHOLE_NUMBER", "[0-9]+"),
    ("DECIMAL", "[0-9]+(\\.[0-9]+)*"),
    ("KEYWORD", "int|float|global|char|bool"),
    ("CHAR", "'[a-z0-9]'"),
    ("OPERATOR", "[%+\\-@=*^]"),
    ("SINGLE_LINE_COMMENT", "#[a-z]*"),
    ("MULTI_LINE_COMMENT", "@[a-zA-Z0-9]*@"),
    ("BOOLEAN", "0|1"),
    ("INPUT_OUTPUT", "input|output"),
    ("STRING", "\"[^\"]*\""),
    ("SYMBOL", "[;()]"),
    ("OPEN_BRACKET", "[{]"),
    ("CLOSE_BRACKET", "[}]"),
];
