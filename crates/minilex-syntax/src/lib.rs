//! Regex syntax for minilex token-category patterns.
//!
//! This crate covers the front half of the compilation pipeline:
//! - `ast` - the parsed pattern representation
//! - `parser` - recursive-descent parser from pattern text to AST
//! - `error` - parse errors with offsets and snippet rendering
//!
//! The supported dialect is deliberately small: literals, `|`, juxtaposition,
//! postfix `*`/`+`, groups, and bracket character classes. Backslash makes the
//! next character a plain literal; there are no anchors, backreferences, or
//! counted repetition.

pub mod ast;
pub mod error;
pub mod parser;


pub use ast::{CharClass, Regex};
pub use error::ParseError;
pub use parser::parse;
