//! Recursive-descent pattern parser with one character of lookahead.
//!
//! Precedence, low to high: union (`|`), concatenation (juxtaposition),
//! postfix repetition (`*`, `+`), primary (literal, group, bracket class).

use std::collections::BTreeSet;

use crate::ast::{CharClass, Regex};
use crate::error::ParseError;

/// Parse a pattern into its AST.
///
/// Fails without partial results; the error carries the offending byte offset.
pub fn parse(pattern: &str) -> Result<Regex, ParseError> {
    let mut parser = Parser::new(pattern);
    let node = parser.parse_union()?;
    if !parser.eof() {
        // parse_union stops only at `)` it did not open
        return Err(ParseError::UnmatchedParen(parser.offset()));
    }
    Ok(node)
}

struct Parser {
    /// `(byte offset, char)` pairs of the pattern.
    chars: Vec<(usize, char)>,
    pattern_len: usize,
    pos: usize,
}

impl Parser {
    fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.char_indices().collect(),
            pattern_len: pattern.len(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn nth(&self, lookahead: usize) -> Option<char> {
        self.chars.get(self.pos + lookahead).map(|&(_, c)| c)
    }

    /// Byte offset of the current position (pattern length at EOF).
    fn offset(&self) -> usize {
        self.chars
            .get(self.pos)
            .map_or(self.pattern_len, |&(offset, _)| offset)
    }

    fn eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn bump(&mut self) -> char {
        assert!(!self.eof(), "bump called at EOF");
        let (_, c) = self.chars[self.pos];
        self.pos += 1;
        c
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_union(&mut self) -> Result<Regex, ParseError> {
        let mut alternatives = vec![self.parse_concat()?];
        while self.eat('|') {
            alternatives.push(self.parse_concat()?);
        }
        if alternatives.len() == 1 {
            Ok(alternatives.remove(0))
        } else {
            Ok(Regex::Union(alternatives))
        }
    }

    /// Concatenation runs until `)`, `|`, or end of input. An empty run is
    /// the empty-string pattern.
    fn parse_concat(&mut self) -> Result<Regex, ParseError> {
        let mut nodes = Vec::new();
        while let Some(c) = self.peek() {
            if c == ')' || c == '|' {
                break;
            }
            nodes.push(self.parse_repetition()?);
        }
        if nodes.len() == 1 {
            Ok(nodes.remove(0))
        } else {
            Ok(Regex::Concat(nodes))
        }
    }

    fn parse_repetition(&mut self) -> Result<Regex, ParseError> {
        let mut node = self.parse_primary()?;
        loop {
            match self.peek() {
                Some('*') => {
                    self.bump();
                    node = Regex::Star(Box::new(node));
                }
                Some('+') => {
                    self.bump();
                    node = Regex::Plus(Box::new(node));
                }
                _ => break,
            }
        }
        Ok(node)
    }

    fn parse_primary(&mut self) -> Result<Regex, ParseError> {
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd(self.offset())),
            Some('(') => {
                let open = self.offset();
                self.bump();
                let node = self.parse_union()?;
                if !self.eat(')') {
                    return Err(ParseError::UnclosedGroup(open));
                }
                Ok(node)
            }
            Some('[') => self.parse_class(),
            Some(_) => Ok(Regex::Literal(self.parse_literal_char()?)),
        }
    }

    /// A literal or escaped character. `\x` yields `x` itself, with no
    /// special escape meanings.
    fn parse_literal_char(&mut self) -> Result<char, ParseError> {
        let escape_offset = self.offset();
        let c = self.bump();
        if c != '\\' {
            return Ok(c);
        }
        if self.eof() {
            return Err(ParseError::DanglingEscape(escape_offset));
        }
        Ok(self.bump())
    }

    fn parse_class(&mut self) -> Result<Regex, ParseError> {
        let open = self.offset();
        self.bump(); // `[`
        let negated = self.eat('^');
        let mut chars = BTreeSet::new();

        loop {
            match self.peek() {
                None => return Err(ParseError::UnclosedClass(open)),
                Some(']') => {
                    self.bump();
                    break;
                }
                Some(_) => {
                    let start = self.parse_literal_char()?;
                    if self.range_follows() {
                        self.bump(); // `-`
                        let end = self.parse_literal_char()?;
                        // end < start expands to nothing
                        for c in start..=end {
                            chars.insert(c);
                        }
                    } else {
                        chars.insert(start);
                    }
                }
            }
        }

        Ok(Regex::Class(CharClass { chars, negated }))
    }

    /// `-` starts a range only when another member follows it; a trailing
    /// `-` (directly before `]` or at end of input) is a plain member.
    fn range_follows(&self) -> bool {
        self.peek() == Some('-') && self.nth(1).is_some() && self.nth(1) != Some(']')
    }
}
