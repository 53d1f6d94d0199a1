//! A minimal textual notation for process trees and traces.
//!
//! This is *not* XES and *not* any standardized process-tree interchange format (PNML,
//! BPMN, the textual notations of real conformance-checking tools); it exists only so this
//! crate's driver can be exercised end to end without a full XES/PNML front end, which is
//! explicitly out of scope (see the crate's top-level docs).
//!
//! Tree grammar (whitespace between tokens is insignificant):
//!
//! ```text
//! tree       := 'Seq' '(' tree_list ')'
//!             | 'Par' '(' tree_list ')'
//!             | 'Xor' '(' tree_list ')'
//!             | 'Loop' '(' tree ',' tree ')'
//!             | 'tau'
//!             | IDENT
//! tree_list  := tree (',' tree)*
//! ```
//!
//! `IDENT` is an activity name (an identifier that isn't one of the four keywords above).
//! `Loop(body, redo)` builds a redo-loop; its two children are positional, body first.
//!
//! Traces are a flat list of activity names, separated by commas and/or whitespace.

use thiserror::Error;

use align_core::{Interner, NodeId, ProcessTreeBuilder, Trace};

/// A parse failure in the tree or trace notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The input ended where another token was expected.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// A human-readable description of what was expected.
        expected: &'static str,
    },
    /// A token didn't match what the grammar expected at that position.
    #[error("unexpected token {found:?} at position {pos}, expected {expected}")]
    UnexpectedToken {
        /// A human-readable description of what was expected.
        expected: &'static str,
        /// The token actually found.
        found: String,
        /// The byte offset of the unexpected token.
        pos: usize,
    },
    /// Trailing input remained after a complete tree was parsed.
    #[error("trailing input after tree: {rest:?}")]
    TrailingInput {
        /// The unparsed remainder.
        rest: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    LParen,
    RParen,
    Comma,
}

struct Lexer<'a> {
    input: &'a str,
    tokens: Vec<(Token, usize)>,
}

impl<'a> Lexer<'a> {
    fn tokenize(input: &'a str) -> Self {
        let mut tokens = Vec::new();
        let bytes = input.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            let c = bytes[i] as char;
            match c {
                '(' => {
                    tokens.push((Token::LParen, i));
                    i += 1;
                }
                ')' => {
                    tokens.push((Token::RParen, i));
                    i += 1;
                }
                ',' => {
                    tokens.push((Token::Comma, i));
                    i += 1;
                }
                c if c.is_whitespace() => {
                    i += 1;
                }
                _ => {
                    let start = i;
                    while i < bytes.len() {
                        let c = bytes[i] as char;
                        if c.is_alphanumeric() || c == '_' || c == '-' {
                            i += 1;
                        } else {
                            break;
                        }
                    }
                    tokens.push((Token::Ident(input[start..i].to_owned()), start));
                }
            }
        }
        Lexer { input, tokens }
    }
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    pos: usize,
    builder: ProcessTreeBuilder,
    interner: &'a mut Interner,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.lexer.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn advance(&mut self) -> Option<(Token, usize)> {
        let tok = self.lexer.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, expected: Token, what: &'static str) -> Result<(), NotationError> {
        match self.advance() {
            Some((tok, _)) if tok == expected => Ok(()),
            Some((tok, pos)) => Err(NotationError::UnexpectedToken {
                expected: what,
                found: format!("{tok:?}"),
                pos,
            }),
            None => Err(NotationError::UnexpectedEnd { expected: what }),
        }
    }

    fn parse_tree(&mut self) -> Result<NodeId, NotationError> {
        match self.advance() {
            Some((Token::Ident(name), _)) => match name.as_str() {
                "Seq" => self.parse_list("Seq", ProcessTreeBuilder::sequence),
                "Par" => self.parse_list("Par", ProcessTreeBuilder::parallel),
                "Xor" => self.parse_list("Xor", ProcessTreeBuilder::xor),
                "Loop" => self.parse_loop(),
                "tau" => Ok(self.builder.silent()),
                _ => {
                    let id = self.interner.intern(&name);
                    Ok(self.builder.activity(id))
                }
            },
            Some((tok, pos)) => Err(NotationError::UnexpectedToken {
                expected: "a tree (Seq/Par/Xor/Loop/tau/identifier)",
                found: format!("{tok:?}"),
                pos,
            }),
            None => Err(NotationError::UnexpectedEnd {
                expected: "a tree (Seq/Par/Xor/Loop/tau/identifier)",
            }),
        }
    }

    fn parse_list(
        &mut self,
        _name: &'static str,
        build: fn(&mut ProcessTreeBuilder, Vec<NodeId>) -> NodeId,
    ) -> Result<NodeId, NotationError> {
        self.expect(Token::LParen, "'('")?;
        let mut children = vec![self.parse_tree()?];
        while matches!(self.peek(), Some(Token::Comma)) {
            self.advance();
            children.push(self.parse_tree()?);
        }
        self.expect(Token::RParen, "')'")?;
        Ok(build(&mut self.builder, children))
    }

    fn parse_loop(&mut self) -> Result<NodeId, NotationError> {
        self.expect(Token::LParen, "'('")?;
        let body = self.parse_tree()?;
        self.expect(Token::Comma, "','")?;
        let redo = self.parse_tree()?;
        self.expect(Token::RParen, "')'")?;
        Ok(self.builder.redo_loop(body, redo))
    }
}

/// Parses `input` as a tree in the notation above, interning activity names through
/// `interner`.
///
/// Returns the not-yet-validated builder together with the root's id; the caller is
/// expected to call [`ProcessTreeBuilder::build`] on the result, since structural
/// validation (§3's invariants) is that method's responsibility, not the parser's.
pub fn parse_tree(
    input: &str,
    interner: &mut Interner,
) -> Result<(ProcessTreeBuilder, NodeId), NotationError> {
    let lexer = Lexer::tokenize(input);
    let mut parser = Parser {
        lexer,
        pos: 0,
        builder: ProcessTreeBuilder::new(),
        interner,
    };
    let root = parser.parse_tree()?;
    if parser.pos != parser.lexer.tokens.len() {
        let rest_pos = parser.lexer.tokens[parser.pos].1;
        return Err(NotationError::TrailingInput {
            rest: parser.lexer.input[rest_pos..].to_owned(),
        });
    }
    Ok((parser.builder, root))
}

/// Parses `input` as a comma- and/or whitespace-separated list of activity names into a
/// [`Trace`], interning each name through `interner`.
pub fn parse_trace(input: &str, interner: &mut Interner) -> Trace {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|name| interner.intern(name))
        .collect()
}
