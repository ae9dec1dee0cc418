//! Module for breaking source text into tokens.
//!
//! The lexer always holds one token of lookahead: construction reads the first
//! token, and each call to `next` replaces it with the following one.

use std::fmt;

use derive_getters::Getters;
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use super::token::{Token, TokenInfo};
use crate::primitive::{Number, Primitive, Symbol};


lazy_static! {
    static ref SYMBOL: Regex = Regex::new(r"^[a-zA-Z<=>*/#][a-zA-Z0-9<=>*/#?!\-]*").unwrap();
    // Letters are accepted in a numeric run; only the leading digits count.
    static ref NUMBER: Regex = Regex::new(r"^[+\-]?[0-9][a-zA-Z0-9]*").unwrap();
    static ref NUMBER_VALUE: Regex = Regex::new(r"^[+\-]?[0-9]+").unwrap();
}


pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    col: usize,

    current: Option<TokenInfo>,
    finished: bool,
}

#[derive(Debug, Getters, PartialEq)]
pub struct LexError {
    line: usize,
    col: usize,
    kind: LexErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum LexErrorKind {
    UnexpectedChar(char),
    MalformedNumber(String),
    PastEnd,
}


impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Result<Self, LexError> {
        let mut lexer = Self {
            input,
            pos: 0,
            line: 1,
            col: 1,

            current: None,
            finished: false,
        };
        lexer.next()?;
        Ok(lexer)
    }

    pub fn is_at_end(&self) -> bool {
        self.finished
    }

    pub fn current(&self) -> Option<&TokenInfo> {
        self.current.as_ref()
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.current.as_ref().map(|info| info.token())
    }

    /// Advances to the next token, or to end-of-stream if the input is
    /// exhausted. Advancing past end-of-stream is an error.
    pub fn next(&mut self) -> Result<(), LexError> {
        if self.finished {
            return Err(self.error(LexErrorKind::PastEnd));
        }

        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        let c = match rest.chars().next() {
            Some(c) => c,
            None => {
                trace!("Lexer reached end of input");
                self.finished = true;
                self.current = None;
                return Ok(());
            }
        };

        let (token, len) = match c {
            '.' => (Token::Period, 1),
            '(' => (Token::LeftParen, 1),
            ')' => (Token::RightParen, 1),
            '\'' => (Token::Quote, 1),
            _ => {
                if let Some(m) = SYMBOL.find(rest) {
                    let primitive = match m.as_str() {
                        "#t" => Primitive::Boolean(true),
                        "#f" => Primitive::Boolean(false),
                        name => Primitive::Symbol(Symbol::new(name)),
                    };
                    (Token::Primitive(primitive), m.end())
                } else if let Some(m) = NUMBER.find(rest) {
                    let num = self.parse_number(m.as_str())?;
                    (Token::Primitive(Primitive::Number(num)), m.end())
                } else if c == '+' || c == '-' {
                    let name = Symbol::new(c.to_string());
                    (Token::Primitive(Primitive::Symbol(name)), 1)
                } else {
                    return Err(self.error(LexErrorKind::UnexpectedChar(c)));
                }
            }
        };

        let info = TokenInfo::new(token, self.line, self.col);
        trace!("Lexed {}", info);
        self.pos += len;
        self.col += len;
        self.current = Some(info);
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        for c in self.input[self.pos..].chars() {
            match c {
                ' ' => {
                    self.col += 1;
                }
                '\n' => {
                    self.line += 1;
                    self.col = 1;
                }
                _ => break,
            }
            self.pos += 1;
        }
    }

    fn parse_number(&self, text: &str) -> Result<Number, LexError> {
        let value = NUMBER_VALUE.find(text).map(|m| m.as_str().parse::<Number>());
        match value {
            Some(Ok(num)) => Ok(num),
            _ => Err(self.error(LexErrorKind::MalformedNumber(text.to_string()))),
        }
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError {
            line: self.line,
            col: self.col,
            kind,
        }
    }
}


impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Lex Error] ")?;
        match &self.kind {
            LexErrorKind::UnexpectedChar(c) => write!(f, "Unexpected character {:?}", c),
            LexErrorKind::MalformedNumber(s) => write!(f, "Malformed number \"{}\"", s),
            LexErrorKind::PastEnd => write!(f, "Read past end of input"),
        }?;
        write!(f, " @ ({}, {})", self.line, self.col)
    }
}

impl std::error::Error for LexError {}


#[cfg(test)]
#[path = "./lexer_test.rs"]
mod lexer_test;
