use std::fmt;

use derive_getters::Getters;

use crate::primitive::Primitive;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    LeftParen,
    RightParen,
    Quote,
    Period,
    Primitive(Primitive),
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct TokenInfo {
    token: Token,
    line: usize,
    col: usize,
}

impl TokenInfo {
    pub fn new(token: Token, line: usize, col: usize) -> Self {
        Self { token, line, col }
    }
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Token::Primitive(p) => write!(f, "{} @ ({}, {})", p, self.line, self.col),
            _ => write!(f, "{:?} @ ({}, {})", self.token, self.line, self.col),
        }
    }
}
