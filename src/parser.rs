//! Module for parsing tokens into an S-exp tree.
//!
//! Recursive descent over a Lexer. Nesting depth is bounded by MAX_DEPTH;
//! list spines are accumulated iteratively, so long lists do not recurse.

use std::fmt;

use log::debug;

use crate::error::Error;
use crate::primitive::Primitive;
use crate::sexp::{serialize, ConsList, HeapSexp, Sexp};
use crate::token::{Lexer, Token, TokenInfo};

use self::SyntaxErrorReason::*;

const MAX_DEPTH: usize = 128;


#[derive(Debug, PartialEq)]
pub enum SyntaxErrorReason {
    UnexpectedEnd,
    LeadingDot,
    UnexpectedDot,
    UnexpectedClose,
    NotPenultimateDot,
    TrailingInput,
    BareQuote,
    DepthOverflow,
}

#[derive(Debug, PartialEq)]
pub struct SyntaxError {
    reason: SyntaxErrorReason,
    token: Option<TokenInfo>,
}


/// Lexes and reads exactly one expression from `s`.
pub fn parse_str<S: AsRef<str>>(s: S) -> Result<Option<HeapSexp>, Error> {
    let mut lexer = Lexer::new(s.as_ref())?;
    read(&mut lexer)
}

/// Reads one complete expression, which must consume the entire input.
pub fn read(lexer: &mut Lexer) -> Result<Option<HeapSexp>, Error> {
    let sexp = read_atom(lexer, 0)?;
    if !lexer.is_at_end() {
        return Err(syntax_err(TrailingInput, lexer.current()));
    }
    if let Some(Sexp::Primitive(Primitive::QuoteMarker)) = sexp.as_ref().map(|s| s.as_ref()) {
        return Err(syntax_err(BareQuote, None));
    }

    debug!("Read {}", serialize(sexp.as_ref()));
    Ok(sexp)
}

/// Reads the expression starting at the lexer's current token.
pub fn read_atom(lexer: &mut Lexer, depth: usize) -> Result<Option<HeapSexp>, Error> {
    let info = match lexer.current() {
        Some(info) => info.clone(),
        None => return Err(syntax_err(UnexpectedEnd, None)),
    };

    match info.token() {
        Token::Primitive(primitive) => {
            let sexp: HeapSexp = primitive.clone().into();
            lexer.next()?;
            Ok(Some(sexp))
        }
        Token::LeftParen => {
            check_depth(depth, &info)?;
            lexer.next()?;
            if let Some(Token::Period) = lexer.current_token() {
                return Err(syntax_err(LeadingDot, lexer.current()));
            }

            let list = read_list(lexer, depth + 1)?;
            match lexer.current_token() {
                Some(Token::RightParen) => {}
                Some(_) => return Err(syntax_err(NotPenultimateDot, lexer.current())),
                None => return Err(syntax_err(UnexpectedEnd, None)),
            }
            lexer.next()?;
            Ok(list)
        }
        Token::Quote => {
            check_depth(depth, &info)?;
            lexer.next()?;
            let quoted = read_atom(lexer, depth + 1)?;
            Ok(Some(Sexp::quoted(quoted)))
        }
        Token::Period => Err(syntax_err(UnexpectedDot, Some(&info))),
        Token::RightParen => Err(syntax_err(UnexpectedClose, Some(&info))),
    }
}

/// Reads list elements up to (not including) the closing bracket. The
/// opening bracket has already been consumed by the caller.
///
/// A period reads exactly one more expression as the list's tail; checking
/// for the closing bracket after it is left to the caller.
pub fn read_list(lexer: &mut Lexer, depth: usize) -> Result<Option<HeapSexp>, Error> {
    let mut list = ConsList::new();
    loop {
        match lexer.current_token() {
            None => return Err(syntax_err(UnexpectedEnd, None)),
            Some(Token::RightParen) => return Ok(list.release()),
            Some(Token::Period) => {
                lexer.next()?;
                let tail = read_atom(lexer, depth)?;
                return Ok(list.release_with_tail(tail));
            }
            Some(_) => list.append(read_atom(lexer, depth)?),
        }
    }
}

fn check_depth(depth: usize, token: &TokenInfo) -> Result<(), Error> {
    if depth >= MAX_DEPTH {
        return Err(syntax_err(DepthOverflow, Some(token)));
    }
    Ok(())
}

fn syntax_err(reason: SyntaxErrorReason, token: Option<&TokenInfo>) -> Error {
    Error::Syntax(SyntaxError {
        reason,
        token: token.cloned(),
    })
}


impl SyntaxError {
    pub fn reason(&self) -> &SyntaxErrorReason {
        &self.reason
    }

    pub fn token(&self) -> Option<&TokenInfo> {
        self.token.as_ref()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Syntax Error] {:?}", self.reason)?;
        if let Some(token) = &self.token {
            write!(f, ": {}", token)?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
