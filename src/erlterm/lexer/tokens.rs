//! Raw token definitions for the term lexer
//!
//! This module defines the raw tokens produced by the logos lexer, one rule
//! per lexical form of the term grammar. Most of the grammar is regular and
//! the rules are plain logos patterns; the two context-sensitive spots get
//! callbacks:
//!
//!     Numbers:
//!         A dot after the integer digits is part of the number only when a
//!         digit follows it. Otherwise the dot terminates the term and must be
//!         left in the input for the main dispatch to decide between Dot and
//!         Ellipsis. The exponent is only recognized after a fraction, and
//!         `e` with no digits after the optional sign is a fatal error.
//!
//!     Dangling delimiters:
//!         `<<`, `>>`, `#{` and `=>` are two fixed characters. Their first
//!         character alone matches a fallback rule whose callback reports the
//!         specific error, as does an opening quote with no closing quote.
//!
//! Dot disambiguation falls out of longest-match: `...` is one Ellipsis,
//! a single `.` is one Dot, and `..` can only ever match Dot twice.

use std::fmt;

use logos::{Lexer, Logos};

use crate::erlterm::token::TokenKind;

/// Fatal lexing failures. Every one of these ends the token stream.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character no rule recognizes. The stream wrapper formats the
    /// message with the offending character from the source slice.
    #[default]
    UnexpectedCharacter,
    ExpectedNumber,
    InvalidScientificNotation,
    MissingClosingQuote,
    ExpectedBinaryBegin,
    ExpectedBinaryEnd,
    ExpectedMapBegin,
    ExpectedArrow,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter => write!(f, "unexpected char"),
            LexError::ExpectedNumber => write!(f, "expected number"),
            LexError::InvalidScientificNotation => write!(f, "invalid scientific notation"),
            LexError::MissingClosingQuote => write!(f, "missing closing quote"),
            LexError::ExpectedBinaryBegin => write!(f, "expected binary begin"),
            LexError::ExpectedBinaryEnd => write!(f, "expected binary end"),
            LexError::ExpectedMapBegin => write!(f, "found # but without #{{"),
            LexError::ExpectedArrow => write!(f, "found = but without =>"),
        }
    }
}

impl std::error::Error for LexError {}

/// All raw tokens in the term grammar
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\n]+")]
pub enum RawToken {
    // Quoted atoms take everything through the next quote verbatim; there is
    // no escape processing inside them in this grammar.
    #[regex(r"[a-z][a-z0-9_@]*")]
    #[regex(r"'[^']*'")]
    #[token("'", missing_quote)]
    Atom,

    #[regex(r"-?[0-9]+", scan_number)]
    #[token("-", expected_number)]
    Number,

    // A backslash escapes exactly the next code point, whatever it is.
    #[regex(r#""([^"\\]|\\[\s\S])*""#)]
    #[token("\"", missing_quote)]
    String,

    #[token("[")]
    ListOpen,
    #[token("]")]
    ListClose,
    #[token("{")]
    TupleOpen,
    #[token("}")]
    TupleClose,

    #[token("<<")]
    #[token("<", binary_begin)]
    BinaryOpen,
    #[token(">>")]
    #[token(">", binary_end)]
    BinaryClose,

    // A map opens with `#{` and closes with the tuple's `}`.
    #[token("#{")]
    #[token("#", map_begin)]
    MapOpen,

    #[token("=>")]
    #[token("=", arrow)]
    Arrow,

    #[regex(r"%[^\n]*")]
    Comment,

    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
}

impl RawToken {
    /// The public kind for this raw token.
    pub fn kind(self) -> TokenKind {
        match self {
            RawToken::Atom => TokenKind::Atom,
            RawToken::Number => TokenKind::Number,
            RawToken::String => TokenKind::String,
            RawToken::ListOpen => TokenKind::ListOpen,
            RawToken::ListClose => TokenKind::ListClose,
            RawToken::TupleOpen => TokenKind::TupleOpen,
            RawToken::TupleClose => TokenKind::TupleClose,
            RawToken::BinaryOpen => TokenKind::BinaryOpen,
            RawToken::BinaryClose => TokenKind::BinaryClose,
            RawToken::MapOpen => TokenKind::MapOpen,
            RawToken::Arrow => TokenKind::Arrow,
            RawToken::Comment => TokenKind::Comment,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Ellipsis => TokenKind::Ellipsis,
        }
    }
}

/// Extend a matched digit run with an optional fraction and exponent.
///
/// The fraction is consumed only when the dot is followed by a digit; a bare
/// dot stays in the input so the main dispatch can emit it as Dot (or fold it
/// into an Ellipsis). The exponent is only recognized after a fraction, and
/// must carry at least one digit after its optional sign.
fn scan_number(lex: &mut Lexer<RawToken>) -> Result<(), LexError> {
    let rest = lex.remainder().as_bytes();
    if rest.len() < 2 || rest[0] != b'.' || !rest[1].is_ascii_digit() {
        return Ok(());
    }

    let mut len = 2;
    while len < rest.len() && rest[len].is_ascii_digit() {
        len += 1;
    }

    if len < rest.len() && rest[len] == b'e' {
        len += 1;
        if len < rest.len() && (rest[len] == b'+' || rest[len] == b'-') {
            len += 1;
        }
        let exponent_digits = len;
        while len < rest.len() && rest[len].is_ascii_digit() {
            len += 1;
        }
        if len == exponent_digits {
            return Err(LexError::InvalidScientificNotation);
        }
    }

    lex.bump(len);
    Ok(())
}

fn missing_quote(_lex: &mut Lexer<RawToken>) -> Result<(), LexError> {
    Err(LexError::MissingClosingQuote)
}

fn expected_number(_lex: &mut Lexer<RawToken>) -> Result<(), LexError> {
    Err(LexError::ExpectedNumber)
}

fn binary_begin(_lex: &mut Lexer<RawToken>) -> Result<(), LexError> {
    Err(LexError::ExpectedBinaryBegin)
}

fn binary_end(_lex: &mut Lexer<RawToken>) -> Result<(), LexError> {
    Err(LexError::ExpectedBinaryEnd)
}

fn map_begin(_lex: &mut Lexer<RawToken>) -> Result<(), LexError> {
    Err(LexError::ExpectedMapBegin)
}

fn arrow(_lex: &mut Lexer<RawToken>) -> Result<(), LexError> {
    Err(LexError::ExpectedArrow)
}
