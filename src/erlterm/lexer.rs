//! Lexer module for Erlang term text
//!
//! This module contains the tokenization logic for term dumps: the raw logos
//! token rules and the pull-based stream the formatter consumes.
//!
//! The grammar is almost entirely regular, so the raw rules are a vanilla
//! logos lexer; the few context-sensitive spots (the number/term-dot
//! ambiguity and the two-character delimiters) live in callbacks on those
//! rules rather than in a second pass. The [stream::TokenStream] wrapper owns
//! the terminal-state behavior: `EndOfInput` forever at end of input, a
//! single `Error` token and then closure on the first fatal condition.

pub mod stream;
pub mod tokens;

pub use stream::{tokenize, TokenSource, TokenStream};
pub use tokens::{LexError, RawToken};
