//! # erlterm
//!
//! A pretty-printer for Erlang term dumps.
//!
//! Raw term text goes in, an indentation-formatted rendering of the same
//! terms comes out. Two cooperating engines do the work: a streaming lexer
//! that turns text into typed tokens, and a stack-based printer that re-emits
//! the token stream with context-sensitive line breaks. See the
//! [erlterm] module for the pipeline entry points.

pub mod erlterm;
