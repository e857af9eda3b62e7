//! Token vocabulary shared by the lexer and the formatter
//!
//! A token is an immutable `{kind, literal}` pair. The literal is the exact
//! source substring that produced the token — atoms, numbers and strings keep
//! their original casing and escaping verbatim, and the formatter only ever
//! re-derives the whitespace around them. For an `Error` token the literal
//! carries the diagnostic message instead.

use serde::{Deserialize, Serialize};

/// All token kinds produced by the term lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Terminal: end of input was reached. Repeats forever once emitted.
    EndOfInput,
    /// Terminal: a fatal lex error. The token literal holds the message.
    Error,

    Atom,
    Number,
    String,

    // Container delimiters. Maps open with `#{` and close with the same
    // `}` that closes a tuple, so there is no separate MapClose kind.
    ListOpen,
    ListClose,
    TupleOpen,
    TupleClose,
    BinaryOpen,
    BinaryClose,
    MapOpen,

    /// `=>`, the map key/value separator.
    Arrow,
    /// A `%` comment running to the end of its line (newline excluded).
    Comment,
    Comma,
    /// A single `.`, the term terminator.
    Dot,
    /// Exactly three dots, `...`.
    Ellipsis,
}

impl TokenKind {
    /// Check if this kind opens a container.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            TokenKind::ListOpen | TokenKind::TupleOpen | TokenKind::BinaryOpen | TokenKind::MapOpen
        )
    }

    /// Check if this kind closes a container.
    pub fn is_close(&self) -> bool {
        matches!(
            self,
            TokenKind::ListClose | TokenKind::TupleClose | TokenKind::BinaryClose
        )
    }

    /// Check if this kind ends the stream (no real token follows it).
    pub fn is_terminal(&self) -> bool {
        matches!(self, TokenKind::EndOfInput | TokenKind::Error)
    }

    /// The close delimiter that balances this open delimiter.
    ///
    /// Maps close with the tuple's `}`.
    pub fn matching_close(&self) -> Option<TokenKind> {
        match self {
            TokenKind::ListOpen => Some(TokenKind::ListClose),
            TokenKind::TupleOpen | TokenKind::MapOpen => Some(TokenKind::TupleClose),
            TokenKind::BinaryOpen => Some(TokenKind::BinaryClose),
            _ => None,
        }
    }
}

/// A single lexed token: its kind and the exact literal that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// The terminal token emitted at (and forever after) end of input.
    pub fn end_of_input() -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            literal: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_predicates() {
        assert!(TokenKind::ListOpen.is_open());
        assert!(TokenKind::MapOpen.is_open());
        assert!(!TokenKind::Atom.is_open());

        assert!(TokenKind::TupleClose.is_close());
        assert!(!TokenKind::MapOpen.is_close());
    }

    #[test]
    fn test_terminal_predicate() {
        assert!(TokenKind::EndOfInput.is_terminal());
        assert!(TokenKind::Error.is_terminal());
        assert!(!TokenKind::Dot.is_terminal());
    }

    #[test]
    fn test_matching_close() {
        assert_eq!(
            TokenKind::ListOpen.matching_close(),
            Some(TokenKind::ListClose)
        );
        assert_eq!(
            TokenKind::TupleOpen.matching_close(),
            Some(TokenKind::TupleClose)
        );
        // A map closes with the tuple's curly.
        assert_eq!(
            TokenKind::MapOpen.matching_close(),
            Some(TokenKind::TupleClose)
        );
        assert_eq!(
            TokenKind::BinaryOpen.matching_close(),
            Some(TokenKind::BinaryClose)
        );
        assert_eq!(TokenKind::Comma.matching_close(), None);
    }

    #[test]
    fn test_token_json_interchange() {
        let token = Token::new(TokenKind::Atom, "foo");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"Atom","literal":"foo"}"#);

        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}
