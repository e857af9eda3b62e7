//! Pull-based token stream over the raw logos lexer
//!
//! This is the boundary the formatter consumes: a `next_token()` call that
//! always returns a token. The stream terminates by returning `EndOfInput`
//! forever once the input is exhausted, or by returning a single `Error`
//! token (its literal is the diagnostic message) after which it closes and
//! likewise returns `EndOfInput` forever. Reading past either terminal state
//! never blocks and never fails.

use logos::{Lexer, Logos};

use crate::erlterm::lexer::tokens::{LexError, RawToken};
use crate::erlterm::token::{Token, TokenKind};

/// Anything the formatter can pull tokens from.
///
/// Implemented by [TokenStream] for the direct pull pipeline and by the
/// channel receiver in the pipeline module for the two-stage form.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Streaming tokenizer state for one input.
///
/// Created once per input and advanced monotonically; between emissions the
/// logos lexer's span marks exactly the literal of the token just produced.
pub struct TokenStream<'a> {
    lexer: Lexer<'a, RawToken>,
    finished: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str) -> Self {
        TokenStream {
            lexer: RawToken::lexer(source),
            finished: false,
        }
    }

    /// 1-based line of the most recently produced token, for diagnostics.
    pub fn line(&self) -> usize {
        let start = self.lexer.span().start;
        self.lexer.source()[..start].matches('\n').count() + 1
    }
}

impl TokenSource for TokenStream<'_> {
    fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::end_of_input();
        }

        match self.lexer.next() {
            None => {
                self.finished = true;
                Token::end_of_input()
            }
            Some(Ok(raw)) => Token::new(raw.kind(), self.lexer.slice()),
            Some(Err(error)) => {
                self.finished = true;
                let message = match error {
                    LexError::UnexpectedCharacter => {
                        format!("unexpected char: {}", self.lexer.slice())
                    }
                    other => other.to_string(),
                };
                Token::new(TokenKind::Error, message)
            }
        }
    }
}

/// Tokenize a whole source, terminal token included.
///
/// The vector ends with either the first `EndOfInput` or the single `Error`
/// token. Used by tests and the CLI token dump; the formatter pulls from a
/// [TokenStream] directly instead.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut stream = TokenStream::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = stream.next_token();
        let terminal = token.kind.is_terminal();
        tokens.push(token);
        if terminal {
            break;
        }
    }
    tokens
}
