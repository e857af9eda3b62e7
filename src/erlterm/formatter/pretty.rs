//! The pretty-printing state machine
//!
//! Walks the token sequence with a stack of currently-open container kinds
//! and one token of lookahead at container opens. The layout rules:
//!
//!     - empty containers render inline: `[]`, `{}`, `<<>>`, `#{}`
//!     - binaries render flat regardless of nesting
//!     - a tuple opened directly inside a list is a property-tuple and stays
//!       on its line, so `{key, value}` pairs read as one entry each
//!     - commas break the line, except inside binaries and property-tuples
//!       where they print as a single space
//!     - `=>` gets a space on both sides
//!     - a dot or comment terminates its line
//!
//! The stack exists so that each close delimiter knows whether its matching
//! open changed the indentation.

use std::io::Write;

use crate::erlterm::formatter::indenter::Indenter;
use crate::erlterm::formatter::FormatError;
use crate::erlterm::lexer::TokenSource;
use crate::erlterm::token::TokenKind;

/// Render one token sequence into the sink.
///
/// Returns an error if the sequence carries a lex error or the sink fails;
/// otherwise succeeds once `EndOfInput` is reached. Delimiter balance is not
/// validated here — an unbalanced stream renders on a best-effort basis.
pub fn pretty_print<S, W>(tokens: &mut S, out: W) -> Result<(), FormatError>
where
    S: TokenSource,
    W: Write,
{
    let mut p = Indenter::new(out);
    let mut stack: Vec<TokenKind> = Vec::with_capacity(8);
    let mut index = 0usize;

    let mut token = tokens.next_token();
    index += 1;

    loop {
        match token.kind {
            TokenKind::EndOfInput => break,
            TokenKind::Error => {
                return Err(FormatError::Lex {
                    index,
                    message: token.literal,
                });
            }
            TokenKind::ListClose | TokenKind::TupleClose | TokenKind::BinaryClose => {
                // de-indent before printing the closing delimiter, except for
                // binaries and property-tuples, which were never indented
                if token.kind != TokenKind::BinaryClose && !is_property_tuple(&stack) {
                    p.indent(false)?;
                }
                stack.pop();
            }
            TokenKind::Arrow => p.print(" ")?,
            _ => {}
        }

        p.print(&token.literal)?;

        match token.kind {
            TokenKind::Dot | TokenKind::Comment => p.newline()?,
            TokenKind::Comma => {
                if top_is(&stack, TokenKind::BinaryOpen) || is_property_tuple(&stack) {
                    p.print(" ")?;
                } else {
                    p.newline()?;
                }
            }
            TokenKind::Arrow => p.print(" ")?,
            kind if kind.is_open() => {
                // indent after printing the open delimiter, unless the
                // container turns out to be empty
                let peek = tokens.next_token();
                index += 1;
                if kind.matching_close() == Some(peek.kind) {
                    p.print(&peek.literal)?;
                } else {
                    match kind {
                        // keeps property-tuples on the same visual line
                        TokenKind::TupleOpen if top_is(&stack, TokenKind::ListOpen) => {}
                        // binaries are balanced but never nested
                        TokenKind::BinaryOpen => {}
                        _ => p.indent(true)?,
                    }
                    stack.push(kind);
                    token = peek;
                    continue;
                }
            }
            _ => {}
        }

        token = tokens.next_token();
        index += 1;
    }

    Ok(())
}

fn top_is(stack: &[TokenKind], kind: TokenKind) -> bool {
    stack.last() == Some(&kind)
}

/// The two innermost open containers are a tuple directly inside a list —
/// the property-list idiom. Checked by both the comma rule and the close
/// rule, so it gets a name.
fn is_property_tuple(stack: &[TokenKind]) -> bool {
    matches!(stack, [.., TokenKind::ListOpen, TokenKind::TupleOpen])
}
