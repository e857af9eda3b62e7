//! Two-stage streaming pipeline
//!
//! Wires the tokenizer and the formatter together. Two forms are provided:
//! a direct pull-based pass ([format_str]) where the formatter drives a
//! [TokenStream] itself, and a channel form ([format_to_writer]) where the
//! tokenizer runs as its own thread and hands tokens over a rendezvous
//! channel. The channel has zero capacity, so the tokenizer blocks until the
//! formatter takes each token — at most one token is ever in flight and the
//! producer can never outrun the consumer.
//!
//! Independent documents may be formatted concurrently by running
//! independent pipelines; nothing here is shared.

use std::io::Write;
use std::sync::mpsc;
use std::thread;

use crate::erlterm::formatter::{pretty_print, FormatError};
use crate::erlterm::lexer::{TokenSource, TokenStream};
use crate::erlterm::token::Token;

/// Spawn the tokenizer as its own stage.
///
/// The thread lexes the source to its terminal token and exits. If the
/// receiver hangs up early (the formatter hit an error and stopped pulling),
/// the thread stops lexing and exits as well.
pub fn spawn_tokenizer(source: String) -> mpsc::Receiver<Token> {
    let (sender, receiver) = mpsc::sync_channel(0);
    thread::spawn(move || {
        let mut stream = TokenStream::new(&source);
        loop {
            let token = stream.next_token();
            let terminal = token.kind.is_terminal();
            if sender.send(token).is_err() {
                break;
            }
            if terminal {
                break;
            }
        }
    });
    receiver
}

/// Token source over the receiving end of a tokenizer channel.
///
/// A closed channel reads as end of input, so pulling past the terminal
/// token keeps yielding `EndOfInput` — the same contract as [TokenStream].
pub struct ChannelTokens {
    receiver: mpsc::Receiver<Token>,
}

impl ChannelTokens {
    pub fn new(receiver: mpsc::Receiver<Token>) -> Self {
        ChannelTokens { receiver }
    }
}

impl TokenSource for ChannelTokens {
    fn next_token(&mut self) -> Token {
        self.receiver
            .recv()
            .unwrap_or_else(|_| Token::end_of_input())
    }
}

/// Format a whole document in one pull-based pass.
pub fn format_str(source: &str) -> Result<String, FormatError> {
    let mut stream = TokenStream::new(source);
    let mut out = Vec::new();
    pretty_print(&mut stream, &mut out)?;
    Ok(String::from_utf8(out).expect("formatter output is valid UTF-8"))
}

/// Format a whole document with the tokenizer running as its own stage.
pub fn format_to_writer<W: Write>(source: &str, out: W) -> Result<(), FormatError> {
    let receiver = spawn_tokenizer(source.to_string());
    let mut tokens = ChannelTokens::new(receiver);
    pretty_print(&mut tokens, out)
}
