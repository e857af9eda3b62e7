//! Command-line interface for erlterm
//! This binary pretty-prints Erlang term dumps, reading from a file or stdin
//! and writing to stdout.
//!
//! Usage:
//!   erlterm fmt [`<path>`]     - Format a term dump (stdin when no path)
//!   erlterm tokens [`<path>`]  - Dump the token sequence as JSON

use clap::{Arg, Command};
use std::io::{self, Read, Write};

use erlterm::erlterm::lexer::tokenize;
use erlterm::erlterm::pipeline::format_to_writer;

fn main() {
    let matches = Command::new("erlterm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for pretty-printing Erlang term dumps")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("fmt")
                .about("Format a term dump (stdin when no path is given)")
                .arg(Arg::new("path").help("Path to the term dump").index(1)),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the token sequence as JSON")
                .arg(Arg::new("path").help("Path to the term dump").index(1)),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("fmt", fmt_matches)) => {
            handle_fmt_command(fmt_matches.get_one::<String>("path"));
        }
        Some(("tokens", tokens_matches)) => {
            handle_tokens_command(tokens_matches.get_one::<String>("path"));
        }
        _ => unreachable!(),
    }
}

/// Read the document from the given path, or from stdin when there is none.
fn read_source(path: Option<&String>) -> String {
    match path {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("error reading file: {}", e);
            std::process::exit(1);
        }),
        None => {
            let mut source = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut source) {
                eprintln!("error reading stdin: {}", e);
                std::process::exit(1);
            }
            source
        }
    }
}

/// Handle the fmt command
fn handle_fmt_command(path: Option<&String>) {
    let source = read_source(path);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = format_to_writer(&source, &mut out) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = out.flush() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: Option<&String>) {
    let source = read_source(path);
    let tokens = tokenize(&source);
    let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
        eprintln!("error serializing tokens: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}
