//! Indentation-aware output state
//!
//! One [Indenter] value is created per rendering pass and threaded through
//! the printer explicitly. It tracks the current depth, whether the line has
//! received its indent prefix yet, and whether anything has been written
//! since the last break (the dirty-line flag that suppresses blank lines).

use std::io::{self, Write};

/// One indentation step.
const INDENT_ONE: &str = "  ";

pub struct Indenter<W: Write> {
    out: W,
    depth: usize,
    spaces: String,
    indented: bool,
    dirty_line: bool,
}

impl<W: Write> Indenter<W> {
    pub fn new(out: W) -> Self {
        Indenter {
            out,
            depth: 0,
            spaces: String::new(),
            indented: false,
            dirty_line: false,
        }
    }

    /// Break the line, unless nothing has been printed since the last break.
    pub fn newline(&mut self) -> io::Result<()> {
        if !self.dirty_line {
            return Ok(());
        }
        self.out.write_all(b"\n")?;
        self.indented = false;
        self.dirty_line = false;
        Ok(())
    }

    /// Break the line and move one level deeper (`grow`) or shallower.
    /// Depth never drops below zero.
    pub fn indent(&mut self, grow: bool) -> io::Result<()> {
        self.newline()?;
        if grow {
            self.depth += 1;
        } else {
            self.depth = self.depth.saturating_sub(1);
        }
        self.spaces = INDENT_ONE.repeat(self.depth);
        Ok(())
    }

    /// Write a literal, emitting the pending indent prefix first if this is
    /// the first write on the line.
    pub fn print(&mut self, val: &str) -> io::Result<()> {
        if !self.indented {
            self.out.write_all(self.spaces.as_bytes())?;
            self.indented = true;
        }
        self.out.write_all(val.as_bytes())?;
        self.dirty_line = true;
        Ok(())
    }
}
