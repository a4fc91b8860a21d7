//! Contains the [`Cursor`] used by the lexer to walk over the bytes of a source file.

use std::{borrow::Cow, sync::Arc};

use bstr::{BStr, ByteSlice};
use jive_base::source_file::{ByteIndex, Location, SourceFile, Span};

use crate::token::Position;

/// Is an iterator-like walker over the bytes of a source file that keeps track of the line and
/// column of the byte it points at.
///
/// Every byte takes one column, a `\n` starts the next line. The byte offset only ever moves
/// forward and never goes past the end of the source.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    source_file: &'a Arc<SourceFile>,
    content: &'a BStr,
    offset: ByteIndex,
    location: Location,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor pointing at the first byte of the given source file.
    pub(crate) fn new(source_file: &'a Arc<SourceFile>) -> Self {
        Self {
            source_file,
            content: source_file.content(),
            offset: 0,
            location: Location::default(),
        }
    }

    /// Gets the byte the cursor points at, [`None`] at the end of the source.
    pub(crate) fn peek(&self) -> Option<u8> { self.content.get(self.offset).copied() }

    /// Gets the byte right after the one the cursor points at.
    pub(crate) fn peek_next(&self) -> Option<u8> { self.content.get(self.offset + 1).copied() }

    /// Consumes the current byte and returns it.
    pub(crate) fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.offset += 1;

        if byte == b'\n' {
            self.location.line += 1;
            self.location.column = 1;
        } else {
            self.location.column += 1;
        }

        Some(byte)
    }

    /// Consumes bytes as long as the predicate holds.
    pub(crate) fn advance_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }

    pub(crate) fn at_end(&self) -> bool { self.offset >= self.content.len() }

    pub(crate) fn offset(&self) -> ByteIndex { self.offset }

    /// Gets the [`Position`] of the current byte, as recorded in the tokens.
    pub(crate) fn position(&self) -> Position {
        Position::new(self.source_file.name().clone(), self.location)
    }

    /// Gets the source text consumed since the given byte offset.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD`.
    pub(crate) fn text_from(&self, start: ByteIndex) -> Cow<'a, str> {
        self.content[start..self.offset].to_str_lossy()
    }

    /// Creates a [`Span`] over the given byte range of already consumed source text.
    pub(crate) fn span(&self, start: ByteIndex, end: ByteIndex) -> Span {
        debug_assert!(end <= self.offset);
        Span::new(self.source_file.clone(), start, end)
            .expect("cursor offsets never pass the end of the source")
    }
}

#[cfg(test)]
mod tests;
