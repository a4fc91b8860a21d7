//! Contains the code related to the source code input.
//!
//! A source file is read as raw bytes: its content doesn't have to be valid UTF-8, and positions
//! are counted in bytes.

use std::{
    fmt::{Debug, Display},
    fs::File,
    io::{Read, Write},
    ops::{Deref, Range},
    path::PathBuf,
    sync::Arc,
};

use bstr::{BStr, ByteSlice};
use getset::{CopyGetters, Getters};
use memmap::{Mmap, MmapOptions};
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Is the storage of the bytes of a source file.
enum Content {
    /// A regular file with a known, non-zero length, mapped to memory.
    Mapped(Mmap),

    /// Anything else (pipes, character devices, `/proc` files, empty files), read to the end.
    Read(Vec<u8>),
}

impl Content {
    fn load(mut file: File) -> Result<Self, Error> {
        let metadata = file.metadata()?;

        // the length of non-regular files says nothing about how much can be read from them
        if metadata.is_file() && metadata.len() > 0 {
            return Ok(Self::Mapped(unsafe { MmapOptions::new().map(&file)? }));
        }

        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;

        Ok(Self::Read(buffer))
    }
}

impl Deref for Content {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Mapped(mapped) => &mapped[..],
            Self::Read(buffer) => &buffer[..],
        }
    }
}

/// Represents a source file given to the lexer.
#[derive(Getters)]
pub struct SourceFile {
    content: Content,

    /// Gets the full path to the source file.
    #[get = "pub"]
    full_path: PathBuf,

    /// Gets the name of the source file used when reporting positions.
    #[get = "pub"]
    name: Arc<str>,

    /// The byte range of every line, its `\n` included.
    lines: Vec<Range<ByteIndex>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("len", &self.content.len())
            .field("lines", &self.lines.len())
            .finish()
    }
}

impl SourceFile {
    /// Loads the whole content of the given opened file.
    ///
    /// Regular files are mapped to memory; pipes, devices and other files whose length isn't
    /// known up front are read until the end.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping or reading the file.
    pub fn load(file: File, full_path: PathBuf) -> Result<Arc<Self>, Error> {
        let content = Content::load(file)?;
        let lines = line_ranges(&content);
        let name = Arc::from(full_path.display().to_string());

        Ok(Arc::new(Self {
            content,
            full_path,
            name,
            lines,
        }))
    }

    /// Creates a temporary source file holding the given bytes.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   reading it back.
    pub fn temp(content: impl AsRef<[u8]>) -> Result<Arc<Self>, Error> {
        let mut tempfile = tempfile::Builder::new()
            .prefix("jive")
            .suffix(".jive")
            .tempfile()?;

        tempfile.as_file_mut().write_all(content.as_ref())?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.reopen()?, path)
    }

    /// Gets the bytes of the source file.
    #[must_use]
    pub fn content(&self) -> &BStr { self.content.as_bstr() }

    /// Gets the line at the given line number (starting at 1), including its `\n` terminator.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&BStr> {
        let range = self.lines.get(line.checked_sub(1)?)?;
        Some(self.content[range.clone()].as_bstr())
    }

    /// Gets the number of lines in the source file.
    ///
    /// A file ending with `\n` has an empty last line.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Gets the [`Location`] of the byte at the given index.
    ///
    /// Returns [`None`] if the index is past the last byte of the source file.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        if byte_index >= self.content.len() {
            return None;
        }

        // the first line starting after the byte is the one following the byte's line
        let line = self
            .lines
            .partition_point(|range| range.start <= byte_index);

        Some(Location {
            line,
            column: byte_index - self.lines[line - 1].start + 1,
        })
    }

    /// Gets the [`Location`] right after the last byte of the source file.
    #[must_use]
    pub fn end_location(&self) -> Location {
        // the last line never ends with a `\n`
        let line = self.lines.len();
        let column = self.content.len() - self.lines[line - 1].start + 1;

        Location { line, column }
    }
}

/// Is an unsigned integer that represents a byte index in the source code.
pub type ByteIndex = usize;

/// Represents a range of bytes in a source file.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the start byte index of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.bytes())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

impl Span {
    /// Creates a span over the bytes `start..end` of the source file.
    ///
    /// Returns [`None`] if the range is reversed or goes past the end of the source file.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        if start > end || end > source_file.content.len() {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Gets the bytes of the source code that the span covers.
    #[must_use]
    pub fn bytes(&self) -> &BStr { self.source_file.content[self.start..self.end].as_bstr() }

    /// Gets the starting [`Location`] of the span.
    ///
    /// An empty span at the end of the source file starts right after its last byte.
    #[must_use]
    pub fn start_location(&self) -> Location {
        self.source_file
            .get_location(self.start)
            .unwrap_or_else(|| self.source_file.end_location())
    }

    /// Gets the ending [`Location`] of the span.
    ///
    /// Returns [`None`] if the end of the span is the end of the source file.
    #[must_use]
    pub fn end_location(&self) -> Option<Location> { self.source_file.get_location(self.end) }
}

/// Is a struct pointing to a particular location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location, in bytes from the start of the line (starts at 1).
    pub column: usize,
}

impl Default for Location {
    fn default() -> Self { Self { line: 1, column: 1 } }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Splits the bytes into lines; only `\n` ends a line, a `\r` stays part of its line.
fn line_ranges(bytes: &[u8]) -> Vec<Range<ByteIndex>> {
    let mut start = 0;
    let mut lines = Vec::new();

    for end in bytes.find_iter(b"\n") {
        #[allow(clippy::range_plus_one)]
        lines.push(start..end + 1);
        start = end + 1;
    }

    lines.push(start..bytes.len());

    lines
}
