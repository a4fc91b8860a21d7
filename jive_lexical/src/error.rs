//! Contains all kinds of lexical errors that can occur while tokenizing the source code.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use jive_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};

/// Writes the `<source name>:<line>:<column>: ` prefix of a diagnostic pointing at the span.
fn write_location(f: &mut std::fmt::Formatter<'_>, span: &Span) -> std::fmt::Result {
    write!(
        f,
        "{}:{}: ",
        span.source_file().name(),
        span.start_location()
    )
}

/// The source code contains a string literal whose closing `"` is never found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnterminatedString {
    /// The span of the opening `"` of the string literal.
    pub span: Span,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_location(f, &self.span)?;
        f.write_str("unterminated string literal")
    }
}

impl std::error::Error for UnterminatedString {}

/// The source code contains a byte that doesn't start any token.
///
/// Bytes outside of the ASCII range are always unexpected outside of string literals and
/// comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedCharacter {
    /// The span of the unexpected byte.
    pub span: Span,

    /// The unexpected byte itself.
    pub byte: u8,
}

impl UnexpectedCharacter {
    /// Gets the byte as printed in diagnostics, non-printable bytes written as `\xNN`.
    #[must_use]
    pub fn escaped(&self) -> std::ascii::EscapeDefault { std::ascii::escape_default(self.byte) }
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_location(f, &self.span)?;
        write!(f, "unexpected character '{}'", self.escaped())
    }
}

impl std::error::Error for UnexpectedCharacter {}

/// Is an enumeration containing all kinds of lexical errors that can occur while tokenizing the
/// source code.
///
/// Every lexical error is fatal: tokenizing stops at the first one found.
#[derive(Debug, Clone, PartialEq, Eq, EnumAsInner, From, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    UnterminatedString(UnterminatedString),

    #[error(transparent)]
    UnexpectedCharacter(UnexpectedCharacter),
}

impl Error {
    /// Gets the span of the source code the error points at.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::UnterminatedString(error) => &error.span,
            Self::UnexpectedCharacter(error) => &error.span,
        }
    }

    /// Gets a [`Display`] rendering the error together with an excerpt of the source code.
    #[must_use]
    pub fn pretty(&self) -> Pretty<'_> { Pretty { error: self } }
}

/// Is a struct implementing [`Display`] that prints an [`Error`] as a colored message followed by
/// the source code around it.
#[derive(Debug, Clone, Copy)]
pub struct Pretty<'a> {
    error: &'a Error,
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.error {
            Error::UnterminatedString(error) => write!(
                f,
                "{}\n{}",
                Message::new(Severity::Error, "found an unterminated string literal"),
                SourceCodeDisplay::new(
                    &error.span,
                    Some("this `\"` is never closed by a matching `\"`")
                )
            ),
            Error::UnexpectedCharacter(error) => write!(
                f,
                "{}\n{}",
                Message::new(
                    Severity::Error,
                    format!("found an unexpected character `{}`", error.escaped())
                ),
                SourceCodeDisplay::new(&error.span, Some("no token starts with this character"))
            ),
        }
    }
}
