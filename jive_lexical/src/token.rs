//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr, sync::Arc};

use bstr::ByteVec;
use derive_more::From;
use derive_new::new;
use enum_as_inner::EnumAsInner;
use jive_base::source_file::{ByteIndex, Location};
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

use crate::{
    cursor::Cursor,
    error::{self, UnexpectedCharacter, UnterminatedString},
};

/// Is an enumeration representing keywords in the Jive programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Fn,
    Let,
    Set,
    If,
    While,
    Call,
    Return,
    True,
    False,
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> =
                KeywordKind::iter().map(|keyword| (keyword.as_str(), keyword)).collect();
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fn => "fn",
            Self::Let => "let",
            Self::Set => "set",
            Self::If => "if",
            Self::While => "while",
            Self::Call => "call",
            Self::Return => "return",
            Self::True => "true",
            Self::False => "false",
        }
    }
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an enumeration representing the built-in type names of the Jive programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum TypeKind {
    Int,
    Str,
    Bool,
}

/// Is an error that is returned when a string cannot be parsed into a [`TypeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of type name.")]
pub struct TypeParseError;

impl FromStr for TypeKind {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_TYPE_MAP: HashMap<&'static str, TypeKind> =
                TypeKind::iter().map(|ty| (ty.as_str(), ty)).collect();
        }
        STRING_TYPE_MAP.get(s).copied().ok_or(TypeParseError)
    }
}

impl TypeKind {
    /// Gets the string representation of the type name as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Str => "str",
            Self::Bool => "bool",
        }
    }
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an enumeration of the symbols that make up a token on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum PunctuationKind {
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Arrow,
}

impl PunctuationKind {
    /// Gets the source text of the punctuation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::OpenBrace => "{",
            Self::CloseBrace => "}",
            Self::Arrow => "->",
        }
    }
}

/// Is the closed set of token kinds reported by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum TokenKind {
    Keyword,
    Identifier,
    OpenParen,
    CloseParen,
    Arrow,
    Type,
    OpenBrace,
    CloseBrace,
    Integer,
    String,
    EndOfInput,
}

impl TokenKind {
    /// Gets the name of the kind as printed in the token report.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "KEYWORD",
            Self::Identifier => "IDENTIFIER",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Arrow => "ARROW",
            Self::Type => "TYPE",
            Self::OpenBrace => "{",
            Self::CloseBrace => "}",
            Self::Integer => "INTEGER",
            Self::String => "STRING",
            Self::EndOfInput => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PunctuationKind> for TokenKind {
    fn from(punctuation: PunctuationKind) -> Self {
        match punctuation {
            PunctuationKind::OpenParen => Self::OpenParen,
            PunctuationKind::CloseParen => Self::CloseParen,
            PunctuationKind::OpenBrace => Self::OpenBrace,
            PunctuationKind::CloseBrace => Self::CloseBrace,
            PunctuationKind::Arrow => Self::Arrow,
        }
    }
}

/// Is the place in a source file where a token starts.
///
/// The position owns the name of its source file, so tokens stay valid after the source file
/// itself is dropped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Position {
    /// The name of the source file the token was found in.
    pub source_name: Arc<str>,

    /// The line and column of the first character of the token.
    pub location: Location,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.source_name, self.location)
    }
}

/// Is an enumeration containing all kinds of tokens in the Jive programming language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Token {
    Keyword(Keyword),
    TypeName(TypeName),
    Identifier(Identifier),
    Punctuation(Punctuation),
    Integer(Integer),
    StringLiteral(StringLiteral),
    EndOfInput(EndOfInput),
}

impl Token {
    /// Gets the position of the first character of the token.
    #[must_use]
    pub fn position(&self) -> &Position {
        match self {
            Self::Keyword(token) => &token.position,
            Self::TypeName(token) => &token.position,
            Self::Identifier(token) => &token.position,
            Self::Punctuation(token) => &token.position,
            Self::Integer(token) => &token.position,
            Self::StringLiteral(token) => &token.position,
            Self::EndOfInput(token) => &token.position,
        }
    }

    /// Gets the [`TokenKind`] of the token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Keyword(..) => TokenKind::Keyword,
            Self::TypeName(..) => TokenKind::Type,
            Self::Identifier(..) => TokenKind::Identifier,
            Self::Punctuation(token) => token.punctuation.into(),
            Self::Integer(..) => TokenKind::Integer,
            Self::StringLiteral(..) => TokenKind::String,
            Self::EndOfInput(..) => TokenKind::EndOfInput,
        }
    }

    /// Gets the text of the token.
    ///
    /// String literals give their decoded value, the end of input gives `EOF`.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        match self {
            Self::Keyword(token) => token.keyword.as_str(),
            Self::TypeName(token) => token.type_name.as_str(),
            Self::Identifier(token) => &token.name,
            Self::Punctuation(token) => token.punctuation.as_str(),
            Self::Integer(token) => &token.lexeme,
            Self::StringLiteral(token) => &token.value,
            Self::EndOfInput(..) => EndOfInput::LEXEME,
        }
    }
}

/// Represents a word reserved for a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Keyword {
    /// Is the position of the token.
    pub position: Position,

    /// Is the [`KeywordKind`] that the token represents.
    pub keyword: KeywordKind,
}

/// Represents a word reserved for a built-in type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct TypeName {
    /// Is the position of the token.
    pub position: Position,

    /// Is the [`TypeKind`] that the token represents.
    pub type_name: TypeKind,
}

/// Represents a name that is neither a keyword nor a type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Identifier {
    /// Is the position of the token.
    pub position: Position,

    /// Is the identifier text.
    pub name: String,
}

/// Represents a parenthesis, a brace or the `->` arrow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Punctuation {
    /// Is the position of the token.
    pub position: Position,

    /// Is the symbol that the token represents.
    pub punctuation: PunctuationKind,
}

/// Represents a decimal integer literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Integer {
    /// Is the position of the token.
    pub position: Position,

    /// Is the literal exactly as written, leading zeros included.
    pub lexeme: String,

    /// Is the value of the literal, saturated at [`i64::MAX`].
    pub value: i64,
}

/// Represents a string literal with its escape sequences decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct StringLiteral {
    /// Is the position of the opening `"`.
    pub position: Position,

    /// Is the decoded content, without the surrounding quotes.
    ///
    /// Bytes that aren't valid UTF-8 are replaced with `U+FFFD`.
    pub value: String,
}

/// Marks the end of the source code, always the last token of a stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct EndOfInput {
    /// Is the position right after the last character of the source code.
    pub position: Position,
}

impl EndOfInput {
    /// The text displayed for the end of input.
    pub const LEXEME: &'static str = "EOF";
}

impl Token {
    /// Checks if the byte is skipped between tokens.
    fn is_whitespace(byte: u8) -> bool {
        matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
    }

    /// Checks if the given byte is a valid first byte of an identifier.
    fn is_first_identifier_byte(byte: u8) -> bool { byte == b'_' || byte.is_ascii_alphabetic() }

    /// Checks if the given byte is a valid byte of an identifier.
    fn is_identifier_byte(byte: u8) -> bool { byte == b'_' || byte.is_ascii_alphanumeric() }

    /// Moves the cursor past whitespaces and `//` comments.
    fn skip_insignificant(cursor: &mut Cursor) {
        loop {
            cursor.advance_while(Self::is_whitespace);

            if cursor.peek() == Some(b'/') && cursor.peek_next() == Some(b'/') {
                // the `\n` ending the comment is left to the whitespace skipping
                cursor.advance_while(|byte| byte != b'\n');
                continue;
            }

            break;
        }
    }

    fn handle_word(cursor: &mut Cursor, start: ByteIndex, position: Position) -> Self {
        cursor.advance_while(Self::is_identifier_byte);

        let word = cursor.text_from(start);

        // keywords take precedence over type names
        if let Ok(keyword) = KeywordKind::from_str(&word) {
            Keyword::new(position, keyword).into()
        } else if let Ok(type_name) = TypeKind::from_str(&word) {
            TypeName::new(position, type_name).into()
        } else {
            Identifier::new(position, word.into_owned()).into()
        }
    }

    fn handle_integer(cursor: &mut Cursor, start: ByteIndex, position: Position) -> Self {
        cursor.advance_while(|byte| byte.is_ascii_digit());

        let lexeme = cursor.text_from(start);

        // the lexeme holds only digits, so overflow is the only possible failure
        let value = lexeme.parse::<i64>().unwrap_or(i64::MAX);

        Integer::new(position, lexeme.into_owned(), value).into()
    }

    fn handle_string_literal(
        cursor: &mut Cursor,
        start: ByteIndex,
        position: Position,
    ) -> Result<Self, error::Error> {
        let mut value = Vec::new();

        loop {
            match cursor.advance() {
                Some(b'"') => {
                    return Ok(StringLiteral::new(position, value.into_string_lossy()).into());
                }

                Some(b'\\') => match cursor.advance() {
                    Some(b'n') => value.push(b'\n'),
                    Some(b't') => value.push(b'\t'),

                    // `\"`, `\\` and any unknown escape keep the escaped byte
                    Some(escaped) => value.push(escaped),

                    None => break,
                },

                Some(byte) => value.push(byte),

                None => break,
            }
        }

        Err(UnterminatedString {
            span: cursor.span(start, start + 1),
        }
        .into())
    }

    /// Lexes the next token from the given cursor.
    ///
    /// Whitespaces and comments in front of the token are skipped. After the token is made, the
    /// cursor is left at the next byte that is not part of the token. Once the cursor reaches
    /// the end of the source code, every call returns a [`Token::EndOfInput`].
    ///
    /// # Errors
    /// - [`error::Error::UnterminatedString`]: the closing `"` of a string literal is missing.
    /// - [`error::Error::UnexpectedCharacter`]: a byte doesn't start any token.
    pub(crate) fn lex(cursor: &mut Cursor) -> Result<Self, error::Error> {
        Self::skip_insignificant(cursor);

        let start = cursor.offset();
        let position = cursor.position();

        let Some(byte) = cursor.advance() else {
            return Ok(EndOfInput::new(position).into());
        };

        let punctuation = |kind: PunctuationKind| -> Result<Self, error::Error> {
            Ok(Punctuation::new(position.clone(), kind).into())
        };

        match byte {
            b'(' => punctuation(PunctuationKind::OpenParen),
            b')' => punctuation(PunctuationKind::CloseParen),
            b'{' => punctuation(PunctuationKind::OpenBrace),
            b'}' => punctuation(PunctuationKind::CloseBrace),

            b'-' if cursor.peek() == Some(b'>') => {
                cursor.advance();
                punctuation(PunctuationKind::Arrow)
            }

            b'0'..=b'9' => Ok(Self::handle_integer(cursor, start, position)),

            byte if Self::is_first_identifier_byte(byte) => {
                Ok(Self::handle_word(cursor, start, position))
            }

            b'"' => Self::handle_string_literal(cursor, start, position),

            byte => Err(UnexpectedCharacter {
                span: cursor.span(start, cursor.offset()),
                byte,
            }
            .into()),
        }
    }
}
