//! Contains the [`TokenStream`] struct and its related types.

use std::{ops::Index, sync::Arc};

use derive_more::Deref;
use jive_base::source_file::SourceFile;

use crate::{
    cursor::Cursor,
    error,
    token::{EndOfInput, Token},
};

/// Is a list of the tokens of a source file, in the order they appear in.
///
/// The list is never empty: its last token, and only its last token, is a
/// [`Token::EndOfInput`].
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the compilation process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source code.
    ///
    /// The tokens are lexed one after the other until the end of the source file is reached,
    /// which produces the closing [`Token::EndOfInput`].
    ///
    /// # Errors
    /// Returns the first lexical error found in the source code; no tokens are kept in that case.
    pub fn tokenize(source_file: &Arc<SourceFile>) -> Result<Self, error::Error> {
        let mut cursor = Cursor::new(source_file);
        let mut tokens = Vec::new();

        loop {
            let token = Token::lex(&mut cursor)?;
            let is_end = token.is_end_of_input();

            tokens.push(token);

            if is_end {
                break;
            }
        }

        debug_assert!(cursor.at_end());

        Ok(Self { tokens })
    }

    /// Gets the [`EndOfInput`] token closing the stream.
    #[must_use]
    pub fn end_of_input(&self) -> &EndOfInput {
        self.tokens
            .last()
            .and_then(Token::as_end_of_input)
            .expect("a token stream always ends with an end of input")
    }

    /// Dissolves this struct into the list of its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}
