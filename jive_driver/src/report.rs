//! Contains the [`Report`] printing a token stream in the tab-separated report format.

use std::fmt::Display;

use derive_new::new;
use jive_lexical::{token::Token, token_stream::TokenStream};

/// Is a struct implementing [`Display`] that prints one line per token of a [`TokenStream`].
///
/// Each line reads `<source name>:<line>:<column>\t<kind>` followed by a tab and the payload of
/// the token: the decimal value of integers, nothing for the end of input, and the lexeme of any
/// other token.
#[derive(Debug, Clone, Copy, new)]
pub struct Report<'a> {
    token_stream: &'a TokenStream,
}

/// Is a struct implementing [`Display`] that prints the report line of a single [`Token`].
#[derive(Debug, Clone, Copy, new)]
pub struct Line<'a> {
    token: &'a Token,
}

impl<'a> Display for Line<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.token.position(), self.token.kind())?;

        match self.token {
            Token::Integer(integer) => write!(f, "\t{}", integer.value),
            Token::EndOfInput(..) => Ok(()),
            token => write!(f, "\t{}", token.lexeme()),
        }
    }
}

impl<'a> Display for Report<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in self.token_stream.iter() {
            writeln!(f, "{}", Line::new(token))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
