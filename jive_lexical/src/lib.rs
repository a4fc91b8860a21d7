//! This crate implements the lexical analysis of the Jive language. It turns the source code into
//! a flat stream of tokens, each annotated with the position it was found at.
//!
//! The final output of this crate is a [`token_stream::TokenStream`], always terminated by a
//! single [`token::Token::EndOfInput`].

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

mod cursor;
pub mod error;
pub mod token;
pub mod token_stream;
