//! Drives the Jive lexer from the command line: reads the source file, tokenizes it, and prints
//! the token report or the diagnostic that stopped the lexer.

#![deny(
    missing_docs,
    missing_debug_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

pub use clap::Parser;
use jive_base::source_file::{self, SourceFile};
use jive_lexical::{error, token_stream::TokenStream};
use report::Report;
use thiserror::Error;

pub mod report;

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "jive",
    about = "Prints the tokens of a Jive source file.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The source file to tokenize.
    pub file: PathBuf,

    /// Prints the source code around a lexical error below its diagnostic.
    #[clap(long = "show-source")]
    pub show_source: bool,
}

/// Is an enumeration of the errors that stop a run of the lexer.
#[derive(Debug, Error)]
pub enum Error {
    /// The source file can't be opened.
    #[error("{}: cannot open source file: {source}", path.display())]
    Open {
        /// The path given on the command line.
        path: PathBuf,

        /// The reason the file can't be opened.
        source: io::Error,
    },

    /// The source file is opened but its content can't be read, as with a directory.
    #[error("{}: cannot read source file: {source}", path.display())]
    Load {
        /// The path given on the command line.
        path: PathBuf,

        /// The reason the content can't be read.
        source: source_file::Error,
    },

    /// The source code contains a lexical error.
    #[error(transparent)]
    Lexical(#[from] error::Error),

    /// The token report can't be written to the output.
    #[error("cannot write the token report: {0}")]
    Output(#[source] io::Error),
}

/// Reads and tokenizes the source file at the given path.
///
/// # Errors
/// - [`Error::Open`] and [`Error::Load`]: the source file can't be read, nothing is tokenized.
/// - [`Error::Lexical`]: the first lexical error found in the source code.
pub fn tokenize_file(path: PathBuf) -> Result<TokenStream, Error> {
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(source) => return Err(Error::Open { path, source }),
    };

    let source_file = match SourceFile::load(file, path.clone()) {
        Ok(source_file) => source_file,
        Err(source) => return Err(Error::Load { path, source }),
    };

    // the source file is dropped here, the tokens own all of their data
    Ok(TokenStream::tokenize(&source_file)?)
}

/// Tokenizes the file named by the arguments and writes its report to the given output.
///
/// Nothing is written if the source file contains a lexical error.
///
/// # Errors
/// See [`tokenize_file`]; [`Error::Output`] if writing the report fails.
pub fn execute(argument: &Argument, output: &mut impl Write) -> Result<(), Error> {
    let token_stream = tokenize_file(argument.file.clone())?;

    write!(output, "{}", Report::new(&token_stream)).map_err(Error::Output)?;
    output.flush().map_err(Error::Output)
}

/// Gets the text printed for an error that stopped the run.
///
/// With `--show-source`, a lexical error is followed by an excerpt of the source code around it.
#[must_use]
pub fn diagnostic(argument: &Argument, error: &Error) -> String {
    match error {
        Error::Lexical(lexical) if argument.show_source => {
            format!("{error}\n{}", lexical.pretty())
        }
        _ => error.to_string(),
    }
}

/// Runs the program with the given arguments.
///
/// The token report goes to the standard output, diagnostics go to the standard error stream.
#[must_use]
pub fn run(argument: &Argument) -> ExitCode {
    let stdout = io::stdout();

    match execute(argument, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", diagnostic(argument, &error));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
