use std::{io::Write, path::PathBuf};

use clap::Parser;

use super::{diagnostic, execute, tokenize_file, Argument, Error};

fn temp_source(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("jive")
        .suffix(".jive")
        .tempfile()
        .unwrap();

    write!(file, "{content}").unwrap();
    file
}

fn argument(path: PathBuf) -> Argument {
    Argument {
        file: path,
        show_source: false,
    }
}

#[test]
fn argument_parse_test() {
    let argument = Argument::try_parse_from(["jive", "main.jive", "--show-source"]).unwrap();

    assert_eq!(argument.file, PathBuf::from("main.jive"));
    assert!(argument.show_source);

    assert!(Argument::try_parse_from(["jive"]).is_err());
}

#[test]
fn execute_test() {
    let file = temp_source("call f (\"x\")");
    let name = file.path().display().to_string();

    let mut output = Vec::new();
    execute(&argument(file.path().to_owned()), &mut output).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        format!(
            "{name}:1:1\tKEYWORD\tcall\n\
             {name}:1:6\tIDENTIFIER\tf\n\
             {name}:1:8\t(\t(\n\
             {name}:1:9\tSTRING\tx\n\
             {name}:1:12\t)\t)\n\
             {name}:1:13\tEOF\n"
        )
    );
}

#[test]
fn lexical_error_writes_nothing_test() {
    let file = temp_source("let x 1\nlet y \"open");
    let name = file.path().display().to_string();

    let mut output = Vec::new();
    let error = execute(&argument(file.path().to_owned()), &mut output).unwrap_err();

    assert!(output.is_empty());
    assert!(matches!(error, Error::Lexical(..)));
    assert_eq!(
        error.to_string(),
        format!("{name}:2:7: unterminated string literal")
    );
}

#[test]
fn missing_file_test() {
    let path = PathBuf::from("this/file/does/not/exist.jive");
    let error = tokenize_file(path.clone()).unwrap_err();

    assert!(matches!(&error, Error::Open { path: error_path, .. } if *error_path == path));
    assert!(error
        .to_string()
        .starts_with("this/file/does/not/exist.jive: cannot open source file: "));
}

#[test]
fn invalid_utf8_test() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"// \xFF\xFE\nfn").unwrap();

    let token_stream = tokenize_file(file.path().to_owned()).unwrap();
    assert_eq!(token_stream.len(), 2);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"fn \xFF").unwrap();

    let error = tokenize_file(file.path().to_owned()).unwrap_err();
    assert!(error.to_string().ends_with(":1:4: unexpected character '\\xff'"));
}

#[test]
fn zero_length_metadata_test() {
    // `/proc` files report a length of 0 but still have content
    let path = PathBuf::from("/proc/self/comm");
    let Ok(content) = std::fs::read(&path) else {
        return;
    };
    assert!(!content.is_empty());

    // the name of the test process may hold a `-`, which is a lexical error
    match tokenize_file(path) {
        Ok(token_stream) => assert!(token_stream.len() > 1),
        Err(error) => assert!(matches!(error, Error::Lexical(..)), "{error}"),
    }
}

#[test]
fn directory_test() {
    let directory = tempfile::tempdir().unwrap();
    let error = tokenize_file(directory.path().to_owned()).unwrap_err();

    assert!(matches!(error, Error::Open { .. } | Error::Load { .. }));
}

#[test]
fn diagnostic_test() {
    let file = temp_source("let x -1");
    let mut argument = argument(file.path().to_owned());

    let error = tokenize_file(argument.file.clone()).unwrap_err();
    assert_eq!(diagnostic(&argument, &error), error.to_string());

    argument.show_source = true;
    let text = diagnostic(&argument, &error);

    assert!(text.starts_with(&format!("{error}\n")));
    assert!(text.contains("no token starts with this character"));

    // only lexical errors have source code to show
    let error = tokenize_file(PathBuf::from("missing.jive")).unwrap_err();
    assert_eq!(diagnostic(&argument, &error), error.to_string());
}
