use super::{
    formatting::{Color, Style},
    Message, Severity, SourceCodeDisplay,
};
use crate::source_file::{SourceFile, Span};

/// Removes the ANSI escape codes so the rendered text can be compared.
fn strip_ansi(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars();

    while let Some(char) = chars.next() {
        if char == '\x1B' {
            for char in chars.by_ref() {
                if char == 'm' {
                    break;
                }
            }
        } else {
            result.push(char);
        }
    }

    result
}

#[test]
fn test_styled() {
    assert_eq!(Style::Bold.with("x").to_string(), "\x1B[1mx\x1B[0m");
    assert_eq!(
        Color::Red.with(Style::Underline.with(1)).to_string(),
        "\x1B[31m\x1B[4m1\x1B[0m\x1B[0m"
    );
}

#[test]
fn test_message() {
    let message = Message::new(Severity::Error, "unterminated string literal");
    assert_eq!(
        strip_ansi(&message.to_string()),
        "[error]: unterminated string literal"
    );

    let message = Message::new(Severity::Warning, 42);
    assert_eq!(strip_ansi(&message.to_string()), "[warning]: 42");
}

#[test]
fn test_source_code_display() {
    let source_file = SourceFile::temp("fn (x)\nlet y - 1\nreturn y\n").unwrap();
    let span = Span::new(source_file.clone(), 13, 14).unwrap();

    let rendered = strip_ansi(
        &SourceCodeDisplay::new(&span, Some("no token starts with this character")).to_string(),
    );
    let lines = rendered.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], format!(" --> {}:2:7", source_file.name()));
    assert_eq!(lines[1], "  ┃ ");
    assert_eq!(lines[2], "1 ┃ fn (x)");
    assert_eq!(lines[3], "2 ┃ let y - 1");
    assert_eq!(lines[4], "  ┃       help: no token starts with this character");
    assert_eq!(lines[5], "3 ┃ return y");
    assert_eq!(lines[6], "  ┃ ");
    assert_eq!(lines.len(), 7);
}

#[test]
fn test_source_code_display_invalid_utf8() {
    let source_file = SourceFile::temp(b"x \xE9 y\n").unwrap();
    let span = Span::new(source_file.clone(), 2, 3).unwrap();

    let rendered = strip_ansi(&SourceCodeDisplay::new(&span, Some("here")).to_string());
    let lines = rendered.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], format!(" --> {}:1:3", source_file.name()));
    assert_eq!(lines[2], "1 ┃ x \u{FFFD} y");
    assert_eq!(lines[3], "  ┃   help: here");
    assert_eq!(lines.len(), 5);
}
