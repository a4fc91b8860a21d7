use jive_base::source_file::{Location, SourceFile};

use super::Cursor;

#[test]
fn test_peek_and_advance() {
    let source_file = SourceFile::temp("ab").unwrap();
    let mut cursor = Cursor::new(&source_file);

    assert_eq!(cursor.peek(), Some(b'a'));
    assert_eq!(cursor.peek_next(), Some(b'b'));
    assert!(!cursor.at_end());

    assert_eq!(cursor.advance(), Some(b'a'));
    assert_eq!(cursor.peek(), Some(b'b'));
    assert_eq!(cursor.peek_next(), None);

    assert_eq!(cursor.advance(), Some(b'b'));
    assert!(cursor.at_end());
    assert_eq!(cursor.peek(), None);

    // advancing at the end leaves the cursor in place
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.offset(), 2);
    assert_eq!(cursor.position().location, Location { line: 1, column: 3 });
}

#[test]
fn test_line_and_column_tracking() {
    let source_file = SourceFile::temp("x\n\ty\r\nλz").unwrap();
    let mut cursor = Cursor::new(&source_file);

    let mut locations = Vec::new();
    while !cursor.at_end() {
        locations.push(cursor.position().location);
        cursor.advance();
    }
    locations.push(cursor.position().location);

    let expected = [
        (1, 1), // x
        (1, 2), // \n
        (2, 1), // \t
        (2, 2), // y
        (2, 3), // \r
        (2, 4), // \n
        (3, 1), // first byte of λ
        (3, 2), // second byte of λ
        (3, 3), // z
        (3, 4), // end
    ]
    .map(|(line, column)| Location { line, column });

    assert_eq!(locations, expected);
    assert_eq!(cursor.offset(), source_file.content().len());
}

#[test]
fn test_columns_agree_with_source_file() {
    let source_file = SourceFile::temp("\"é\" x\n\u{3bb}\ty").unwrap();
    let mut cursor = Cursor::new(&source_file);

    while !cursor.at_end() {
        assert_eq!(
            source_file.get_location(cursor.offset()),
            Some(cursor.position().location)
        );
        cursor.advance();
    }
}

#[test]
fn test_text_and_span() {
    let source_file = SourceFile::temp("let value").unwrap();
    let mut cursor = Cursor::new(&source_file);

    cursor.advance_while(|byte| byte != b' ');
    assert_eq!(cursor.text_from(0), "let");

    let span = cursor.span(0, cursor.offset());
    assert_eq!(span.bytes(), b"let");
    assert_eq!(span.start_location(), Location { line: 1, column: 1 });
    assert_eq!(cursor.position().source_name, *source_file.name());
}

#[test]
fn test_invalid_utf8_text() {
    let source_file = SourceFile::temp(b"caf\xE9!").unwrap();
    let mut cursor = Cursor::new(&source_file);

    cursor.advance_while(|byte| byte != b'!');
    assert_eq!(cursor.text_from(0), "caf\u{FFFD}");
    assert_eq!(cursor.position().location, Location { line: 1, column: 5 });
}
