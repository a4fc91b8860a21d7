use jive_base::source_file::SourceFile;
use jive_lexical::token_stream::TokenStream;

use super::Report;

fn report(source: &str) -> (String, String) {
    let source_file = SourceFile::temp(source).unwrap();
    let token_stream = TokenStream::tokenize(&source_file).unwrap();

    (
        Report::new(&token_stream).to_string(),
        source_file.name().to_string(),
    )
}

#[test]
fn function_declaration_report_test() {
    let (report, name) = report("fn (x) -> int { return 042 }");

    let expected = [
        "1:1\tKEYWORD\tfn",
        "1:4\t(\t(",
        "1:5\tIDENTIFIER\tx",
        "1:6\t)\t)",
        "1:8\tARROW\t->",
        "1:11\tTYPE\tint",
        "1:15\t{\t{",
        "1:17\tKEYWORD\treturn",
        "1:24\tINTEGER\t42",
        "1:28\t}\t}",
        "1:29\tEOF",
    ]
    .map(|line| format!("{name}:{line}\n"))
    .concat();

    assert_eq!(report, expected);
}

#[test]
fn string_report_test() {
    let (report, name) = report("let s \"a\\tb\"\n");

    assert_eq!(
        report,
        format!(
            "{name}:1:1\tKEYWORD\tlet\n\
             {name}:1:5\tIDENTIFIER\ts\n\
             {name}:1:7\tSTRING\ta\tb\n\
             {name}:2:1\tEOF\n"
        )
    );
}

#[test]
fn empty_report_test() {
    let (report, name) = report("");
    assert_eq!(report, format!("{name}:1:1\tEOF\n"));
}
