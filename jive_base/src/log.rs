//! Provides the functions related to logging/printing messages to the console.

use std::fmt::{Display, Formatter};

use bstr::ByteSlice;
use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::{Location, Span};

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the particular span of the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    /// Prints the `┃` gutter, optionally prefixed with a line number.
    fn write_gutter(
        f: &mut Formatter<'_>,
        line_number: Option<usize>,
        width: usize,
    ) -> std::fmt::Result {
        match line_number {
            Some(line_number) => write!(
                f,
                "{}{:pad$}",
                Style::Bold.with(Color::Cyan.with(line_number)),
                "",
                pad = width - get_digit(line_number) + 1
            )?,
            None => write!(f, "{:pad$}", "", pad = width + 1)?,
        }

        write!(f, "{} ", Style::Bold.with(Color::Cyan.with("┃")))
    }

    /// Prints a source line as is, expanding tabs to 4 spaces.
    ///
    /// Invalid UTF-8 is printed as `U+FFFD`.
    fn write_context_line(
        &self,
        f: &mut Formatter<'_>,
        line_number: usize,
        width: usize,
    ) -> std::fmt::Result {
        let Some(line) = self.span.source_file().get_line(line_number) else {
            return Ok(());
        };

        // the last line of a file ending with `\n` is empty
        if line.is_empty() {
            return Ok(());
        }

        Self::write_gutter(f, Some(line_number), width)?;

        for char in line.chars() {
            if char == '\t' {
                write!(f, "    ")?;
            } else if char != '\n' {
                write!(f, "{char}")?;
            }
        }

        writeln!(f)
    }

    fn is_in_span(
        start: Location,
        end: Option<Location>,
        line_number: usize,
        column: usize,
    ) -> bool {
        let end_column = end.map_or(usize::MAX, |end| end.column);
        let end_line = end.map_or(usize::MAX, |end| end.line);

        let after_start =
            line_number > start.line || (line_number == start.line && column >= start.column);
        let before_end =
            line_number < end_line || (line_number == end_line && column < end_column);

        after_start && before_end
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let start_location = self.span.start_location();
        let end_location = self.span.end_location();

        let start_line = start_location.line;
        let end_line = end_location.map_or_else(
            || source_file.line_number(),
            |end_location| {
                // a span ending right after a `\n` doesn't reach into the next line
                if end_location.column == 1 && end_location.line > start_line {
                    end_location.line - 1
                } else {
                    end_location.line
                }
            },
        );
        let is_multiline = start_line != end_line;

        // the line before and the line after the span are shown as well
        let width = get_digit(end_line + 1);

        // prints the source location
        writeln!(
            f,
            "{:width$}{} {}:{}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            source_file.name(),
            start_location,
        )?;

        Self::write_gutter(f, None, width)?;
        writeln!(f)?;

        self.write_context_line(f, start_line.saturating_sub(1), width)?;

        for line_number in start_line..=end_line {
            Self::write_gutter(f, Some(line_number), width)?;

            let line = source_file.get_line(line_number).unwrap_or_default();
            // columns count bytes, a character is highlighted by its first byte
            for (index, _, char) in line.char_indices() {
                if char == '\n' {
                    continue;
                }

                let text = if char == '\t' {
                    "    ".to_string()
                } else {
                    char.to_string()
                };

                if Self::is_in_span(start_location, end_location, line_number, index + 1) {
                    write!(
                        f,
                        "{}",
                        Style::Underline.with(Style::Bold.with(Color::Red.with(text)))
                    )?;
                } else {
                    write!(f, "{text}")?;
                }
            }
            writeln!(f)?;
        }

        if let (Some(message), false) = (&self.help_display, is_multiline) {
            Self::write_gutter(f, None, width)?;

            // aligns the message with the start of the span
            for (_, _, char) in source_file
                .get_line(start_line)
                .unwrap_or_default()
                .char_indices()
                .take_while(|(index, ..)| *index + 1 < start_location.column)
            {
                write!(f, "{}", if char == '\t' { "    " } else { " " })?;
            }

            writeln!(f, "{}: {message}", Style::Bold.with("help"))?;
        }

        self.write_context_line(f, end_line.saturating_add(1), width)?;

        Self::write_gutter(f, None, width)?;
        writeln!(f)?;

        if let (Some(message), true) = (&self.help_display, is_multiline) {
            write!(
                f,
                "{:pad$}{} ",
                "",
                Style::Bold.with(Color::Cyan.with("=")),
                pad = width + 1
            )?;
            writeln!(f, "{}: {message}", Style::Bold.with("help"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
