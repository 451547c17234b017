//! Scanners for the string-literal forms that are not fixed-width tokens:
//! the two quoted forms with escape processing, the two verbatim forms with
//! quote doubling, and the `|||` block string with indentation stripping.

use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

pub fn double_string_handler(lexer: &mut Lexer, _regex: Regex) -> Result<(), Error> {
    quoted_string(lexer, '"', TokenKind::DoubleString)
}

pub fn single_string_handler(lexer: &mut Lexer, _regex: Regex) -> Result<(), Error> {
    quoted_string(lexer, '\'', TokenKind::SingleString)
}

pub fn verbatim_double_handler(lexer: &mut Lexer, _regex: Regex) -> Result<(), Error> {
    verbatim_string(lexer, '"', TokenKind::VerbatimDoubleString)
}

pub fn verbatim_single_handler(lexer: &mut Lexer, _regex: Regex) -> Result<(), Error> {
    verbatim_string(lexer, '\'', TokenKind::VerbatimSingleString)
}

/// Scans a `"…"` or `'…'` literal with backslash escapes. Literal newlines
/// are allowed inside the quotes.
fn quoted_string(lexer: &mut Lexer, quote: char, kind: TokenKind) -> Result<(), Error> {
    let start = lexer.pos;
    let rest = lexer.remainder().to_string();

    let mut decoded = String::new();
    let mut chars = rest.char_indices().skip(1).peekable();
    let mut consumed = rest.len();
    let mut terminated = false;

    while let Some((offset, ch)) = chars.next() {
        if ch == quote {
            consumed = offset + ch.len_utf8();
            terminated = true;
            break;
        }

        if ch != '\\' {
            decoded.push(ch);
            continue;
        }

        let escape_pos = Position((start + offset as i32) as u32, Rc::clone(&lexer.file));
        let escaped = match chars.next() {
            Some((_, c)) => c,
            None => break, // lone backslash at end of input
        };

        match escaped {
            '"' => decoded.push('"'),
            '\'' => decoded.push('\''),
            '\\' => decoded.push('\\'),
            '/' => decoded.push('/'),
            'b' => decoded.push('\u{0008}'),
            'f' => decoded.push('\u{000C}'),
            'n' => decoded.push('\n'),
            'r' => decoded.push('\r'),
            't' => decoded.push('\t'),
            'u' => {
                let mut hex = String::new();
                for _ in 0..4 {
                    match chars.peek() {
                        Some((_, c)) if c.is_ascii_hexdigit() => {
                            hex.push(*c);
                            chars.next();
                        }
                        _ => {
                            return Err(Error::new(
                                ErrorImpl::InvalidEscape {
                                    sequence: format!("\\u{}", hex),
                                },
                                escape_pos,
                            ));
                        }
                    }
                }

                let code = u32::from_str_radix(&hex, 16).unwrap();
                match char::from_u32(code) {
                    Some(c) => decoded.push(c),
                    None => {
                        return Err(Error::new(
                            ErrorImpl::InvalidEscape {
                                sequence: format!("\\u{}", hex),
                            },
                            escape_pos,
                        ));
                    }
                }
            }
            other => {
                return Err(Error::new(
                    ErrorImpl::InvalidEscape {
                        sequence: format!("\\{}", other),
                    },
                    escape_pos,
                ));
            }
        }
    }

    if !terminated {
        return Err(Error::new(
            ErrorImpl::UnterminatedString,
            Position(start as u32, Rc::clone(&lexer.file)),
        ));
    }

    lexer.advance_n(consumed as i32);
    lexer.push(MK_TOKEN!(
        kind,
        decoded,
        Span {
            start: Position(start as u32, Rc::clone(&lexer.file)),
            end: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        }
    ));

    Ok(())
}

/// Scans an `@"…"` or `@'…'` literal. The single rule: a doubled quote is a
/// literal quote; backslashes pass through untouched.
fn verbatim_string(lexer: &mut Lexer, quote: char, kind: TokenKind) -> Result<(), Error> {
    let start = lexer.pos;
    let rest = lexer.remainder().to_string();

    let mut decoded = String::new();
    let mut chars = rest.char_indices().skip(2).peekable();
    let mut consumed = rest.len();
    let mut terminated = false;

    while let Some((offset, ch)) = chars.next() {
        if ch != quote {
            decoded.push(ch);
            continue;
        }

        if let Some((_, next)) = chars.peek() {
            if *next == quote {
                decoded.push(quote);
                chars.next();
                continue;
            }
        }

        consumed = offset + ch.len_utf8();
        terminated = true;
        break;
    }

    if !terminated {
        return Err(Error::new(
            ErrorImpl::UnterminatedString,
            Position(start as u32, Rc::clone(&lexer.file)),
        ));
    }

    lexer.advance_n(consumed as i32);
    lexer.push(MK_TOKEN!(
        kind,
        decoded,
        Span {
            start: Position(start as u32, Rc::clone(&lexer.file)),
            end: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        }
    ));

    Ok(())
}

/// Scans a `|||` block string.
///
/// The opening bars are followed by optional spaces and a newline. The
/// leading whitespace of the first non-blank line is the block indentation;
/// it is stripped from every content line. A line that does not start with
/// the block indentation must be whitespace followed by exactly three bars,
/// which terminate the string; lexing resumes right after them.
pub fn block_string_handler(lexer: &mut Lexer, _regex: Regex) -> Result<(), Error> {
    let start = lexer.pos;
    let rest = lexer.remainder().to_string();
    let bytes = rest.as_bytes();

    let unterminated = |lexer: &Lexer| {
        Error::new(
            ErrorImpl::UnterminatedString,
            Position(start as u32, Rc::clone(&lexer.file)),
        )
    };

    let mut i = 3; // past the opening `|||`

    while i < bytes.len() && is_inline_space(bytes[i]) {
        i += 1;
    }
    if i >= bytes.len() {
        return Err(unterminated(lexer));
    }
    if bytes[i] != b'\n' {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: String::from("|||"),
                message: String::from("the opening `|||` must be followed by a newline"),
            },
            Position((start + i as i32) as u32, Rc::clone(&lexer.file)),
        ));
    }
    i += 1;

    let mut content = String::new();

    // Fully blank leading lines contribute a newline each and do not take
    // part in measuring the indentation.
    while i < bytes.len() && bytes[i] == b'\n' {
        content.push('\n');
        i += 1;
    }
    if i >= bytes.len() {
        return Err(unterminated(lexer));
    }

    let indent_start = i;
    while i < bytes.len() && is_inline_space(bytes[i]) {
        i += 1;
    }
    let indent = rest[indent_start..i].to_string();
    if indent.is_empty() {
        return Err(Error::new(
            ErrorImpl::InconsistentIndentation,
            Position((start + indent_start as i32) as u32, Rc::clone(&lexer.file)),
        ));
    }

    // First content line, indentation already consumed.
    match take_line(&rest, i) {
        Some((line, next)) => {
            content.push_str(line);
            i = next;
        }
        None => return Err(unterminated(lexer)),
    }

    loop {
        if i >= bytes.len() {
            return Err(unterminated(lexer));
        }

        if bytes[i] == b'\n' {
            content.push('\n');
            i += 1;
            continue;
        }

        if rest[i..].starts_with(indent.as_str()) {
            match take_line(&rest, i + indent.len()) {
                Some((line, next)) => {
                    content.push_str(line);
                    i = next;
                }
                None => return Err(unterminated(lexer)),
            }
            continue;
        }

        // Less indentation than the block: this line has to terminate the
        // string with exactly three bars.
        while i < bytes.len() && is_inline_space(bytes[i]) {
            i += 1;
        }
        let mut bars = 0;
        while i < bytes.len() && bytes[i] == b'|' {
            bars += 1;
            i += 1;
        }
        if bars != 3 {
            return Err(Error::new(
                ErrorImpl::InconsistentIndentation,
                Position((start + i as i32) as u32, Rc::clone(&lexer.file)),
            ));
        }
        break;
    }

    lexer.advance_n(i as i32);
    lexer.push(MK_TOKEN!(
        TokenKind::BlockString,
        content,
        Span {
            start: Position(start as u32, Rc::clone(&lexer.file)),
            end: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        }
    ));

    Ok(())
}

fn is_inline_space(byte: u8) -> bool {
    byte == b' ' || byte == b'\t' || byte == b'\r'
}

/// Returns the rest of the line starting at `from`, including its newline,
/// and the offset just past it. `None` when the input ends without one.
fn take_line(rest: &str, from: usize) -> Option<(&str, usize)> {
    let nl = rest[from..].find('\n')?;
    Some((&rest[from..from + nl + 1], from + nl + 1))
}
