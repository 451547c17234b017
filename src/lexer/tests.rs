//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals and the leading-zero rule
//! - The four quoted string forms and block strings
//! - Operators, punctuation and greedy multi-character tokens
//! - Comments and the comment span side channel
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{CommentKind, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let source = "null true false self super local function if then else error import importstr importbin for in tailstrict assert".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Null);
    assert_eq!(tokens[1].kind, TokenKind::True);
    assert_eq!(tokens[2].kind, TokenKind::False);
    assert_eq!(tokens[3].kind, TokenKind::SelfKw);
    assert_eq!(tokens[4].kind, TokenKind::Super);
    assert_eq!(tokens[5].kind, TokenKind::Local);
    assert_eq!(tokens[6].kind, TokenKind::Function);
    assert_eq!(tokens[7].kind, TokenKind::If);
    assert_eq!(tokens[8].kind, TokenKind::Then);
    assert_eq!(tokens[9].kind, TokenKind::Else);
    assert_eq!(tokens[10].kind, TokenKind::ErrorKw);
    assert_eq!(tokens[11].kind, TokenKind::Import);
    assert_eq!(tokens[12].kind, TokenKind::Importstr);
    assert_eq!(tokens[13].kind, TokenKind::Importbin);
    assert_eq!(tokens[14].kind, TokenKind::For);
    assert_eq!(tokens[15].kind, TokenKind::In);
    assert_eq!(tokens[16].kind, TokenKind::Tailstrict);
    assert_eq!(tokens[17].kind, TokenKind::Assert);
    assert_eq!(tokens[18].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore importer".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    // A keyword prefix does not make an identifier a keyword
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "importer");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 0.5 1e10 2.5e-3 6E+7 1.".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].value, "0.5");
    assert_eq!(tokens[4].value, "1e10");
    assert_eq!(tokens[5].value, "2.5e-3");
    assert_eq!(tokens[6].value, "6E+7");
    assert_eq!(tokens[7].value, "1.");
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_leading_zero() {
    // `007` must not lex as one number; the zero stops the token
    let source = "007".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "0");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "7");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_double_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "quote\"q" "sq\'s" "\u0041A""#.to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::DoubleString);
    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "quote\"q");
    assert_eq!(tokens[4].value, "sq's");
    assert_eq!(tokens[5].value, "AA");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_single_string() {
    let source = r#"'hello' 'a\'b' 'c"d'"#.to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::SingleString);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "a'b");
    assert_eq!(tokens[2].value, "c\"d");
}

#[test]
fn test_tokenize_verbatim_strings() {
    let source = r#"@"no\nescape" @"doubled""quote" @'single''q'"#.to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::VerbatimDoubleString);
    assert_eq!(tokens[0].value, "no\\nescape");
    assert_eq!(tokens[1].kind, TokenKind::VerbatimDoubleString);
    assert_eq!(tokens[1].value, "doubled\"quote");
    assert_eq!(tokens[2].kind, TokenKind::VerbatimSingleString);
    assert_eq!(tokens[2].value, "single'q");
}

#[test]
fn test_tokenize_invalid_escape() {
    let source = r#""bad\q""#.to_string();
    let result = tokenize(source, Some("test.jsonnet".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "InvalidEscape");
}

#[test]
fn test_tokenize_short_unicode_escape() {
    // \u takes exactly four hex digits
    let source = r#""bad\u12""#.to_string();
    let result = tokenize(source, Some("test.jsonnet".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "InvalidEscape");
}

#[test]
fn test_tokenize_unterminated_string() {
    let source = r#""no end"#.to_string();
    let result = tokenize(source, Some("test.jsonnet".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnterminatedString");
}

#[test]
fn test_tokenize_block_string() {
    let source = "|||\n  foo\n  bar\n|||".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::BlockString);
    assert_eq!(tokens[0].value, "foo\nbar\n");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_block_string_deeper_indentation_kept() {
    let source = "|||\n  foo\n    indented\n  bar\n|||".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].value, "foo\n  indented\nbar\n");
}

#[test]
fn test_tokenize_block_string_blank_lines() {
    let source = "|||\n  foo\n\n  bar\n|||".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].value, "foo\n\nbar\n");
}

#[test]
fn test_tokenize_block_string_inconsistent_indentation() {
    let source = "|||\n    foo\n  bar\n|||".to_string();
    let result = tokenize(source, Some("test.jsonnet".to_string()));

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "InconsistentIndentation"
    );
}

#[test]
fn test_tokenize_block_string_unterminated() {
    let source = "x + |||\n  foo\n  bar\n".to_string();
    let result = tokenize(source, Some("test.jsonnet".to_string()));

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnterminatedString");
    // Reported at the offset of the opening `|||`
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_block_string_resumes_after_bars() {
    let source = "|||\n  foo\n||| + x".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::BlockString);
    assert_eq!(tokens[0].value, "foo\n");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == != < > <= >= << >> & ^ | && || ! ~ =".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Percent);
    assert_eq!(tokens[5].kind, TokenKind::Equals);
    assert_eq!(tokens[6].kind, TokenKind::NotEquals);
    assert_eq!(tokens[7].kind, TokenKind::Less);
    assert_eq!(tokens[8].kind, TokenKind::Greater);
    assert_eq!(tokens[9].kind, TokenKind::LessEquals);
    assert_eq!(tokens[10].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[11].kind, TokenKind::ShiftLeft);
    assert_eq!(tokens[12].kind, TokenKind::ShiftRight);
    assert_eq!(tokens[13].kind, TokenKind::Ampersand);
    assert_eq!(tokens[14].kind, TokenKind::Caret);
    assert_eq!(tokens[15].kind, TokenKind::Pipe);
    assert_eq!(tokens[16].kind, TokenKind::And);
    assert_eq!(tokens[17].kind, TokenKind::Or);
    assert_eq!(tokens[18].kind, TokenKind::Not);
    assert_eq!(tokens[19].kind, TokenKind::Tilde);
    assert_eq!(tokens[20].kind, TokenKind::Assignment);
    assert_eq!(tokens[21].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_colons_greedy() {
    let source = "::: :: : a:::1".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::ColonColonColon);
    assert_eq!(tokens[1].kind, TokenKind::ColonColon);
    assert_eq!(tokens[2].kind, TokenKind::Colon);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].kind, TokenKind::ColonColonColon);
    assert_eq!(tokens[5].kind, TokenKind::Number);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } [ ] . , ; $".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[5].kind, TokenKind::CloseBracket);
    assert_eq!(tokens[6].kind, TokenKind::Dot);
    assert_eq!(tokens[7].kind, TokenKind::Comma);
    assert_eq!(tokens[8].kind, TokenKind::Semicolon);
    assert_eq!(tokens[9].kind, TokenKind::Dollar);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_comments_skipped() {
    let source = "1 // line\n+ # hash\n2 /* block */ + 3".to_string();
    let (tokens, comments) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::Plus);
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[5].kind, TokenKind::EOF);

    assert_eq!(comments.len(), 3);
    assert_eq!(comments[0].kind, CommentKind::Line);
    assert_eq!(comments[1].kind, CommentKind::Hash);
    assert_eq!(comments[2].kind, CommentKind::Block);
}

#[test]
fn test_tokenize_comment_spans() {
    let source = "1 // rest\n2".to_string();
    let (_, comments) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].span.start.0, 2);
    assert_eq!(comments[0].span.end.0, 9);
}

#[test]
fn test_tokenize_unterminated_block_comment() {
    let source = "1 /* no end".to_string();
    let result = tokenize(source, Some("test.jsonnet".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnterminatedComment");
}

#[test]
fn test_tokenize_unrecognised_character() {
    let source = "a ? b".to_string();
    let result = tokenize(source, Some("test.jsonnet".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  local   x   =   42  ".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Local);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_spans() {
    let source = "ab + 12".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 7);
}

#[test]
fn test_tokenize_empty_string_literal() {
    let source = r#""""#.to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::DoubleString);
    assert_eq!(tokens[0].value, "");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_string_forms_decode_identically() {
    // The same logical content written in every quoting form
    let source = "\"a'b\\\"c\" 'a\\'b\"c' @\"a'b\"\"c\" @'a''b\"c' |||\n  a'b\"c\n|||".to_string();
    let (tokens, _) = tokenize(source, Some("test.jsonnet".to_string())).unwrap();

    assert_eq!(tokens[0].value, "a'b\"c");
    assert_eq!(tokens[1].value, "a'b\"c");
    assert_eq!(tokens[2].value, "a'b\"c");
    assert_eq!(tokens[3].value, "a'b\"c");
    assert_eq!(tokens[4].value, "a'b\"c\n");
}
