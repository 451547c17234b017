use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    strings::{
        block_string_handler, double_string_handler, single_string_handler,
        verbatim_double_handler, verbatim_single_handler,
    },
    tokens::{Comment, CommentKind, Token, TokenKind, RESERVED_LOOKUP},
};

pub type RegexHandler = fn(&mut Lexer, Regex) -> Result<(), Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    comments: Vec<Comment>,
    source: String,
    pub(super) pos: i32,
    pub(super) file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<input>"))
        };

        // Ordering matters: longer operators sit above their prefixes
        // (`|||` above `||` above `|`, `:::` above `::` above `:`), and the
        // comment openers sit above `/`.
        Lexer {
            pos: 0,
            tokens: vec![],
            comments: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("[_a-zA-Z][_a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("(0|[1-9][0-9]*)(\\.[0-9]*)?([eE][+-]?[0-9]+)?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("//[^\n]*").unwrap(), handler: line_comment_handler },
                RegexPattern { regex: Regex::new("#[^\n]*").unwrap(), handler: hash_comment_handler },
                RegexPattern { regex: Regex::new("/\\*").unwrap(), handler: block_comment_handler },
                RegexPattern { regex: Regex::new("@\"").unwrap(), handler: verbatim_double_handler },
                RegexPattern { regex: Regex::new("@'").unwrap(), handler: verbatim_single_handler },
                RegexPattern { regex: Regex::new("\"").unwrap(), handler: double_string_handler },
                RegexPattern { regex: Regex::new("'").unwrap(), handler: single_string_handler },
                RegexPattern { regex: Regex::new("\\|\\|\\|").unwrap(), handler: block_string_handler },
                RegexPattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
                RegexPattern { regex: Regex::new("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
                RegexPattern { regex: Regex::new("\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
                RegexPattern { regex: Regex::new("\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
                RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                RegexPattern { regex: Regex::new("<<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftLeft, "<<") },
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                RegexPattern { regex: Regex::new(">>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftRight, ">>") },
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                RegexPattern { regex: Regex::new(":::").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ColonColonColon, ":::") },
                RegexPattern { regex: Regex::new("::").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ColonColon, "::") },
                RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
                RegexPattern { regex: Regex::new("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new("\\$").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dollar, "$") },
                RegexPattern { regex: Regex::new("\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Pipe, "|") },
                RegexPattern { regex: Regex::new("\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") },
                RegexPattern { regex: Regex::new("&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&") },
                RegexPattern { regex: Regex::new("~").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Tilde, "~") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: i32) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos as usize..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let kind = if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        *kind
    } else {
        TokenKind::Identifier
    };

    lexer.push(MK_TOKEN!(
        kind,
        value.clone(),
        Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position((lexer.pos + value.len() as i32) as u32, Rc::clone(&lexer.file)),
        }
    ));
    lexer.advance_n(value.len() as i32);

    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    // The raw lexeme is kept verbatim; consumers pick their own numeric
    // representation. A leading zero never absorbs further digits, so `007`
    // falls apart into separate tokens and fails in the parser.
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        matched.clone(),
        Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position((lexer.pos + matched.len() as i32) as u32, Rc::clone(&lexer.file)),
        }
    ));
    lexer.advance_n(matched.len() as i32);

    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched as i32);

    Ok(())
}

fn line_comment_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    comment_to_eol(lexer, regex, CommentKind::Line);
    Ok(())
}

fn hash_comment_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    comment_to_eol(lexer, regex, CommentKind::Hash);
    Ok(())
}

fn comment_to_eol(lexer: &mut Lexer, regex: Regex, kind: CommentKind) {
    let matched = regex.find(lexer.remainder()).unwrap().end();

    lexer.push_comment(Comment {
        kind,
        span: Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position((lexer.pos + matched as i32) as u32, Rc::clone(&lexer.file)),
        },
    });
    lexer.advance_n(matched as i32);
}

fn block_comment_handler(lexer: &mut Lexer, _regex: Regex) -> Result<(), Error> {
    let start = lexer.pos;

    match lexer.remainder()[2..].find("*/") {
        Some(idx) => {
            // opening `/*` + body + closing `*/`
            let len = 2 + idx + 2;
            lexer.push_comment(Comment {
                kind: CommentKind::Block,
                span: Span {
                    start: Position(start as u32, Rc::clone(&lexer.file)),
                    end: Position((start + len as i32) as u32, Rc::clone(&lexer.file)),
                },
            });
            lexer.advance_n(len as i32);
            Ok(())
        }
        None => Err(Error::new(
            ErrorImpl::UnterminatedComment,
            Position(start as u32, Rc::clone(&lexer.file)),
        )),
    }
}

pub fn tokenize(
    source: String,
    file: Option<String>,
) -> Result<(Vec<Token>, Vec<Comment>), Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        let patterns = lex.patterns.clone();
        for pattern in patterns.iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, pattern.regex.clone())?;
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: lex.at().to_string(),
                },
                Position(lex.pos as u32, Rc::clone(&lex.file)),
            ));
        }
    }

    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span {
            start: Position(lex.pos as u32, Rc::clone(&lex.file)),
            end: Position(lex.pos as u32, Rc::clone(&lex.file)),
        }
    ));

    Ok((lex.tokens, lex.comments))
}
