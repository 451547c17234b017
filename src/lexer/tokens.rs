use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("null", TokenKind::Null);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("self", TokenKind::SelfKw);
        map.insert("super", TokenKind::Super);
        map.insert("local", TokenKind::Local);
        map.insert("function", TokenKind::Function);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("error", TokenKind::ErrorKw);
        map.insert("import", TokenKind::Import);
        map.insert("importstr", TokenKind::Importstr);
        map.insert("importbin", TokenKind::Importbin);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map.insert("tailstrict", TokenKind::Tailstrict);
        map.insert("assert", TokenKind::Assert);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    // The four quoted string forms plus block strings; the token value is
    // always the decoded content.
    DoubleString,
    SingleString,
    VerbatimDoubleString,
    VerbatimSingleString,
    BlockString,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    ShiftLeft,
    ShiftRight,

    Or,
    And,
    Pipe,
    Caret,
    Ampersand,
    Tilde,

    Dot,
    Semicolon,
    Colon,
    ColonColon,
    ColonColonColon,
    Comma,
    Dollar,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Null,
    True,
    False,
    SelfKw,
    Super,
    Local,
    Function,
    If,
    Then,
    Else,
    ErrorKw,
    Import,
    Importstr,
    Importbin,
    For,
    In,
    Tailstrict,
    Assert,
}

impl TokenKind {
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            TokenKind::DoubleString
                | TokenKind::SingleString
                | TokenKind::VerbatimDoubleString
                | TokenKind::VerbatimSingleString
                | TokenKind::BlockString
        )
    }

    pub fn is_colon(&self) -> bool {
        matches!(
            self,
            TokenKind::Colon | TokenKind::ColonColon | TokenKind::ColonColonColon
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

/// The comment forms the lexer skips. Spans are kept as a side channel for
/// source-faithful consumers; comments are never tokens.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CommentKind {
    Line,
    Hash,
    Block,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub kind: CommentKind,
    pub span: Span,
}
