//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level entry
//! point. The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing; the keyword-led forms and the object/array bodies
//! have their own handler modules.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix positions
//! - LED (left denotation) handlers for infix positions
//! - Binding powers for operator precedence

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::ExprWrapper,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup},
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the NUD/LED/binding-power lookup
/// tables, and tracks the current position in the token stream.
pub struct Parser {
    /// The list of tokens to parse, always terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source unit being parsed
    file: Rc<String>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token `n` positions ahead, or EOF when the
    /// stream runs out first.
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        match self.tokens.get(self.pos + n) {
            Some(token) => token.kind,
            None => TokenKind::EOF,
        }
    }

    /// Advances to the next token and returns the token that was current.
    /// The stream never advances past its final EOF token.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Expects a token of the specified kind, described for the error path.
    ///
    /// Returns the consumed token on a match, otherwise an UnexpectedToken
    /// error positioned at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind, description: &str) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from(description),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        } else {
            Ok(self.advance().clone())
        }
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token. The token
    /// keeps its LED binding power when it already has one, so tokens like
    /// `-` and `[` can sit in both tables.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the position of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// The whole source unit is a single expression: the parser consumes one
/// expression at the loosest binding power and then requires the stream to
/// be exhausted. No partial tree is returned on failure.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<ExprWrapper, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    let root = parse_expr(&mut parser, BindingPower::Default)?;

    if parser.current_token_kind() != TokenKind::EOF {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnexpectedTrailingInput {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    }

    Ok(root)
}
