//! NUD handlers for the keyword-led expression forms: `local`, `if`,
//! `function`, the imports, `error` and the expression form of `assert`.
//! These all sit on the loosest precedence tier and parse their trailing
//! expression at `Default`, so they extend as far right as possible.

use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{AssertExpr, ErrorExpr, FunctionExpr, IfExpr, ImportExpr, LocalExpr},
        members::{Bind, ImportKind, Param},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Parses a parenthesized parameter list, `(a, b=default, ...)`, trailing
/// comma allowed. Shared between function literals, method-sugar fields and
/// the `local f(x) = ...` bind sugar.
pub fn parse_params(parser: &mut Parser) -> Result<Vec<Param>, Error> {
    parser.expect(TokenKind::OpenParen, "`(`")?;

    let mut params = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        let name = parser.expect(TokenKind::Identifier, "a parameter name")?;

        let default = if parser.current_token_kind() == TokenKind::Assignment {
            parser.advance();
            Some(parse_expr(parser, BindingPower::Default)?)
        } else {
            None
        };

        params.push(Param {
            name: name.value,
            default,
        });

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen, "`)`")?;

    Ok(params)
}

/// Parses one binding, `name = expr` or the function sugar
/// `name(params) = expr`. Used both by `local` expressions and by `local`
/// object members.
pub fn parse_bind(parser: &mut Parser) -> Result<Bind, Error> {
    let name = parser.expect(TokenKind::Identifier, "a binding name")?;

    let params = if parser.current_token_kind() == TokenKind::OpenParen {
        Some(parse_params(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Assignment, "`=`")?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Bind {
        name: name.value,
        params,
        value,
    })
}

pub fn parse_local_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let mut binds = vec![parse_bind(parser)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        binds.push(parse_bind(parser)?);
    }

    parser.expect(TokenKind::Semicolon, "`;`")?;
    let body = parse_expr(parser, BindingPower::Default)?;

    Ok(ExprWrapper::new(LocalExpr {
        span: Span {
            start,
            end: body.get_span().end.clone(),
        },
        binds,
        body,
    }))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Then, "`then`")?;
    let then_branch = parse_expr(parser, BindingPower::Default)?;

    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    let end = match &else_branch {
        Some(branch) => branch.get_span().end.clone(),
        None => then_branch.get_span().end.clone(),
    };

    Ok(ExprWrapper::new(IfExpr {
        span: Span { start, end },
        condition,
        then_branch,
        else_branch,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let params = parse_params(parser)?;
    let body = parse_expr(parser, BindingPower::Default)?;

    Ok(ExprWrapper::new(FunctionExpr {
        span: Span {
            start,
            end: body.get_span().end.clone(),
        },
        params,
        body,
    }))
}

/// The three import forms. The path has to be a quoted or verbatim string
/// literal: computed paths and block strings are rejected here rather than
/// left for the import resolver.
pub fn parse_import_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let keyword = parser.advance().clone();
    let kind = match keyword.kind {
        TokenKind::Import => ImportKind::Code,
        TokenKind::Importstr => ImportKind::Text,
        TokenKind::Importbin => ImportKind::Binary,
        _ => unreachable!("registered only for the import keywords"),
    };

    match parser.current_token_kind() {
        TokenKind::BlockString => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: String::from("|||"),
                    message: String::from("block strings are not allowed as import paths"),
                },
                token.span.start.clone(),
            ))
        }
        kind_token if kind_token.is_string() => {
            let path = parser.advance().clone();
            Ok(ExprWrapper::new(ImportExpr {
                kind,
                path: path.value,
                span: Span {
                    start: keyword.span.start,
                    end: path.span.end,
                },
            }))
        }
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("a string literal import path"),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    }
}

pub fn parse_error_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();
    let operand = parse_expr(parser, BindingPower::Default)?;

    Ok(ExprWrapper::new(ErrorExpr {
        span: Span {
            start,
            end: operand.get_span().end.clone(),
        },
        operand,
    }))
}

/// The expression form `assert cond : msg; body`, distinct from the object
/// member: it sequences into the trailing expression.
pub fn parse_assert_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;

    let message = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon, "`;`")?;
    let body = parse_expr(parser, BindingPower::Default)?;

    Ok(ExprWrapper::new(AssertExpr {
        span: Span {
            start,
            end: body.get_span().end.clone(),
        },
        condition,
        message,
        body,
    }))
}
