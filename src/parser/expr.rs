use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{
            BinaryExpr, BooleanExpr, CallExpr, InSuperExpr, IndexExpr, MemberExpr, NullExpr,
            NumberExpr, OuterExpr, ParenExpr, SelfExpr, SliceExpr, StringExpr, SuperExpr,
            SymbolExpr, UnaryExpr,
        },
        members::{NamedArg, StringKind, SuperKey},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// The Pratt loop: parse a NUD, then fold in LED handlers while the next
/// token binds more tightly than `bp`. Left associativity falls out of the
/// strict comparison; a token with a binding power but no LED handler (every
/// NUD-only token) simply ends the expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("an expression"),
                    found: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        }
    };

    let mut left = nud_fn(parser)?;

    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(led_fn) => *led_fn,
            None => break,
        };

        let operator_bp = *parser.get_bp_lookup().get(&token_kind).unwrap();
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance();
            Ok(ExprWrapper::new(NumberExpr {
                lexeme: token.value.clone(),
                span: token.span.clone(),
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(ExprWrapper::new(SymbolExpr {
                value: token.value.clone(),
                span: token.span.clone(),
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("a literal"),
                found: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let kind = match parser.current_token_kind() {
        TokenKind::DoubleString => StringKind::Double,
        TokenKind::SingleString => StringKind::Single,
        TokenKind::VerbatimDoubleString => StringKind::VerbatimDouble,
        TokenKind::VerbatimSingleString => StringKind::VerbatimSingle,
        TokenKind::BlockString => StringKind::Block,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("a string literal"),
                    found: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ))
        }
    };

    let token = parser.advance();
    Ok(ExprWrapper::new(StringExpr {
        value: token.value.clone(),
        kind,
        span: token.span.clone(),
    }))
}

pub fn parse_literal_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.advance().clone();
    let span = token.span;

    match token.kind {
        TokenKind::Null => Ok(ExprWrapper::new(NullExpr { span })),
        TokenKind::True => Ok(ExprWrapper::new(BooleanExpr { value: true, span })),
        TokenKind::False => Ok(ExprWrapper::new(BooleanExpr { value: false, span })),
        TokenKind::SelfKw => Ok(ExprWrapper::new(SelfExpr { span })),
        TokenKind::Dollar => Ok(ExprWrapper::new(OuterExpr { span })),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("a literal"),
                found: token.value,
            },
            span.start,
        )),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left,
        operator: operator_token,
        right,
    }))
}

/// `in` is relational, except that a bare `super` on its right is the
/// dedicated `expr in super` construct. `super` followed by `.` or `[` is an
/// ordinary super-index expression and falls through to the binary case.
pub fn parse_in_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    if parser.current_token_kind() == TokenKind::Super
        && parser.peek_kind(1) != TokenKind::Dot
        && parser.peek_kind(1) != TokenKind::OpenBracket
    {
        let super_token = parser.advance().clone();
        return Ok(ExprWrapper::new(InSuperExpr {
            span: Span {
                start: left.get_span().start.clone(),
                end: super_token.span.end,
            },
            target: left,
        }));
    }

    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left,
        operator: operator_token,
        right,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprWrapper::new(UnaryExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: operand.get_span().end.clone(),
        },
        operator: operator_token,
        operand,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let open = parser.advance().clone();
    let inner = parse_expr(parser, BindingPower::Default)?;
    let close = parser.expect(TokenKind::CloseParen, "`)`")?;

    Ok(ExprWrapper::new(ParenExpr {
        inner,
        span: Span {
            start: open.span.start,
            end: close.span.end,
        },
    }))
}

pub fn parse_member_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    parser.advance(); // .
    let member = parser.expect(TokenKind::Identifier, "an identifier after `.`")?;

    Ok(ExprWrapper::new(MemberExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: member.span.end,
        },
        target: left,
        member: member.value,
    }))
}

/// `target[...]`: with no colon inside the brackets this is a computed
/// index; any colon makes it a slice with up to three optional parts. The
/// doubled colon token counts as two.
pub fn parse_bracket_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    parser.advance(); // [

    let start = if parser.current_token_kind().is_colon() {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    if parser.current_token_kind() == TokenKind::CloseBracket {
        let close = parser.advance().clone();
        // `start` must be present here: an immediate `]` would have failed
        // inside parse_expr above, and a colon skips this branch.
        let index = start.unwrap();
        return Ok(ExprWrapper::new(IndexExpr {
            span: Span {
                start: left.get_span().start.clone(),
                end: close.span.end,
            },
            target: left,
            index,
        }));
    }

    let mut colons = 0;
    let mut end = None;
    let mut step = None;

    while parser.current_token_kind() != TokenKind::CloseBracket {
        let token = parser.current_token().clone();
        colons += match token.kind {
            TokenKind::Colon => 1,
            TokenKind::ColonColon => 2,
            TokenKind::ColonColonColon => 3,
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: String::from("`:` or `]`"),
                        found: token.value,
                    },
                    token.span.start,
                ))
            }
        };
        parser.advance();

        if colons > 2 {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value,
                    message: String::from("a slice takes at most two colons"),
                },
                token.span.start,
            ));
        }

        if parser.current_token_kind() == TokenKind::CloseBracket
            || parser.current_token_kind().is_colon()
        {
            continue;
        }

        let part = parse_expr(parser, BindingPower::Default)?;
        if colons == 1 {
            end = Some(part);
        } else {
            step = Some(part);
        }
    }

    let close = parser.advance().clone();

    Ok(ExprWrapper::new(SliceExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: close.span.end,
        },
        target: left,
        start,
        end,
        step,
    }))
}

/// A call. Positional arguments must precede named ones; a trailing
/// `tailstrict` keyword after the closing paren marks the strictness hint.
pub fn parse_call_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    parser.advance(); // (

    let mut args = vec![];
    let mut named_args: Vec<NamedArg> = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        if parser.current_token_kind() == TokenKind::Identifier
            && parser.peek_kind(1) == TokenKind::Assignment
        {
            let name = parser.advance().value.clone();
            parser.advance(); // =
            let value = parse_expr(parser, BindingPower::Default)?;
            named_args.push(NamedArg { name, value });
        } else {
            if !named_args.is_empty() {
                let token = parser.current_token();
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: token.value.clone(),
                        message: String::from("positional arguments must precede named arguments"),
                    },
                    token.span.start.clone(),
                ));
            }
            args.push(parse_expr(parser, BindingPower::Default)?);
        }

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    let close = parser.expect(TokenKind::CloseParen, "`)`")?;
    let mut end = close.span.end;

    let tailstrict = if parser.current_token_kind() == TokenKind::Tailstrict {
        end = parser.advance().span.end.clone();
        true
    } else {
        false
    };

    Ok(ExprWrapper::new(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end,
        },
        callee: left,
        args,
        named_args,
        tailstrict,
    }))
}

/// `super.id` and `super[expr]`; a bare `super` is only legal as the right
/// side of `in`, which the `in` handler consumes before this runs.
pub fn parse_super_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let super_token = parser.advance().clone();

    match parser.current_token_kind() {
        TokenKind::Dot => {
            parser.advance();
            let member = parser.expect(TokenKind::Identifier, "an identifier after `super.`")?;
            Ok(ExprWrapper::new(SuperExpr {
                key: SuperKey::Member(member.value),
                span: Span {
                    start: super_token.span.start,
                    end: member.span.end,
                },
            }))
        }
        TokenKind::OpenBracket => {
            parser.advance();
            let index = parse_expr(parser, BindingPower::Default)?;
            let close = parser.expect(TokenKind::CloseBracket, "`]`")?;
            Ok(ExprWrapper::new(SuperExpr {
                key: SuperKey::Index(index),
                span: Span {
                    start: super_token.span.start,
                    end: close.span.end,
                },
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("`.` or `[` after `super`"),
                found: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}
