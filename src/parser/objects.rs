//! Parsing of object and array bodies: member lists, fields with their
//! separators and sugar forms, and the two comprehension shapes. The member
//! list and the comprehension are mutually exclusive shapes of the same
//! literal; which one an object is only becomes clear at its `for` clause,
//! so members are parsed first and validated when a `for` shows up.

use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{ArrayExpr, ObjectAdditionExpr, ObjectExpr},
        members::{ArrayBody, CompClause, Field, FieldName, Member, ObjectBody, StringKind, Visibility},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position, Span,
};

use super::{
    constructs::{parse_bind, parse_params},
    expr::parse_expr,
    lookups::BindingPower,
    parser::Parser,
};

pub fn parse_object_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let open = parser.advance().clone();
    let (body, end) = parse_object_body(parser)?;

    Ok(ExprWrapper::new(ObjectExpr {
        body,
        span: Span {
            start: open.span.start,
            end,
        },
    }))
}

/// Object addition, `expr { ... }`. Registered as a LED on `{` at the
/// additive tier; resolved purely by the token following the expression.
pub fn parse_object_addition_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let object = parse_object_expr(parser)?;

    Ok(ExprWrapper::new(ObjectAdditionExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: object.get_span().end.clone(),
        },
        target: left,
        object,
    }))
}

/// Parses everything between `{` and `}`, returning the body and the end
/// position of the closing brace.
fn parse_object_body(parser: &mut Parser) -> Result<(ObjectBody, Position), Error> {
    let mut members = vec![];

    loop {
        match parser.current_token_kind() {
            TokenKind::CloseCurly => {
                let close = parser.advance().clone();
                return Ok((ObjectBody::Members(members), close.span.end));
            }
            TokenKind::For => {
                return finish_object_comprehension(parser, members);
            }
            _ => {}
        }

        members.push(parse_member(parser)?);

        match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.advance();
            }
            TokenKind::CloseCurly | TokenKind::For => {}
            _ => {
                let token = parser.current_token();
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: String::from("`,` or `}`"),
                        found: token.value.clone(),
                    },
                    token.span.start.clone(),
                ));
            }
        }
    }
}

fn parse_member(parser: &mut Parser) -> Result<Member, Error> {
    match parser.current_token_kind() {
        TokenKind::Local => {
            parser.advance();
            Ok(Member::Local(parse_bind(parser)?))
        }
        TokenKind::Assert => {
            parser.advance();
            let condition = parse_expr(parser, BindingPower::Default)?;
            let message = if parser.current_token_kind() == TokenKind::Colon {
                parser.advance();
                Some(parse_expr(parser, BindingPower::Default)?)
            } else {
                None
            };
            Ok(Member::Assert { condition, message })
        }
        _ => Ok(Member::Field(parse_field(parser)?)),
    }
}

fn parse_field(parser: &mut Parser) -> Result<Field, Error> {
    let name = parse_fieldname(parser)?;

    // A `(` right after the name is the method sugar; it cannot be combined
    // with the `+` additive marker.
    let params = if parser.current_token_kind() == TokenKind::OpenParen {
        Some(parse_params(parser)?)
    } else {
        None
    };

    let additive = if parser.current_token_kind() == TokenKind::Plus {
        if params.is_some() {
            let token = parser.current_token();
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: String::from("a method field cannot be additive"),
                },
                token.span.start.clone(),
            ));
        }
        parser.advance();
        true
    } else {
        false
    };

    let visibility = match parser.current_token_kind() {
        TokenKind::Colon => Visibility::Visible,
        TokenKind::ColonColon => Visibility::Hidden,
        TokenKind::ColonColonColon => Visibility::Forced,
        _ => {
            let token = parser.current_token();
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("`:`, `::` or `:::`"),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }
    };
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Field {
        name,
        additive,
        visibility,
        params,
        value,
    })
}

fn parse_fieldname(parser: &mut Parser) -> Result<FieldName, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => Ok(FieldName::Name(parser.advance().value.clone())),
        TokenKind::DoubleString => Ok(string_fieldname(parser, StringKind::Double)),
        TokenKind::SingleString => Ok(string_fieldname(parser, StringKind::Single)),
        TokenKind::VerbatimDoubleString => Ok(string_fieldname(parser, StringKind::VerbatimDouble)),
        TokenKind::VerbatimSingleString => Ok(string_fieldname(parser, StringKind::VerbatimSingle)),
        TokenKind::BlockString => Ok(string_fieldname(parser, StringKind::Block)),
        TokenKind::OpenBracket => {
            parser.advance();
            let expr = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::CloseBracket, "`]`")?;
            Ok(FieldName::Computed(expr))
        }
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("a field name"),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    }
}

fn string_fieldname(parser: &mut Parser, kind: StringKind) -> FieldName {
    FieldName::String {
        value: parser.advance().value.clone(),
        kind,
    }
}

/// Called with the parser sitting on `for`, after some members have been
/// parsed. The members must amount to zero or more locals plus exactly one
/// plain field with a computed name; anything else cannot form an object
/// comprehension.
fn finish_object_comprehension(
    parser: &mut Parser,
    members: Vec<Member>,
) -> Result<(ObjectBody, Position), Error> {
    let reject = |parser: &Parser, message: &str| {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: String::from("for"),
                message: String::from(message),
            },
            parser.get_position(),
        )
    };

    let mut locals = vec![];
    let mut field: Option<(ExprWrapper, ExprWrapper)> = None;

    for member in members {
        match member {
            Member::Local(bind) => locals.push(bind),
            Member::Assert { .. } => {
                return Err(reject(parser, "an object comprehension cannot contain asserts"));
            }
            Member::Field(f) => {
                if field.is_some() {
                    return Err(reject(
                        parser,
                        "an object comprehension takes exactly one field",
                    ));
                }
                if f.params.is_some() {
                    return Err(reject(
                        parser,
                        "an object comprehension field cannot be a method",
                    ));
                }
                if f.additive {
                    return Err(reject(
                        parser,
                        "an object comprehension field cannot be additive",
                    ));
                }
                if f.visibility != Visibility::Visible {
                    return Err(reject(
                        parser,
                        "an object comprehension field must use a single `:`",
                    ));
                }
                match f.name {
                    FieldName::Computed(key) => field = Some((key, f.value)),
                    _ => {
                        return Err(reject(
                            parser,
                            "an object comprehension field name must be computed, `[expr]`",
                        ));
                    }
                }
            }
        }
    }

    let (key, value) = match field {
        Some(field) => field,
        None => {
            return Err(reject(
                parser,
                "an object comprehension requires a `[expr]: expr` field",
            ));
        }
    };

    let clauses = parse_comp_clauses(parser)?;
    let close = parser.expect(TokenKind::CloseCurly, "`}`")?;

    Ok((
        ObjectBody::Comprehension {
            locals,
            key,
            value,
            clauses,
        },
        close.span.end,
    ))
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let open = parser.advance().clone();

    if parser.current_token_kind() == TokenKind::CloseBracket {
        let close = parser.advance().clone();
        return Ok(ExprWrapper::new(ArrayExpr {
            body: ArrayBody::Elements(vec![]),
            span: Span {
                start: open.span.start,
                end: close.span.end,
            },
        }));
    }

    let first = parse_expr(parser, BindingPower::Default)?;

    // One generator expression followed by `for` (optionally after a comma)
    // is the comprehension form.
    if parser.current_token_kind() == TokenKind::For
        || (parser.current_token_kind() == TokenKind::Comma
            && parser.peek_kind(1) == TokenKind::For)
    {
        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        }
        let clauses = parse_comp_clauses(parser)?;
        let close = parser.expect(TokenKind::CloseBracket, "`]`")?;
        return Ok(ExprWrapper::new(ArrayExpr {
            body: ArrayBody::Comprehension {
                expr: first,
                clauses,
            },
            span: Span {
                start: open.span.start,
                end: close.span.end,
            },
        }));
    }

    let mut elements = vec![first];

    loop {
        match parser.current_token_kind() {
            TokenKind::CloseBracket => {
                break;
            }
            TokenKind::Comma => {
                parser.advance();
                if parser.current_token_kind() == TokenKind::CloseBracket {
                    break;
                }
                if parser.current_token_kind() == TokenKind::For {
                    let token = parser.current_token();
                    return Err(Error::new(
                        ErrorImpl::UnexpectedTokenDetailed {
                            token: token.value.clone(),
                            message: String::from(
                                "an array comprehension takes exactly one expression",
                            ),
                        },
                        token.span.start.clone(),
                    ));
                }
                elements.push(parse_expr(parser, BindingPower::Default)?);
            }
            _ => {
                let token = parser.current_token();
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: String::from("`,` or `]`"),
                        found: token.value.clone(),
                    },
                    token.span.start.clone(),
                ));
            }
        }
    }

    let close = parser.advance().clone();

    Ok(ExprWrapper::new(ArrayExpr {
        body: ArrayBody::Elements(elements),
        span: Span {
            start: open.span.start,
            end: close.span.end,
        },
    }))
}

/// Parses the `for`/`if` clause chain of a comprehension. The caller has
/// already established that the current token is `for`; clauses nest
/// left-to-right, outer first.
pub fn parse_comp_clauses(parser: &mut Parser) -> Result<Vec<CompClause>, Error> {
    let mut clauses = vec![];

    loop {
        match parser.current_token_kind() {
            TokenKind::For => {
                parser.advance();
                let var = parser.expect(TokenKind::Identifier, "a loop variable")?;
                parser.expect(TokenKind::In, "`in`")?;
                let expr = parse_expr(parser, BindingPower::Default)?;
                clauses.push(CompClause::For {
                    var: var.value,
                    expr,
                });
            }
            TokenKind::If => {
                parser.advance();
                let cond = parse_expr(parser, BindingPower::Default)?;
                clauses.push(CompClause::If { cond });
            }
            _ => break,
        }
    }

    Ok(clauses)
}
