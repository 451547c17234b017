use std::any::Any;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expr, ExprType, ExprWrapper},
    members::{
        ArrayBody, Bind, ImportKind, NamedArg, ObjectBody, Param, StringKind, SuperKey,
    },
};

// LITERALS

/// The `null` literal.
#[derive(Debug, Clone)]
pub struct NullExpr {
    pub span: Span,
}

impl Expr for NullExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Null
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// The `true` and `false` literals.
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

impl Expr for BooleanExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// The `self` reference.
#[derive(Debug, Clone)]
pub struct SelfExpr {
    pub span: Span,
}

impl Expr for SelfExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::SelfRef
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// The `$` reference to the outermost object.
#[derive(Debug, Clone)]
pub struct OuterExpr {
    pub span: Span,
}

impl Expr for OuterExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Outer
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// String Expression
/// Carries the decoded content plus the quoting form it was written in.
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub value: String,
    pub kind: StringKind,
    pub span: Span,
}

impl Expr for StringExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::String
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Number Expression
/// Keeps the raw lexeme; consumers choose their own numeric precision.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub lexeme: String,
    pub span: Span,
}

impl Expr for NumberExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Number
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Symbol Expression
/// Represents an identifier reference.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for SymbolExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

// COMPOUND LITERALS

/// Object Expression
/// Either a member list or an object comprehension, never both.
#[derive(Debug, Clone)]
pub struct ObjectExpr {
    pub body: ObjectBody,
    pub span: Span,
}

impl Expr for ObjectExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Object
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Array Expression
/// Either an element list or an array comprehension, never both.
#[derive(Debug, Clone)]
pub struct ArrayExpr {
    pub body: ArrayBody,
    pub span: Span,
}

impl Expr for ArrayExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Array
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

// OPERATORS

/// Binary Expression
/// Represents a binary operation between two expressions.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Unary Expression
/// A prefix operation, one of `+ - ! ~`.
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: ExprWrapper,
    pub span: Span,
}

impl Expr for UnaryExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Unary
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

// ACCESS

/// Member access with a dot, `target.name`.
#[derive(Debug, Clone)]
pub struct MemberExpr {
    pub target: ExprWrapper,
    pub member: String,
    pub span: Span,
}

impl Expr for MemberExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Member
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Computed index, `target[index]` with no colon inside the brackets.
#[derive(Debug, Clone)]
pub struct IndexExpr {
    pub target: ExprWrapper,
    pub index: ExprWrapper,
    pub span: Span,
}

impl Expr for IndexExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Index
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Slice Expression
/// `target[start:end:step]` where each of the three parts may be omitted.
#[derive(Debug, Clone)]
pub struct SliceExpr {
    pub target: ExprWrapper,
    pub start: Option<ExprWrapper>,
    pub end: Option<ExprWrapper>,
    pub step: Option<ExprWrapper>,
    pub span: Span,
}

impl Expr for SliceExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Slice
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Super Expression
/// The restricted addressing forms `super.id` and `super[expr]`; a bare
/// `super` is not an expression.
#[derive(Debug, Clone)]
pub struct SuperExpr {
    pub key: SuperKey,
    pub span: Span,
}

impl Expr for SuperExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Super
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

// FUNCTIONS

/// Function Expression
/// An anonymous function literal, `function(params) body`.
#[derive(Debug, Clone)]
pub struct FunctionExpr {
    pub params: Vec<Param>,
    pub body: ExprWrapper,
    pub span: Span,
}

impl Expr for FunctionExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Function
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Call Expression
/// Positional arguments always precede named ones. `tailstrict` records the
/// strictness hint for the evaluator.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: ExprWrapper,
    pub args: Vec<ExprWrapper>,
    pub named_args: Vec<NamedArg>,
    pub tailstrict: bool,
    pub span: Span,
}

impl Expr for CallExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

// BINDING AND CONTROL FORMS

/// Local Expression
/// `local b1, b2, ...; body` — the binds are visible to each other and to
/// the body.
#[derive(Debug, Clone)]
pub struct LocalExpr {
    pub binds: Vec<Bind>,
    pub body: ExprWrapper,
    pub span: Span,
}

impl Expr for LocalExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Local
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// If Expression
/// A missing `else` stays `None`; what that means is the evaluator's call.
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub condition: ExprWrapper,
    pub then_branch: ExprWrapper,
    pub else_branch: Option<ExprWrapper>,
    pub span: Span,
}

impl Expr for IfExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::If
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `error expr` — a raise marker, not itself an error value.
#[derive(Debug, Clone)]
pub struct ErrorExpr {
    pub operand: ExprWrapper,
    pub span: Span,
}

impl Expr for ErrorExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Error
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Assert Expression
/// The expression form `assert cond : msg; body`, which sequences into a
/// trailing expression rather than into an enclosing object.
#[derive(Debug, Clone)]
pub struct AssertExpr {
    pub condition: ExprWrapper,
    pub message: Option<ExprWrapper>,
    pub body: ExprWrapper,
    pub span: Span,
}

impl Expr for AssertExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Assert
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `target in super` — distinct from the general `in` operator because the
/// right-hand side is the bare keyword.
#[derive(Debug, Clone)]
pub struct InSuperExpr {
    pub target: ExprWrapper,
    pub span: Span,
}

impl Expr for InSuperExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::InSuper
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Object Addition
/// `target { ... }`, an object literal juxtaposed against an expression at
/// additive precedence. The merge itself happens at evaluation time.
#[derive(Debug, Clone)]
pub struct ObjectAdditionExpr {
    pub target: ExprWrapper,
    pub object: ExprWrapper,
    pub span: Span,
}

impl Expr for ObjectAdditionExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::ObjectAddition
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Import Expression
/// One of `import`, `importstr`, `importbin` with a string-literal path.
/// Path resolution belongs to the consumer.
#[derive(Debug, Clone)]
pub struct ImportExpr {
    pub kind: ImportKind,
    pub path: String,
    pub span: Span,
}

impl Expr for ImportExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Import
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Paren Expression
/// Explicit grouping, kept as a node so re-printing stays source-faithful.
#[derive(Debug, Clone)]
pub struct ParenExpr {
    pub inner: ExprWrapper,
    pub span: Span,
}

impl Expr for ParenExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Paren
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
