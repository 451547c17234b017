use std::{any::Any, fmt::Debug};

/// Expression Types
///
/// The closed set of expression kinds in the AST. Every node is tagged with
/// exactly one of these; there are no statement forms in the language.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Null,
    Boolean,
    SelfRef,
    Outer,
    String,
    Number,
    Symbol,
    Object,
    Array,
    Binary,
    Unary,
    Member,
    Index,
    Slice,
    Super,
    Function,
    Call,
    Local,
    If,
    Error,
    Assert,
    InSuper,
    ObjectAddition,
    Import,
    Paren,
}

pub trait Expr: Debug {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the span of the expression.
    fn get_span(&self) -> &crate::Span;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper
/// methods. Trees are immutable once built; wrappers own their node and
/// nodes own their children.
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }
}

impl Expr for ExprWrapper {
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}
