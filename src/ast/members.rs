use super::ast::ExprWrapper;

/// The quoting form a string literal was written in. Consumers that re-emit
/// source need this next to the decoded content.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StringKind {
    Double,
    Single,
    VerbatimDouble,
    VerbatimSingle,
    Block,
}

/// Field visibility, one colon per level: `:` visible, `::` hidden,
/// `:::` forced.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Visibility {
    Visible,
    Hidden,
    Forced,
}

/// A field name: bare identifier, string literal, or computed `[expr]`.
#[derive(Debug, Clone)]
pub enum FieldName {
    Name(String),
    String { value: String, kind: StringKind },
    Computed(ExprWrapper),
}

/// One object field. `params` is present for the method-sugar form
/// `f(x): body`, which cannot also be additive.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: FieldName,
    pub additive: bool,
    pub visibility: Visibility,
    pub params: Option<Vec<Param>>,
    pub value: ExprWrapper,
}

/// An object member. A bare member is never an expression on its own.
#[derive(Debug, Clone)]
pub enum Member {
    Local(Bind),
    Assert {
        condition: ExprWrapper,
        message: Option<ExprWrapper>,
    },
    Field(Field),
}

/// The two mutually exclusive object shapes. A comprehension holds exactly
/// one computed-name field; literal fields cannot appear next to it.
#[derive(Debug, Clone)]
pub enum ObjectBody {
    Members(Vec<Member>),
    Comprehension {
        locals: Vec<Bind>,
        key: ExprWrapper,
        value: ExprWrapper,
        clauses: Vec<CompClause>,
    },
}

/// The two mutually exclusive array shapes.
#[derive(Debug, Clone)]
pub enum ArrayBody {
    Elements(Vec<ExprWrapper>),
    Comprehension {
        expr: ExprWrapper,
        clauses: Vec<CompClause>,
    },
}

/// A `for`/`if` clause of a comprehension. Clauses nest outer-to-inner in
/// the order they were written; the first clause is always a `for`.
#[derive(Debug, Clone)]
pub enum CompClause {
    For { var: String, expr: ExprWrapper },
    If { cond: ExprWrapper },
}

/// A `local` binding, `name = value` or the function sugar
/// `name(params) = value`. Binds in one `local` are mutually recursive.
#[derive(Debug, Clone)]
pub struct Bind {
    pub name: String,
    pub params: Option<Vec<Param>>,
    pub value: ExprWrapper,
}

/// A function parameter with an optional default expression.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub default: Option<ExprWrapper>,
}

/// A named argument in a call, `name=expr`.
#[derive(Debug, Clone)]
pub struct NamedArg {
    pub name: String,
    pub value: ExprWrapper,
}

/// The three import keywords: `import`, `importstr`, `importbin`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ImportKind {
    Code,
    Text,
    Binary,
}

/// The restricted `super` addressing forms, `super.id` and `super[expr]`.
#[derive(Debug, Clone)]
pub enum SuperKey {
    Member(String),
    Index(ExprWrapper),
}
