/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST definitions and traits
/// - expressions: Definitions for the expression node types
/// - members: Object members, bindings, parameters and comprehension clauses
pub mod ast;
pub mod expressions;
pub mod members;
