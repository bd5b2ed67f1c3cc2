/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Prototypes, function definitions and top-level items
/// - expressions: The expression sum type
pub mod ast;
pub mod expressions;
