use std::fmt::Display;

use super::expressions::Expr;

/// Name given to the synthesized prototype wrapping a bare top-level
/// expression.
pub const ANONYMOUS_FUNCTION_NAME: &str = "__anon_expr";

/// Prototype
///
/// A function's name and parameter names, in source order. Duplicate
/// parameter names are kept as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub parameters: Vec<String>,
}

impl Prototype {
    pub fn new(name: impl Into<String>, parameters: Vec<String>) -> Self {
        Prototype {
            name: name.into(),
            parameters,
        }
    }

    /// The zero-parameter prototype used for top-level expressions.
    pub fn anonymous() -> Self {
        Prototype::new(ANONYMOUS_FUNCTION_NAME, vec![])
    }

    pub fn is_anonymous(&self) -> bool {
        self.name == ANONYMOUS_FUNCTION_NAME && self.parameters.is_empty()
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.name)?;
        for parameter in &self.parameters {
            write!(f, " {}", parameter)?;
        }
        write!(f, ")")
    }
}

/// Function definition: a prototype and the expression forming its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(def {} {})", self.prototype, self.body)
    }
}

/// One successfully parsed top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    /// `def name(params) body`
    Definition(Function),
    /// `extern name(params)`
    Extern(Prototype),
    /// A bare expression wrapped in an anonymous prototype
    Expression(Function),
}

impl TopLevel {
    pub fn prototype(&self) -> &Prototype {
        match self {
            TopLevel::Definition(function) | TopLevel::Expression(function) => &function.prototype,
            TopLevel::Extern(prototype) => prototype,
        }
    }
}

impl Display for TopLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopLevel::Definition(function) | TopLevel::Expression(function) => {
                write!(f, "{}", function)
            }
            TopLevel::Extern(prototype) => write!(f, "(extern {})", prototype),
        }
    }
}
