use std::fmt::Display;

/// Expression
///
/// Every variant exclusively owns its children. Grouping parentheses leave no
/// trace in the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal, e.g. `1.5`
    Number { value: f64 },
    /// Variable reference, e.g. `x`
    Variable { name: String },
    /// Binary infix operation, e.g. `a + b`
    Binary {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Function call, e.g. `foo(x, 1)`
    Call { callee: String, arguments: Vec<Expr> },
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number { value }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable { name: name.into() }
    }

    pub fn binary(operator: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Expr::Call {
            callee: callee.into(),
            arguments,
        }
    }
}

/// Renders the expression as an s-expression, e.g. `(+ 1 (* 2 3))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number { value } => write!(f, "{}", value),
            Expr::Variable { name } => write!(f, "{}", name),
            Expr::Binary {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator, left, right),
            Expr::Call { callee, arguments } => {
                write!(f, "(call {}", callee)?;
                for argument in arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
