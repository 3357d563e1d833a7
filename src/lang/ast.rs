use super::Column;
use std::rc::Rc;

/// One parsed BASIC line. Each variant owns the operands it needs.
#[derive(Debug, PartialEq)]
pub enum Statement {
    Clear(Column),
    End(Column),
    Goto(Column, u16),
    Help(Column),
    If(Column, Expression, Comparison, Expression, u16),
    Input(Column, Ident),
    Let(Column, Ident, Expression),
    List(Column),
    Print(Column, Expression),
    Quit(Column),
    Rem(Column),
    Run(Column),
}

/// Variable names are shared between the AST and variable memory.
pub type Ident = Rc<str>;

#[derive(Debug, PartialEq)]
pub enum Expression {
    Constant(Column, i32),
    Identifier(Column, Ident),
    Compound(Column, Arithmetic, Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Arithmetic {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Comparison {
    Equal,
    Less,
    Greater,
}

impl std::fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Arithmetic::*;
        match self {
            Add => write!(f, "+"),
            Subtract => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Comparison::*;
        match self {
            Equal => write!(f, "="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Constant(_, n) => write!(f, "{}", n),
            Identifier(_, ident) => write!(f, "{}", ident),
            Compound(_, op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}
