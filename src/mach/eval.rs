use super::{Operation, Var};
use crate::lang::ast::Expression;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

impl Expression {
    /// Evaluate against variable memory. Errors point at the
    /// column of the node that failed.
    pub fn eval(&self, var: &Var) -> Result<i32> {
        use Expression::*;
        match self {
            Constant(_, n) => Ok(*n),
            Identifier(col, ident) => var.fetch(ident).map_err(|e| e.in_column(col)),
            Compound(col, op, lhs, rhs) => {
                let lhs = lhs.eval(var)?;
                let rhs = rhs.eval(var)?;
                Operation::arithmetic(*op, lhs, rhs).map_err(|e| e.in_column(col))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{lex, parse_expression, ErrorCode};
    use quickcheck::{quickcheck, Arbitrary, Gen};

    fn eval_str(s: &str, var: &Var) -> std::result::Result<i32, ErrorCode> {
        let (_, tokens) = lex(s);
        let expr = parse_expression(&tokens).map_err(|e| e.code())?;
        expr.eval(var).map_err(|e| e.code())
    }

    #[test]
    fn test_precedence() {
        let var = Var::new();
        assert_eq!(eval_str("2 + 3 * 4", &var), Ok(14));
        assert_eq!(eval_str("(2 + 3) * 4", &var), Ok(20));
        assert_eq!(eval_str("10 - 4 - 3", &var), Ok(3));
        assert_eq!(eval_str("-2 * -3", &var), Ok(6));
    }

    #[test]
    fn test_division() {
        let var = Var::new();
        assert_eq!(eval_str("7 / 2", &var), Ok(3));
        assert_eq!(eval_str("-7 / 2", &var), Ok(-3));
        assert_eq!(eval_str("1 / 0", &var), Err(ErrorCode::DivisionByZero));
        assert_eq!(eval_str("1 / (2 - 2)", &var), Err(ErrorCode::DivisionByZero));
    }

    #[test]
    fn test_variables() {
        let mut var = Var::new();
        var.store(&"X".into(), 5);
        assert_eq!(eval_str("X * X + 1", &var), Ok(26));
        assert_eq!(eval_str("X + Y", &var), Err(ErrorCode::UndefinedVariable));
    }

    #[test]
    fn test_error_column() {
        let var = Var::new();
        let (_, tokens) = lex("1 + Y");
        let e = parse_expression(&tokens).ok().and_then(|expr| expr.eval(&var).err());
        assert_eq!(e.map(|e| e.column()), Some(4..5));
    }

    /// Arithmetic trees without division, small enough never to overflow.
    #[derive(Clone, Debug)]
    enum Tree {
        Leaf(i16),
        Add(Box<Tree>, Box<Tree>),
        Sub(Box<Tree>, Box<Tree>),
        Mul(Box<Tree>, Box<Tree>),
    }

    impl Tree {
        fn gen_depth(g: &mut Gen, depth: usize) -> Tree {
            let choice = if depth == 0 { 0 } else { u8::arbitrary(g) % 4 };
            if choice == 0 {
                return Tree::Leaf(i16::arbitrary(g) % 10);
            }
            let lhs = Box::new(Tree::gen_depth(g, depth - 1));
            let rhs = Box::new(Tree::gen_depth(g, depth - 1));
            match choice {
                1 => Tree::Add(lhs, rhs),
                2 => Tree::Sub(lhs, rhs),
                _ => Tree::Mul(lhs, rhs),
            }
        }

        fn value(&self) -> i64 {
            match self {
                Tree::Leaf(n) => i64::from(*n),
                Tree::Add(l, r) => l.value() + r.value(),
                Tree::Sub(l, r) => l.value() - r.value(),
                Tree::Mul(l, r) => l.value() * r.value(),
            }
        }

        /// Parenthesize only where precedence requires it.
        fn text(&self, parent: u8, right: bool) -> String {
            let (s, prec) = match self {
                Tree::Leaf(n) if *n < 0 => return format!("({})", n),
                Tree::Leaf(n) => return n.to_string(),
                Tree::Add(l, r) => (format!("{} + {}", l.text(1, false), r.text(1, true)), 1),
                Tree::Sub(l, r) => (format!("{} - {}", l.text(1, false), r.text(1, true)), 1),
                Tree::Mul(l, r) => (format!("{} * {}", l.text(2, false), r.text(2, true)), 2),
            };
            if prec < parent || (prec == parent && right) {
                format!("({})", s)
            } else {
                s
            }
        }
    }

    impl Arbitrary for Tree {
        fn arbitrary(g: &mut Gen) -> Tree {
            Tree::gen_depth(g, 3)
        }
    }

    #[test]
    fn test_matches_reference_arithmetic() {
        fn prop(tree: Tree) -> bool {
            let got = eval_str(&tree.text(0, false), &Var::new());
            got.map(i64::from) == Ok(tree.value())
        }
        quickcheck(prop as fn(Tree) -> bool);
    }
}
