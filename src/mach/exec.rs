use super::{Operation, Program, Var};
use crate::error;
use crate::lang::ast::{Ident, Statement};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// What the runtime does after a statement executes.
#[derive(Debug, PartialEq)]
pub enum Flow {
    Next,
    Jump(u16),
    End,
    Input(Ident),
    Run,
    Quit,
}

pub const HELP: &str = "\
REM <comment>                       COMMENT
LET <var> = <expr>                  ASSIGNMENT
PRINT <expr>                        PRINT A VALUE
INPUT <var>                         READ AN INTEGER
END                                 STOP THE PROGRAM
GOTO <line>                         JUMP (PROGRAM ONLY)
IF <expr> <op> <expr> THEN <line>   CONDITIONAL JUMP; <op> IS = < > (PROGRAM ONLY)
RUN                                 RUN THE PROGRAM
LIST                                LIST THE PROGRAM
CLEAR                               ERASE THE PROGRAM AND ALL VARIABLES
QUIT                                LEAVE BASIC
HELP                                THIS MESSAGE
";

impl Statement {
    /// Execute against variable memory and the stored program. Output
    /// is appended to `out`. Control transfer is left to the caller
    /// through the returned `Flow`. An `IF` only validates its target
    /// here; the caller decides the jump with `condition` and `target`.
    pub fn execute(&self, var: &mut Var, program: &mut Program, out: &mut String) -> Result<Flow> {
        use Statement::*;
        match self {
            Rem(_) => Ok(Flow::Next),
            Let(_, ident, expr) => {
                let value = expr.eval(var)?;
                var.store(ident, value);
                Ok(Flow::Next)
            }
            Print(_, expr) => {
                let value = expr.eval(var)?;
                out.push_str(&format!("{}\n", value));
                Ok(Flow::Next)
            }
            Input(_, ident) => Ok(Flow::Input(ident.clone())),
            End(_) => Ok(Flow::End),
            Goto(col, target) => {
                if !program.contains(*target) {
                    return Err(error!(LineNumberError, ..col));
                }
                Ok(Flow::Jump(*target))
            }
            If(col, _, _, _, target) => {
                if !program.contains(*target) {
                    return Err(error!(LineNumberError, ..col));
                }
                Ok(Flow::Next)
            }
            Run(_) => Ok(Flow::Run),
            List(_) => {
                for line in program.lines() {
                    out.push_str(&format!("{}\n", line));
                }
                Ok(Flow::Next)
            }
            Clear(_) => {
                program.clear();
                var.clear();
                Ok(Flow::Next)
            }
            Quit(_) => Ok(Flow::Quit),
            Help(_) => {
                out.push_str(HELP);
                Ok(Flow::Next)
            }
        }
    }

    /// Whether the comparison of an `IF` holds. Always false for
    /// any other statement.
    pub fn condition(&self, var: &Var) -> Result<bool> {
        match self {
            Statement::If(_, lhs, op, rhs, _) => {
                let lhs = lhs.eval(var)?;
                let rhs = rhs.eval(var)?;
                Ok(Operation::compare(*op, lhs, rhs))
            }
            _ => Ok(false),
        }
    }

    /// Jump target of a `GOTO` or `IF`.
    pub fn target(&self) -> Option<u16> {
        match self {
            Statement::Goto(_, target) | Statement::If(.., target) => Some(*target),
            _ => None,
        }
    }
}

/// A response to `INPUT`: one optionally signed integer and nothing else.
pub fn parse_input(s: &str) -> Result<i32> {
    let s = s.trim();
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(error!(InvalidNumber));
    }
    match s.parse::<i32>() {
        Ok(n) => Ok(n),
        Err(_) => Err(error!(InvalidNumber)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ErrorCode, Line};

    fn statement(s: &str) -> Statement {
        match Line::new(s).ast() {
            Ok(statement) => statement,
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    fn exec(s: &str, var: &mut Var, program: &mut Program) -> (Result<Flow>, String) {
        let mut out = String::new();
        let flow = statement(s).execute(var, program, &mut out);
        (flow, out)
    }

    #[test]
    fn test_let_and_print() {
        let mut var = Var::new();
        let mut program = Program::new();
        let (flow, _) = exec("LET X = 5", &mut var, &mut program);
        assert_eq!(flow.ok(), Some(Flow::Next));
        assert_eq!(var.fetch("X").ok(), Some(5));
        let (flow, out) = exec("PRINT X * 2", &mut var, &mut program);
        assert_eq!(flow.ok(), Some(Flow::Next));
        assert_eq!(out, "10\n");
    }

    #[test]
    fn test_print_undefined() {
        let (flow, out) = exec("PRINT Y", &mut Var::new(), &mut Program::new());
        assert_eq!(flow.err().map(|e| e.code()), Some(ErrorCode::UndefinedVariable));
        assert_eq!(out, "");
    }

    #[test]
    fn test_goto_validates_target() {
        let mut var = Var::new();
        let mut program = Program::new();
        assert!(program.enter(Line::new("50 END")).is_ok());
        assert_eq!(
            statement("10 GOTO 50").execute(&mut var, &mut program, &mut String::new()).ok(),
            Some(Flow::Jump(50))
        );
        let e = statement("10 GOTO 60").execute(&mut var, &mut program, &mut String::new());
        assert_eq!(e.err().map(|e| e.code()), Some(ErrorCode::LineNumberError));
    }

    #[test]
    fn test_if() {
        let mut var = Var::new();
        let mut program = Program::new();
        assert!(program.enter(Line::new("50 END")).is_ok());
        let taken = statement("10 IF 1 < 2 THEN 50");
        assert_eq!(taken.condition(&var).ok(), Some(true));
        assert_eq!(taken.target(), Some(50));
        assert_eq!(
            taken.execute(&mut var, &mut program, &mut String::new()).ok(),
            Some(Flow::Next)
        );
        let not_taken = statement("10 IF 2 = 3 THEN 50");
        assert_eq!(not_taken.condition(&var).ok(), Some(false));
        let missing = statement("10 IF 1 < 2 THEN 60");
        let e = missing.execute(&mut var, &mut program, &mut String::new());
        assert_eq!(e.err().map(|e| e.code()), Some(ErrorCode::LineNumberError));
    }

    #[test]
    fn test_list_and_clear() {
        let mut var = Var::new();
        let mut program = Program::new();
        assert!(program.enter(Line::new("20 PRINT A")).is_ok());
        assert!(program.enter(Line::new("10 LET A = 1")).is_ok());
        var.store(&"A".into(), 1);
        let (_, out) = exec("LIST", &mut var, &mut program);
        assert_eq!(out, "10 LET A = 1\n20 PRINT A\n");
        let (flow, _) = exec("CLEAR", &mut var, &mut program);
        assert_eq!(flow.ok(), Some(Flow::Next));
        assert!(program.is_empty());
        assert!(var.fetch("A").is_err());
    }

    #[test]
    fn test_control_flows() {
        let mut var = Var::new();
        let mut program = Program::new();
        assert_eq!(exec("END", &mut var, &mut program).0.ok(), Some(Flow::End));
        assert_eq!(exec("RUN", &mut var, &mut program).0.ok(), Some(Flow::Run));
        assert_eq!(exec("QUIT", &mut var, &mut program).0.ok(), Some(Flow::Quit));
        assert_eq!(exec("REM", &mut var, &mut program).0.ok(), Some(Flow::Next));
        assert_eq!(
            exec("INPUT N", &mut var, &mut program).0.ok(),
            Some(Flow::Input("N".into()))
        );
        let (_, out) = exec("HELP", &mut var, &mut program);
        assert_eq!(out, HELP);
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("42").ok(), Some(42));
        assert_eq!(parse_input("  -7 ").ok(), Some(-7));
        assert_eq!(parse_input("+3").ok(), Some(3));
        for bad in &["", "-", "1.5", "12 13", "abc", "1e3", "--1", "99999999999"] {
            assert_eq!(
                parse_input(bad).err().map(|e| e.code()),
                Some(ErrorCode::InvalidNumber),
                "{:?}",
                bad
            );
        }
    }
}
