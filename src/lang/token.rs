use super::{Error, LineNumber, MaxValue};
use std::convert::TryFrom;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(String),
    Word(Word),
    Operator(Operator),
    Ident(String),
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

/// Jump targets. Only a bare decimal literal is a line number.
impl TryFrom<&Token> for u16 {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        if let Token::Literal(s) = token {
            if let Ok(line) = s.parse::<u32>() {
                if line <= u32::from(LineNumber::max_value()) {
                    return Ok(line as u16);
                }
            }
            return Err(error!(LineNumberError; "INVALID LINE NUMBER"));
        }
        Err(error!(SyntaxError; "EXPECTED LINE NUMBER"))
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Clear,
    End,
    Goto,
    Help,
    If,
    Input,
    Let,
    List,
    Print,
    Quit,
    Rem,
    Run,
    Then,
}

impl Word {
    /// Reserved words are matched without regard to case.
    pub fn from_string(s: &str) -> Option<Word> {
        use Word::*;
        match s.to_ascii_uppercase().as_str() {
            "CLEAR" => Some(Clear),
            "END" => Some(End),
            "GOTO" => Some(Goto),
            "HELP" => Some(Help),
            "IF" => Some(If),
            "INPUT" => Some(Input),
            "LET" => Some(Let),
            "LIST" => Some(List),
            "PRINT" => Some(Print),
            "QUIT" => Some(Quit),
            "REM" => Some(Rem),
            "RUN" => Some(Run),
            "THEN" => Some(Then),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Clear => write!(f, "CLEAR"),
            End => write!(f, "END"),
            Goto => write!(f, "GOTO"),
            Help => write!(f, "HELP"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            Print => write!(f, "PRINT"),
            Quit => write!(f, "QUIT"),
            Rem => write!(f, "REM"),
            Run => write!(f, "RUN"),
            Then => write!(f, "THEN"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    Less,
    Greater,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '+' => Some(Plus),
            '-' => Some(Minus),
            '=' => Some(Equal),
            '<' => Some(Less),
            '>' => Some(Greater),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
        }
    }
}
