use super::ast::*;
use super::lex::*;
use super::parse::*;
use super::token::*;
use super::{Error, LineNumber};

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let (number, tokens) = lex(s);
        Line { number, tokens }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    /// A numbered line with an empty body deletes that line.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The body of the line as it will be listed, without the line number.
    pub fn source(&self) -> String {
        self.tokens.iter().map(|s| s.to_string()).collect()
    }

    pub fn ast(&self) -> Result<Statement, Error> {
        parse(self.number, &self.tokens)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.source()),
            None => write!(f, "{}", self.source()),
        }
    }
}
