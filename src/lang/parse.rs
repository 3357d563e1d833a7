use super::{ast::*, token::*, Column, Error, LineNumber};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Parse one line body into a statement. Direct mode (no line number)
/// and program lines accept different sets of statements.
pub fn parse(line_number: LineNumber, tokens: &[Token]) -> Result<Statement> {
    match Parser::parse(line_number.is_none(), tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

/// Parse a complete arithmetic expression; trailing tokens are an error.
pub fn parse_expression(tokens: &[Token]) -> Result<Expression> {
    let mut parse = Parser::new(tokens);
    let expr = parse.expression().map_err(|e| e.in_column(&parse.column()))?;
    parse.expect_end()?;
    Ok(expr)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<(&'a Token, Column)>,
    col: Column,
    end: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
            end: 0,
        }
    }

    fn parse(direct: bool, tokens: &'a [Token]) -> Result<Statement> {
        let mut parse = Parser::new(tokens);
        match parse.statement(direct) {
            Ok(s) => Ok(s),
            Err(e) => Err(e.in_column(&parse.col)),
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn advance(&mut self) -> Option<(&'a Token, Column)> {
        loop {
            let t = self.token_stream.next()?;
            let start = self.end;
            self.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some((t, start..self.end)),
            }
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        let (t, col) = match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.advance()?,
        };
        self.col = col;
        Some(t)
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.advance();
        }
        self.peeked.as_ref().map(|(t, _)| *t)
    }

    fn statement(&mut self, direct: bool) -> Result<Statement> {
        match self.peek() {
            Some(Token::Ident(_)) => {
                let column = self.peek_column();
                Statement::for_word(self, Word::Let, column)
            }
            Some(Token::Word(word)) => {
                self.next();
                let word = *word;
                if direct {
                    if let Word::Goto | Word::If = word {
                        return Err(error!(SyntaxError; "NOT ALLOWED IN DIRECT MODE"));
                    }
                } else if let Word::Run | Word::List | Word::Clear | Word::Quit | Word::Help = word
                {
                    return Err(error!(SyntaxError; "ONLY ALLOWED IN DIRECT MODE"));
                }
                let column = self.column();
                Statement::for_word(self, word, column)
            }
            Some(Token::Literal(_)) if direct => {
                self.next();
                Err(error!(LineNumberError; "INVALID LINE NUMBER"))
            }
            _ => {
                self.next();
                Err(error!(SyntaxError; "EXPECTED STATEMENT"))
            }
        }
    }

    fn peek_column(&self) -> Column {
        match &self.peeked {
            Some((_, col)) => col.clone(),
            None => self.end..self.end,
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        self.sum()
    }

    fn sum(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(Operator::Plus)) => Arithmetic::Add,
                Some(Token::Operator(Operator::Minus)) => Arithmetic::Subtract,
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.term()?;
            lhs = Expression::Compound(column, op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.factor()?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(Operator::Multiply)) => Arithmetic::Multiply,
                Some(Token::Operator(Operator::Divide)) => Arithmetic::Divide,
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.factor()?;
            lhs = Expression::Compound(column, op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn factor(&mut self) -> Result<Expression> {
        match self.next() {
            Some(Token::LParen) => {
                let expr = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            Some(Token::Literal(s)) => Expression::for_literal(self.column(), s),
            Some(Token::Ident(i)) => Ok(Expression::Identifier(self.column(), i.as_str().into())),
            Some(Token::Operator(Operator::Minus)) => {
                let column = self.column();
                if let Some(Token::Literal(s)) = self.peek() {
                    self.next();
                    let column = column.start..self.col.end;
                    return Expression::for_literal(column, &format!("-{}", s));
                }
                let expr = self.factor()?;
                Ok(Expression::Compound(
                    column.clone(),
                    Arithmetic::Subtract,
                    Box::new(Expression::Constant(column, 0)),
                    Box::new(expr),
                ))
            }
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn comparison(&mut self) -> Result<Comparison> {
        match self.next() {
            Some(Token::Operator(Operator::Equal)) => Ok(Comparison::Equal),
            Some(Token::Operator(Operator::Less)) => Ok(Comparison::Less),
            Some(Token::Operator(Operator::Greater)) => Ok(Comparison::Greater),
            _ => Err(error!(SyntaxError; "EXPECTED COMPARISON")),
        }
    }

    fn ident(&mut self) -> Result<Ident> {
        match self.next() {
            Some(Token::Ident(i)) => Ok(i.as_str().into()),
            Some(Token::Word(_)) => Err(error!(SyntaxError; "RESERVED WORD")),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn line_number(&mut self) -> Result<u16> {
        match self.next() {
            Some(token) => u16::try_from(token),
            None => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Unknown(_) | Whitespace(_) => {"UNEXPECTED TOKEN"}
                Literal(_) => {"EXPECTED LITERAL"}
                Word(_) => {"EXPECTED RESERVED WORD"}
                Operator(_) => {"EXPECTED OPERATOR"}
                Ident(_) => {"EXPECTED IDENTIFIER"}
                LParen => {"EXPECTED LEFT PARENTHESIS"}
                RParen => {"EXPECTED RIGHT PARENTHESIS"}
            }
        ))
    }

    fn expect_end(&mut self) -> Result<()> {
        match self.next() {
            None => Ok(()),
            Some(_) => Err(error!(SyntaxError, ..&self.column(); "EXPECTED END OF LINE")),
        }
    }
}

impl Expression {
    fn for_literal(col: Column, s: &str) -> Result<Expression> {
        match s.parse::<i32>() {
            Ok(n) => Ok(Expression::Constant(col, n)),
            Err(_) => Err(error!(InvalidNumber)),
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word, column: Column) -> Result<Statement> {
        use Word::*;
        let statement = match word {
            Clear => Statement::Clear(column),
            End => Statement::End(column),
            Goto => Self::r#goto(parse, column)?,
            Help => Statement::Help(column),
            If => Self::r#if(parse, column)?,
            Input => Statement::Input(column, parse.ident()?),
            Let => Self::r#let(parse, column)?,
            List => Statement::List(column),
            Print => Statement::Print(column, parse.expression()?),
            Quit => Statement::Quit(column),
            Rem => {
                parse.next();
                Statement::Rem(column)
            }
            Run => Statement::Run(column),
            Then => return Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        };
        parse.expect_end()?;
        Ok(statement)
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        let ident = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(column, ident, expr))
    }

    fn r#goto(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Goto(column, parse.line_number()?))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let lhs = parse.expression()?;
        let op = parse.comparison()?;
        let rhs = parse.expression()?;
        parse.expect(Token::Word(Word::Then))?;
        let target = parse.line_number()?;
        Ok(Statement::If(column, lhs, op, rhs, target))
    }
}
