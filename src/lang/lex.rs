use super::{token::*, LineNumber, MaxValue};

/// Split one input line into its line number, if any, and the tokens
/// of the body. Leading and trailing whitespace is not tokenized.
pub fn lex(s: &str) -> (LineNumber, Vec<Token>) {
    let s = s.trim_end_matches(|c: char| c == '\r' || c == '\n');
    let (line_number, body) = split_line_number(s);
    let mut tokens: Vec<Token> = Scanner::new(body.trim_matches(is_basic_whitespace)).collect();
    if let Some(Token::Unknown(remark)) = tokens.last_mut() {
        let len = remark.trim_end().len();
        remark.truncate(len);
        if remark.is_empty() {
            tokens.pop();
        }
    }
    (line_number, tokens)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Line numbers above the maximum stay in the body where the parser
/// reports them.
fn split_line_number(s: &str) -> (LineNumber, &str) {
    let rest = s.trim_start_matches(is_basic_whitespace);
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| rest.len());
    if digits == 0 {
        return (None, s);
    }
    match rest[..digits].parse::<u32>() {
        Ok(n) if n <= u32::from(LineNumber::max_value()) => (Some(n as u16), &rest[digits..]),
        _ => (None, s),
    }
}

struct Scanner<'a> {
    rest: &'a str,
    remark: bool,
}

impl<'a> Scanner<'a> {
    fn new(s: &'a str) -> Scanner<'a> {
        Scanner {
            rest: s,
            remark: false,
        }
    }

    /// Take the longest prefix made of `f` characters.
    fn take_while<F: Fn(char) -> bool>(&mut self, f: F) -> &'a str {
        let len = self.rest.find(|c: char| !f(c)).unwrap_or_else(|| self.rest.len());
        let (taken, rest) = self.rest.split_at(len);
        self.rest = rest;
        taken
    }

    fn word(&mut self) -> Token {
        let s = self.take_while(is_basic_word_char);
        match Word::from_string(s) {
            Some(Word::Rem) => {
                self.remark = true;
                Token::Word(Word::Rem)
            }
            Some(word) => Token::Word(word),
            None => Token::Ident(s.to_string()),
        }
    }

    fn symbol(&mut self, ch: char) -> Token {
        self.rest = &self.rest[ch.len_utf8()..];
        match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => match Operator::from_char(ch) {
                Some(op) => Token::Operator(op),
                None => Token::Unknown(ch.to_string()),
            },
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let ch = self.rest.chars().next()?;
        if self.remark {
            let remark = std::mem::take(&mut self.rest);
            return Some(Token::Unknown(remark.to_string()));
        }
        let token = if is_basic_whitespace(ch) {
            Token::Whitespace(self.take_while(is_basic_whitespace).len())
        } else if ch.is_ascii_digit() {
            Token::Literal(self.take_while(|c| c.is_ascii_digit()).to_string())
        } else if ch.is_ascii_alphabetic() {
            self.word()
        } else {
            self.symbol(ch)
        };
        Some(token)
    }
}
