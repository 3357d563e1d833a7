use crate::error;
use crate::lang::{ast::Statement, Error, Line};
use log::debug;
use std::collections::{btree_map::Values, BTreeMap};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Program store
///
/// Stored lines ordered by line number. Each entry keeps the source
/// line for `LIST` and, when it parsed, the statement to execute.

#[derive(Debug, Default)]
pub struct Program {
    source: BTreeMap<u16, Entry>,
}

#[derive(Debug)]
struct Entry {
    line: Line,
    statement: Option<Rc<Statement>>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Add, replace or delete a numbered line. An empty body deletes.
    /// A line that fails to parse is not stored and leaves any
    /// existing line with that number in place.
    pub fn enter(&mut self, line: Line) -> Result<()> {
        let number = match line.number() {
            Some(number) => number,
            None => return Err(error!(InternalError; "DIRECT LINE IN PROGRAM")),
        };
        if line.is_empty() {
            self.remove(number);
            return Ok(());
        }
        let statement = line.ast()?;
        self.insert(number, line, Some(statement));
        Ok(())
    }

    pub fn insert(&mut self, number: u16, line: Line, statement: Option<Statement>) {
        debug!("store line {}", number);
        let entry = Entry {
            line,
            statement: statement.map(Rc::new),
        };
        self.source.insert(number, entry);
    }

    pub fn remove(&mut self, number: u16) -> bool {
        debug!("remove line {}", number);
        self.source.remove(&number).is_some()
    }

    pub fn contains(&self, number: u16) -> bool {
        self.source.contains_key(&number)
    }

    pub fn source_line(&self, number: u16) -> Option<String> {
        self.source.get(&number).map(|entry| entry.line.source())
    }

    pub fn statement(&self, number: u16) -> Option<Rc<Statement>> {
        self.source
            .get(&number)
            .and_then(|entry| entry.statement.clone())
    }

    /// Swap the statement of an existing line, keeping its source text.
    pub fn set_statement(&mut self, number: u16, statement: Option<Statement>) -> Result<()> {
        match self.source.get_mut(&number) {
            Some(entry) => {
                entry.statement = statement.map(Rc::new);
                Ok(())
            }
            None => Err(error!(LineNumberError)),
        }
    }

    pub fn first_line_number(&self) -> Option<u16> {
        self.source.keys().next().copied()
    }

    /// The line after `number`, which need not itself be stored.
    pub fn next_line_number(&self, number: u16) -> Option<u16> {
        let start = number.checked_add(1)?;
        self.source.range(start..).next().map(|(n, _)| *n)
    }

    pub fn lines(&self) -> Lines<'_> {
        Lines {
            values: self.source.values(),
        }
    }
}

pub struct Lines<'a> {
    values: Values<'a, u16, Entry>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a Line;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next().map(|entry| &entry.line)
    }
}
