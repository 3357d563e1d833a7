use super::exec::{parse_input, Flow};
use super::{Program, Var, INPUT_PROMPT};
use crate::lang::{ast::Ident, ast::Statement, Error, Line, LineNumber};
use log::{debug, trace};

/// ## Runtime
///
/// The runtime never blocks. A host calls `execute` in a loop,
/// handles the returned `Event`, and passes every line the user
/// types to `enter`.

#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    var: Var,
    direct: Option<Statement>,
    pc: LineNumber,
    input: Option<Ident>,
    print_buffer: String,
    error: Option<Error>,
    quit: bool,
}

#[derive(Debug)]
pub enum Event {
    /// Idle; wants a command line.
    Stopped,
    /// The cycle budget ran out mid program; call `execute` again.
    Running,
    Print(String),
    /// An `INPUT` is waiting for its value. Carries the prompt.
    Input(String),
    Error(Error),
    Quit,
}

type Result<T> = std::result::Result<T, Error>;

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn program_mut(&mut self) -> &mut Program {
        &mut self.program
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn is_running(&self) -> bool {
        self.pc.is_some()
    }

    pub fn is_waiting_for_input(&self) -> bool {
        self.input.is_some()
    }

    /// Accept one line of user input. While an `INPUT` is waiting the
    /// line is its response; otherwise numbered lines edit the program
    /// and anything else is queued as a direct statement.
    pub fn enter(&mut self, s: &str) {
        if let Some(ident) = self.input.take() {
            match parse_input(s) {
                Ok(value) => self.var.store(&ident, value),
                Err(error) => {
                    self.print_buffer.push_str(&format!("{}\n", error));
                    self.input = Some(ident);
                }
            }
            return;
        }
        let line = Line::new(s);
        if line.is_direct() {
            if line.is_empty() {
                return;
            }
            match line.ast() {
                Ok(statement) => self.direct = Some(statement),
                Err(error) => self.error = Some(error),
            }
        } else if let Err(error) = self.program.enter(line) {
            self.error = Some(error);
        }
    }

    /// Run for up to `cycles` program lines, stopping early at the
    /// first thing the host has to act on.
    pub fn execute(&mut self, cycles: usize) -> Event {
        let mut cycles = cycles;
        loop {
            if !self.print_buffer.is_empty() {
                return Event::Print(std::mem::take(&mut self.print_buffer));
            }
            if let Some(error) = self.error.take() {
                debug!("{:?}", error);
                self.stop();
                return Event::Error(error);
            }
            if self.quit {
                return Event::Quit;
            }
            if self.input.is_some() {
                return Event::Input(INPUT_PROMPT.to_string());
            }
            if let Some(statement) = self.direct.take() {
                match statement.execute(&mut self.var, &mut self.program, &mut self.print_buffer) {
                    Ok(flow) => self.follow(flow, None),
                    Err(error) => self.error = Some(error),
                }
                continue;
            }
            let line_number = match self.pc {
                Some(line_number) => line_number,
                None => return Event::Stopped,
            };
            if cycles == 0 {
                return Event::Running;
            }
            cycles -= 1;
            if let Err(error) = self.step(line_number) {
                self.error = Some(error.in_line_number(Some(line_number)));
            }
        }
    }

    fn step(&mut self, line_number: u16) -> Result<()> {
        let next = self.program.next_line_number(line_number);
        let statement = match self.program.statement(line_number) {
            Some(statement) => statement,
            None => {
                self.pc = next;
                return Ok(());
            }
        };
        trace!("{} {:?}", line_number, statement);
        let mut flow = statement.execute(&mut self.var, &mut self.program, &mut self.print_buffer)?;
        if let Statement::If(..) = *statement {
            if let Some(target) = statement.target() {
                if statement.condition(&self.var)? {
                    flow = Flow::Jump(target);
                }
            }
        }
        self.follow(flow, next);
        Ok(())
    }

    fn follow(&mut self, flow: Flow, next: LineNumber) {
        self.pc = match flow {
            Flow::Next => next,
            Flow::Jump(target) => Some(target),
            Flow::End => {
                debug!("END");
                None
            }
            Flow::Input(ident) => {
                self.input = Some(ident);
                next
            }
            Flow::Run => {
                debug!("RUN");
                self.program.first_line_number()
            }
            Flow::Quit => {
                self.quit = true;
                None
            }
        };
    }

    fn stop(&mut self) {
        self.pc = None;
        self.direct = None;
        self.input = None;
    }
}
