/*!
## Rust Machine Module

This Rust module evaluates expressions, executes statements,
stores the program, and runs it.

*/

mod eval;
mod exec;
mod operation;
mod program;
mod runtime;
mod var;

pub use exec::parse_input;
pub use exec::Flow;
pub use exec::HELP;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use var::Var;

/// Shown when an `INPUT` statement waits for a value.
pub const INPUT_PROMPT: &str = " ? ";

#[cfg(test)]
mod tests;
