//! # Line BASIC
//!
//! A small interactive BASIC with 32-bit integer variables and
//! numbered program lines.
//!
//! Run the executable and type statements. Lines beginning with a
//! number are stored in the program; anything else runs immediately.
//! ```text
//! 10 LET A = 3
//! 20 PRINT A * A
//! RUN
//! 9
//! ```
//! Programs may also be piped in on stdin.
//!
//! Set `RUST_LOG=basic=debug` to watch the program store and the
//! runtime at work.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

pub mod lang;
pub mod mach;
pub mod term;
