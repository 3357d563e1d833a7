/*!
## Terminal Module

Connects a `Runtime` to the user. Line editing and history come from
`linefeed` when stdin is a terminal; otherwise lines are read plainly
so programs can be piped in.

*/

extern crate ansi_term;
extern crate linefeed;
use crate::error;
use crate::lang::Error;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult};
use log::debug;
use std::io::{BufRead, IsTerminal, Write};

/// Lines to run before yielding back to the terminal.
const CYCLES: usize = 5000;

/// Run an interactive session. Returns the process exit code.
pub fn main() -> i32 {
    let interactive = std::io::stdin().is_terminal();
    let result = if interactive {
        match Interface::new("BASIC") {
            Ok(interface) => main_loop(&mut Editor { interface }),
            Err(error) => Err(error),
        }
    } else {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        main_loop(&mut Plain {
            input: stdin.lock(),
            output: stdout.lock(),
        })
    };
    match result {
        Ok(code) => code,
        Err(error) => {
            debug!("{}", error);
            eprintln!("{}", error!(InternalError));
            1
        }
    }
}

/// One line in, text out.
trait Console {
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>>;
    fn write(&mut self, s: &str) -> std::io::Result<()>;
    fn write_error(&mut self, error: &Error) -> std::io::Result<()>;
}

struct Editor {
    interface: Interface<DefaultTerminal>,
}

impl Console for Editor {
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.interface.set_prompt(prompt)?;
        match self.interface.read_line()? {
            ReadResult::Input(string) => {
                if !string.trim().is_empty() {
                    self.interface.add_history_unique(string.clone());
                }
                Ok(Some(string))
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }

    fn write(&mut self, s: &str) -> std::io::Result<()> {
        self.interface.write_fmt(format_args!("{}", s))
    }

    fn write_error(&mut self, error: &Error) -> std::io::Result<()> {
        self.interface.write_fmt(format_args!(
            "{}\n",
            Style::new().bold().paint(error.to_string())
        ))
    }
}

struct Plain<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console for Plain<R, W> {
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        if !prompt.is_empty() {
            self.output.write_all(prompt.as_bytes())?;
            self.output.flush()?;
        }
        let mut string = String::new();
        if self.input.read_line(&mut string)? == 0 {
            return Ok(None);
        }
        Ok(Some(string))
    }

    fn write(&mut self, s: &str) -> std::io::Result<()> {
        self.output.write_all(s.as_bytes())?;
        self.output.flush()
    }

    fn write_error(&mut self, error: &Error) -> std::io::Result<()> {
        writeln!(self.output, "{}", error)?;
        self.output.flush()
    }
}

fn main_loop<C: Console>(console: &mut C) -> std::io::Result<i32> {
    let mut runtime = Runtime::new();
    loop {
        match runtime.execute(CYCLES) {
            Event::Stopped => match console.read_line("")? {
                Some(string) => runtime.enter(&string),
                None => break,
            },
            Event::Input(prompt) => match console.read_line(&prompt)? {
                Some(string) => runtime.enter(&string),
                None => {
                    console.write("\n")?;
                    console.write_error(&error!(InputPastEnd))?;
                    return Ok(1);
                }
            },
            Event::Error(error) => {
                console.write_error(&error)?;
                if error.is_fatal() {
                    return Ok(1);
                }
            }
            Event::Running => {}
            Event::Print(s) => console.write(&s)?,
            Event::Quit => break,
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> (i32, String) {
        let mut output = Vec::new();
        let code = {
            let mut console = Plain {
                input: input.as_bytes(),
                output: &mut output,
            };
            main_loop(&mut console).unwrap()
        };
        (code, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_program_session() {
        let (code, out) = session("10 PRINT 2 + 3 * 4\n20 END\nRUN\nLIST\n");
        assert_eq!(code, 0);
        assert_eq!(out, "14\n10 PRINT 2 + 3 * 4\n20 END\n");
    }

    #[test]
    fn test_errors_are_recoverable() {
        let (code, out) = session("PRINT 1 / 0\nPRINT Q\nFROB\nPRINT 7 / 2\n");
        assert_eq!(code, 0);
        assert_eq!(out, "DIVIDE BY ZERO\nVARIABLE NOT DEFINED\nSYNTAX ERROR\n3\n");
    }

    #[test]
    fn test_input_retries() {
        let (code, out) = session("INPUT X\nfive\n5\nPRINT X\n");
        assert_eq!(code, 0);
        assert_eq!(out, " ? INVALID NUMBER\n ? 5\n");
    }

    #[test]
    fn test_input_past_end_is_fatal() {
        let (code, out) = session("10 INPUT X\n20 PRINT X\nRUN\n");
        assert_eq!(code, 1);
        assert_eq!(out, " ? \nINPUT PAST END\n");
    }

    #[test]
    fn test_quit() {
        let (code, out) = session("PRINT 1\nQUIT\nPRINT 2\n");
        assert_eq!(code, 0);
        assert_eq!(out, "1\n");
    }
}
