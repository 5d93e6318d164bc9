use crate::command::{LoopControl, TerminationStatus};
use crate::external;
use crate::lexer;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// The built-in command that ends the loop without spawning anything.
const EXIT_COMMAND: &str = "exit";

/// Longest input line, in characters, considered for execution.
/// Anything past it is silently discarded.
const MAX_LINE_LEN: usize = 255;

/// An interactive command runner.
///
/// Reads one line at a time, splits it into words and executes the result
/// as a child process, blocking until the child finishes. The loop ends on
/// end-of-input or the `exit` command.
///
/// Example
/// ```
/// use minish::Interpreter;
/// use minish::command::LoopControl;
/// let mut sh = Interpreter::new("$ ");
/// assert_eq!(sh.interpret_line("exit"), LoopControl::Break);
/// ```
pub struct Interpreter {
    prompt: String,
}

impl Interpreter {
    /// Creates an interpreter that displays `prompt` before each line.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// Tokenizes and executes a single input line.
    ///
    /// The argument vector built from the line lives only for the duration
    /// of this call.
    pub fn interpret_line(&mut self, line: &str) -> LoopControl {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let argv = lexer::split_into_tokens(clip_line(line));
        self.execute(&argv)
    }

    /// Executes one argument list.
    ///
    /// A blank line does nothing; `exit` ends the loop; anything else is
    /// run as an external program. Failures to launch and signal deaths
    /// are reported on stderr and never stop the loop.
    fn execute(&mut self, argv: &[String]) -> LoopControl {
        let Some(name) = argv.first() else {
            return LoopControl::Continue;
        };
        if name == EXIT_COMMAND {
            return LoopControl::Break;
        }
        match external::run(argv) {
            Ok(TerminationStatus::Exited(_)) => {}
            Ok(TerminationStatus::Signaled(signal)) => {
                eprintln!("minish: '{}' terminated by signal {}", name, signal);
            }
            Err(err) => eprintln!("minish: {:#}", err),
        }
        LoopControl::Continue
    }

    /// The read-execute loop: prompt, read a line, run it, repeat.
    ///
    /// Returns when the input source is exhausted or the `exit` command is
    /// entered. Ctrl-C at the prompt discards the line and prompts again.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        loop {
            match rl.readline(&self.prompt) {
                Ok(line) => {
                    if self.interpret_line(&line) == LoopControl::Break {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

/// Clips a line to its first [`MAX_LINE_LEN`] characters.
fn clip_line(line: &str) -> &str {
    match line.char_indices().nth(MAX_LINE_LEN) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
