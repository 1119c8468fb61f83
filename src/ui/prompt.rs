//! Line-oriented prompting over any reader/writer pair, so the interactive
//! flows can be driven from tests with an in-memory buffer.

use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt`, read one line and return it trimmed.
    /// End of input is an error: the caller cannot re-prompt a closed stream.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::Input("unexpected end of input".into()));
        }
        Ok(line.trim().to_string())
    }

    /// Print a diagnostic line and continue prompting.
    pub fn say(&mut self, msg: &str) -> AppResult<()> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// Ask until `parse` accepts the answer; every rejection is reported
    /// and the question is asked again.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut parse: F) -> AppResult<T>
    where
        F: FnMut(&str) -> AppResult<T>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(v) => return Ok(v),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    pub fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        let answer = self.ask(prompt)?.to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
