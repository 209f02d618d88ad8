use std::io::{self, BufRead, Write};

/// Answer that cancels the current prompt flow.
pub const BACK: &str = "back";

/// Line-oriented prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` and reads one trimmed line. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Prompter::ask`], but answering `back` also yields `None`.
    pub fn ask_cancellable(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(self.ask(prompt)?.filter(|answer| answer != BACK))
    }
}
