//! Up-front confirmation prompt.

use std::io::{BufRead, Write};

use crate::error::Result;

/// Prompt shown before any file is overwritten.
pub const OVERWRITE_PROMPT: &str = "This will overwrite any existing files. Proceed? ";

/// Source of a yes/no answer.
pub trait Confirm {
    /// Ask `prompt` and report whether the answer was affirmative.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// An answer is affirmative when it starts with `y` or `Y`.
pub fn is_affirmative(answer: &str) -> bool {
    answer.starts_with(['y', 'Y'])
}

/// Line-based prompt over arbitrary reader and writer.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirm<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on standard output and read the answer from standard input.
    ///
    /// Piped answers are accepted; end of input counts as a refusal.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}
