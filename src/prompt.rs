//! Interactive confirmation
//!
//! Only used when the document has no dependency tables yet, to ask before
//! appending a new section.

use std::io::{BufRead, Write};

/// Answer to a yes/no question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Interpret a typed reply.
    ///
    /// An empty reply accepts the default (yes). Unrecognized replies return
    /// `None` so the question can be asked again.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "" | "y" | "yes" => Some(Answer::Yes),
            "n" | "no" => Some(Answer::No),
            _ => None,
        }
    }
}

/// Something that can answer a yes/no question
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> anyhow::Result<Answer>;
}

impl<C: Confirm + ?Sized> Confirm for &mut C {
    fn confirm(&mut self, question: &str) -> anyhow::Result<Answer> {
        (**self).confirm(question)
    }
}

impl<C: Confirm + ?Sized> Confirm for Box<C> {
    fn confirm(&mut self, question: &str) -> anyhow::Result<Answer> {
        (**self).confirm(question)
    }
}

/// Asks on a terminal-like reader/writer pair
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// Prompt on the process's stdin/stdout
pub type StdinPrompt = LinePrompt<std::io::StdinLock<'static>, std::io::Stdout>;

impl StdinPrompt {
    pub fn stdin() -> Self {
        LinePrompt::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> anyhow::Result<Answer> {
        loop {
            write!(self.output, "{question} (Y/N) ")?;
            self.output.flush()?;

            let mut reply = String::new();
            if self.input.read_line(&mut reply)? == 0 {
                // Input closed, nobody is there to agree
                return Ok(Answer::No);
            }

            match Answer::parse(&reply) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.output, "Please answer yes or no.")?,
            }
        }
    }
}

/// Answers yes without asking (`--yes`)
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, question: &str) -> anyhow::Result<Answer> {
        tracing::debug!("Assuming yes: {}", question);
        Ok(Answer::Yes)
    }
}
