use std::io::{self, BufRead};

use anyhow::Result;
use iamprune_services::ConfirmationInfra;

/// Reads the confirmation answer from standard input
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirmation;

impl StdinConfirmation {
    pub fn new() -> Self {
        Self
    }
}

/// Reads one line, `None` once the input is exhausted
fn read_answer<R: BufRead>(mut reader: R) -> io::Result<Option<String>> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    Ok((read > 0).then_some(line))
}

#[async_trait::async_trait]
impl ConfirmationInfra for StdinConfirmation {
    async fn read_line(&self) -> Result<Option<String>> {
        let answer = tokio::task::spawn_blocking(|| read_answer(io::stdin().lock())).await??;
        Ok(answer)
    }
}
