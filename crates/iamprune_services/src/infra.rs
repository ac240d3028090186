/// Line-oriented console used for user-facing progress and diagnostics.
///
/// Kept separate from `tracing` output: these lines are the tool's actual
/// interface, logs are for debugging.
pub trait ConsoleInfra: Send + Sync {
    /// Writes to stdout without a trailing newline (used for prompts)
    fn print(&self, message: &str);

    /// Writes a full line to stdout
    fn println(&self, message: &str);

    /// Writes a full line to stderr
    fn eprintln(&self, message: &str);
}

/// Source of the user's answer to the confirmation prompt
#[async_trait::async_trait]
pub trait ConfirmationInfra: Send + Sync {
    /// Reads a single line of input, `None` when input is closed
    async fn read_line(&self) -> anyhow::Result<Option<String>>;
}
