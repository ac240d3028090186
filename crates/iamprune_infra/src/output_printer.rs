//! Console writer for progress lines and diagnostics.

use std::io::{self, Stderr, Stdout, Write};
use std::sync::{Arc, Mutex};

use iamprune_services::ConsoleInfra;
use tracing::warn;

/// Mutex-guarded stdout/stderr writer.
///
/// Generic over writer types `O` (stdout) and `E` (stderr) so tests can
/// capture output in memory.
#[derive(Debug)]
pub struct OutputPrinter<O = Stdout, E = Stderr> {
    stdout: Arc<Mutex<O>>,
    stderr: Arc<Mutex<E>>,
}

impl<O, E> Clone for OutputPrinter<O, E> {
    fn clone(&self) -> Self {
        Self { stdout: self.stdout.clone(), stderr: self.stderr.clone() }
    }
}

impl Default for OutputPrinter<Stdout, Stderr> {
    fn default() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }
}

impl<O, E> OutputPrinter<O, E> {
    pub fn with_writers(stdout: O, stderr: E) -> Self {
        Self {
            stdout: Arc::new(Mutex::new(stdout)),
            stderr: Arc::new(Mutex::new(stderr)),
        }
    }
}

fn write_to<W: Write>(writer: &Mutex<W>, message: &str, newline: bool) -> io::Result<()> {
    let mut guard = writer
        .lock()
        .map_err(|_| io::Error::other("mutex poisoned"))?;
    guard.write_all(message.as_bytes())?;
    if newline {
        guard.write_all(b"\n")?;
    }
    guard.flush()
}

impl<O: Write + Send, E: Write + Send> ConsoleInfra for OutputPrinter<O, E> {
    fn print(&self, message: &str) {
        if let Err(e) = write_to(&self.stdout, message, false) {
            warn!(error = %e, "Failed to write to stdout");
        }
    }

    fn println(&self, message: &str) {
        if let Err(e) = write_to(&self.stdout, message, true) {
            warn!(error = %e, "Failed to write to stdout");
        }
    }

    fn eprintln(&self, message: &str) {
        if let Err(e) = write_to(&self.stderr, message, true) {
            warn!(error = %e, "Failed to write to stderr");
        }
    }
}
