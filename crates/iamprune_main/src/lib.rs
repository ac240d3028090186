mod cli;
mod logging;
mod run;

pub use cli::Cli;
pub use logging::init_tracing;
pub use run::{exit_code, run};
