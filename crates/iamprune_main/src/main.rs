use std::process::ExitCode;

use clap::Parser;
use iamprune::{Cli, exit_code, init_tracing, run};
use iamprune_domain::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let result = run(&Config::from(cli)).await;
    if let Err(e) = &result {
        eprintln!("{e:#}");
    }

    ExitCode::from(exit_code(&result))
}
