use clap::Parser;
use iamprune_domain::Config;

/// Delete customer-managed IAM policies that nothing uses.
///
/// Lists every local policy with no attachments and no permissions-boundary
/// usage, asks for confirmation, then deletes each policy's non-default
/// versions followed by the policy itself.
#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Named AWS profile to use.
    ///
    /// When omitted, credentials come from the SDK's default chain.
    #[arg(long)]
    pub profile: Option<String>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config { profile: cli.profile }
    }
}
