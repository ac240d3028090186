use std::sync::Arc;

use anyhow::{Context, Result};
use iamprune_domain::Config;
use iamprune_infra::{IamPruneInfra, load_sdk_config};
use iamprune_services::{PruneService, RunOutcome};
use tracing::info;

/// Loads credentials and runs one prune pass against the configured account.
///
/// # Errors
///
/// Fails when the AWS configuration cannot be established or when candidate
/// collection fails. Per-policy deletion failures are not errors.
pub async fn run(config: &Config) -> Result<RunOutcome> {
    let sdk_config = load_sdk_config(config)
        .await
        .context("Failed to load AWS configuration")?;

    let infra = Arc::new(IamPruneInfra::new(&sdk_config));
    let outcome = PruneService::new(infra)
        .run()
        .await
        .context("Failed to collect policies")?;

    match &outcome {
        RunOutcome::NothingToDelete => info!("No unused policies found"),
        RunOutcome::Declined => info!("Run declined"),
        RunOutcome::Completed(report) => {
            info!(deleted = report.deleted(), failed = report.failed(), "Run completed")
        }
    }
    Ok(outcome)
}

/// Process exit status: every completed run exits 0, even with per-policy
/// failures; configuration and collection failures exit 1.
pub fn exit_code(result: &Result<RunOutcome>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
