//! AWS SDK configuration for the IAM client.
//!
//! Credentials come from the SDK's default chain unless a named profile is
//! configured, in which case that profile is read from the shared config and
//! credentials files.

use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use iamprune_domain::Config;
use tracing::debug;

/// IAM is a global service, any commercial region resolves its endpoint
const DEFAULT_REGION: &str = "us-east-1";

/// Loads the SDK config and resolves credentials eagerly.
///
/// # Errors
///
/// Returns an error if no credentials provider is configured or the provider
/// cannot produce credentials, e.g. when the named profile does not exist.
pub async fn load_sdk_config(config: &Config) -> Result<SdkConfig> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }
    let sdk_config = with_default_region(loader.load().await);

    let provider = sdk_config
        .credentials_provider()
        .context("No AWS credentials provider is configured")?;
    provider
        .provide_credentials()
        .await
        .context("Failed to resolve AWS credentials")?;

    debug!(
        profile = config.profile.as_deref().unwrap_or("default"),
        region = sdk_config.region().map(|r| r.as_ref()).unwrap_or_default(),
        "Loaded AWS configuration"
    );
    Ok(sdk_config)
}

fn with_default_region(config: SdkConfig) -> SdkConfig {
    if config.region().is_some() {
        return config;
    }
    config
        .into_builder()
        .region(Region::new(DEFAULT_REGION))
        .build()
}
