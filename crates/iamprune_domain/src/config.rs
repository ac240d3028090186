use derive_setters::Setters;

/// Runtime configuration for a prune run.
///
/// When `profile` is `None` credentials come from the SDK's default
/// resolution chain (environment, shared config, instance role).
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters)]
#[setters(strip_option, into)]
pub struct Config {
    /// Named profile from the shared AWS config/credentials files
    pub profile: Option<String>,
}
