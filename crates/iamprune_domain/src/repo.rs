use anyhow::Result;

use crate::{Marker, PolicyArn, PolicyPage, PolicyScope, PolicyVersion, VersionId};

/// Remote policy store.
///
/// These four capabilities are everything a prune run needs from the
/// identity service. Implementations surface any remote failure (network,
/// authorization, throttling, not-found) as an error.
#[async_trait::async_trait]
pub trait PolicyRepository: Send + Sync {
    /// Fetches one page of policies in the given scope
    ///
    /// # Arguments
    /// * `scope` - Ownership scope to list
    /// * `marker` - Cursor returned by the previous page, `None` for the first
    ///
    /// # Errors
    /// Returns an error if the page cannot be retrieved
    async fn list_policies(&self, scope: PolicyScope, marker: Option<Marker>)
    -> Result<PolicyPage>;

    /// Lists every version of a policy, default version included
    ///
    /// # Errors
    /// Returns an error if the listing fails
    async fn list_policy_versions(&self, arn: &PolicyArn) -> Result<Vec<PolicyVersion>>;

    /// Deletes a single non-default version
    ///
    /// # Errors
    /// Returns an error if the remote delete fails
    async fn delete_policy_version(&self, arn: &PolicyArn, version_id: &VersionId) -> Result<()>;

    /// Deletes the policy together with its default version
    ///
    /// # Errors
    /// Returns an error if the remote delete fails, including when non-default
    /// versions still exist
    async fn delete_policy(&self, arn: &PolicyArn) -> Result<()>;
}
