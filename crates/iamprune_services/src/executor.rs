use std::sync::Arc;

use iamprune_domain::{
    BatchReport, PolicyArn, PolicyDeletion, PolicyOutcome, PolicyRepository, VersionCleanup,
    VersionFailure,
};
use tracing::{debug, info};

use crate::ConsoleInfra;

/// Removes candidate policies one at a time, non-default versions first.
///
/// Every step is best effort: a failure is reported on the console and
/// recorded in the outcome, and processing moves on.
pub struct DeletionExecutor<I> {
    infra: Arc<I>,
}

impl<I> DeletionExecutor<I> {
    pub fn new(infra: Arc<I>) -> Self {
        Self { infra }
    }
}

impl<I: PolicyRepository + ConsoleInfra> DeletionExecutor<I> {
    /// Deletes every non-default version of `arn`.
    ///
    /// A failed version delete does not stop the remaining ones. A failed
    /// listing means nothing is attempted for this policy.
    pub async fn delete_versions(&self, arn: &PolicyArn) -> VersionCleanup {
        let versions = match self.infra.list_policy_versions(arn).await {
            Ok(versions) => versions,
            Err(e) => {
                let reason = format!("{e:#}");
                debug!(%arn, error = %reason, "Failed to list policy versions");
                self.infra
                    .eprintln(&format!("Failed to list versions of {arn}: {reason}"));
                return VersionCleanup::ListingFailed { reason };
            }
        };

        let mut deleted = Vec::new();
        let mut failed = Vec::new();
        for version in versions.into_iter().filter(|v| v.is_prunable()) {
            let version_id = version.version_id;
            self.infra
                .println(&format!("Deleting policy version: {arn} {version_id}"));
            match self.infra.delete_policy_version(arn, &version_id).await {
                Ok(()) => deleted.push(version_id),
                Err(e) => {
                    let reason = format!("{e:#}");
                    debug!(
                        %arn,
                        version = %version_id,
                        error = %reason,
                        "Failed to delete policy version"
                    );
                    self.infra.eprintln(&format!(
                        "Failed to delete policy version {version_id} of {arn}: {reason}"
                    ));
                    failed.push(VersionFailure { version_id, reason });
                }
            }
        }

        VersionCleanup::Pruned { deleted, failed }
    }

    /// Deletes the policy itself. The provider rejects this while
    /// non-default versions remain.
    pub async fn delete_policy(&self, arn: &PolicyArn) -> PolicyDeletion {
        self.infra.println(&format!("Deleting policy: {arn}"));
        match self.infra.delete_policy(arn).await {
            Ok(()) => PolicyDeletion::Deleted,
            Err(e) => {
                let reason = format!("{e:#}");
                debug!(%arn, error = %reason, "Failed to delete policy");
                self.infra
                    .eprintln(&format!("Failed to delete policy {arn}: {reason}"));
                PolicyDeletion::Failed { reason }
            }
        }
    }

    /// Runs the full two-step sequence for one policy. The policy delete is
    /// attempted even when version cleanup was incomplete.
    pub async fn delete(&self, arn: &PolicyArn) -> PolicyOutcome {
        let versions = self.delete_versions(arn).await;
        let deletion = self.delete_policy(arn).await;
        let outcome = PolicyOutcome { arn: arn.clone(), versions, deletion };
        info!(%arn, status = ?outcome.status(), "Processed policy");
        outcome
    }

    /// Processes candidates sequentially in the given order
    pub async fn delete_all(&self, arns: &[PolicyArn]) -> BatchReport {
        let mut report = BatchReport::default();
        for arn in arns {
            report.push(self.delete(arn).await);
        }
        report
    }
}
