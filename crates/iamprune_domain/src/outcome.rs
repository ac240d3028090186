use crate::{PolicyArn, VersionId};

/// A version that could not be deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFailure {
    pub version_id: VersionId,
    pub reason: String,
}

/// Result of removing the non-default versions of one policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCleanup {
    /// Versions were listed and each deletion was attempted
    Pruned {
        deleted: Vec<VersionId>,
        failed: Vec<VersionFailure>,
    },
    /// The versions could not be listed, nothing was attempted
    ListingFailed { reason: String },
}

/// Result of the final policy delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDeletion {
    Deleted,
    Failed { reason: String },
}

/// Terminal state of a single candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyStatus {
    /// All non-default versions and the policy are gone
    FullyDeleted,
    /// Some versions were removed but at least one remains, or the policy
    /// delete was rejected after a clean version sweep
    PartiallyDeleted,
    /// Versions could not be listed
    ListingFailed,
}

/// Per-policy record of the two-step deletion sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyOutcome {
    pub arn: PolicyArn,
    pub versions: VersionCleanup,
    pub deletion: PolicyDeletion,
}

impl PolicyOutcome {
    pub fn status(&self) -> PolicyStatus {
        match (&self.versions, &self.deletion) {
            (_, PolicyDeletion::Deleted) => PolicyStatus::FullyDeleted,
            (VersionCleanup::ListingFailed { .. }, PolicyDeletion::Failed { .. }) => {
                PolicyStatus::ListingFailed
            }
            (VersionCleanup::Pruned { .. }, PolicyDeletion::Failed { .. }) => {
                PolicyStatus::PartiallyDeleted
            }
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.status() == PolicyStatus::FullyDeleted
    }
}

/// Ordered outcomes of a whole deletion batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<PolicyOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: PolicyOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn deleted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_deleted()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.deleted()
    }
}
