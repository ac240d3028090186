use std::sync::Arc;

use anyhow::Result;
use iamprune_domain::{BatchReport, PolicyRepository};
use tracing::{debug, info};

use crate::{CandidateCollector, ConfirmationInfra, ConsoleInfra, DeletionExecutor};

/// The only answer that lets a deletion batch proceed. Matched exactly
/// after trimming surrounding whitespace.
pub const AFFIRMATIVE: &str = "y";

/// How a prune run ended. None of these is a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NothingToDelete,
    Declined,
    Completed(BatchReport),
}

pub fn is_affirmative(input: &str) -> bool {
    input.trim() == AFFIRMATIVE
}

/// Collects unused policies, asks for confirmation and deletes them
pub struct PruneService<I> {
    infra: Arc<I>,
    collector: CandidateCollector<I>,
    executor: DeletionExecutor<I>,
}

impl<I> PruneService<I> {
    pub fn new(infra: Arc<I>) -> Self {
        Self {
            collector: CandidateCollector::new(infra.clone()),
            executor: DeletionExecutor::new(infra.clone()),
            infra,
        }
    }
}

impl<I: PolicyRepository + ConsoleInfra + ConfirmationInfra> PruneService<I> {
    /// # Errors
    ///
    /// Returns an error only when candidate collection fails. Per-policy
    /// deletion failures are reported and recorded in the batch report.
    pub async fn run(&self) -> Result<RunOutcome> {
        let candidates = self.collector.collect().await?;

        if candidates.is_empty() {
            self.infra.println("No unused policies to delete.");
            return Ok(RunOutcome::NothingToDelete);
        }

        self.infra.println("The following policies will be deleted:");
        for arn in &candidates {
            self.infra.println(arn.as_str());
        }

        if !self.confirm().await {
            info!(candidates = candidates.len(), "Deletion declined");
            self.infra.println("Deletion aborted.");
            return Ok(RunOutcome::Declined);
        }

        let report = self.executor.delete_all(&candidates).await;
        self.infra.println(&format!(
            "Deleted {} of {} policies.",
            report.deleted(),
            report.total()
        ));
        self.infra.println("Deletion finished.");
        info!(
            deleted = report.deleted(),
            failed = report.failed(),
            "Deletion batch finished"
        );

        Ok(RunOutcome::Completed(report))
    }

    async fn confirm(&self) -> bool {
        self.infra.print("Proceed with deletion? (y/n): ");
        match self.infra.read_line().await {
            Ok(Some(input)) => is_affirmative(&input),
            Ok(None) => false,
            Err(e) => {
                debug!(error = %e, "Failed to read confirmation");
                self.infra
                    .eprintln(&format!("Failed to read confirmation: {e:#}"));
                false
            }
        }
    }
}
