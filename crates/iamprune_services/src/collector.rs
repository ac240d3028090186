use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use iamprune_domain::{PolicyArn, PolicyRepository, PolicyScope};
use tracing::{debug, info};

/// Walks the paginated customer-managed policy listing and gathers every
/// policy that no principal references.
pub struct CandidateCollector<R> {
    repo: Arc<R>,
}

impl<R> CandidateCollector<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R: PolicyRepository> CandidateCollector<R> {
    /// Returns the ARNs of all unused local policies in listing order.
    ///
    /// # Errors
    ///
    /// Fails as soon as any page cannot be fetched; partial results are
    /// dropped so a truncated list never reaches the confirmation step.
    pub async fn collect(&self) -> Result<Vec<PolicyArn>> {
        let mut candidates = Vec::new();
        let mut seen = HashSet::new();
        let mut marker = None;
        let mut pages = 0usize;

        loop {
            pages += 1;
            let page = self
                .repo
                .list_policies(PolicyScope::Local, marker.take())
                .await
                .with_context(|| format!("Failed to fetch policy page {pages}"))?;

            let listed = page.policies.len();
            let before = candidates.len();
            for policy in page.policies.into_iter().filter(|p| p.is_unused()) {
                if seen.insert(policy.arn.clone()) {
                    candidates.push(policy.arn);
                } else {
                    debug!(arn = %policy.arn, "Skipping policy listed twice");
                }
            }
            debug!(
                page = pages,
                listed,
                unused = candidates.len() - before,
                "Fetched policy page"
            );

            match page.next {
                Some(next) => marker = Some(next),
                None => break,
            }
        }

        info!(pages, candidates = candidates.len(), "Collected unused policies");
        Ok(candidates)
    }
}
