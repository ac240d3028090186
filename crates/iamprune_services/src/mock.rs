use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use iamprune_domain::{
    Marker, PolicyArn, PolicyPage, PolicyRepository, PolicyScope, PolicyVersion, VersionId,
};

use crate::{ConfirmationInfra, ConsoleInfra};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListPolicies(Option<String>),
    ListVersions(String),
    DeleteVersion(String, String),
    DeletePolicy(String),
}

/// Recording in-memory stand-in for the identity service and the terminal
#[derive(Default)]
pub struct MockInfra {
    pages: Vec<PolicyPage>,
    fail_page: Option<usize>,
    versions: HashMap<String, Vec<PolicyVersion>>,
    fail_listing: HashSet<String>,
    fail_versions: HashSet<(String, String)>,
    fail_policies: HashSet<String>,
    input: Option<String>,
    fail_input: bool,
    calls: Mutex<Vec<Call>>,
    stdout: Mutex<Vec<String>>,
    stderr: Mutex<Vec<String>>,
    prompts: Mutex<usize>,
}

impl MockInfra {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(mut self, pages: Vec<PolicyPage>) -> Self {
        self.pages = pages;
        self
    }

    /// Fails the listing call with the given zero-based index
    pub fn fail_page(mut self, index: usize) -> Self {
        self.fail_page = Some(index);
        self
    }

    pub fn versions(mut self, arn: &str, versions: Vec<PolicyVersion>) -> Self {
        self.versions.insert(arn.to_string(), versions);
        self
    }

    pub fn fail_listing(mut self, arn: &str) -> Self {
        self.fail_listing.insert(arn.to_string());
        self
    }

    pub fn fail_version(mut self, arn: &str, version: &str) -> Self {
        self.fail_versions.insert((arn.to_string(), version.to_string()));
        self
    }

    pub fn fail_policy(mut self, arn: &str) -> Self {
        self.fail_policies.insert(arn.to_string());
        self
    }

    pub fn input(mut self, input: &str) -> Self {
        self.input = Some(input.to_string());
        self
    }

    pub fn fail_input(mut self) -> Self {
        self.fail_input = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::DeleteVersion(..) | Call::DeletePolicy(_)))
            .collect()
    }

    pub fn deleted_versions(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::DeleteVersion(arn, version) => Some((arn, version)),
                _ => None,
            })
            .collect()
    }

    pub fn stdout(&self) -> Vec<String> {
        self.stdout.lock().unwrap().clone()
    }

    pub fn stderr(&self) -> Vec<String> {
        self.stderr.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> usize {
        *self.prompts.lock().unwrap()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl PolicyRepository for MockInfra {
    async fn list_policies(
        &self,
        scope: PolicyScope,
        marker: Option<Marker>,
    ) -> Result<PolicyPage> {
        assert_eq!(scope, PolicyScope::Local);
        let index = self
            .calls()
            .iter()
            .filter(|c| matches!(c, Call::ListPolicies(_)))
            .count();
        self.record(Call::ListPolicies(marker.map(|m| m.to_string())));
        if self.fail_page == Some(index) {
            return Err(anyhow!("Throttling: rate exceeded"));
        }
        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }

    async fn list_policy_versions(&self, arn: &PolicyArn) -> Result<Vec<PolicyVersion>> {
        self.record(Call::ListVersions(arn.to_string()));
        if self.fail_listing.contains(arn.as_str()) {
            return Err(anyhow!("AccessDenied: not authorized to list versions"));
        }
        Ok(self.versions.get(arn.as_str()).cloned().unwrap_or_default())
    }

    async fn delete_policy_version(&self, arn: &PolicyArn, version_id: &VersionId) -> Result<()> {
        self.record(Call::DeleteVersion(arn.to_string(), version_id.to_string()));
        if self
            .fail_versions
            .contains(&(arn.to_string(), version_id.to_string()))
        {
            return Err(anyhow!("ServiceFailure: internal error"));
        }
        Ok(())
    }

    async fn delete_policy(&self, arn: &PolicyArn) -> Result<()> {
        self.record(Call::DeletePolicy(arn.to_string()));
        if self.fail_policies.contains(arn.as_str()) {
            return Err(anyhow!("DeleteConflict: policy has non-default versions"));
        }
        Ok(())
    }
}

impl ConsoleInfra for MockInfra {
    fn print(&self, _message: &str) {
        *self.prompts.lock().unwrap() += 1;
    }

    fn println(&self, message: &str) {
        self.stdout.lock().unwrap().push(message.to_string());
    }

    fn eprintln(&self, message: &str) {
        self.stderr.lock().unwrap().push(message.to_string());
    }
}

#[async_trait::async_trait]
impl ConfirmationInfra for MockInfra {
    async fn read_line(&self) -> Result<Option<String>> {
        if self.fail_input {
            return Err(anyhow!("stdin is not readable"));
        }
        Ok(self.input.clone())
    }
}

/// Collects formatted `tracing` output at the binary's default level
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
