use std::sync::Arc;

use anyhow::Result;
use aws_config::SdkConfig;
use iamprune_domain::{
    Marker, PolicyArn, PolicyPage, PolicyRepository, PolicyScope, PolicyVersion, VersionId,
};
use iamprune_services::{ConfirmationInfra, ConsoleInfra};

use crate::{IamPolicyRepository, OutputPrinter, StdinConfirmation};

/// Production wiring of every port a prune run needs
#[derive(Clone)]
pub struct IamPruneInfra {
    repository: Arc<IamPolicyRepository>,
    printer: OutputPrinter,
    confirmation: StdinConfirmation,
}

impl IamPruneInfra {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            repository: Arc::new(IamPolicyRepository::new(sdk_config)),
            printer: OutputPrinter::default(),
            confirmation: StdinConfirmation::new(),
        }
    }
}

#[async_trait::async_trait]
impl PolicyRepository for IamPruneInfra {
    async fn list_policies(
        &self,
        scope: PolicyScope,
        marker: Option<Marker>,
    ) -> Result<PolicyPage> {
        self.repository.list_policies(scope, marker).await
    }

    async fn list_policy_versions(&self, arn: &PolicyArn) -> Result<Vec<PolicyVersion>> {
        self.repository.list_policy_versions(arn).await
    }

    async fn delete_policy_version(&self, arn: &PolicyArn, version_id: &VersionId) -> Result<()> {
        self.repository.delete_policy_version(arn, version_id).await
    }

    async fn delete_policy(&self, arn: &PolicyArn) -> Result<()> {
        self.repository.delete_policy(arn).await
    }
}

impl ConsoleInfra for IamPruneInfra {
    fn print(&self, message: &str) {
        self.printer.print(message)
    }

    fn println(&self, message: &str) {
        self.printer.println(message)
    }

    fn eprintln(&self, message: &str) {
        self.printer.eprintln(message)
    }
}

#[async_trait::async_trait]
impl ConfirmationInfra for IamPruneInfra {
    async fn read_line(&self) -> Result<Option<String>> {
        self.confirmation.read_line().await
    }
}
