use anyhow::Result;
use aws_config::SdkConfig;
use aws_sdk_iam::Client;
use aws_sdk_iam::error::DisplayErrorContext;
use aws_sdk_iam::operation::list_policies::ListPoliciesOutput;
use aws_sdk_iam::types::{self as iam, PolicyScopeType};
use iamprune_domain::{
    Error, Marker, Policy, PolicyArn, PolicyPage, PolicyRepository, PolicyScope, PolicyVersion,
    VersionId,
};
use tracing::{debug, warn};

/// `PolicyRepository` backed by the IAM API
pub struct IamPolicyRepository {
    client: Client,
}

impl IamPolicyRepository {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self::with_client(Client::new(sdk_config))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl PolicyRepository for IamPolicyRepository {
    async fn list_policies(
        &self,
        scope: PolicyScope,
        marker: Option<Marker>,
    ) -> Result<PolicyPage> {
        debug!(%scope, marker = ?marker, "ListPolicies");
        let output = self
            .client
            .list_policies()
            .scope(scope_type(scope))
            .set_marker(marker.map(|m| m.to_string()))
            .send()
            .await
            .map_err(|e| Error::transport("ListPolicies", DisplayErrorContext(&e)))?;

        Ok(into_page(output)?)
    }

    async fn list_policy_versions(&self, arn: &PolicyArn) -> Result<Vec<PolicyVersion>> {
        let mut versions = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            debug!(%arn, marker = ?marker, "ListPolicyVersions");
            let output = self
                .client
                .list_policy_versions()
                .policy_arn(arn.as_str())
                .set_marker(marker.take())
                .send()
                .await
                .map_err(|e| Error::transport("ListPolicyVersions", DisplayErrorContext(&e)))?;

            versions.extend(
                output
                    .versions()
                    .iter()
                    .filter_map(|version| into_version(arn, version)),
            );

            if !output.is_truncated() {
                break;
            }
            let next = output
                .marker()
                .ok_or_else(|| Error::MissingVersionMarker(arn.clone()))?;
            marker = Some(next.to_string());
        }

        Ok(versions)
    }

    async fn delete_policy_version(&self, arn: &PolicyArn, version_id: &VersionId) -> Result<()> {
        debug!(%arn, version = %version_id, "DeletePolicyVersion");
        self.client
            .delete_policy_version()
            .policy_arn(arn.as_str())
            .version_id(version_id.as_str())
            .send()
            .await
            .map_err(|e| Error::transport("DeletePolicyVersion", DisplayErrorContext(&e)))?;
        Ok(())
    }

    async fn delete_policy(&self, arn: &PolicyArn) -> Result<()> {
        debug!(%arn, "DeletePolicy");
        self.client
            .delete_policy()
            .policy_arn(arn.as_str())
            .send()
            .await
            .map_err(|e| Error::transport("DeletePolicy", DisplayErrorContext(&e)))?;
        Ok(())
    }
}

fn scope_type(scope: PolicyScope) -> PolicyScopeType {
    match scope {
        PolicyScope::Local => PolicyScopeType::Local,
        PolicyScope::Aws => PolicyScopeType::Aws,
    }
}

fn into_page(output: ListPoliciesOutput) -> Result<PolicyPage, Error> {
    let page = PolicyPage::new(output.policies().iter().filter_map(into_policy).collect());
    if !output.is_truncated() {
        return Ok(page);
    }
    let marker = output.marker().ok_or(Error::MissingMarker)?;
    Ok(page.next(marker))
}

/// Records without an ARN cannot be deleted and records without usage counts
/// cannot be proven unused, so both are dropped.
fn into_policy(policy: &iam::Policy) -> Option<Policy> {
    let Some(arn) = policy.arn() else {
        warn!(name = ?policy.policy_name(), "Skipping policy without ARN");
        return None;
    };
    let (Some(attachments), Some(boundaries)) = (
        policy.attachment_count(),
        policy.permissions_boundary_usage_count(),
    ) else {
        warn!(%arn, "Skipping policy without usage counts");
        return None;
    };

    Some(
        Policy::new(PolicyArn::new(arn))
            .attachment_count(attachments.max(0) as u32)
            .permissions_boundary_usage_count(boundaries.max(0) as u32),
    )
}

fn into_version(arn: &PolicyArn, version: &iam::PolicyVersion) -> Option<PolicyVersion> {
    let Some(id) = version.version_id() else {
        warn!(%arn, "Skipping policy version without id");
        return None;
    };
    Some(PolicyVersion::new(id, version.is_default_version()))
}
