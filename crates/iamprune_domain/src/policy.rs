use derive_more::{Display, From};
use strum_macros::Display as StrumDisplay;

/// Resource name (ARN) uniquely identifying a managed policy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From)]
pub struct PolicyArn(String);

impl PolicyArn {
    pub fn new(arn: impl Into<String>) -> Self {
        Self(arn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PolicyArn {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier of a single policy version, e.g. `v3`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From)]
pub struct VersionId(String);

impl VersionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VersionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Opaque pagination cursor. Its presence means more results follow.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub struct Marker(String);

impl Marker {
    pub fn new(marker: impl Into<String>) -> Self {
        Self(marker.into())
    }
}

/// Ownership scope of a managed policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum PolicyScope {
    /// Customer managed policies owned by the account
    Local,
    /// Policies supplied by the provider
    #[strum(serialize = "AWS")]
    Aws,
}

/// A managed policy as reported by the policy listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub arn: PolicyArn,
    /// Number of principals the policy is attached to
    pub attachment_count: u32,
    /// Number of principals using the policy as a permissions boundary
    pub permissions_boundary_usage_count: u32,
}

impl Policy {
    pub fn new(arn: impl Into<PolicyArn>) -> Self {
        Self {
            arn: arn.into(),
            attachment_count: 0,
            permissions_boundary_usage_count: 0,
        }
    }

    pub fn attachment_count(mut self, count: u32) -> Self {
        self.attachment_count = count;
        self
    }

    pub fn permissions_boundary_usage_count(mut self, count: u32) -> Self {
        self.permissions_boundary_usage_count = count;
        self
    }

    /// A policy is safe to delete only when no principal uses it, either as a
    /// grant or as a boundary.
    pub fn is_unused(&self) -> bool {
        self.attachment_count == 0 && self.permissions_boundary_usage_count == 0
    }
}

/// An immutable snapshot of a policy document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyVersion {
    pub version_id: VersionId,
    pub is_default: bool,
}

impl PolicyVersion {
    pub fn new(version_id: impl Into<VersionId>, is_default: bool) -> Self {
        Self { version_id: version_id.into(), is_default }
    }

    /// The default version goes away together with the policy and can never
    /// be deleted on its own.
    pub fn is_prunable(&self) -> bool {
        !self.is_default
    }
}

/// One page of the policy listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyPage {
    pub policies: Vec<Policy>,
    /// Cursor for the following page, `None` on the last page
    pub next: Option<Marker>,
}

impl PolicyPage {
    pub fn new(policies: Vec<Policy>) -> Self {
        Self { policies, next: None }
    }

    pub fn next(mut self, marker: impl Into<String>) -> Self {
        self.next = Some(Marker::new(marker));
        self
    }
}
