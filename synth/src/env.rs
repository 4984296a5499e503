use serde::{Deserialize, Serialize};

/// Process environment variable holding the default deployment account.
pub const ACCOUNT_ENV_VAR: &str = "CDK_DEFAULT_ACCOUNT";

/// Process environment variable holding the default deployment region.
pub const REGION_ENV_VAR: &str = "CDK_DEFAULT_REGION";

/// The (account, region) pair identifying a deployment target.
///
/// Both fields are optional: a stack with an unresolved environment is
/// environment-agnostic and can still be synthesized. Values are carried
/// verbatim; no validation or normalization is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub account: Option<String>,
    pub region: Option<String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the environment from `CDK_DEFAULT_ACCOUNT` / `CDK_DEFAULT_REGION`.
    ///
    /// Unset variables map to `None`; set values pass through unchanged.
    /// Call this once at the outermost boundary and thread the result in
    /// explicitly rather than re-reading process state deeper in the chain.
    pub fn from_process_env() -> Self {
        Self {
            account: std::env::var(ACCOUNT_ENV_VAR).ok(),
            region: std::env::var(REGION_ENV_VAR).ok(),
        }
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// True when both account and region are present.
    pub fn is_resolved(&self) -> bool {
        self.account.is_some() && self.region.is_some()
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "aws://{}/{}",
            self.account.as_deref().unwrap_or("unknown-account"),
            self.region.as_deref().unwrap_or("unknown-region")
        )
    }
}
