//! Identity scope resolution — organization vs. enterprise registration.
//!
//! Pure functions only — no I/O.

use tracing::warn;

use crate::domain::error::ConfigurationError;

/// Account a runner registers against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityScope {
    Organization(String),
    Enterprise(String),
}

/// Resolves the global identity fields into a single scope.
///
/// Empty strings count as unset. When both fields are set the enterprise
/// scope wins and a warning is traced; the organization name is ignored.
///
/// # Errors
///
/// Returns [`ConfigurationError::MissingIdentity`] when neither field is set.
pub fn resolve_identity(
    org_name: Option<&str>,
    enterprise_name: Option<&str>,
) -> Result<IdentityScope, ConfigurationError> {
    let org = org_name.filter(|s| !s.is_empty());
    let enterprise = enterprise_name.filter(|s| !s.is_empty());

    match (org, enterprise) {
        (Some(org), Some(enterprise)) => {
            warn!(
                org,
                enterprise, "both org_name and enterprise_name are set; using enterprise scope"
            );
            Ok(IdentityScope::Enterprise(enterprise.to_string()))
        }
        (None, Some(enterprise)) => Ok(IdentityScope::Enterprise(enterprise.to_string())),
        (Some(org), None) => Ok(IdentityScope::Organization(org.to_string())),
        (None, None) => Err(ConfigurationError::MissingIdentity),
    }
}

impl IdentityScope {
    /// Path below the domain identifying the registration target.
    ///
    /// Organization scope yields `<org>/<repo>` (or `<org>` for an
    /// organization-wide runner); enterprise scope ignores `repo_name`.
    #[must_use]
    pub fn owner_path_segment(&self, repo_name: Option<&str>) -> String {
        match (self, repo_name.filter(|r| !r.is_empty())) {
            (IdentityScope::Organization(org), Some(repo)) => format!("{org}/{repo}"),
            (IdentityScope::Organization(org), None) => org.clone(),
            (IdentityScope::Enterprise(ent), _) => format!("enterprises/{ent}"),
        }
    }

    /// URL passed to the runner's `--url` flag.
    #[must_use]
    pub fn target_url(&self, domain: &str, repo_name: Option<&str>) -> String {
        format!(
            "{}/{}",
            domain.trim_end_matches('/'),
            self.owner_path_segment(repo_name)
        )
    }

    /// REST path (relative to the API root) that issues registration tokens.
    #[must_use]
    pub fn registration_token_path(&self, repo_name: Option<&str>) -> String {
        let owner = match (self, repo_name.filter(|r| !r.is_empty())) {
            (IdentityScope::Organization(org), Some(repo)) => format!("repos/{org}/{repo}"),
            (IdentityScope::Organization(org), None) => format!("orgs/{org}"),
            (IdentityScope::Enterprise(ent), _) => format!("enterprises/{ent}"),
        };
        format!("{owner}/actions/runners/registration-token")
    }

    #[must_use]
    pub fn is_enterprise(&self) -> bool {
        matches!(self, IdentityScope::Enterprise(_))
    }
}
