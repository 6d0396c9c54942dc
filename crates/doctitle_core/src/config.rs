use std::env::{self, VarError};

use crate::error::ConfigError;
use crate::title::title_suffix;

pub const ORGANIZATION_ENV: &str = "REACT_APP_ORGANIZATION";
pub const DEFAULT_ORGANIZATION: &str = "mdn";

/// Reads the organization from `REACT_APP_ORGANIZATION`, defaulting to `mdn`
/// when the variable is unset or empty. Other values are taken verbatim.
pub fn organization_from_env() -> Result<String, ConfigError> {
    organization_from_lookup(|name| env::var(name))
}

pub fn organization_from_lookup<F>(lookup: F) -> Result<String, ConfigError>
where
    F: FnOnce(&str) -> Result<String, VarError>,
{
    match lookup(ORGANIZATION_ENV) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) | Err(VarError::NotPresent) => Ok(DEFAULT_ORGANIZATION.to_string()),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv {
            name: ORGANIZATION_ENV.to_string(),
        }),
    }
}

/// Fails with the same error `page_title` would raise for `organization`.
pub fn validate_organization(organization: &str) -> Result<&'static str, ConfigError> {
    title_suffix(organization).ok_or_else(|| ConfigError::UnknownOrganization {
        organization: organization.to_string(),
    })
}
