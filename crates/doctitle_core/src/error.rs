use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "TITLE_SUFFIX[\"{organization}\"] is not defined. Make sure the value of REACT_APP_ORGANIZATION is correct."
    )]
    UnknownOrganization { organization: String },
    #[error("{name} is not valid unicode")]
    InvalidEnv { name: String },
}
