use thiserror::Error;

/// Failures surfaced while talking to Wopee. A GraphQL reply missing the
/// expected field is not represented here: absence is a normal outcome and
/// travels as `None`.
#[derive(Debug, Error)]
pub enum ReportingError {
    #[error("{0} is not set")]
    Configuration(String),

    #[error("graphql client not initialized, call initialize() before sending requests")]
    NotInitialized,

    #[error("graphql responded with 'Not Authorised!'")]
    NotAuthorized,

    #[error("graphql request failed with status {status}: {body}")]
    Transport { status: u16, body: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
