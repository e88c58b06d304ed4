#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use serde::Serialize;
use serde_json::Value;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ReportingError;

const API_KEY_HEADER: &str = "api_key";
const NOT_AUTHORISED_MARKER: &str = "Not Authorised!";

#[derive(Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: Option<Value>,
}

struct Channel {
    url: String,
    api_key: String,
    http: reqwest::Client,
}

/// Transport for GraphQL operations against the configured Wopee endpoint.
/// The channel is built once on the first `initialize` and reused for every
/// request after it.
pub struct GraphQLClient {
    channel: Option<Channel>,
}

impl Default for GraphQLClient {
    fn default() -> GraphQLClient {
        return GraphQLClient::new();
    }
}

impl GraphQLClient {
    pub fn new() -> GraphQLClient {
        return GraphQLClient { channel: None };
    }

    /// Builds a client for an explicit endpoint, bypassing the process
    /// configuration.
    pub fn with_endpoint(url: &str, api_key: &str) -> GraphQLClient {
        return GraphQLClient {
            channel: Some(Channel {
                url: url.to_string(),
                api_key: api_key.to_string(),
                http: reqwest::Client::new(),
            }),
        };
    }

    /// Reads the endpoint and API key from [`Config`] and builds the
    /// reusable channel. A second call is a no-op.
    pub fn initialize(&mut self) -> Result<(), ReportingError> {
        if self.channel.is_some() {
            return Ok(());
        }

        let url = Config::get(ConfigKey::ApiURL);
        if url.is_empty() {
            return Err(ReportingError::Configuration(Config::env_var(
                ConfigKey::ApiURL,
            )));
        }

        let api_key = Config::get(ConfigKey::ApiKey);
        if api_key.is_empty() {
            return Err(ReportingError::Configuration(Config::env_var(
                ConfigKey::ApiKey,
            )));
        }

        self.channel = Some(Channel {
            url,
            api_key,
            http: reqwest::Client::new(),
        });

        return Ok(());
    }

    /// Sends a GraphQL query or mutation with optional variables and returns
    /// the raw response body. No schema validation happens at this layer.
    pub async fn send_request(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<String, ReportingError> {
        if self.channel.is_none() {
            return Err(ReportingError::NotInitialized);
        }
        let channel = self.channel.as_ref().unwrap();

        let res = channel
            .http
            .post(&channel.url)
            .header(API_KEY_HEADER, &channel.api_key)
            .json(&GraphQLRequest { query, variables })
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;

        // The service reports a rejected key inside the body, independent of
        // the HTTP status.
        if text.contains(NOT_AUTHORISED_MARKER) {
            tracing::error!(status = status.as_u16(), "Wopee rejected the api key");
            return Err(ReportingError::NotAuthorized);
        }

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                body = %text,
                "GraphQL request failed"
            );
            return Err(ReportingError::Transport {
                status: status.as_u16(),
                body: text,
            });
        }

        tracing::debug!(body = %text, "GraphQL response");
        return Ok(text);
    }

    /// Pulls `data[object_name][field_name]` out of a GraphQL response body.
    /// Every missing or mis-shaped path is `None`: absence is an expected
    /// outcome, not a fault.
    pub fn extract_field(response: &str, object_name: &str, field_name: &str) -> Option<String> {
        let doc: Value = serde_json::from_str(response).ok()?;
        let field = doc.get("data")?.get(object_name)?.get(field_name)?;

        return Some(field.as_str()?.to_string());
    }
}
