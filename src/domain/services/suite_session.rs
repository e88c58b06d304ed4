#[cfg(test)]
#[path = "suite_session_test.rs"]
mod tests;

use chrono::Local;
use serde_json::json;
use serde_json::Value;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CreateScenarioVariables;
use crate::domain::models::CreateStepInput;
use crate::domain::models::CreateStepVariables;
use crate::domain::models::CreateSuiteVariables;
use crate::domain::models::ReportingError;
use crate::domain::models::StopScenarioVariables;
use crate::domain::models::StopSuiteVariables;
use crate::domain::models::CREATE_SCENARIO_MUTATION;
use crate::domain::models::CREATE_STEP_MUTATION;
use crate::domain::models::CREATE_SUITE_MUTATION;
use crate::domain::models::STOP_SCENARIO_MUTATION;
use crate::domain::models::STOP_SUITE_MUTATION;
use crate::infrastructure::graphql::GraphQLClient;

/// Reporting session for a single test run. At most one suite and one
/// scenario are tracked at a time; the host framework must drive the
/// lifecycle hooks sequentially and never overlapping.
///
/// `open` is the run-start hook, [`SuiteSession::end_scenario`] the
/// unit-end hook, and [`SuiteSession::close`] the run-end hook. Closing
/// consumes the session, so a stopped suite cannot be reported to again.
pub struct SuiteSession {
    client: GraphQLClient,
    project_uuid: String,
    suite_uuid: Option<String>,
    scenario_uuid: Option<String>,
}

impl SuiteSession {
    /// Run-start hook. Loads configuration from the environment, initializes
    /// the shared client, and creates the suite on Wopee. The recorded suite
    /// UUID stays absent when the service does not return one.
    pub async fn open(
        suite_integration_config: Value,
        name: &str,
    ) -> Result<SuiteSession, ReportingError> {
        Config::load();

        let mut client = GraphQLClient::new();
        client.initialize()?;

        let mut session =
            SuiteSession::with_client(client, Config::get(ConfigKey::ProjectUuid));
        let suite_uuid = session
            .create_suite(suite_integration_config, name)
            .await?;
        session.suite_uuid = suite_uuid;
        tracing::info!(suite_uuid = ?session.suite_uuid, name = name, "suite opened");

        return Ok(session);
    }

    /// Builds a session over an already configured client, for embedders
    /// and tests that set up the endpoint themselves.
    pub fn with_client(client: GraphQLClient, project_uuid: String) -> SuiteSession {
        return SuiteSession {
            client,
            project_uuid,
            suite_uuid: None,
            scenario_uuid: None,
        };
    }

    /// Suite name in the `prefix_2024-01-31_13-37-00` convention.
    pub fn timestamped_name(prefix: &str) -> String {
        return format!("{prefix}_{}", Local::now().format("%Y-%m-%d_%H-%M-%S"));
    }

    pub fn suite_uuid(&self) -> Option<&str> {
        return self.suite_uuid.as_deref();
    }

    pub fn scenario_uuid(&self) -> Option<&str> {
        return self.scenario_uuid.as_deref();
    }

    async fn create_suite(
        &self,
        suite_integration_config: Value,
        name: &str,
    ) -> Result<Option<String>, ReportingError> {
        let variables = CreateSuiteVariables {
            project_uuid: self.project_uuid.clone(),
            suite_integration_config,
            name: name.to_string(),
        };

        let response = self
            .client
            .send_request(CREATE_SUITE_MUTATION, Some(json!(variables)))
            .await?;

        return Ok(GraphQLClient::extract_field(
            &response,
            "createIntegrationSuite",
            "uuid",
        ));
    }

    /// Creates a scenario under the given suite and tracks it as the current
    /// one, overwriting whatever was tracked before.
    pub async fn create_scenario(
        &mut self,
        suite_uuid: &str,
        name: Option<&str>,
    ) -> Result<Option<String>, ReportingError> {
        let variables = CreateScenarioVariables {
            project_uuid: self.project_uuid.clone(),
            suite_uuid: suite_uuid.to_string(),
            name: name.map(str::to_string),
        };

        let response = self
            .client
            .send_request(CREATE_SCENARIO_MUTATION, Some(json!(variables)))
            .await?;

        self.scenario_uuid =
            GraphQLClient::extract_field(&response, "createIntegrationScenario", "uuid");
        return Ok(self.scenario_uuid.clone());
    }

    /// Creates a step within the given scenario, carrying an optional
    /// base64-encoded screenshot. Steps are write-once.
    pub async fn create_step(
        &self,
        step_name: &str,
        scenario_uuid: &str,
        image_base64: &str,
    ) -> Result<Option<String>, ReportingError> {
        let variables = CreateStepVariables {
            input: CreateStepInput::new(step_name, &self.project_uuid, scenario_uuid, image_base64),
        };

        let response = self
            .client
            .send_request(CREATE_STEP_MUTATION, Some(json!(variables)))
            .await?;

        return Ok(GraphQLClient::extract_field(
            &response,
            "createIntegrationStep",
            "id",
        ));
    }

    /// Unit-end hook. Stops the tracked scenario if one is set, clearing it;
    /// a no-op otherwise. The service's reply is discarded.
    pub async fn end_scenario(&mut self) -> Result<(), ReportingError> {
        if let Some(scenario_uuid) = self.scenario_uuid.take() {
            tracing::info!(scenario_uuid = %scenario_uuid, "stopping scenario");
            let variables = StopScenarioVariables {
                scenario_uuid,
                project_uuid: self.project_uuid.clone(),
            };
            self.client
                .send_request(STOP_SCENARIO_MUTATION, Some(json!(variables)))
                .await?;
        }

        return Ok(());
    }

    /// Run-end hook. Stops the recorded suite if one is set; a no-op
    /// otherwise. Best-effort notification: the reply is not validated.
    pub async fn close(mut self) -> Result<(), ReportingError> {
        if let Some(suite_uuid) = self.suite_uuid.take() {
            tracing::info!(suite_uuid = %suite_uuid, "stopping suite");
            let variables = StopSuiteVariables { suite_uuid };
            self.client
                .send_request(STOP_SUITE_MUTATION, Some(json!(variables)))
                .await?;
        }

        return Ok(());
    }
}
