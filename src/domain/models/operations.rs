#[cfg(test)]
#[path = "operations_test.rs"]
mod tests;

use base64::engine::general_purpose::STANDARD as b64;
use base64::Engine;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// The mutation documents are data: each one sits next to the variables shape
// it expects, and building an operation never touches the transport.

pub const CREATE_SUITE_MUTATION: &str = r#"
mutation CreateIntegrationSuite($projectUuid: ID!, $name: String!, $suiteIntegrationConfig: SuiteConfigInput) {
  createIntegrationSuite(projectUuid: $projectUuid, name: $name, suiteIntegrationConfig: $suiteIntegrationConfig) {
    uuid
    name
  }
}
"#;

pub const CREATE_SCENARIO_MUTATION: &str = r#"
mutation CreateIntegrationScenario($projectUuid: ID!, $suiteUuid: ID!, $name: String) {
  createIntegrationScenario(projectUuid: $projectUuid, suiteUuid: $suiteUuid, name: $name) {
    integrationRunningStatus
    name
    uuid
  }
}
"#;

pub const CREATE_STEP_MUTATION: &str = r#"
mutation CreateIntegrationStep($input: CreateIntegrationStepInput!) {
  createIntegrationStep(input: $input) {
    id
    stepName
  }
}
"#;

pub const STOP_SCENARIO_MUTATION: &str = r#"
mutation StopIntegrationScenario($scenarioUuid: ID!, $projectUuid: ID!) {
  stopIntegrationScenario(scenarioUuid: $scenarioUuid, projectUuid: $projectUuid) {
    uuid
    name
    integrationRunningStatus
  }
}
"#;

pub const STOP_SUITE_MUTATION: &str = r#"
mutation StopIntegrationSuite($suiteUuid: ID!) {
  stopIntegrationSuite(suiteUuid: $suiteUuid) {
    uuid
  }
}
"#;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSuiteVariables {
    pub project_uuid: String,
    pub suite_integration_config: Value,
    pub name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScenarioVariables {
    pub project_uuid: String,
    pub suite_uuid: String,
    pub name: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStepInput {
    pub step_name: String,
    pub track_name: String,
    pub project_uuid: String,
    pub scenario_uuid: String,
    pub image_base64: String,
}

impl CreateStepInput {
    /// The track name is never supplied by callers, it is always derived
    /// from the owning scenario and the step name.
    pub fn new(
        step_name: &str,
        project_uuid: &str,
        scenario_uuid: &str,
        image_base64: &str,
    ) -> CreateStepInput {
        return CreateStepInput {
            step_name: step_name.to_string(),
            track_name: format!("{scenario_uuid}-{step_name}"),
            project_uuid: project_uuid.to_string(),
            scenario_uuid: scenario_uuid.to_string(),
            image_base64: image_base64.to_string(),
        };
    }

    /// Encodes raw screenshot bytes into the payload the step mutation
    /// carries.
    pub fn encode_image(bytes: &[u8]) -> String {
        return b64.encode(bytes);
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStepVariables {
    pub input: CreateStepInput,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopScenarioVariables {
    pub scenario_uuid: String,
    pub project_uuid: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopSuiteVariables {
    pub suite_uuid: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteReply {
    pub uuid: String,
    pub name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReply {
    pub uuid: String,
    pub name: Option<String>,
    pub integration_running_status: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReply {
    pub id: String,
    pub step_name: String,
}
