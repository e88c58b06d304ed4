use anyhow::Result;
use serde_json::json;

use super::SuiteSession;
use crate::domain::models::ScenarioReply;
use crate::domain::models::StepReply;
use crate::domain::models::SuiteReply;
use crate::infrastructure::graphql::GraphQLClient;

fn session_for(server: &mockito::Server) -> SuiteSession {
    return SuiteSession::with_client(
        GraphQLClient::with_endpoint(&server.url(), "abc"),
        "project-1".to_string(),
    );
}

#[tokio::test]
async fn it_creates_a_suite() -> Result<()> {
    let reply = SuiteReply {
        uuid: "abc-123".to_string(),
        name: "X".to_string(),
    };
    let body = json!({ "data": { "createIntegrationSuite": reply } }).to_string();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("api_key", "abc")
        .with_status(200)
        .with_body(body)
        .create();

    let session = session_for(&server);
    let uuid = session
        .create_suite(json!({ "branchName": "main" }), "X")
        .await?;

    assert_eq!(uuid, Some("abc-123".to_string()));
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_creates_and_tracks_a_scenario() -> Result<()> {
    let reply = ScenarioReply {
        uuid: "scn-1".to_string(),
        name: Some("Scenario_Sample".to_string()),
        integration_running_status: "RUNNING".to_string(),
    };
    let body = json!({ "data": { "createIntegrationScenario": reply } }).to_string();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("api_key", "abc")
        .with_status(200)
        .with_body(body)
        .create();

    let mut session = session_for(&server);
    let uuid = session
        .create_scenario("suite-1", Some("Scenario_Sample"))
        .await?;

    assert_eq!(uuid, Some("scn-1".to_string()));
    assert_eq!(session.scenario_uuid(), Some("scn-1"));
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_tracks_absence_when_the_scenario_is_not_returned() -> Result<()> {
    let body = r#"{"data":{},"errors":[{"message":"boom"}]}"#;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(body)
        .create();

    let mut session = session_for(&server);
    let uuid = session.create_scenario("suite-1", None).await?;

    assert_eq!(uuid, None);
    assert_eq!(session.scenario_uuid(), None);
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_creates_a_step_with_a_derived_track_name() -> Result<()> {
    let reply = StepReply {
        id: "step-9".to_string(),
        step_name: "banana".to_string(),
    };
    let body = json!({ "data": { "createIntegrationStep": reply } }).to_string();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("api_key", "abc")
        .match_body(mockito::Matcher::PartialJson(json!({
            "variables": {
                "input": {
                    "trackName": "scn-1-banana",
                    "scenarioUuid": "scn-1",
                    "projectUuid": "project-1",
                },
            },
        })))
        .with_status(200)
        .with_body(body)
        .create();

    let session = session_for(&server);
    let id = session.create_step("banana", "scn-1", "aW1n").await?;

    assert_eq!(id, Some("step-9".to_string()));
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_stops_a_tracked_scenario_once() -> Result<()> {
    let reply = ScenarioReply {
        uuid: "scn-1".to_string(),
        name: None,
        integration_running_status: "RUNNING".to_string(),
    };
    let body = json!({ "data": { "createIntegrationScenario": reply } }).to_string();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(body)
        .expect(2)
        .create();

    let mut session = session_for(&server);
    session.create_scenario("suite-1", None).await?;
    session.end_scenario().await?;

    assert_eq!(session.scenario_uuid(), None);

    // The scenario is no longer tracked, so this must not hit the server.
    session.end_scenario().await?;

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_skips_stop_when_no_scenario_was_created() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/").expect(0).create();

    let mut session = session_for(&server);
    session.end_scenario().await?;

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_stops_the_suite_on_close() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "variables": { "suiteUuid": "abc-123" },
        })))
        .with_status(200)
        .with_body(r#"{"data":{"stopIntegrationSuite":{"uuid":"abc-123"}}}"#)
        .create();

    let mut session = session_for(&server);
    session.suite_uuid = Some("abc-123".to_string());
    session.close().await?;

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_skips_stop_suite_when_none_was_recorded() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/").expect(0).create();

    let session = session_for(&server);
    session.close().await?;

    mock.assert();
    return Ok(());
}

#[test]
fn it_builds_timestamped_suite_names() {
    let name = SuiteSession::timestamped_name("nightly");

    assert!(name.starts_with("nightly_"));
    assert_eq!(name.len(), "nightly_".len() + "2024-01-31_13-37-00".len());
}
