//! End-to-end lifecycle tests against a stub farm server.

use foxfarm_client::{ClientError, Command, FarmClient, Scenario, SessionConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn disable_system_proxy_for_tests() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        // Safety: set once for the process before any HTTP clients are built.
        unsafe {
            std::env::set_var("FOXFARM_DISABLE_SYSTEM_PROXY", "1");
        }
    });
}

#[tokio::test]
async fn session_lifecycle_round_trip() {
    disable_system_proxy_for_tests();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/start"))
        .and(body_partial_json(json!({
            "browser_key": "it-key",
            "browser": "firefox",
            "os": "windows",
            "humanize": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"message\": \"started\"}"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/execute_scenario"))
        .and(body_partial_json(json!({
            "browser_key": "it-key",
            "page_index": 0
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#""{\"value\": true}{\"value\": [\"a\", \"b\"]}""#),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/stop_browser"))
        .and(query_param("browser_key", "it-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"message\": \"stopped\"}"))
        .expect(1)
        .mount(&server)
        .await;

    let config = SessionConfig::default().with_browser_key("it-key");
    let mut client = FarmClient::connect(server.uri(), config).await;

    let mut scenario = Scenario::new();
    scenario
        .push(Command::navigate("https://example.com"))
        .push(Command::is_element_on_page("[type='submit']"))
        .push(Command::evaluate_script_on_elements(
            "div input[placeholder]",
            "return e.outerHTML",
        ));

    let data = client.execute_scenario(&scenario).await.unwrap();
    assert_eq!(data.len(), 2);
    assert!(data.bool_at(0).unwrap());
    assert_eq!(data.strings_at(1).unwrap(), vec!["a", "b"]);

    client.close().await;
    // Mock expectations (exactly one start, execute, and stop) are
    // verified when the server drops.
}

#[tokio::test]
async fn server_error_marker_yields_failure() {
    disable_system_proxy_for_tests();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"message\": \"started\"}"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/execute_scenario"))
        .respond_with(ResponseTemplate::new(200).set_body_string("error: browser not found"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/stop_browser"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"message\": \"stopped\"}"))
        .mount(&server)
        .await;

    let mut client = FarmClient::connect(server.uri(), SessionConfig::default()).await;

    let mut scenario = Scenario::new();
    scenario.push(Command::click("#go"));

    match client.execute_scenario(&scenario).await {
        Err(ClientError::Server(message)) => assert_eq!(message, "error: browser not found"),
        other => panic!("expected server failure, got {:?}", other.map(|d| d.len())),
    }

    client.close().await;
}

#[tokio::test]
async fn http_error_body_is_surfaced() {
    disable_system_proxy_for_tests();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"message\": \"started\"}"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/execute_scenario"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string("{\"detail\": \"browser with this key is not running\"}"),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/stop_browser"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"message\": \"stopped\"}"))
        .mount(&server)
        .await;

    let mut client = FarmClient::connect(server.uri(), SessionConfig::default()).await;

    let mut scenario = Scenario::new();
    scenario.push(Command::click("#go"));

    match client.execute_scenario(&scenario).await {
        Err(ClientError::Server(body)) => {
            assert!(body.contains("browser with this key is not running"));
        }
        other => panic!("expected server failure, got {:?}", other.map(|d| d.len())),
    }

    client.close().await;
}

#[tokio::test]
async fn unreachable_start_still_attempts_stop() {
    disable_system_proxy_for_tests();
    let server = MockServer::start().await;

    // No /start mock: the start request 404s and must be swallowed.
    Mock::given(method("POST"))
        .and(path("/stop_browser"))
        .and(query_param("browser_key", "orphan-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"message\": \"stopped\"}"))
        .expect(1)
        .mount(&server)
        .await;

    let config = SessionConfig::default().with_browser_key("orphan-key");
    let client = FarmClient::connect(server.uri(), config).await;
    assert_eq!(client.browser_key(), "orphan-key");

    client.close().await;
}
