use guac_http::{Action, ApiClient, Config, ConnectionsResponse, FetchError, UsersResponse, ViewState};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_config(Config::new(server.base_url()))
}

#[tokio::test]
async fn test_fetch_users_array() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200).json_body(json!(["guacadmin", "alice"]));
        })
        .await;

    let response = client_for(&server).fetch_users().await.unwrap();

    mock.assert_async().await;
    assert!(matches!(response, UsersResponse::List(ref users) if users.len() == 2));
}

#[tokio::test]
async fn test_fetch_users_wrapped_into_state() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200).json_body(json!({"users": ["guacadmin", "alice", "bob"]}));
        })
        .await;

    let client = client_for(&server);
    let mut state = ViewState::new();
    let ticket = state.begin(Action::Users);
    state.complete_users(ticket, client.fetch_users().await);

    assert_eq!(state.message(), "Fetched 3 users.");
    assert_eq!(state.users()[2].to_string(), "bob");
}

#[tokio::test]
async fn test_fetch_connections_normalizes() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/connections");
            then.status(200).json_body(json!({
                "connections": {
                    "c1": {
                        "name": "A",
                        "protocol": "rdp",
                        "activeConnections": 2,
                        "attributes": {"guacd-hostname": "h1"}
                    },
                    "c2": {
                        "name": "B",
                        "protocol": "ssh",
                        "activeConnections": 0
                    }
                }
            }));
        })
        .await;

    let response = client_for(&server).fetch_connections().await.unwrap();
    let ConnectionsResponse::Listed(connections) = response else {
        panic!("expected a connection listing");
    };

    assert_eq!(connections.len(), 2);
    assert_eq!(connections[0].id, "c1");
    assert_eq!(connections[0].hostname, "h1");
    assert_eq!(connections[1].hostname, "N/A");
    assert_eq!(connections[1].active_label(), "0");
}

#[tokio::test]
async fn test_error_status_body_is_still_classified() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/connections");
            then.status(500)
                .json_body(json!({"detail": "Guacamole request failed"}));
        })
        .await;

    let client = client_for(&server);
    let mut state = ViewState::new();
    let ticket = state.begin(Action::Connections);
    state.complete_connections(ticket, client.fetch_connections().await);

    assert_eq!(state.message(), "Unexpected response format for connections.");
    assert!(state.connections().is_empty());
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let result = client_for(&server).fetch_users().await;
    assert!(matches!(result, Err(FetchError::Decode(_))));

    let mut state = ViewState::new();
    let ticket = state.begin(Action::Users);
    state.complete_users(ticket, result);
    assert!(state.message().starts_with("Error: "));
}

#[tokio::test]
async fn test_unreachable_backend_reports_error() {
    // Port 1 is reserved and nothing listens on it.
    let client = ApiClient::with_config(Config::new("http://127.0.0.1:1"));
    let mut state = ViewState::new();

    let users = state.begin(Action::Users);
    let result = client.fetch_users().await;
    assert!(matches!(result, Err(FetchError::Transport(_))));
    state.complete_users(users, result);
    assert!(state.message().starts_with("Error: "));

    let connections = state.begin(Action::Connections);
    state.complete_connections(connections, client.fetch_connections().await);
    assert!(state.message().starts_with("Error: "));
    assert!(state.users().is_empty());
    assert!(state.connections().is_empty());
}

#[tokio::test]
async fn test_check_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).json_body(json!({
                "status": "backend up",
                "guacamole": "http://localhost:8080/guacamole"
            }));
        })
        .await;

    let status = client_for(&server).check_status().await.unwrap();
    assert_eq!(status.status, "backend up");
}

#[tokio::test]
async fn test_check_status_rejects_other_shapes() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).json_body(json!(["not", "a", "status"]));
        })
        .await;

    let result = client_for(&server).check_status().await;
    assert!(matches!(result, Err(FetchError::Decode(_))));
}
