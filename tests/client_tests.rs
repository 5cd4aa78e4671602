//! Integration tests for the HTTP client against a local mock server:
//! authentication headers, pagination links, response wrapping, and the
//! error taxonomy.

use gitlab_cli::api::{Error, Params};
use gitlab_cli::{Config, GitlabClient};
use mockito::Matcher;

fn client_for(server: &mockito::ServerGuard) -> GitlabClient {
    let config = Config::default()
        .with_endpoint(server.url())
        .with_private_token("secret");
    GitlabClient::new(config).unwrap()
}

// ============================================================================
// Response wrapping
// ============================================================================

#[tokio::test]
async fn test_object_response_becomes_record() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/user")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id": 1, "username": "john.smith",
                "identities": [{"provider": "ldap"}],
                "namespace": {"id": 5, "path": "john.smith"}}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let user = client.current_user().await.unwrap();

    assert_eq!(user.get_i64("id").unwrap(), 1);
    assert_eq!(user.get_str("username").unwrap(), "john.smith");
    let namespace = user.get_record("namespace").unwrap();
    assert_eq!(namespace.get_str("path").unwrap(), "john.smith");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_array_response_preserves_order() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": 3}, {"id": 1}, {"id": 2}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let users = client.users(Params::new()).await.unwrap();

    let ids: Vec<i64> = users
        .records()
        .iter()
        .map(|u| u.get_i64("id").unwrap())
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert!(!users.has_next_page());
}

#[tokio::test]
async fn test_link_header_drives_next_page() {
    let mut server = mockito::Server::new_async().await;
    let next_url = format!("{}/users?page=2&per_page=1", server.url());
    server
        .mock("GET", "/users")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("Link", &format!("<{next_url}>; rel=\"next\""))
        .with_body(r#"[{"id": 1}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/users")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": 2}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client.users(Params::new()).await.unwrap();

    assert_eq!(page.links().next.as_deref(), Some(next_url.as_str()));

    let next = page.next_page(&client).await.unwrap().unwrap();
    assert_eq!(next.records()[0].get_i64("id").unwrap(), 2);
    assert!(next.next_page(&client).await.unwrap().is_none());
}

#[tokio::test]
async fn test_wrapping_is_stable_across_identical_payloads() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/user")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 1, "username": "john.smith", "is_admin": false}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let first = client.current_user().await.unwrap();
    let second = client.current_user().await.unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_private_token_header_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/version")
        .match_header("PRIVATE-TOKEN", "secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"version": "17.0.0", "revision": "abc123"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client.version().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_sudo_parameter_appended() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/user")
        .match_query(Matcher::UrlEncoded("sudo".into(), "other-user".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 2, "username": "other-user"}"#)
        .create_async()
        .await;

    let config = Config::default()
        .with_endpoint(server.url())
        .with_private_token("secret")
        .with_sudo("other-user");
    let client = GitlabClient::new(config).unwrap();

    let user = client.current_user().await.unwrap();
    assert_eq!(user.get_str("username").unwrap(), "other-user");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_endpoint_fails_without_network() {
    let config = Config::default().with_private_token("secret");
    let client = GitlabClient::new(config).unwrap();

    let err = client.version().await.unwrap_err();
    assert!(matches!(err, Error::MissingCredentials));
    assert_eq!(err.to_string(), "Please set an endpoint to API");
}

// ============================================================================
// Error taxonomy
// ============================================================================

#[tokio::test]
async fn test_conflict_error_message_format() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/users")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "409 Already exists"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .create_user("john@example.com", "pass", "john.smith", Default::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Conflict(_)));
    assert_eq!(
        err.to_string(),
        format!(
            "Server responded with code 409, message: 409 Already exists. Request URI: {}/users",
            server.url()
        )
    );
}

#[tokio::test]
async fn test_not_found_carries_status_and_uri() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/999")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "404 User Not Found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.user(999).await.unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(err.status(), Some(404));
    let response = err.response().unwrap();
    assert_eq!(response.message, "404 User Not Found");
    assert_eq!(response.request_uri, format!("{}/users/999", server.url()));
}

#[tokio::test]
async fn test_error_field_and_object_messages() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/1")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "bad request"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/users/2")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": {"email": ["has already been taken"]}}"#)
        .create_async()
        .await;

    let client = client_for(&server);

    let err = client.user(1).await.unwrap_err();
    assert_eq!(err.response().unwrap().message, "bad request");

    let err = client.user(2).await.unwrap_err();
    assert_eq!(
        err.response().unwrap().message,
        "'email' has already been taken"
    );
}

#[tokio::test]
async fn test_non_json_error_body_passes_raw() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/1")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.user(1).await.unwrap_err();
    assert!(matches!(err, Error::BadGateway(_)));
    assert_eq!(err.response().unwrap().message, "Bad Gateway");
}

// ============================================================================
// Path encoding and binary downloads
// ============================================================================

#[tokio::test]
async fn test_project_path_is_percent_encoded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/projects/gitlab-org%2Fgitlab")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 278964, "path_with_namespace": "gitlab-org/gitlab"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let project = client.project("gitlab-org/gitlab").await.unwrap();
    assert_eq!(project.get_i64("id").unwrap(), 278964);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_binary_download_yields_file_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/projects/3/export/download")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_header(
            "content-disposition",
            "attachment; filename=\"export.tar.gz\"",
        )
        .with_body(&b"\x1f\x8b\x08\x00archive"[..])
        .create_async()
        .await;

    let client = client_for(&server);
    let file = client.export_project_download(3).await.unwrap();

    assert_eq!(file.filename(), Some("export.tar.gz"));
    assert_eq!(file.data(), b"\x1f\x8b\x08\x00archive");
}

#[tokio::test]
async fn test_empty_body_is_not_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/projects/3/environments/12")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    client.delete_environment(3, 12).await.unwrap();
}
