use github_gitlab_migrate::{DestinationHost, GitlabDestination, RemoteApiError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn destination(server: &MockServer) -> GitlabDestination {
    GitlabDestination::new(&server.uri(), "secret").unwrap()
}

#[tokio::test]
async fn creates_project_with_token_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/projects"))
        .and(header("PRIVATE-TOKEN", "secret"))
        .and(body_json(json!({ "name": "demo" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "ssh_url_to_repo": "git@gitlab.example.com:root/demo.git",
            "web_url": "https://gitlab.example.com/root/demo"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let project = destination(&server).create_project("demo").await.unwrap();

    assert_eq!(project.id, 7);
    assert_eq!(project.ssh_url_to_repo, "git@gitlab.example.com:root/demo.git");
}

#[tokio::test]
async fn creates_group_with_name_and_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/groups"))
        .and(body_json(json!({ "name": "my-org", "path": "my-org" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": 3, "name": "my-org" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let group = destination(&server)
        .create_group("my-org", "my-org")
        .await
        .unwrap();

    assert_eq!(group.id, 3);
    assert_eq!(group.name, "my-org");
}

#[tokio::test]
async fn lists_groups_from_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/groups"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "my-org" },
            { "id": 2, "name": "other" }
        ])))
        .mount(&server)
        .await;

    let groups = destination(&server).list_groups().await.unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "my-org");
}

#[tokio::test]
async fn creates_issue_with_flattened_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/projects/7/issues"))
        .and(body_json(json!({
            "title": "a bug",
            "description": "body text"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "iid": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    destination(&server)
        .create_issue(7, "a bug", "body text")
        .await
        .unwrap();
}

#[tokio::test]
async fn transfers_project_into_group() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v4/projects/7/transfer"))
        .and(body_json(json!({ "namespace": 3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    destination(&server)
        .transfer_project(3, 7)
        .await
        .unwrap();
}

#[tokio::test]
async fn rejected_token_maps_to_authentication_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/groups"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = destination(&server).list_groups().await;

    assert!(matches!(result, Err(RemoteApiError::AuthenticationFailed)));
}

#[tokio::test]
async fn api_rejection_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/projects"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("{\"message\":\"has already been taken\"}"),
        )
        .mount(&server)
        .await;

    let result = destination(&server).create_project("demo").await;

    match result {
        Err(RemoteApiError::Api { status, body }) => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("already been taken"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}
