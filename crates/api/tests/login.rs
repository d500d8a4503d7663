use lowcoder_api::{Credentials, LowcoderClient, SessionToken};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials(base_url: &str) -> Credentials {
    Credentials::new(base_url, "selfhost-token", "admin@example.com", "hunter2")
}

#[tokio::test]
async fn login_extracts_session_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/form/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("set-cookie", "LOWCODER_CE_SELFHOST_TOKEN=abc123; Path=/"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = LowcoderClient::new(server.uri());
    let token = client.login(&credentials(&server.uri())).await.unwrap();
    assert_eq!(token, SessionToken::some("abc123"));
}

#[tokio::test]
async fn trailing_slash_targets_same_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/form/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("set-cookie", "LOWCODER_CE_SELFHOST_TOKEN=abc123"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let with_slash = format!("{}/", server.uri());
    let client = LowcoderClient::new(with_slash);
    let token = client.login(&credentials(&server.uri())).await.unwrap();
    assert!(token.is_present());
}

#[tokio::test]
async fn login_sends_protocol_body_and_token_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/form/login"))
        .and(header("LOWCODER_CE_SELFHOST_TOKEN", "selfhost-token"))
        .and(body_json(serde_json::json!({
            "loginId": "admin@example.com",
            "password": "hunter2",
            "register": "false",
            "source": "EMAIL",
            "authId": "EMAIL",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("set-cookie", "LOWCODER_CE_SELFHOST_TOKEN=t0k"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = LowcoderClient::new(server.uri());
    let token = client.login(&credentials(&server.uri())).await.unwrap();
    assert_eq!(token.value(), Some("t0k"));
}

#[tokio::test]
async fn missing_cookie_yields_absent_token_without_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/form/login"))
        .respond_with(ResponseTemplate::new(200).append_header("set-cookie", "other=1"))
        .mount(&server)
        .await;

    let client = LowcoderClient::new(server.uri());
    let token = client.login(&credentials(&server.uri())).await.unwrap();
    assert_eq!(token, SessionToken::none());
    assert_eq!(token.cookie_header(), "LOWCODER_CE_SELFHOST_TOKEN=");
}

#[tokio::test]
async fn remote_error_message_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/form/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "bad password",
            })),
        )
        .mount(&server)
        .await;

    let client = LowcoderClient::new(server.uri());
    let err = client
        .login(&credentials(&server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "bad password");
}

#[tokio::test]
async fn error_without_message_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/form/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = LowcoderClient::new(server.uri());
    let err = client
        .login(&credentials(&server.uri()))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("500"), "got: {err}");
}

#[tokio::test]
async fn login_error_carries_request_context() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/form/login"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(serde_json::json!({"message": "denied"})),
        )
        .mount(&server)
        .await;

    let client = LowcoderClient::new(server.uri());
    match client.login(&credentials(&server.uri())).await {
        Err(lowcoder_api::ApiError::Login { request, .. }) => {
            assert_eq!(request.method, "POST");
            assert!(request.url.ends_with("/api/auth/form/login"));
        }
        other => panic!("expected Login error, got {other:?}"),
    }
}

#[tokio::test]
async fn session_cookie_found_among_multiple_set_cookie_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/form/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("set-cookie", "JSESSIONID=xyz; Path=/; HttpOnly")
                .append_header("set-cookie", "LOWCODER_CE_SELFHOST_TOKEN=abc123; Path=/"),
        )
        .mount(&server)
        .await;

    let client = LowcoderClient::new(server.uri());
    let token = client.login(&credentials(&server.uri())).await.unwrap();
    assert_eq!(token.value(), Some("abc123"));
}
