#![allow(clippy::unwrap_used, clippy::expect_used)]

use anyhow::Result;
use serde_json::json;
use std::net::TcpListener;
use twenty20::{
    app::{AppError, HttpGateway},
    auth::RequestGateway,
    APP_USER_AGENT,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

#[tokio::test]
async fn posts_json_and_returns_parsed_body() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", APP_USER_AGENT))
        .and(body_json(json!({ "email": "a@b.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful.",
            "user": { "email": "a@b.com", "username": "a" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpGateway::new(server.uri())?;
    let response = gateway
        .send("/api/login", &json!({ "email": "a@b.com", "password": "pw" }))
        .await?;

    assert!(response.ok);
    assert_eq!(response.status, 200);
    assert_eq!(
        response.data.as_ref().and_then(|data| data.pointer("/user/username")),
        Some(&json!("a"))
    );
    Ok(())
}

#[tokio::test]
async fn rejection_keeps_status_and_payload() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "detail": "Email already registered." })),
        )
        .mount(&server)
        .await;

    let gateway = HttpGateway::new(format!("{}/", server.uri()))?;
    let response = gateway.send("/api/register", &json!({})).await?;

    assert!(!response.ok);
    assert_eq!(response.status, 409);
    assert_eq!(
        response.data,
        Some(json!({ "detail": "Email already registered." }))
    );
    Ok(())
}

#[tokio::test]
async fn non_json_body_degrades_to_absent_data() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let gateway = HttpGateway::new(server.uri())?;
    let response = gateway.send("/api/login", &json!({})).await?;

    assert!(!response.ok);
    assert_eq!(response.status, 502);
    assert_eq!(response.data, None);
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };

    let gateway = HttpGateway::new(format!("http://127.0.0.1:{port}"))?;
    let result = gateway.send("/api/login", &json!({})).await;

    assert!(matches!(result, Err(AppError::Network(_))));
    Ok(())
}
