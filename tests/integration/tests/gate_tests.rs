//! Route gate integration tests
//!
//! Exercises the page-level redirect rules end-to-end with a real session
//! cookie. The test client never follows redirects, so the Location header
//! can be asserted directly.
//!
//! Run with: cargo test -p integration-tests --test gate_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, helpers::assert_redirect, TestServer,
};
use reqwest::StatusCode;

async fn session_token(server: &TestServer) -> String {
    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    auth.access_token
}

#[tokio::test]
async fn test_marketing_pages_are_public() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/", "/pricing", "/privacy", "/terms"] {
        let response = server.get(path).await.unwrap();
        assert_status(response, StatusCode::OK)
            .await
            .unwrap_or_else(|e| panic!("{path}: {e}"));
    }
}

#[tokio::test]
async fn test_auth_pages_are_public_when_logged_out() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/login", "/register"] {
        let response = server.get(path).await.unwrap();
        assert_status(response, StatusCode::OK)
            .await
            .unwrap_or_else(|e| panic!("{path}: {e}"));
    }
}

#[tokio::test]
async fn test_protected_page_redirects_to_login_with_callback() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/dashboard").await.unwrap();
    assert_redirect(response, "/login?callbackUrl=%2Fdashboard")
        .await
        .unwrap();

    let response = server.get("/settings/security").await.unwrap();
    assert_redirect(response, "/login?callbackUrl=%2Fsettings%2Fsecurity")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_protected_page_allows_valid_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = session_token(&server).await;

    let response = server.get_with_session("/dashboard", &token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_with_session("/scam-shield", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_auth_pages_redirect_signed_in_users_to_dashboard() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = session_token(&server).await;

    for path in ["/login", "/register"] {
        let response = server.get_with_session(path, &token).await.unwrap();
        assert_redirect(response, "/dashboard")
            .await
            .unwrap_or_else(|e| panic!("{path}: {e}"));
    }
}

#[tokio::test]
async fn test_garbage_session_cookie_counts_as_logged_out() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_with_session("/dashboard", "not-a-valid-jwt")
        .await
        .unwrap();
    assert_redirect(response, "/login?callbackUrl=%2Fdashboard")
        .await
        .unwrap();

    // And the auth pages stay reachable
    let response = server
        .get_with_session("/login", "not-a-valid-jwt")
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_admin_page_gating() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Anonymous visitors go to login (no callback for admin pages)
    let response = server.get("/admin").await.unwrap();
    assert_redirect(response, "/login").await.unwrap();

    // Regular users bounce back to the dashboard
    let token = session_token(&server).await;
    let response = server.get_with_session("/admin", &token).await.unwrap();
    assert_redirect(response, "/dashboard").await.unwrap();
}
