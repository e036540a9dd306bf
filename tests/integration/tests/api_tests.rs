//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (schema from settle-db/migrations applied)
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_db_probe_reports_connected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/test-db").await.expect("Request failed");

    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "connected");
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();

    // Registration sets the session cookie for the page gate
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(set_cookie.starts_with("settle_session="));

    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.user.email, request.email.to_lowercase());
    assert_eq!(auth.user.role, "user");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email_is_400() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.error.message,
        "An account with this email already exists"
    );
}

#[tokio::test]
async fn test_register_short_password_is_400() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body.error.message.contains("at least 8"));

    // The rejected account must not exist: logging in with a valid-length
    // password for that email still fails with 401, not 400
    let login = LoginRequest {
        email: request.email,
        password: "long-enough-password".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_register_response_never_contains_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.text().await.unwrap();
    assert!(!body.contains("password"));
    assert!(!body.contains("$argon2"));
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email.to_lowercase());
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrong-password".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_updates_last_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let me: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(me["last_login_at"].is_string());
}

// ============================================================================
// Token Tests
// ============================================================================

#[tokio::test]
async fn test_refresh_token_rotation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register
    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Refresh
    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.access_token.is_empty());

    // The old refresh token was revoked by rotation
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/auth/logout",
            &auth.access_token,
            &json!({ "refresh_token": auth.refresh_token }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_protected_endpoint_requires_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

async fn register_and_token(server: &TestServer) -> String {
    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    auth.access_token
}

#[tokio::test]
async fn test_profile_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = register_and_token(&server).await;

    // No profile yet
    let response = server.get_auth("/api/v1/profile", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Create via onboarding; postcode area is normalized to uppercase
    let response = server
        .post_auth("/api/v1/profile", &token, &onboarding_payload())
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(profile.onboarding_completed);
    assert_eq!(profile.postcode_area.as_deref(), Some("LS1"));

    // Read back
    let response = server.get_auth("/api/v1/profile", &token).await.unwrap();
    let fetched: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, profile.id);

    // A second create conflicts (one profile per user)
    let response = server
        .post_auth("/api/v1/profile", &token, &onboarding_payload())
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Update replaces the answers
    let mut updated = onboarding_payload();
    updated["region"] = json!("scotland");
    let response = server
        .put_auth("/api/v1/profile", &token, &updated)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["region"], "scotland");
}

// ============================================================================
// Roadmap Tests
// ============================================================================

#[tokio::test]
async fn test_roadmap_requires_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = register_and_token(&server).await;

    let response = server
        .post_auth_empty("/api/v1/roadmap/generate", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_roadmap_generate_is_idempotent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = register_and_token(&server).await;

    server
        .post_auth("/api/v1/profile", &token, &onboarding_payload())
        .await
        .unwrap();

    let response = server
        .post_auth_empty("/api/v1/roadmap/generate", &token)
        .await
        .unwrap();
    let first: RoadmapResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth_empty("/api/v1/roadmap/generate", &token)
        .await
        .unwrap();
    let second: RoadmapResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(first.progress.total, second.progress.total);
    assert_eq!(first.tasks.len(), second.tasks.len());
}

// ============================================================================
// Scam Shield Tests
// ============================================================================

#[tokio::test]
async fn test_scam_check_flags_rental_scam() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = register_and_token(&server).await;

    let response = server
        .post_auth(
            "/api/v1/scam-checks",
            &token,
            &json!({
                "input_kind": "text",
                "content": "I am currently abroad, but send the deposit today and the keys \
                            will be posted to you."
            }),
        )
        .await
        .unwrap();

    let assessment: ScamAssessmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(assessment.risk_level, "high");
    assert_eq!(assessment.category, "rental");
    assert!(!assessment.red_flags.is_empty());
    assert!(!assessment.safe_next_steps.is_empty());
}

#[tokio::test]
async fn test_scam_check_clean_message_is_low_risk() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = register_and_token(&server).await;

    let response = server
        .post_auth(
            "/api/v1/scam-checks",
            &token,
            &json!({
                "input_kind": "text",
                "content": "Hi! Your viewing is confirmed for Saturday at 2pm."
            }),
        )
        .await
        .unwrap();

    let assessment: ScamAssessmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(assessment.risk_level, "low");
    assert_eq!(assessment.risk_score, 0);
}

#[tokio::test]
async fn test_scam_check_history_and_report() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = register_and_token(&server).await;

    let response = server
        .post_auth(
            "/api/v1/scam-checks",
            &token,
            &json!({ "input_kind": "text", "content": "verify your account now" }),
        )
        .await
        .unwrap();
    let assessment: ScamAssessmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // Listed for this user
    let response = server.get_auth("/api/v1/scam-checks", &token).await.unwrap();
    let page: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page["total"].as_i64().unwrap() >= 1);

    // Mark reported
    let response = server
        .post_auth_empty(
            &format!("/api/v1/scam-checks/{}/report", assessment.id),
            &token,
        )
        .await
        .unwrap();
    let reported: ScamAssessmentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(reported.reported_to_authorities);

    // Invisible to another user
    let other_token = register_and_token(&server).await;
    let response = server
        .get_auth(
            &format!("/api/v1/scam-checks/{}", assessment.id),
            &other_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Templates & Resources Tests
// ============================================================================

#[tokio::test]
async fn test_templates_list_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/templates").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let token = register_and_token(&server).await;
    let response = server.get_auth("/api/v1/templates", &token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_resources_list_is_public() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/resources?region=england&category=legal")
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_endpoints_reject_regular_users() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = register_and_token(&server).await;

    let response = server
        .post_auth(
            "/api/v1/admin/templates",
            &token,
            &json!({
                "title": "Collect BRP Card",
                "slug": "collect-brp-card",
                "category": "immigration",
                "priority": "critical"
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}
