//! API Integration Tests
//!
//! Each test spawns the full axum application on a local port, backed by the
//! in-memory store, and drives it over HTTP. No external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, test_config, TestServer, API_KEY,
    ADMIN_USERNAME,
};
use reqwest::{header, StatusCode};
use serde_json::{json, Value};

async fn create_invitation(server: &TestServer) -> Value {
    let response = server
        .post_with_key("/api/invitations", Some(API_KEY), &CreateInvitation::astana())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));

    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Invitation Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_invitation() {
    let server = TestServer::start().await.unwrap();

    let created = create_invitation(&server).await;
    assert_eq!(created["success"], true);
    let uuid = created["uuid"].as_str().unwrap().to_string();
    let short_code = created["shortCode"].as_str().unwrap().to_string();
    assert!(!short_code.is_empty());
    assert_eq!(created["link"], format!("https://wedding.example/i/{uuid}"));
    assert_eq!(
        created["shortLink"],
        format!("https://wedding.example/s/{short_code}")
    );

    let response = server
        .get(&format!("/api/invitations/{uuid}"))
        .await
        .unwrap();
    let invitation: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(invitation["uuid"], uuid);
    assert_eq!(invitation["shortCode"], short_code);
    assert_eq!(invitation["groomName"], "Arman");
    assert_eq!(invitation["brideName"], "Aruzhan");
    assert_eq!(invitation["eventDate"], "2026-06-15T00:00:00Z");
    assert_eq!(invitation["eventLocation"], "Astana");
    assert_eq!(invitation["templateCode"], "starry-night");
    assert_eq!(invitation["lang"], "ru");
    assert_eq!(invitation["content"], json!({}));
}

#[tokio::test]
async fn test_create_requires_api_key() {
    let server = TestServer::start().await.unwrap();

    for key in [None, Some("wrong-key")] {
        let response = server
            .post_with_key("/api/invitations", key, &CreateInvitation::astana())
            .await
            .unwrap();
        let error = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
        assert_eq!(error["kind"], "auth");
    }

    assert_eq!(server.store.invitation_count(), 0);
}

#[tokio::test]
async fn test_create_without_configured_key_is_forbidden() {
    let mut config = test_config(&[]).unwrap();
    config.links.private_api_key = None;
    let server = TestServer::start_with_config(config).await.unwrap();

    let response = server
        .post_with_key("/api/invitations", Some(API_KEY), &CreateInvitation::astana())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_create_validation_errors() {
    let server = TestServer::start().await.unwrap();

    let mut request = CreateInvitation::astana();
    request.groom_name = "  ".to_string();
    let response = server
        .post_with_key("/api/invitations", Some(API_KEY), &request)
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["kind"], "validation");
    assert_eq!(error["message"], "Groom name is required");

    let mut request = CreateInvitation::astana();
    request.bride_name = String::new();
    let response = server
        .post_with_key("/api/invitations", Some(API_KEY), &request)
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["message"], "Bride name is required");

    let mut request = CreateInvitation::astana();
    request.lang = Some("de".to_string());
    let response = server
        .post_with_key("/api/invitations", Some(API_KEY), &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_invitation() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .get(&format!("/api/invitations/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error["kind"], "not_found");
    assert_eq!(error["message"], "Invitation not found");
}

#[tokio::test]
async fn test_get_by_short_code_and_redirect() {
    let server = TestServer::start().await.unwrap();
    let created = create_invitation(&server).await;
    let uuid = created["uuid"].as_str().unwrap();
    let short_code = created["shortCode"].as_str().unwrap();

    let response = server
        .get(&format!("/api/invitations/by-code/{short_code}"))
        .await
        .unwrap();
    let invitation: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(invitation["uuid"], uuid);

    let response = server.get(&format!("/s/{short_code}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION].to_str().unwrap(),
        format!("/i/{uuid}")
    );

    let response = server.get("/s/NOSUCHCODE").await.unwrap();
    let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error["message"], "Short link not found");
}

// ============================================================================
// RSVP Tests
// ============================================================================

#[tokio::test]
async fn test_submit_rsvp() {
    let server = TestServer::start().await.unwrap();
    let created = create_invitation(&server).await;
    let uuid = created["uuid"].as_str().unwrap();

    let response = server
        .post(&format!("/api/rsvp/{uuid}"), &Rsvp::new("John Doe", "yes", 2))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"success": true}));

    let stored = server
        .store
        .rsvps_for(uuid.parse().unwrap());
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].guest_count, 2);
}

#[tokio::test]
async fn test_rsvp_negative_guest_count() {
    let server = TestServer::start().await.unwrap();
    let created = create_invitation(&server).await;
    let uuid = created["uuid"].as_str().unwrap();

    let response = server
        .post(&format!("/api/rsvp/{uuid}"), &Rsvp::new("John", "yes", -1))
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["message"], "Guest count cannot be negative");
    assert_eq!(server.store.rsvp_count(), 0);
}

#[tokio::test]
async fn test_rsvp_unknown_invitation() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            &format!("/api/rsvp/{}", uuid::Uuid::new_v4()),
            &Rsvp::new("John", "yes", 1),
        )
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error["message"], "Invitation not found");
    assert_eq!(server.store.rsvp_count(), 0);
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_login_sets_cookie() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            "/api/admin/login",
            &json!({"username": ADMIN_USERNAME, "password": "admin123"}),
        )
        .await
        .unwrap();

    let cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("admin_token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=86400"));

    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["expiresIn"], 86_400);

    // The cookie alone authorizes admin views
    let session = cookie.split(';').next().unwrap();
    let response = server
        .get_with_cookie("/api/admin/stats", session)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_admin_login_failures() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            "/api/admin/login",
            &json!({"username": ADMIN_USERNAME, "password": "wrong"}),
        )
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error["message"], "Invalid credentials");

    let response = server
        .post("/api/admin/login", &json!({"username": ADMIN_USERNAME}))
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["message"], "Credentials required");
}

#[tokio::test]
async fn test_admin_routes_require_session() {
    let server = TestServer::start().await.unwrap();

    for path in ["/api/admin/invitations", "/api/admin/stats", "/api/admin/templates"] {
        let response = server.get(path).await.unwrap();
        let error = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
        assert_eq!(error["message"], "Unauthorized");

        let response = server.get_auth(path, "not-a-token").await.unwrap();
        assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    }

    let response = server
        .get_with_cookie("/api/admin/stats", "admin_token=forged")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_guard_runs_before_body_validation() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/admin/invitations", &json!({"groomName": ""}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(server.store.invitation_count(), 0);
}

#[tokio::test]
async fn test_admin_dashboard() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();

    let response = server
        .post_auth("/api/admin/invitations", &token, &CreateInvitation::astana())
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let uuid = created["uuid"].as_str().unwrap().to_string();

    for rsvp in [
        Rsvp::new("John", "yes", 2),
        Rsvp::new("Dana", "no", 4),
        Rsvp::new("Ali", "maybe", 1),
    ] {
        let response = server
            .post(&format!("/api/rsvp/{uuid}"), &rsvp)
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get_auth("/api/admin/invitations", &token)
        .await
        .unwrap();
    let rows: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["uuid"], uuid);
    assert_eq!(rows[0]["rsvpCount"], 3);
    assert_eq!(rows[0]["approvedGuests"], 2);
    assert_eq!(rows[0]["templateName"], "Звездная ночь");

    let response = server.get_auth("/api/admin/stats", &token).await.unwrap();
    let stats: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        stats,
        json!({"totalInvitations": 1, "totalRSVPs": 3, "totalGuests": 2})
    );

    let response = server
        .get_auth("/api/admin/templates", &token)
        .await
        .unwrap();
    let templates: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0]["code"], "starry-night");
    assert_eq!(templates[0]["nameEn"], "Starry Night");
}

#[tokio::test]
async fn test_admin_update_invitation() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();
    let created = create_invitation(&server).await;
    let uuid = created["uuid"].as_str().unwrap();

    let response = server
        .put_auth(
            &format!("/api/admin/invitations/{uuid}"),
            &token,
            &json!({"eventLocation": "Almaty", "lang": "kk", "content": {"dressCode": "white"}}),
        )
        .await
        .unwrap();
    let updated: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["eventLocation"], "Almaty");
    assert_eq!(updated["lang"], "kk");
    assert_eq!(updated["content"]["dressCode"], "white");
    assert_eq!(updated["groomName"], "Arman");

    let response = server
        .put_auth(
            &format!("/api/admin/invitations/{uuid}"),
            &token,
            &json!({"groomName": " "}),
        )
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["message"], "Groom name is required");
}

#[tokio::test]
async fn test_admin_logout_clears_cookie() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/admin/logout", &json!({}))
        .await
        .unwrap();
    let cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.contains("Max-Age=0"));

    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["success"], true);
}
