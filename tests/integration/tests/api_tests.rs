//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, TEST_ADMIN_SECRET,
};
use reqwest::{Method, StatusCode};
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], true);
}

// ============================================================================
// SMS Login Tests
// ============================================================================

#[tokio::test]
async fn test_sign_up_then_log_in_again() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let phone = unique_phone();

    let first = server.verify_phone(&phone).await.unwrap();
    assert!(first.success);
    assert!(!first.registered);
    assert!(first.session.is_none());

    let response = server
        .post("/api/v1/auth/register", &RegisterRequest::unique(&first.phone_token))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.user.phone, phone);
    assert_eq!(auth.user.energy, 100);
    assert!(auth.user.avatar.starts_with("https://api.dicebear.com/"));

    let second = server.verify_phone(&phone).await.unwrap();
    assert!(second.registered);
    let session = second.session.expect("existing account gets a session");
    assert_eq!(session.user.id, auth.user.id);
}

#[tokio::test]
async fn test_test_phone_accepts_fixed_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let config = integration_tests::test_config().unwrap();
    let phone = config.sms.test_phone.clone();

    let response = server
        .post("/api/v1/auth/sms/send", &SmsRequest::send(&phone))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/sms/verify",
            &SmsRequest::verify(&phone, &config.sms.test_code),
        )
        .await
        .unwrap();
    let verified: VerifyResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(verified.success);
    assert!(!verified.phone_token.is_empty());
}

#[tokio::test]
async fn test_wrong_code_is_rejected_and_code_stays_usable() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let phone = unique_phone();

    let response = server
        .post("/api/v1/auth/sms/send", &SmsRequest::send(&phone))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let code = server.latest_code(&phone).await.unwrap();
    let wrong = if code == "0000" { "1111" } else { "0000" };

    let response = server
        .post("/api/v1/auth/sms/verify", &SmsRequest::verify(&phone, wrong))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Invalid code");

    let response = server
        .post("/api/v1/auth/sms/verify", &SmsRequest::verify(&phone, &code))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // A verified code cannot be replayed
    let response = server
        .post("/api/v1/auth/sms/verify", &SmsRequest::verify(&phone, &code))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_verify_without_code_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/api/v1/auth/sms/verify", &json!({ "phone": unique_phone() }))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Phone and code required");
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let auth = server.sign_up().await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &json!({ "refresh_token": auth.refresh_token }),
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.user.id, auth.user.id);
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let auth = server.sign_up().await.unwrap();

    let response = server
        .patch_auth(
            "/api/v1/users/@me",
            &auth.access_token,
            &json!({ "username": "  renamed  ", "bio": "hello" }),
        )
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["username"], "renamed");
    assert_eq!(body["bio"], "hello");

    let response = server
        .get_auth(&format!("/api/v1/users/{}", auth.user.id), &auth.access_token)
        .await
        .unwrap();
    let public: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(public["username"], "renamed");
    assert!(public.get("phone").is_none());
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_energy_gates_posting() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let auth = server.sign_up().await.unwrap();
    let token = &auth.access_token;

    for expected in (0..100).step_by(10).rev() {
        let response = server
            .post_auth("/api/v1/messages", token, &json!({ "text": "spend" }))
            .await
            .unwrap();
        let posted: PostMessageResponse =
            assert_json(response, StatusCode::CREATED).await.unwrap();
        assert!(posted.success);
        assert_eq!(posted.new_energy, expected);
    }

    let response = server
        .post_auth("/api/v1/messages", token, &json!({ "text": "broke" }))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Not enough energy");

    let response = server
        .post(
            "/api/v1/admin/users",
            &AdminActionRequest {
                admin_secret: TEST_ADMIN_SECRET.to_string(),
                action: "add_energy".to_string(),
                target_user_id: auth.user.id,
                amount: Some(10),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth("/api/v1/messages", token, &json!({ "text": "refilled" }))
        .await
        .unwrap();
    let posted: PostMessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(posted.new_energy, 0);
}

#[tokio::test]
async fn test_blank_message_is_rejected_without_charge() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let auth = server.sign_up().await.unwrap();

    let response = server
        .post_auth("/api/v1/messages", &auth.access_token, &json!({ "text": "   " }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.energy, 100);
}

#[tokio::test]
async fn test_reaction_toggle_adds_then_removes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.sign_up().await.unwrap();
    let reader = server.sign_up().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/messages",
            &author.access_token,
            &json!({ "text": "react to me" }),
        )
        .await
        .unwrap();
    let posted: PostMessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/messages/{}/reactions", posted.message_id);

    let response = server
        .post_auth(&path, &reader.access_token, &json!({ "emoji": "🔥" }))
        .await
        .unwrap();
    let toggled: ReactionToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggled.action, "added");

    let response = server
        .post_auth(&path, &reader.access_token, &json!({ "emoji": "🔥" }))
        .await
        .unwrap();
    let toggled: ReactionToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggled.action, "removed");

    let response = server
        .post_auth(
            "/api/v1/messages/999999999/reactions",
            &reader.access_token,
            &json!({ "emoji": "🔥" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_feed_limit_is_clamped() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/messages?limit=1000").await.unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.messages.len() <= 100);
}

// ============================================================================
// Photo Tests
// ============================================================================

#[tokio::test]
async fn test_gallery_is_capped_at_six() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let auth = server.sign_up().await.unwrap();
    let token = &auth.access_token;

    for i in 0..6 {
        let response = server
            .post_auth(
                "/api/v1/users/@me/photos",
                token,
                &json!({ "photo_url": format!("https://img.example.com/{i}.png") }),
            )
            .await
            .unwrap();
        let photo: PhotoResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(photo.display_order, i);
    }

    let response = server
        .post_auth(
            "/api/v1/users/@me/photos",
            token,
            &json!({ "photo_url": "https://img.example.com/7.png" }),
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Maximum 6 photos allowed");

    let response = server
        .get_auth("/api/v1/users/@me/photos", token)
        .await
        .unwrap();
    let gallery: PhotoListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(gallery.photos.len(), 6);

    let first = &gallery.photos[0];
    let response = server
        .delete_auth(&format!("/api/v1/users/@me/photos/{}", first.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/users/{}/photos", auth.user.id), token)
        .await
        .unwrap();
    let gallery: PhotoListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(gallery.photos.len(), 5);
}

#[tokio::test]
async fn test_cannot_delete_someone_elses_photo() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let owner = server.sign_up().await.unwrap();
    let other = server.sign_up().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/users/@me/photos",
            &owner.access_token,
            &json!({ "photo_url": "https://img.example.com/mine.png" }),
        )
        .await
        .unwrap();
    let photo: PhotoResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/users/@me/photos/{}", photo.id),
            &other.access_token,
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error, "Photo not found");
}

// ============================================================================
// Conversation Tests
// ============================================================================

#[tokio::test]
async fn test_private_messages_and_read_state() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = server.sign_up().await.unwrap();
    let bob = server.sign_up().await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/conversations/{}/messages", bob.user.id),
            &alice.access_token,
            &json!({ "text": "hi bob" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/conversations", &bob.access_token)
        .await
        .unwrap();
    let list: ConversationListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.conversations.len(), 1);
    assert_eq!(list.conversations[0].user_id, alice.user.id);
    assert_eq!(list.conversations[0].last_message, "hi bob");
    assert_eq!(list.conversations[0].unread_count, 1);

    let response = server
        .get_auth(
            &format!("/api/v1/conversations/{}/messages", alice.user.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let conversation: ConversationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(conversation.messages.len(), 1);
    assert_eq!(conversation.messages[0].sender_id, alice.user.id);

    let response = server
        .get_auth("/api/v1/conversations", &bob.access_token)
        .await
        .unwrap();
    let list: ConversationListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.conversations[0].unread_count, 0);
}

#[tokio::test]
async fn test_private_message_to_missing_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = server.sign_up().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/conversations/999999999/messages",
            &alice.access_token,
            &json!({ "text": "anyone?" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_requires_secret() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/admin/users").await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .request(Method::GET, "/api/v1/admin/users")
        .header("X-Admin-Secret", TEST_ADMIN_SECRET)
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Missing action and target must not hide a wrong secret
    let response = server
        .post("/api/v1/admin/users", &json!({ "admin_secret": "wrong" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_energy_amount_is_bounded() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let auth = server.sign_up().await.unwrap();

    let response = server
        .post(
            "/api/v1/admin/users",
            &json!({
                "admin_secret": TEST_ADMIN_SECRET,
                "action": "add_energy",
                "target_user_id": auth.user.id,
                "amount": i32::MAX,
            }),
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Amount out of range");
}

#[tokio::test]
async fn test_banned_user_cannot_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let auth = server.sign_up().await.unwrap();

    let response = server
        .post(
            "/api/v1/admin/users",
            &AdminActionRequest {
                admin_secret: TEST_ADMIN_SECRET.to_string(),
                action: "ban".to_string(),
                target_user_id: auth.user.id,
                amount: None,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth("/api/v1/messages", &auth.access_token, &json!({ "text": "hi" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_unknown_action() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let auth = server.sign_up().await.unwrap();

    let response = server
        .post(
            "/api/v1/admin/users",
            &AdminActionRequest {
                admin_secret: TEST_ADMIN_SECRET.to_string(),
                action: "promote".to_string(),
                target_user_id: auth.user.id,
                amount: None,
            },
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Invalid action");
}

// ============================================================================
// Protocol Tests
// ============================================================================

#[tokio::test]
async fn test_wrong_method_returns_json_405() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .request(Method::DELETE, "/api/v1/messages")
        .send()
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::METHOD_NOT_ALLOWED)
        .await
        .unwrap();
    assert_eq!(error.error, "Method not allowed");
    assert_eq!(error.code, "METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn test_cors_preflight() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .request(Method::OPTIONS, "/api/v1/messages")
        .header("Origin", "https://app.example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "authorization,content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
