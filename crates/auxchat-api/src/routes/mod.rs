//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{
    admin, auth, conversations, health, messages, photos, reactions, uploads, users,
};
use crate::state::AppState;

/// API routes (health is mounted separately so it can skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(message_routes())
        .merge(conversation_routes())
        .merge(upload_routes())
        .merge(admin_routes())
}

/// SMS login, registration and token refresh
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/sms/send", post(auth::send_code))
        .route("/auth/sms/verify", post(auth::verify_code))
        .route("/auth/register", post(auth::register))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// Profiles and photo galleries
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/@me",
            get(users::get_current_user).patch(users::update_current_user),
        )
        .route(
            "/users/@me/photos",
            get(photos::get_own_photos).post(photos::add_photo),
        )
        .route("/users/@me/photos/:photo_id", delete(photos::delete_photo))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/photos", get(photos::get_user_photos))
}

/// Public feed and reactions
fn message_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/messages",
            get(messages::get_messages).post(messages::create_message),
        )
        .route(
            "/messages/:message_id/reactions",
            post(reactions::toggle_reaction),
        )
}

/// Private conversations
fn conversation_routes() -> Router<AppState> {
    Router::new()
        .route("/conversations", get(conversations::get_conversations))
        .route(
            "/conversations/:user_id/messages",
            get(conversations::get_conversation).post(conversations::send_message),
        )
}

fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/uploads/image", post(uploads::upload_image))
        .route("/uploads/voice", post(uploads::upload_voice))
}

/// Admin panel
fn admin_routes() -> Router<AppState> {
    Router::new().route(
        "/admin/users",
        get(admin::list_users).post(admin::perform_action),
    )
}
