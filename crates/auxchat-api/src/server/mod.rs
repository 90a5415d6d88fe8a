//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use auxchat_common::{AppConfig, AppError, JwtService};
use auxchat_db::{
    create_pool, run_migrations, PgAccountRepository, PgMessageRepository, PgPhotoRepository,
    PgPrivateMessageRepository, PgReactionRepository, PgVerificationCodeRepository,
};
use auxchat_providers::{sms_gateway_from_config, HttpObjectStorage, ImgbbImageHost};
use auxchat_service::{ServiceContextBuilder, ServiceSettings};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_rate_limit(create_router(), &config.rate_limit);
    let router = api.merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = auxchat_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let sms_gateway = sms_gateway_from_config(&config.sms)
        .map_err(|e| AppError::ExternalService(format!("SMS gateway: {e}")))?;
    let image_host = Arc::new(
        ImgbbImageHost::new(&config.image_host)
            .map_err(|e| AppError::ExternalService(format!("Image host: {e}")))?,
    );
    let object_storage = Arc::new(
        HttpObjectStorage::new(&config.object_storage)
            .map_err(|e| AppError::ExternalService(format!("Object storage: {e}")))?,
    );

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
        config.jwt.phone_token_expiry,
    ));

    let service_context = ServiceContextBuilder::new()
        .account_repo(Arc::new(PgAccountRepository::new(pool.clone())))
        .verification_repo(Arc::new(PgVerificationCodeRepository::new(pool.clone())))
        .message_repo(Arc::new(PgMessageRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .private_message_repo(Arc::new(PgPrivateMessageRepository::new(pool.clone())))
        .photo_repo(Arc::new(PgPhotoRepository::new(pool.clone())))
        .sms_gateway(sms_gateway)
        .image_host(image_host)
        .object_storage(object_storage)
        .jwt_service(jwt_service)
        .settings(ServiceSettings::from_config(&config))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);
    run_server(app, &addr).await
}
