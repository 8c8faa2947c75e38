use std::sync::Arc;

use axum::{Router, response::IntoResponse, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forum_backend::db;
use forum_backend::id::RandomIdGenerator;
use forum_backend::repository::{SqliteThreadRepository, ThreadRepository};
use forum_backend::routes::{AppState, auth_routes, threads_routes};
use forum_backend::services::{CommentService, ReplyService, ThreadService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forum_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Database setup
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://forum.db".to_string());

    let pool = db::init_db(&database_url).await?;
    tracing::info!("Database initialized");

    let repo: Arc<dyn ThreadRepository> = Arc::new(SqliteThreadRepository::new(
        pool.clone(),
        Arc::new(RandomIdGenerator),
    ));

    let state = AppState {
        pool,
        threads: ThreadService::new(repo.clone()),
        comments: CommentService::new(repo.clone()),
        replies: ReplyService::new(repo),
    };

    // CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the app
    let app = Router::new()
        .merge(auth_routes())
        .nest("/threads", threads_routes())
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Run the server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> impl IntoResponse {
    axum::Json(serde_json::json!({"status": "healthy"}))
}
