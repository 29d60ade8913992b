use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use account_api::database;
use account_api::handlers::{accounts, roles, users, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = account_api::config::config();
    tracing::info!("Starting account API in {:?} mode", config.environment);

    // Startup failures are fatal: no pool, no schema, no service.
    let pool = match database::connect(config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Unable to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = database::schema::init(&pool).await {
        tracing::error!("Schema initialization failed: {}", e);
        std::process::exit(1);
    }

    let app = app(AppState::new(pool));

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Account API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(account_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn account_routes() -> Router<AppState> {
    use axum::routing::post;

    Router::new()
        // Account lifecycle
        .route("/v3/accounts", post(accounts::create))
        .route("/v3/accounts/:id", get(accounts::show))
        .route("/v3/accounts/:id/status", post(accounts::update_status))
        .route(
            "/v3/accounts/:id/administrator",
            post(accounts::update_administrator),
        )
        // Per-account children
        .route(
            "/v3/accounts/:id/users",
            post(users::create).get(users::list),
        )
        .route(
            "/v3/accounts/:id/roles",
            post(roles::create).get(roles::list),
        )
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Account API",
        "version": version,
        "description": "Multi-tenant account management service",
        "endpoints": {
            "accounts": "POST /v3/accounts, GET /v3/accounts/:id",
            "status": "POST /v3/accounts/:id/status",
            "administrator": "POST /v3/accounts/:id/administrator",
            "users": "POST|GET /v3/accounts/:id/users",
            "roles": "POST|GET /v3/accounts/:id/roles",
            "health": "GET /health"
        }
    }))
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
