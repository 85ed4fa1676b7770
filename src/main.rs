use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use workout_log::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_log=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let state = match AppState::open(&config) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!("Failed to open workout log in {}: {}", config.data_dir.display(), err);
            std::process::exit(1);
        }
    };

    // The map UI is served from the assets directory
    let serve_dir = ServeDir::new(&config.assets_dir)
        .not_found_service(ServeFile::new(config.assets_dir.join("index.html")));

    let app = routes::router()
        .fallback_service(serve_dir)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Workout log listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Workouts: GET/POST/DELETE http://{}/api/workouts", addr);

    axum::serve(listener, app).await
}
