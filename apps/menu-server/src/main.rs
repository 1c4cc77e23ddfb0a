use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::{error, info};

use menu_api::{build_router, AppState};
use menu_core::routing::RouteTable;
use menu_core::services::MenuService;
use menu_infrastructure::database::{connection, PgMenuRepository};
use menu_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    menu_shared::telemetry::init_telemetry();

    info!("Menu Server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Route table for path resolution and reverse lookups
    let routes = RouteTable::new(&config.routes)?;
    info!("Loaded {} named routes", routes.len());

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    info!("Database connection established.");

    if config.database.run_migrations {
        connection::run_migrations(&pool).await?;
    }

    // Create App State
    let menu_service = MenuService::new(
        Arc::new(PgMenuRepository::new(pool)),
        Arc::new(routes),
        config.menu.placeholder_href.clone(),
    );
    let state = AppState::new(menu_service);

    // Build router
    let app = build_router(state)
        // CORS
        .layer(CorsLayer::permissive())
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
