use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    model::app::AppState,
    router,
    service::seed::SeedService,
};

/// Log filter used when `RUST_LOG` is unset
pub static DEFAULT_LOG_FILTER: &str = "satdeck=info,tower_http=info";

/// Install the global tracing subscriber, filtered by `RUST_LOG`
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the CORS layer for the configured origins, credentials allowed
pub fn build_cors_layer(config: &Config) -> Result<CorsLayer, Error> {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvValue {
                var: "CORS_ORIGINS".to_string(),
                reason: format!("{:?}: {}", origin, e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true);

    Ok(cors)
}

/// Seed default groups and satellites into empty tables when enabled
pub async fn seed_database(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    if !config.seed_defaults {
        return Ok(());
    }

    let summary = SeedService::new(db).seed_defaults().await?;

    if summary.groups > 0 || summary.satellites > 0 {
        tracing::info!(
            groups = summary.groups,
            satellites = summary.satellites,
            "Seeded default catalogue data"
        );
    }

    Ok(())
}

/// Build the application with its middleware
pub fn build_app(db: DatabaseConnection, cors: CorsLayer) -> Router {
    router::routes()
        .with_state(AppState::from(db))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Connect, migrate, seed and serve until the listener fails
pub async fn run(config: Config) -> Result<(), Error> {
    let db = connect_to_database(&config).await?;
    seed_database(&config, &db).await?;

    let cors = build_cors_layer(&config)?;
    let app = build_app(db, cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting server on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
