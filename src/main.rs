use movie_catalog_backend::{api, config::AppConfig, database::Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Initialize database
    let database = Database::connect(&config.database_url, config.database_max_connections).await?;
    if config.seed_demo_data {
        database.seed_demo_data().await?;
    }

    let app = api::router(api::AppState::new(database));

    let addr = config.bind_addr()?;
    tracing::info!("🚀 Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
