//! Products API - REST server

use axum_helpers::{create_production_app, JwtAuth};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::FromEnv;
use domain_products::{MongoProductRepository, ProductService};
use products_api::{api::health::ReadinessCheck, build_app, Config};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();
    core_config::load_dotenv();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        database = config.mongodb.database(),
        storage_timeout = ?config.storage_timeout,
        "Storage ready"
    );

    let repository = MongoProductRepository::new(&db);
    let service = ProductService::with_timeout(repository, config.storage_timeout);
    let auth = JwtAuth::new(&config.jwt);
    let readiness: Vec<Arc<dyn ReadinessCheck>> = vec![Arc::new(mongo_client.clone())];

    let app = build_app(config.app.clone(), service, auth, readiness);

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing MongoDB connections");
        mongo_client.shutdown().await;
        info!("MongoDB connection closed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
