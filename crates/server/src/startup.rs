use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::material_cost::{
    InMemoryMaterialCostRepository, MaterialCostService, MaterialCostServiceImpl, SeaOrmMaterialCostRepository,
};

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Pick the repository named by `database.url` and wrap it in the service.
pub async fn build_service(cfg: &DatabaseConfig) -> Result<Arc<dyn MaterialCostService>, StartupError> {
    if cfg.is_memory() {
        info!("using in-memory material cost store");
        let repo = Arc::new(InMemoryMaterialCostRepository::new());
        let service: Arc<dyn MaterialCostService> = Arc::new(MaterialCostServiceImpl::new(repo));
        return Ok(service);
    }

    let db = models::db::connect_with_config(cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(format!("migrations failed: {e}")))?;
        info!("migrations applied");
    }
    let repo = Arc::new(SeaOrmMaterialCostRepository::new(db));
    let service: Arc<dyn MaterialCostService> = Arc::new(MaterialCostServiceImpl::new(repo));
    Ok(service)
}

/// Build the app with the configured store.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let service = build_service(&cfg.database).await?;
    Ok(routes::build_router(AppState::new(service), build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let cfg = AppConfig::default();
        assert_eq!(bind_addr(&cfg).unwrap().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn bad_host_is_invalid_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn memory_store_needs_no_database() {
        let db = DatabaseConfig { url: configs::MEMORY_URL.into(), ..Default::default() };
        let service = build_service(&db).await.unwrap();
        assert!(service.get_all().await.is_err());
    }
}
