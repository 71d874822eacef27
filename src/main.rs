use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use course_registry::adapters::http::app_router;
use course_registry::adapters::postgres::{
    self, PostgresCourseRepository, PostgresStudentRepository,
};
use course_registry::adapters::storage::InMemoryStore;
use course_registry::config::{AppConfig, StorageBackend};
use course_registry::ports::{CourseRepository, StudentRepository};
use course_registry::telemetry;

type Repositories = (Arc<dyn CourseRepository>, Arc<dyn StudentRepository>);

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    telemetry::init_tracing(&config.server);

    let (courses, students) = repositories(&config).await?;
    let app = app_router(
        courses,
        students,
        config.enrollment.policy(),
        &config.server,
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown())
        .await
        .context("http server exited with error")?;

    info!("Shut down");
    Ok(())
}

async fn repositories(config: &AppConfig) -> Result<Repositories> {
    match config.database.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            let store = InMemoryStore::new();
            Ok((Arc::new(store.clone()), Arc::new(store)))
        }
        StorageBackend::Postgres => {
            let pool = postgres::connect(&config.database)
                .await
                .context("failed to connect to database")?;
            if config.database.run_migrations {
                postgres::run_migrations(&pool)
                    .await
                    .context("failed to run migrations")?;
                info!("Migrations applied");
            }
            Ok((
                Arc::new(PostgresCourseRepository::new(pool.clone())),
                Arc::new(PostgresStudentRepository::new(pool)),
            ))
        }
    }
}

async fn shutdown() {
    if let Err(err) = signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
