use slug_field::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use slug_field::config::AppConfig;
use slug_field::domain::{
    content::{ContentReadRepository, ContentWriteRepository},
    content_type::ContentTypeRepository,
};
use slug_field::infrastructure::{
    database,
    repositories::{
        PostgresContentReadRepository, PostgresContentTypeRepository,
        PostgresContentWriteRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use slug_field::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    database::ensure_slug_index(&pool, config.slug_uniqueness_scope()).await?;

    let content_write_repo: Arc<dyn ContentWriteRepository> =
        Arc::new(PostgresContentWriteRepository::new(pool.clone()));
    let content_read_repo: Arc<dyn ContentReadRepository> =
        Arc::new(PostgresContentReadRepository::new(pool.clone()));
    let content_type_repo: Arc<dyn ContentTypeRepository> =
        Arc::new(PostgresContentTypeRepository::new(pool));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        content_write_repo,
        content_read_repo,
        content_type_repo,
        clock,
        slugger,
        config.slug_uniqueness_scope(),
    ));

    tracing::info!(
        input_schemas = ?services.registry().input_schemas(),
        "field types registered"
    );

    let state = HttpState::new(services, config.allowed_origins());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        scope = config.slug_uniqueness_scope().as_str(),
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
