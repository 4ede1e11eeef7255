use lonelyweb::{
    config::Config,
    routes::{create_router, AppState},
    services::VideoStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lonelyweb=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Load the whole dataset before the listener exists; no partial service.
    let store = VideoStore::load_path(&config.dataset_path)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                path = %config.dataset_path.display(),
                "Failed to load dataset"
            );
            e
        })?;

    if store.is_empty() {
        tracing::warn!("Dataset is empty; every request will report an error");
    }

    let app = create_router(AppState::new(store), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        static_dir = %config.static_dir.display(),
        "Server running"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
