pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;

use domain::a001_product::service::Catalog;
use shared::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;
    let data_dir = shared::config::get_data_dir(&config)?;

    // Файлы данных: журналы форм и корзин, затем каталог товаров
    let db = shared::data::db::initialize_database(&data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("data init failed: {e:#}"))?;
    let catalog = Catalog::open(&db.products_path(), &config.catalog).await?;

    let state = AppState::new(catalog, db);
    let app = routes::configure_routes(state, &config.server.static_dir);

    let (listener, port) = match shared::listener::bind_with_fallback(
        &config.server.host,
        config.server.port,
        config.server.port_attempts,
    )
    .await
    {
        Ok(bound) => bound,
        Err(e) => {
            tracing::error!("{:#}", e);
            // Propagate the error to stop the application
            return Err(e);
        }
    };

    tracing::info!("Storefront backend running on http://localhost:{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
