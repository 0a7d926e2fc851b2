use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use reservation_intake::config::AppConfig;
use reservation_intake::services::sheets::google::GoogleSheetsStore;
use reservation_intake::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        sheet_id = %config.google.sheet_id,
        service_account = %config.google.service_account_email,
        "using Google Sheets store"
    );

    let sheets = GoogleSheetsStore::new(&config.google);

    let state = Arc::new(AppState {
        config: config.clone(),
        sheets: Box::new(sheets),
    });

    let app = reservation_intake::app(state).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
