use tracing_subscriber::EnvFilter;

use pelvia_api::config::{ApiConfig, LogFormat};
use pelvia_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env()?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match config.log_format {
        // Structured JSON logging for CloudWatch
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }

    tracing::info!(
        strict_validation = config.strict_validation,
        "starting pelvia api"
    );

    let app = pelvia_api::app(AppState::new(config));
    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
