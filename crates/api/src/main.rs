//! API server entry point.

use practice_api::config::Config;
use practice_api::error::ServerError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = practice_api::run(config).await {
        let cause = std::error::Error::source(&err)
            .map(ToString::to_string)
            .unwrap_or_default();
        match &err {
            ServerError::Bind { .. } => {
                tracing::error!(error = %err, %cause, "failed to start server");
            }
            ServerError::Serve(_) => {
                tracing::error!(error = %err, %cause, "server exited with error");
            }
        }
        std::process::exit(1);
    }
}
