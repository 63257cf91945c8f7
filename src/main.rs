use clap::Parser;
use std::sync::Arc;
use tarot_reader::utils::{logger, validation::Validate};
use tarot_reader::{router, CliConfig, OpenAiClient, ReadingHandler};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting tarot-reader");

    // 設定有誤就不要開始服務
    let config = match cli.reader_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if cli.verbose {
        tracing::debug!("Reader config: {:?}", config);
    }
    tracing::info!(
        model = %config.model,
        base_url = %config.base_url,
        cors = config.cors_enabled,
        "Chat completion client ready"
    );

    let client = OpenAiClient::new(&config);
    let handler = Arc::new(ReadingHandler::new(client, &config));
    let app = router(handler);

    let listener = TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    tracing::info!("📡 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
