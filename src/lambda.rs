#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use tarot_reader::adapters::function_url::{handle_event, FunctionUrlRequest, FunctionUrlResponse};
#[cfg(feature = "lambda")]
use tarot_reader::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use tarot_reader::{OpenAiClient, ReaderConfig, ReadingHandler};

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &ReadingHandler<OpenAiClient>,
    event: LambdaEvent<FunctionUrlRequest>,
) -> Result<FunctionUrlResponse, Error> {
    tracing::info!(
        request_id = %event.context.request_id,
        method = event.payload.method(),
        "Reading function invoked"
    );

    Ok(handle_event(handler, &event.payload).await)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時就檢查設定，缺金鑰直接讓初始化失敗
    let config = ReaderConfig::from_env().map_err(|e| {
        tracing::error!("❌ Configuration failed: {}", e);
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let client = OpenAiClient::new(&config);
    let handler = ReadingHandler::new(client, &config);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<FunctionUrlRequest>| async move {
        function_handler(handler, event).await
    }))
    .await
}
