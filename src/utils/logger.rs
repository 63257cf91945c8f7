use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 沒有設定 RUST_LOG 時使用的過濾規則。
/// verbose 會打開 axum 拒絕請求的原因（body 讀取失敗等）與 reqwest 的連線日誌。
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "tarot_reader=debug,axum::rejection=trace,reqwest=debug,info"
    } else {
        "tarot_reader=info,warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// 本機伺服器：單行輸出，`reading{method=POST}` span 會接在訊息前面
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time() // CloudWatch 會自己加時間戳
                .json()
                .with_current_span(true),
        )
        .init();
}
