use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, warn};

// 从 lib.rs 导入模块
use aprenda_client::cli::{self, Cli};
use aprenda_client::config::AppConfig;
use aprenda_client::runtime::lifetime;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // 记录程序启动时间
    let start_time = chrono::Utc::now();

    setup_panic!();
    let cli = Cli::parse();

    // 初始化配置
    if let Err(e) = AppConfig::init_from(cli.config.as_ref().and_then(|p| p.to_str())) {
        eprintln!("Failed to initialize configuration: {e}");
        return ExitCode::FAILURE;
    }
    let config = AppConfig::get();

    // 初始化日志，写到 stderr，不与命令输出混在一起
    let stderr_log = std::io::stderr();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stderr_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(!cli.no_color);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    debug!(
        "Starting {} {} against {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.api.base_url
    );

    let context = match lifetime::startup::prepare_client_startup(config) {
        Ok(context) => context,
        Err(e) => {
            error!("Client startup failed: {}", e);
            eprintln!("{}", e.format_simple());
            return ExitCode::FAILURE;
        }
    };

    let code = match cli::run(cli, context).await {
        Ok(code) => code,
        Err(e) => {
            warn!("Command failed: {}", e);
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            #[cfg(not(debug_assertions))]
            eprintln!("{}", e.format_simple());
            ExitCode::FAILURE
        }
    };

    debug!(
        "Finished in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_time)
            .num_milliseconds()
    );

    code
}
