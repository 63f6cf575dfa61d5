use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error};

// 从 lib.rs 导入模块
use rust_classroom_grading::cli::{Cli, handlers, print_response};
use rust_classroom_grading::config::AppConfig;
use rust_classroom_grading::errors::GradingError;
use rust_classroom_grading::models::ApiResponse;
use rust_classroom_grading::runtime::lifetime;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    setup_panic!();

    let cli = Cli::parse();

    // 初始化配置
    if let Err(e) = AppConfig::init() {
        let err = GradingError::from(e);
        print_response(&ApiResponse::from_error(&err));
        return ExitCode::FAILURE;
    }
    let config = AppConfig::get();

    // 初始化日志，标准输出留给命令结果
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

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
        "{} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.system_name
    );

    let mut storage_config = config.storage.clone();
    if let Some(path) = cli.store {
        storage_config.path = path;
    }

    let result = match lifetime::startup::prepare_startup(&storage_config).await {
        Ok(startup) => handlers::execute(cli.command, startup.storage, config.grading.clone()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(response) => {
            print_response(&response);
            ExitCode::SUCCESS
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            if config.is_development() {
                eprintln!("{}", e.format_colored());
            }
            error!("{}", e.format_simple());
            print_response(&ApiResponse::from_error(&e));
            ExitCode::FAILURE
        }
    }
}
