//! phish-routes 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各模块
//! - 单次运行：每次调用完整执行一遍流程后退出
//! - 错误处理：只有前置条件失败或 I/O 错误返回非零退出码

use clap::Parser;
use phish_routes::cli::{Cli, Commands};
use phish_routes::commands;
use phish_routes::error::Result;
use phish_routes::types::{Config, OutputFormat};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    // 解析 CLI 参数
    let cli = Cli::parse();
    let config = cli.config();

    init_logging(config.verbose);

    // 执行命令，统一错误处理
    if let Err(e) = run_command(cli.resolved_command(), &config) {
        e.report(config.verbose);
        std::process::exit(1);
    }
}

/// 日志输出到 stderr，标准输出只留给报告
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to initialize logging: {}", e);
    }
}

/// 运行具体命令
fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Generate { .. } => {
            let summary = commands::generate::run(config)?;
            match config.format {
                OutputFormat::Text => println!("{}", summary.render_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }

        Commands::Labels => print!("{}", commands::labels::run(config)?),

        Commands::Status => commands::status::run(config)?,
    }

    Ok(())
}
