//! CLI 参数定义

use crate::types::{Config, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// phish-routes - 为钓鱼演练域名生成 Traefik 路由
#[derive(Parser)]
#[command(
    name = "phish-routes",
    version,
    about = "Generate Traefik routes for phishing simulation domains",
    long_about = "Reads PHISH_DOMAIN, PHISH_DOMAIN_1.. and ACME_EMAIL from .env, prepares the \
                  data directory and Traefik files, and writes docker-compose.override.yml"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 项目根目录
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// .env 文件路径（相对根目录）
    #[arg(short, long, global = true, default_value = ".env")]
    pub env_file: PathBuf,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// 准备环境并生成 override 文件（默认）
    Generate {
        /// 输出文件（相对根目录）
        #[arg(short, long, default_value = "docker-compose.override.yml")]
        output: PathBuf,
        /// 摘要格式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// 只把 override 内容打印到标准输出，不写任何文件
    Labels,

    /// 显示当前状态（只读）
    Status,
}

impl Cli {
    /// 构建运行配置
    pub fn config(&self) -> Config {
        let mut config = Config {
            verbose: self.verbose,
            root: self.dir.clone(),
            env_file: self.env_file.clone(),
            ..Config::default()
        };

        if let Some(Commands::Generate { output, format }) = &self.command {
            config.output = output.clone();
            config.format = OutputFormat::from(format.as_str());
        }

        config
    }

    /// 没有子命令时等同于 generate
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Generate {
            output: PathBuf::from("docker-compose.override.yml"),
            format: "text".to_string(),
        })
    }
}
