//! phish-routes - 为钓鱼演练域名生成 Traefik 路由配置
//!
//! 从 .env 读取 PHISH_DOMAIN / PHISH_DOMAIN_N / ACME_EMAIL，
//! 准备 data 目录和 Traefik 文件，生成 docker-compose.override.yml

// .env 解析、变量展开、域名收集
pub mod config;

// 标签与 override 模板
pub mod template;

// 首次运行的环境准备
pub mod setup;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

pub mod error;
pub mod types;
pub mod utils;

// 重新导出常用类型
pub use error::{PhishError, Result};
pub use types::{Config, EnvMap, EnvVar, OutputFormat};
