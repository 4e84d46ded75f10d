//! 错误处理模块 (只有两类致命错误，其余情况降级为警告)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhishError {
    #[error(".env file not found: {}", .0.display())]
    MissingEnvFile(PathBuf),

    #[error("could not load any variables from {}", .0.display())]
    EmptyEnv(PathBuf),

    #[error("no PHISH_DOMAIN variables found in .env")]
    NoDomainsConfigured,

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

impl PhishError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 打印完整错误链
    /// verbose = false: 只打印关键信息
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ Error: {}", self);

            if let Some(source) = self.source() {
                eprintln!("  └─ caused by: {}", source);
                let mut current = source.source();
                while let Some(next) = current {
                    eprintln!("     └─ {}", next);
                    current = next.source();
                }
            }
        } else {
            match self {
                PhishError::MissingEnvFile(path) => {
                    eprintln!("Error: .env file not found ({})", path.display());
                    eprintln!("Error: Could not load .env file");
                }
                PhishError::EmptyEnv(_) => eprintln!("Error: Could not load .env file"),
                PhishError::NoDomainsConfigured => {
                    eprintln!("Error: No PHISH_DOMAIN variables found in .env")
                }
                PhishError::Io(err) => eprintln!("File error: {}", err),
                _ => eprintln!("Error: {}", self),
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, PhishError>;
