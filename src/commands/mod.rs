//! 命令处理器
//!
//! 每个命令一个模块，共用 .env 加载和域名收集这两个致命前置检查

use crate::config::{collect_phish_domains, load_env};
use crate::error::{PhishError, Result};
use crate::types::EnvMap;
use crate::utils::paths::ProjectLayout;

pub mod generate;
pub mod labels;
pub mod status;
pub mod summary;

/// 通过前置检查后的输入
#[derive(Debug)]
pub struct Inputs {
    pub env: EnvMap,
    pub domains: Vec<String>,
}

/// 读取 .env 并收集域名
///
/// # Errors
///
/// .env 缺失或为空、没有配置任何域名时返回致命错误，此时不会写任何文件。
pub fn load_inputs(layout: &ProjectLayout) -> Result<Inputs> {
    let env = load_env(&layout.env_file)?;

    if env.is_empty() {
        return Err(if layout.env_file.exists() {
            PhishError::EmptyEnv(layout.env_file.clone())
        } else {
            PhishError::MissingEnvFile(layout.env_file.clone())
        });
    }

    let domains = collect_phish_domains(&env);
    if domains.is_empty() {
        return Err(PhishError::NoDomainsConfigured);
    }

    Ok(Inputs { env, domains })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn layout(root: &Path) -> ProjectLayout {
        ProjectLayout::new(root, Path::new(".env"), Path::new("docker-compose.override.yml"))
    }

    #[test]
    fn test_missing_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_inputs(&layout(dir.path())).unwrap_err();
        assert!(matches!(err, PhishError::MissingEnvFile(_)));
    }

    #[test]
    fn test_comment_only_env_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "# nothing here\n\n").unwrap();

        let err = load_inputs(&layout(dir.path())).unwrap_err();
        assert!(matches!(err, PhishError::EmptyEnv(_)));
    }

    #[test]
    fn test_no_domains() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "ACME_EMAIL=ops@example.com\n").unwrap();

        let err = load_inputs(&layout(dir.path())).unwrap_err();
        assert!(matches!(err, PhishError::NoDomainsConfigured));
    }

    #[test]
    fn test_inputs_loaded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "PHISH_DOMAIN=a.example\nPHISH_DOMAIN_1=b.example\n",
        )
        .unwrap();

        let inputs = load_inputs(&layout(dir.path())).unwrap();
        assert_eq!(inputs.domains, vec!["a.example", "b.example"]);
        assert_eq!(inputs.env.len(), 2);
    }
}
