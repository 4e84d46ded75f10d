//! .env 格式解析器 (简单原则：透明的文本解析)

use crate::error::Result;
use crate::types::{EnvMap, EnvVar};
use std::path::Path;
use tracing::{debug, error};

/// .env 格式解析器
pub struct DotenvParser;

impl DotenvParser {
    /// 解析 .env 文件内容
    ///
    /// 规则：
    /// - 忽略空行和以 # 开头的注释行
    /// - 格式：KEY=VALUE，只在第一个 = 处分割
    /// - 键和值两端的空白会被去掉
    /// - 没有 = 的行直接跳过
    pub fn parse(content: &str) -> Vec<EnvVar> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| EnvVar::new(key.trim().to_string(), value.trim().to_string()))
            .collect()
    }

    /// 解析为映射，同名键以最后一次赋值为准
    pub fn parse_map(content: &str) -> EnvMap {
        Self::parse(content)
            .into_iter()
            .map(|v| (v.key, v.value))
            .collect()
    }
}

/// 读取 .env 文件
///
/// 文件不存在时记录错误并返回空映射，由调用方决定是否中止。
///
/// # Errors
///
/// 文件存在但无法读取时返回 I/O 错误。
pub fn load_env(path: &Path) -> Result<EnvMap> {
    if !path.exists() {
        error!(path = %path.display(), ".env file not found");
        return Ok(EnvMap::new());
    }

    let content = std::fs::read_to_string(path)?;
    let vars = DotenvParser::parse_map(&content);
    debug!(path = %path.display(), count = vars.len(), "loaded .env");

    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let content = r"
# 注释会被忽略
KEY1=value1
KEY2=value2
        ";

        let result = DotenvParser::parse(content);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].key, "KEY1");
        assert_eq!(result[0].value, "value1");
    }

    #[test]
    fn test_parse_empty_value() {
        let content = "KEY=\nKEY2=value";
        let result = DotenvParser::parse(content);
        assert_eq!(result[0].value, "");
    }

    #[test]
    fn test_parse_splits_on_first_equals_and_trims() {
        let content = "  DB_URL = postgres://u:p@h/db?sslmode=require  \n   # indented comment";
        let result = DotenvParser::parse(content);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].key, "DB_URL");
        assert_eq!(result[0].value, "postgres://u:p@h/db?sslmode=require");
    }

    #[test]
    fn test_parse_skips_lines_without_equals() {
        let result = DotenvParser::parse("export\nJUST_TEXT\nA=1");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].key, "A");
    }

    #[test]
    fn test_parse_map_last_write_wins() {
        let map = DotenvParser::parse_map("A=1\nB=2\nA=3\n");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("A"), Some("3"));
        assert_eq!(map.get("B"), Some("2"));
    }

    #[test]
    fn test_load_env_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let map = load_env(&dir.path().join(".env")).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_load_env_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "PHISH_DOMAIN=evil.example\nACME_EMAIL=ops@example.com\n").unwrap();

        let map = load_env(&path).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["PHISH_DOMAIN", "ACME_EMAIL"]);
    }
}
