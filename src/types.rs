//! 核心数据结构定义 (表达原则：用数据结构表达逻辑)

use std::fmt;
use std::path::PathBuf;

/// 环境变量条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(key: String, value: String) -> Self {
        Self { key, value }
    }
}

/// 按插入顺序保存的环境变量映射，键唯一
///
/// 重复赋值时保留首次出现的位置，值以最后一次为准。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    vars: Vec<EnvVar>,
}

impl EnvMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 更新或添加变量
    pub fn insert(&mut self, key: String, value: String) {
        if let Some(existing) = self.vars.iter_mut().find(|v| v.key == key) {
            existing.value = value;
        } else {
            self.vars.push(EnvVar::new(key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.iter().any(|v| v.key == key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(|v| v.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnvVar> {
        self.vars.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = EnvMap::new();
        for (key, value) in iter {
            map.insert(key.into(), value.into());
        }
        map
    }
}

/// 运行配置 (由 CLI 构建一次，按引用传递给各个步骤)
#[derive(Debug, Clone)]
pub struct Config {
    pub verbose: bool,
    /// 项目根目录，所有相对路径都基于它解析
    pub root: PathBuf,
    pub env_file: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            root: PathBuf::from("."),
            env_file: PathBuf::from(".env"),
            output: PathBuf::from("docker-compose.override.yml"),
            format: OutputFormat::default(),
        }
    }
}

/// 输出格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "j" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// data 目录检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirOutcome {
    /// 新建目录；`owner_set` 表示属主修改是否成功
    Created { owner_set: bool },
    Exists,
}

/// ACME 证书存储文件检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcmeOutcome {
    Created,
    /// 文件存在但为空，已补写初始内容
    Repaired,
    Exists,
}

/// Traefik 邮箱配置结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailOutcome {
    MissingFile,
    MissingEmail,
    PlaceholderReplaced,
    AlreadyConfigured,
    Updated,
    /// 没有找到 `email:` 行，文件保持不变
    Unchanged,
}

/// 单个文件的权限处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermOutcome {
    Applied(u32),
    Missing,
    Failed(String),
    Unsupported,
}

impl fmt::Display for PermOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermOutcome::Applied(mode) => write!(f, "{:o}", mode),
            PermOutcome::Missing => write!(f, "not found, skipped"),
            PermOutcome::Failed(reason) => write!(f, "failed: {}", reason),
            PermOutcome::Unsupported => write!(f, "skipped (unsupported platform)"),
        }
    }
}
