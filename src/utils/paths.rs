//! 项目路径与文件工具 (所有受管理的文件都相对项目根目录解析)

use crate::types::Config;
use std::path::{Path, PathBuf};

/// data 目录
pub const DATA_DIR: &str = "data";
/// ACME 证书存储
pub const ACME_STORE: &str = "traefik/acme.json";
/// Traefik 动态配置
pub const TRAEFIK_DYNAMIC: &str = "traefik/config.yml";
/// Traefik 静态配置（包含 ACME 邮箱）
pub const TRAEFIK_STATIC: &str = "traefik/traefik.yml";

/// 一次运行涉及的全部路径
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub env_file: PathBuf,
    pub output: PathBuf,
    pub data_dir: PathBuf,
    pub acme_store: PathBuf,
    pub traefik_dynamic: PathBuf,
    pub traefik_static: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: &Path, env_file: &Path, output: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            env_file: resolve(root, env_file),
            output: resolve(root, output),
            data_dir: root.join(DATA_DIR),
            acme_store: root.join(ACME_STORE),
            traefik_dynamic: root.join(TRAEFIK_DYNAMIC),
            traefik_static: root.join(TRAEFIK_STATIC),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.root, &config.env_file, &config.output)
    }

    /// 相对根目录的显示路径
    pub fn display<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.root).unwrap_or(path).display()
    }
}

/// 绝对路径原样返回，相对路径拼接到根目录
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// 检查文件是否存在
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// 安全写入文件 (同目录临时文件 + 原子替换)
pub fn write_file_safe(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    std::fs::write(&temp_path, content)?;

    // 保留原文件的权限位，避免 rename 后权限被重置
    if let Ok(meta) = std::fs::metadata(path) {
        std::fs::set_permissions(&temp_path, meta.permissions())?;
    }

    std::fs::rename(&temp_path, path)
}

/// 读取文件的权限位（非 Unix 平台返回 None）
#[cfg(unix)]
pub fn file_mode(path: &Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .ok()
        .map(|m| m.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
pub fn file_mode(_path: &Path) -> Option<u32> {
    None
}
