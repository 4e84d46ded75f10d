//! Traefik 配置文件权限修正

use crate::types::PermOutcome;
use crate::utils::paths::{ACME_STORE, TRAEFIK_DYNAMIC, TRAEFIK_STATIC};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// 固定的 (相对路径, 权限位) 表
pub const PERMISSION_TABLE: [(&str, u32); 3] = [
    (ACME_STORE, 0o600),
    (TRAEFIK_DYNAMIC, 0o644),
    (TRAEFIK_STATIC, 0o644),
];

/// 按表设置权限；不存在的文件跳过，不会创建
pub fn normalize_permissions(root: &Path) -> Vec<(PathBuf, PermOutcome)> {
    PERMISSION_TABLE
        .iter()
        .map(|&(rel, mode)| {
            let path = root.join(rel);
            let outcome = apply_mode(&path, mode);
            (path, outcome)
        })
        .collect()
}

fn apply_mode(path: &Path, mode: u32) -> PermOutcome {
    if !path.exists() {
        return PermOutcome::Missing;
    }

    match set_mode(path, mode) {
        Ok(()) => PermOutcome::Applied(mode),
        Err(e) if e.kind() == ErrorKind::Unsupported => PermOutcome::Unsupported,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not set permissions");
            PermOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Err(ErrorKind::Unsupported.into())
}
