//! 首次运行的目录/文件初始化 (幂等操作)

use crate::error::Result;
use crate::types::{AcmeOutcome, DirOutcome};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, warn};

/// gophish 容器内运行用户
pub const DATA_UID: u32 = 1000;
pub const DATA_GID: u32 = 1000;
/// ACME 存储保存证书私钥，只允许属主读写
pub const ACME_MODE: u32 = 0o600;

/// ACME 存储的初始内容
const ACME_INIT: &[u8] = b"{}";

/// 确保 data 目录存在
///
/// 新建时尝试把属主改为 `uid:gid`，失败只记录警告。
pub fn ensure_data_dir(path: &Path, uid: u32, gid: u32) -> Result<DirOutcome> {
    ensure_data_dir_with(path, |p| set_owner(p, uid, gid))
}

/// 同 [`ensure_data_dir`]，属主修改由调用方提供
pub fn ensure_data_dir_with<F>(path: &Path, change_owner: F) -> Result<DirOutcome>
where
    F: FnOnce(&Path) -> std::io::Result<()>,
{
    if path.is_dir() {
        return Ok(DirOutcome::Exists);
    }

    std::fs::create_dir_all(path)?;
    debug!(path = %path.display(), "created data directory");

    let owner_set = match change_owner(path) {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not change owner");
            false
        }
    };

    Ok(DirOutcome::Created { owner_set })
}

#[cfg(unix)]
fn set_owner(path: &Path, uid: u32, gid: u32) -> std::io::Result<()> {
    std::os::unix::fs::chown(path, Some(uid), Some(gid))
}

#[cfg(not(unix))]
fn set_owner(_path: &Path, _uid: u32, _gid: u32) -> std::io::Result<()> {
    Err(std::io::Error::new(
        ErrorKind::Unsupported,
        "ownership change is only supported on unix",
    ))
}

/// 确保 ACME 证书存储文件存在
///
/// 新建文件内容为 `{}`；已存在但为空（上次初始化被中断）时补写 `{}`。
/// 无论新建与否都把权限设为 0600。
pub fn ensure_acme_store(path: &Path) -> Result<AcmeOutcome> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // create_new 保证只在文件不存在时创建
    let outcome = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            if let Err(e) = file.write_all(ACME_INIT) {
                // 不留下空文件，否则之后每次运行都会当作已存在
                drop(file);
                let _ = std::fs::remove_file(path);
                return Err(e.into());
            }
            debug!(path = %path.display(), "initialized acme store");
            AcmeOutcome::Created
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if std::fs::metadata(path)?.len() == 0 {
                std::fs::write(path, ACME_INIT)?;
                warn!(path = %path.display(), "acme store was empty, initialized");
                AcmeOutcome::Repaired
            } else {
                AcmeOutcome::Exists
            }
        }
        Err(e) => return Err(e.into()),
    };

    restrict_mode(path)?;
    Ok(outcome)
}

#[cfg(unix)]
fn restrict_mode(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(ACME_MODE))
}

#[cfg(not(unix))]
fn restrict_mode(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
