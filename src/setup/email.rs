//! 把 ACME_EMAIL 写入 Traefik 静态配置

use crate::error::{PhishError, Result};
use crate::types::{EmailOutcome, EnvMap};
use crate::utils::paths::{file_exists, write_file_safe};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// 仓库自带 traefik.yml 中的占位邮箱
pub const EMAIL_PLACEHOLDER: &str = "your-email@example.com";
/// 读取邮箱的键
pub const EMAIL_KEY: &str = "ACME_EMAIL";

// 只匹配行首（可带缩进）的 email 键，注释和 adminemail 之类的键不受影响
static EMAIL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([ \t]*)email:[^\r\n]*").expect("valid email pattern"));

/// 整行等于 `email: <目标>` 才算已配置
fn configured_line(email: &str) -> Result<Regex> {
    let pattern = format!(r"(?m)^[ \t]*email:[ \t]*{}[ \t]*\r?$", regex::escape(email));
    Regex::new(&pattern).map_err(|e| PhishError::Parse(e.to_string()))
}

/// 配置 Traefik 的 ACME 邮箱
///
/// 顺序：
/// 1. 文件或 ACME_EMAIL 缺失时不做任何事
/// 2. 包含占位符时全部替换
/// 3. 已经是 `email: <目标>` 时跳过
/// 4. 否则把所有行首的 `email: ...` 替换为目标邮箱（保留缩进），内容有变化才写回
pub fn configure_acme_email(env: &EnvMap, path: &Path) -> Result<EmailOutcome> {
    if !file_exists(path) {
        return Ok(EmailOutcome::MissingFile);
    }

    let Some(email) = env.get(EMAIL_KEY) else {
        return Ok(EmailOutcome::MissingEmail);
    };

    let content = std::fs::read_to_string(path)?;

    if content.contains(EMAIL_PLACEHOLDER) {
        let updated = content.replace(EMAIL_PLACEHOLDER, email);
        write_file_safe(path, &updated)?;
        debug!(path = %path.display(), "replaced email placeholder");
        return Ok(EmailOutcome::PlaceholderReplaced);
    }

    if configured_line(email)?.is_match(&content) {
        return Ok(EmailOutcome::AlreadyConfigured);
    }

    let updated = EMAIL_LINE.replace_all(&content, |caps: &Captures| {
        format!("{}email: {}", &caps[1], email)
    });
    if &*updated == content.as_str() {
        return Ok(EmailOutcome::Unchanged);
    }

    write_file_safe(path, &updated)?;
    debug!(path = %path.display(), "rewrote email line");
    Ok(EmailOutcome::Updated)
}
