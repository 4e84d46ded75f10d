//! docker-compose.override.yml 生成
//!
//! 文件完全由程序生成，每次运行整体覆盖。

use crate::utils::paths::write_file_safe;
use std::path::Path;
use tracing::debug;

/// 文件头（注释 + compose 版本 + gophish 服务）
pub const OVERRIDE_HEADER: &str = "\
# ============================================
# AUTO-GENERATED: Phishing Domain Routes
# DO NOT EDIT MANUALLY
# Run: phish-routes generate
# ============================================

version: '3'

services:
  gophish:
    labels:
";

/// 渲染 override 文件内容
pub fn render_override<S: AsRef<str>>(labels: &[S]) -> String {
    let mut content = String::from(OVERRIDE_HEADER);

    for label in labels {
        content.push_str("      - \"");
        content.push_str(&quote_escape(label.as_ref()));
        content.push_str("\"\n");
    }

    content
}

/// 渲染并写入 override 文件（覆盖旧内容）
pub fn write_override<S: AsRef<str>>(path: &Path, labels: &[S]) -> std::io::Result<()> {
    let content = render_override(labels);
    write_file_safe(path, &content)?;
    debug!(path = %path.display(), labels = labels.len(), "wrote compose override");
    Ok(())
}

// YAML 双引号字符串里只有 \ 和 " 需要转义
fn quote_escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
