//! generate 命令：完整的一次性流程
//!
//! 前置检查 → 目录/文件初始化 → 邮箱配置 → 权限修正 → 生成标签 → 写入 override → 摘要

use super::load_inputs;
use super::summary::Summary;
use crate::error::Result;
use crate::setup::init::{DATA_GID, DATA_UID};
use crate::setup::{configure_acme_email, ensure_acme_store, ensure_data_dir, normalize_permissions};
use crate::setup::email::EMAIL_KEY;
use crate::template::{generate_traefik_labels, write_override};
use crate::types::{AcmeOutcome, Config, DirOutcome, EmailOutcome, OutputFormat, PermOutcome};
use crate::utils::paths::ProjectLayout;
use tracing::debug;

/// 控制台输出：json 模式下只保留最终的 JSON 文档
///
/// 警告和跳过的步骤总会记录下来，写进摘要。
struct Console {
    enabled: bool,
    warnings: Vec<String>,
}

impl Console {
    fn new(format: OutputFormat) -> Self {
        Self {
            enabled: format == OutputFormat::Text,
            warnings: Vec::new(),
        }
    }

    fn line(&self, text: impl AsRef<str>) {
        if self.enabled {
            println!("{}", text.as_ref());
        }
    }

    fn warn(&mut self, message: String) {
        self.line(format!("   ⚠️  {}", message));
        self.warnings.push(message);
    }

    fn skip(&mut self, message: String) {
        self.line(format!("   ○ {}", message));
        self.warnings.push(message);
    }
}

/// 执行 generate
pub fn run(config: &Config) -> Result<Summary> {
    let layout = ProjectLayout::from_config(config);
    debug!(root = %layout.root.display(), env = %layout.env_file.display(), "starting generate");

    let inputs = load_inputs(&layout)?;
    let mut out = Console::new(config.format);

    // 1. 目录与 ACME 存储
    out.line("📁 Checking directories and files...");
    let data_dir = layout.display(&layout.data_dir);
    match ensure_data_dir(&layout.data_dir, DATA_UID, DATA_GID)? {
        DirOutcome::Exists => out.line(format!("   ✓ {} directory exists", data_dir)),
        DirOutcome::Created { owner_set: true } => out.line(format!(
            "   ✓ Created {} directory (owner {}:{})",
            data_dir, DATA_UID, DATA_GID
        )),
        DirOutcome::Created { owner_set: false } => out.warn(format!(
            "Created {} directory, but could not set owner {}:{} (re-run with sudo to fix)",
            data_dir, DATA_UID, DATA_GID
        )),
    }

    let acme_store = layout.display(&layout.acme_store);
    match ensure_acme_store(&layout.acme_store)? {
        AcmeOutcome::Created => out.line(format!("   ✓ Created {} (mode 600)", acme_store)),
        AcmeOutcome::Repaired => out.line(format!("   ✓ Initialized empty {}", acme_store)),
        AcmeOutcome::Exists => out.line(format!("   ✓ {} exists", acme_store)),
    }
    out.line("");

    // 2. Traefik 邮箱
    out.line("📧 Configuring Traefik email...");
    let static_config = layout.display(&layout.traefik_static);
    let email = inputs.env.get(EMAIL_KEY).unwrap_or_default();
    match configure_acme_email(&inputs.env, &layout.traefik_static)? {
        EmailOutcome::MissingFile => out.warn(format!(
            "{} not found, skipping email configuration",
            static_config
        )),
        EmailOutcome::MissingEmail => out.warn(format!(
            "{} not set in .env, skipping email configuration",
            EMAIL_KEY
        )),
        EmailOutcome::PlaceholderReplaced => {
            out.line(format!("   ✓ Configured ACME email: {}", email))
        }
        EmailOutcome::AlreadyConfigured => {
            out.line(format!("   ✓ ACME email already configured: {}", email))
        }
        EmailOutcome::Updated => out.line(format!("   ✓ Updated ACME email: {}", email)),
        EmailOutcome::Unchanged => out.skip(format!(
            "No email entry found in {}, left unchanged",
            static_config
        )),
    }
    out.line("");

    // 3. 权限
    out.line("🔒 Setting file permissions...");
    for (path, outcome) in normalize_permissions(&layout.root) {
        let message = format!("{}: {}", layout.display(&path), outcome);
        match outcome {
            PermOutcome::Applied(_) => out.line(format!("   ✓ {}", message)),
            PermOutcome::Missing | PermOutcome::Unsupported => out.skip(message),
            PermOutcome::Failed(_) => out.warn(message),
        }
    }
    out.line("");

    // 4. 标签与 override 文件
    let labels = generate_traefik_labels(&inputs.domains);
    write_override(&layout.output, &labels)?;
    out.line(format!("✅ Generated: {}", layout.display(&layout.output)));

    Ok(Summary::new(
        layout.display(&layout.output).to_string(),
        &inputs.domains,
        labels.len(),
    )
    .with_warnings(out.warnings))
}
