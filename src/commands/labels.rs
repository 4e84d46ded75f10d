//! labels 命令：只渲染 override 内容，不触碰文件系统

use super::load_inputs;
use crate::error::Result;
use crate::template::{generate_traefik_labels, render_override};
use crate::types::Config;
use crate::utils::paths::ProjectLayout;

/// 渲染 override 文档
pub fn run(config: &Config) -> Result<String> {
    let layout = ProjectLayout::from_config(config);
    let inputs = load_inputs(&layout)?;
    let labels = generate_traefik_labels(&inputs.domains);
    Ok(render_override(&labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "PHISH_DOMAIN=mail.example\n").unwrap();

        let config = Config {
            root: dir.path().to_path_buf(),
            ..Config::default()
        };
        let content = run(&config).unwrap();

        assert!(content.contains("Host(`mail.example`)"));
        assert!(!dir.path().join("docker-compose.override.yml").exists());
        assert!(!dir.path().join("data").exists());
    }
}
