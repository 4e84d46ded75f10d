//! status 命令：只读状态报告

use super::load_inputs;
use crate::error::Result;
use crate::setup::email::{EMAIL_KEY, EMAIL_PLACEHOLDER};
use crate::setup::permissions::PERMISSION_TABLE;
use crate::template::labels::router_name;
use crate::types::Config;
use crate::utils::paths::{ProjectLayout, file_exists, file_mode};

/// 显示当前状态
pub fn run(config: &Config) -> Result<()> {
    let layout = ProjectLayout::from_config(config);
    let inputs = load_inputs(&layout)?;

    println!("Project root: {}", layout.root.display());
    println!(
        "Env file: {} [{} variables]",
        layout.env_file.display(),
        inputs.env.len()
    );

    if config.verbose {
        for var in inputs.env.iter() {
            println!("  {} = {}", var.key, var.value);
        }
    }

    println!("\nPhishing domains:");
    for (idx, domain) in inputs.domains.iter().enumerate() {
        println!("  {} → {}", router_name(idx), domain);
    }

    println!("\nACME email:");
    match inputs.env.get(EMAIL_KEY) {
        Some(email) => println!("  {} = {}", EMAIL_KEY, email),
        None => println!("  ⚠️  {} not set", EMAIL_KEY),
    }
    if file_exists(&layout.traefik_static) {
        let content = std::fs::read_to_string(&layout.traefik_static)?;
        if content.contains(EMAIL_PLACEHOLDER) {
            println!(
                "  ⚠️  {} still contains the placeholder email",
                layout.display(&layout.traefik_static)
            );
        }
    }

    println!("\nManaged files:");
    let data_state = if layout.data_dir.is_dir() { "exists" } else { "missing" };
    println!("  {}/: {}", layout.display(&layout.data_dir), data_state);

    for (rel, expected) in PERMISSION_TABLE {
        let path = layout.root.join(rel);
        if !path.exists() {
            println!("  ○ {}: missing", rel);
            continue;
        }
        match file_mode(&path) {
            Some(mode) if mode == expected => println!("  ✓ {}: {:o}", rel, mode),
            Some(mode) => println!("  ⚠️  {}: {:o} (expected {:o})", rel, mode, expected),
            None => println!("  ✓ {}: present", rel),
        }
    }

    let output_state = if file_exists(&layout.output) { "exists" } else { "not generated yet" };
    println!("  {}: {}", layout.display(&layout.output), output_state);

    Ok(())
}
