//! 钓鱼域名收集
//!
//! `PHISH_DOMAIN` 为第 0 个，`PHISH_DOMAIN_1`、`PHISH_DOMAIN_2` ... 依次追加，
//! 遇到第一个缺失的序号即停止（中间有空缺时后面的会被忽略）。

use crate::config::expand::expand_variables;
use crate::types::EnvMap;
use tracing::debug;

/// 主域名对应的键
pub const PRIMARY_KEY: &str = "PHISH_DOMAIN";

/// 第 `idx` 个附加域名的键
pub fn numbered_key(idx: usize) -> String {
    format!("{PRIMARY_KEY}_{idx}")
}

/// 序号大于 `first_missing` 的编号键（因空缺而被忽略），升序
pub fn ignored_numbered_keys(env: &EnvMap, first_missing: usize) -> Vec<usize> {
    let prefix = format!("{PRIMARY_KEY}_");
    let mut ignored: Vec<usize> = env
        .keys()
        .filter_map(|key| key.strip_prefix(&prefix)?.parse::<usize>().ok())
        .filter(|&n| n > first_missing)
        .collect();
    ignored.sort_unstable();
    ignored
}

/// 按顺序收集所有钓鱼域名（已展开 ${VAR}）
pub fn collect_phish_domains(env: &EnvMap) -> Vec<String> {
    let mut domains = Vec::new();

    if let Some(raw) = env.get(PRIMARY_KEY) {
        domains.push(expand_variables(raw, env));
    }

    let mut idx = 1;
    while let Some(raw) = env.get(&numbered_key(idx)) {
        domains.push(expand_variables(raw, env));
        idx += 1;
    }

    let ignored = ignored_numbered_keys(env, idx);
    if !ignored.is_empty() {
        debug!(
            missing = %numbered_key(idx),
            ignored = ?ignored,
            "gap in numbered domains, later entries ignored"
        );
    }
    debug!(count = domains.len(), "collected phishing domains");

    domains
}
