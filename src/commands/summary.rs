//! 运行摘要与后续步骤提示

use crate::template::labels::router_name;
use serde::Serialize;

const RULE: &str = "======================================================================";

/// 生成结果摘要（--format json 时直接序列化）
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub output: String,
    pub domains: Vec<String>,
    pub routers: Vec<String>,
    pub labels: usize,
    /// 跳过或未完全成功的步骤
    pub warnings: Vec<String>,
}

impl Summary {
    pub fn new(output: String, domains: &[String], labels: usize) -> Self {
        Self {
            output,
            domains: domains.to_vec(),
            routers: (0..domains.len()).map(router_name).collect(),
            labels,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    /// 人类可读的摘要文本
    pub fn render_text(&self) -> String {
        let mut lines = vec![
            String::new(),
            RULE.to_string(),
            "✅ PHISHING DOMAINS CONFIGURED".to_string(),
            RULE.to_string(),
        ];

        for (idx, domain) in self.domains.iter().enumerate() {
            lines.push(format!("  {}. {}", idx + 1, domain));
        }

        lines.extend(
            [
                "",
                RULE,
                "📝 NEXT STEPS:",
                RULE,
                "1. Verify domains in .env are correct:",
                "   grep PHISH_DOMAIN .env",
                "",
                "2. Rebuild containers:",
                "   docker compose down",
                "   docker compose up -d",
                "",
                "3. Verify Traefik loaded routes:",
                "   docker logs traefik | grep -i 'gophish-phish'",
                "",
                "4. Test domains (after DNS is updated):",
            ]
            .map(String::from),
        );

        for domain in &self.domains {
            lines.push(format!("   curl -k https://{}/login", domain));
        }

        lines.push(String::new());
        lines.push(RULE.to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}
