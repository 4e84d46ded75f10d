//! Traefik 路由标签生成
//!
//! 标签的键名和顺序会被 Traefik 的 label 解析器直接读取，必须逐字保持。
//! 每个域名 10 条：HTTP 入口 4 条（跳转 https），HTTPS 入口 6 条。

/// 后端服务名（所有路由共用）
pub const SERVICE_NAME: &str = "gophish-phish";
/// 证书解析器
pub const CERT_RESOLVER: &str = "letsencrypt";
/// HTTPS 路由使用的响应头中间件
pub const HEADERS_MIDDLEWARE: &str = "gophish-headers";
/// HTTP 路由使用的跳转中间件
pub const REDIRECT_MIDDLEWARE: &str = "redirect-to-https";
/// 每个域名生成的标签数
pub const LABELS_PER_DOMAIN: usize = 10;

/// 第 `idx` 个域名的路由名：0 号为 `gophish-phish`，其余追加 `-{idx}`
pub fn router_name(idx: usize) -> String {
    if idx > 0 {
        format!("{SERVICE_NAME}-{idx}")
    } else {
        SERVICE_NAME.to_string()
    }
}

/// 为所有域名生成标签
///
/// 域名原样写进 `Host(...)` 规则，不做校验或转义。
pub fn generate_traefik_labels<S: AsRef<str>>(domains: &[S]) -> Vec<String> {
    let mut labels = Vec::with_capacity(domains.len() * LABELS_PER_DOMAIN);

    for (idx, domain) in domains.iter().enumerate() {
        let router = router_name(idx);
        let domain = domain.as_ref();

        // HTTP 入口：跳转到 https
        labels.push(format!("traefik.http.routers.{router}-http.entrypoints=http"));
        labels.push(format!("traefik.http.routers.{router}-http.rule=Host(`{domain}`)"));
        labels.push(format!(
            "traefik.http.routers.{router}-http.middlewares={REDIRECT_MIDDLEWARE}"
        ));
        labels.push(format!("traefik.http.routers.{router}-http.service={SERVICE_NAME}"));

        // HTTPS 路由
        labels.push(format!("traefik.http.routers.{router}.entrypoints=https"));
        labels.push(format!("traefik.http.routers.{router}.rule=Host(`{domain}`)"));
        labels.push(format!("traefik.http.routers.{router}.tls=true"));
        labels.push(format!(
            "traefik.http.routers.{router}.tls.certresolver={CERT_RESOLVER}"
        ));
        labels.push(format!(
            "traefik.http.routers.{router}.middlewares={HEADERS_MIDDLEWARE}"
        ));
        labels.push(format!("traefik.http.routers.{router}.service={SERVICE_NAME}"));
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_names() {
        assert_eq!(router_name(0), "gophish-phish");
        assert_eq!(router_name(1), "gophish-phish-1");
        assert_eq!(router_name(12), "gophish-phish-12");
    }

    #[test]
    fn test_single_domain_exact_output() {
        let labels = generate_traefik_labels(&["login.example.com"]);
        let expected = vec![
            "traefik.http.routers.gophish-phish-http.entrypoints=http",
            "traefik.http.routers.gophish-phish-http.rule=Host(`login.example.com`)",
            "traefik.http.routers.gophish-phish-http.middlewares=redirect-to-https",
            "traefik.http.routers.gophish-phish-http.service=gophish-phish",
            "traefik.http.routers.gophish-phish.entrypoints=https",
            "traefik.http.routers.gophish-phish.rule=Host(`login.example.com`)",
            "traefik.http.routers.gophish-phish.tls=true",
            "traefik.http.routers.gophish-phish.tls.certresolver=letsencrypt",
            "traefik.http.routers.gophish-phish.middlewares=gophish-headers",
            "traefik.http.routers.gophish-phish.service=gophish-phish",
        ];
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_two_domains() {
        let labels = generate_traefik_labels(&["a.com", "b.com"]);
        assert_eq!(labels.len(), 20);

        let second = &labels[LABELS_PER_DOMAIN..];
        assert_eq!(second[0], "traefik.http.routers.gophish-phish-1-http.entrypoints=http");
        assert_eq!(second[5], "traefik.http.routers.gophish-phish-1.rule=Host(`b.com`)");

        for router in ["gophish-phish", "gophish-phish-1"] {
            for suffix in [
                "tls=true",
                "tls.certresolver=letsencrypt",
                "middlewares=gophish-headers",
            ] {
                let label = format!("traefik.http.routers.{router}.{suffix}");
                assert!(labels.contains(&label), "missing {label}");
            }
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let labels = generate_traefik_labels(&["a.com", "b.com", "c.com"]);
        let mut sorted = labels.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), labels.len());
    }

    #[test]
    fn test_empty_domains() {
        let labels = generate_traefik_labels::<&str>(&[]);
        assert!(labels.is_empty());
    }
}
