//! Traefik 标签与 docker-compose override 模板
//!
//! # 输出示例
//!
//! ```text
//! services:
//!   gophish:
//!     labels:
//!       - "traefik.http.routers.gophish-phish-http.entrypoints=http"
//!       - "traefik.http.routers.gophish-phish-http.rule=Host(`login.example.com`)"
//!       ...
//! ```

pub mod compose;
pub mod labels;

pub use compose::{render_override, write_override};
pub use labels::{generate_traefik_labels, router_name};
