//! 首次运行的环境准备：目录、ACME 存储、邮箱、权限

pub mod email;
pub mod init;
pub mod permissions;

pub use email::configure_acme_email;
pub use init::{ensure_acme_store, ensure_data_dir};
pub use permissions::normalize_permissions;
