//! .env 读取、变量展开与钓鱼域名收集

pub mod domains;
pub mod expand;
pub mod format;

pub use domains::collect_phish_domains;
pub use expand::expand_variables;
pub use format::dotenv::{DotenvParser, load_env};
