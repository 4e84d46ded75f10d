//! ${VAR} 变量展开
//!
//! 只做一遍替换：替换进来的文本里即使还有 `${...}` 也不会再展开。
//! 未定义的变量保留原样，不报错。

use crate::types::EnvMap;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// 正则表达式：匹配 ${VAR}，不支持嵌套
static VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid variable pattern"));

/// 展开值中的 `${NAME}` 引用
pub fn expand_variables(value: &str, env: &EnvMap) -> String {
    VAR_PATTERN
        .replace_all(value, |caps: &Captures| match env.get(&caps[1]) {
            Some(resolved) => resolved.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_expand_known_variable() {
        let vars = env(&[("BASE", "example.com")]);
        assert_eq!(expand_variables("login.${BASE}", &vars), "login.example.com");
    }

    #[test]
    fn test_unresolved_reference_passes_through() {
        let vars = env(&[("A", "x")]);
        assert_eq!(expand_variables("${A}-${B}", &vars), "x-${B}");
    }

    #[test]
    fn test_single_pass_only() {
        let vars = env(&[("A", "${B}"), ("B", "deep")]);
        assert_eq!(expand_variables("${A}", &vars), "${B}");
    }

    #[test]
    fn test_multiple_references() {
        let vars = env(&[("SUB", "portal"), ("ROOT", "corp.example")]);
        assert_eq!(expand_variables("${SUB}.${ROOT}", &vars), "portal.corp.example");
    }

    #[test]
    fn test_plain_value_untouched() {
        let vars = EnvMap::new();
        assert_eq!(expand_variables("plain.example.org", &vars), "plain.example.org");
        assert_eq!(expand_variables("$HOME {x}", &vars), "$HOME {x}");
    }

    #[test]
    fn test_empty_braces_not_matched() {
        let vars = EnvMap::new();
        assert_eq!(expand_variables("${}", &vars), "${}");
    }
}
