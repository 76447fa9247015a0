//! 运行配置

use structure::DEFAULT_SKIP_DIRS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RibsConfig {
    /// 最大树深度, None 表示不限制
    pub max_depth: Option<usize>,
    /// 展开目录时跳过的目录名
    pub skip_dirs: Vec<String>,
}

impl Default for RibsConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RibsConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    #[doc(hidden)]
    pub fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Self {
        let mut config = Self::default();

        if let Some(v) = var("RIBSTREE_MAX_DEPTH") {
            match v.parse::<usize>() {
                Ok(0) => config.max_depth = None,
                Ok(d) => config.max_depth = Some(d),
                Err(_) => tracing::warn!("Ignoring invalid RIBSTREE_MAX_DEPTH: {}", v),
            }
        }

        if let Some(v) = var("RIBSTREE_SKIP_DIRS") {
            config.skip_dirs = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_config_default() {
        let config = RibsConfig::default();
        assert_eq!(config.max_depth, None);
        assert!(config.skip_dirs.contains(&"Pods".to_string()));
    }

    #[test]
    fn test_config_from_vars() {
        let env = vars(&[("RIBSTREE_MAX_DEPTH", "3"), ("RIBSTREE_SKIP_DIRS", "Vendor, .build,")]);
        let config = RibsConfig::from_vars(|k| env.get(k).cloned());
        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.skip_dirs, vec!["Vendor", ".build"]);
    }

    #[test]
    fn test_config_invalid_depth_ignored() {
        let env = vars(&[("RIBSTREE_MAX_DEPTH", "deep")]);
        let config = RibsConfig::from_vars(|k| env.get(k).cloned());
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn test_config_zero_depth_means_unlimited() {
        let env = vars(&[("RIBSTREE_MAX_DEPTH", "0")]);
        let config = RibsConfig::from_vars(|k| env.get(k).cloned());
        assert_eq!(config.max_depth, None);
    }
}
