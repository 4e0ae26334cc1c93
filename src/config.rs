//! 运行配置：从环境变量读取日志级别与默认版本

use tracing::Level;

pub const DEFAULT_CURRENT_VERSION: &str = "9.0.0";
pub const DEFAULT_TARGET_VERSION: &str = "10.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: Level,
    pub current_version: String,
    pub target_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            current_version: DEFAULT_CURRENT_VERSION.to_string(),
            target_version: DEFAULT_TARGET_VERSION.to_string(),
        }
    }
}

impl Config {
    /// 读取 LOG_LEVEL / CURRENT_VERSION / TARGET_VERSION
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: lookup("LOG_LEVEL")
                .map(|v| parse_level(&v))
                .unwrap_or(defaults.log_level),
            current_version: lookup("CURRENT_VERSION").unwrap_or(defaults.current_version),
            target_version: lookup("TARGET_VERSION").unwrap_or(defaults.target_version),
        }
    }
}

/// 兼容 Python logging 的级别名，无法识别时回退到 INFO
pub fn parse_level(name: &str) -> Level {
    match name.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" | "CRITICAL" | "FATAL" => Level::ERROR,
        _ => Level::INFO,
    }
}
