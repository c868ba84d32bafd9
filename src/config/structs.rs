use serde::{Deserialize, Serialize};

use super::validators::{validate_log_format, validate_log_level};
use crate::errors::{PhoneForwardError, Result};
use crate::forward::OverflowPolicy;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "phone-forward.toml";

/// 环境变量前缀，例如 PHFWD__LOGGING__LEVEL=debug
pub const ENV_PREFIX: &str = "PHFWD";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - logging: 日志配置
/// - engine: 计数溢出策略、基数上限
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    ///
    /// An explicitly given `path` must exist; the default path is optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_PATH, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that deserialize but cannot be used.
    pub fn validate(&self) -> Result<()> {
        validate_log_level(&self.logging.level).map_err(PhoneForwardError::config)?;
        validate_log_format(&self.logging.format).map_err(PhoneForwardError::config)?;
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `text` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Log file; stderr when unset or empty.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// 转发引擎配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// What `@` reports when the count exceeds `u64`.
    #[serde(default)]
    pub count_overflow: OverflowPolicy,
    /// Maximum number of bases alive at once; 0 means unlimited.
    #[serde(default)]
    pub max_bases: usize,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    false
}

// ============================================================
// Default implementations
// ============================================================

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            count_overflow: OverflowPolicy::default(),
            max_bases: 0,
        }
    }
}
