//! 配置值验证模块

use tracing_subscriber::EnvFilter;

/// 日志输出格式
pub const LOG_FORMATS: &[&str] = &["text", "json"];

/// 验证日志级别（EnvFilter 指令语法，如 "info" 或 "phone_forward=debug"）
pub fn validate_log_level(level: &str) -> Result<(), String> {
    EnvFilter::try_new(level)
        .map(|_| ())
        .map_err(|e| format!("Invalid log level '{}': {}", level, e))
}

/// 验证日志格式
pub fn validate_log_format(format: &str) -> Result<(), String> {
    if LOG_FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(format!(
            "Invalid log format: '{}'. Valid: {}",
            format,
            LOG_FORMATS.join(", ")
        ))
    }
}
