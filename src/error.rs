//! 统一错误类型模块
//!
//! 策略检查、盐值生成和哈希计算本身不会失败；这里的错误只来自
//! 配置校验和对已存储哈希的格式检查。

use std::fmt;

/// saltpass 库的统一结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// saltpass 库的错误类型
#[derive(Debug)]
pub enum Error {
    /// 密码哈希错误
    PasswordHash(PasswordHashError),

    /// 配置错误
    Config(ConfigError),
}

impl Error {
    /// 创建一个无效配置值错误
    pub fn invalid_config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Config(ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        })
    }
}

/// 密码哈希相关错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordHashError {
    /// 无效的哈希格式
    InvalidFormat(String),
}

/// 配置相关错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 无效的配置值
    InvalidValue { key: String, message: String },
}

// ============================================================================
// Display 实现
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PasswordHash(e) => write!(f, "Password hash error: {}", e),
            Error::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl fmt::Display for PasswordHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordHashError::InvalidFormat(msg) => write!(f, "invalid hash format: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, message } => {
                write!(f, "invalid configuration value for '{}': {}", key, message)
            }
        }
    }
}

// ============================================================================
// std::error::Error 实现
// ============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::PasswordHash(e) => Some(e),
            Error::Config(e) => Some(e),
        }
    }
}

impl std::error::Error for PasswordHashError {}
impl std::error::Error for ConfigError {}

// ============================================================================
// From 实现
// ============================================================================

impl From<PasswordHashError> for Error {
    fn from(err: PasswordHashError) -> Self {
        Error::PasswordHash(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}
