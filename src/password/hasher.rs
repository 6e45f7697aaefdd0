//! 加盐密码哈希实现
//!
//! 哈希输入为 `<{salt}:{password}:{version}>` 的 UTF-8 字节，输出为
//! 64 个小写十六进制字符的 SHA-256 摘要。版本标记当前固定为 `"1"`，
//! 为将来迁移到其他哈希方案预留。

use sha2::{Digest, Sha256};

use crate::error::{Error, PasswordHashError, Result};
use crate::random::{constant_time_compare_str, hex_encode};

/// 当前哈希方案的版本标记
pub const HASH_VERSION: &str = "1";

/// 哈希输出长度（十六进制字符数）
pub const HASH_LENGTH: usize = 64;

/// 加盐 SHA-256 密码哈希器
///
/// 无内部可变状态，可以在多个线程间共享。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHasher {
    /// 写入哈希输入的版本标记
    version: String,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            version: HASH_VERSION.to_string(),
        }
    }
}

impl PasswordHasher {
    /// 创建使用当前版本标记的哈希器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置版本标记
    ///
    /// 只有在迁移到新方案时才需要修改；已存储的哈希都是以 `"1"` 计算的。
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// 获取版本标记
    pub fn version(&self) -> &str {
        &self.version
    }

    /// 计算密码哈希
    ///
    /// 对任意字符串输入（包括空串）都不会失败。
    ///
    /// # Example
    ///
    /// ```rust
    /// use saltpass::PasswordHasher;
    ///
    /// let hasher = PasswordHasher::new();
    /// let hash = hasher.hash("bbbb", "aaaa");
    /// assert_eq!(
    ///     hash,
    ///     "90e8cdbaaf42837ba4a71b177fad4f5a7c60e5bfb3ede013d3555007d714b9a0"
    /// );
    /// ```
    pub fn hash(&self, password: &str, salt: &str) -> String {
        let input = format!("<{}:{}:{}>", salt, password, self.version);
        let digest = Sha256::digest(input.as_bytes());
        tracing::trace!(version = %self.version, "computed password hash");
        hex_encode(&digest)
    }

    /// 验证密码
    ///
    /// 重新计算哈希并以常量时间与已存储的值比较。
    ///
    /// # Returns
    ///
    /// 密码正确返回 `Ok(true)`，错误返回 `Ok(false)`；
    /// 已存储的哈希格式不正确时返回错误。
    pub fn verify(&self, password: &str, salt: &str, stored_hash: &str) -> Result<bool> {
        if !is_valid_hash(stored_hash) {
            return Err(Error::PasswordHash(PasswordHashError::InvalidFormat(
                format!("expected {} lowercase hex characters", HASH_LENGTH),
            )));
        }

        let matched = constant_time_compare_str(&self.hash(password, salt), stored_hash);
        tracing::debug!("password verification finished");
        Ok(matched)
    }
}

/// 检查字符串是否为合法的哈希值（64 个小写十六进制字符）
pub fn is_valid_hash(hash: &str) -> bool {
    hash.len() == HASH_LENGTH && hash.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

// ============================================================================
// 便捷函数
// ============================================================================

/// 使用当前版本标记计算密码哈希
///
/// # Example
///
/// ```rust
/// use saltpass::{create_random_password_salt, get_password_hash};
///
/// let salt = create_random_password_salt();
/// assert_eq!(get_password_hash("pw", &salt), get_password_hash("pw", &salt));
/// ```
pub fn get_password_hash(password: &str, salt: &str) -> String {
    PasswordHasher::default().hash(password, salt)
}

/// 使用当前版本标记验证密码
pub fn verify_password(password: &str, salt: &str, stored_hash: &str) -> Result<bool> {
    PasswordHasher::default().verify(password, salt, stored_hash)
}
