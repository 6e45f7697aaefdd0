//! # saltpass
//!
//! 密码策略检查与加盐哈希库。
//!
//! ## 功能特性
//!
//! - **密码策略检查**: 长度、连续重复字符和字符类别复杂度校验，只返回 `bool`
//! - **盐值生成**: 64 位小写字母随机盐
//! - **密码哈希**: 带版本标记的加盐 SHA-256 哈希与常量时间验证
//!
//! ## 注册流程示例
//!
//! ```rust
//! use saltpass::{create_random_password_salt, get_password_hash, is_password_secure};
//!
//! let password = "123$abc #&";
//! assert!(is_password_secure(password));
//!
//! let salt = create_random_password_salt();
//! let hash = get_password_hash(password, &salt);
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! ## 登录验证示例
//!
//! ```rust
//! use saltpass::{create_random_password_salt, get_password_hash, verify_password};
//!
//! let salt = create_random_password_salt();
//! let stored = get_password_hash("ABCDE abcde", &salt);
//!
//! assert!(verify_password("ABCDE abcde", &salt, &stored).unwrap());
//! assert!(!verify_password("abcde ABCDE", &salt, &stored).unwrap());
//! ```
//!
//! ## 自定义策略
//!
//! ```rust
//! use saltpass::PasswordPolicy;
//!
//! let policy = PasswordPolicy::default().with_min_length(12);
//! assert!(policy.validate().is_ok());
//! assert!(!policy.is_satisfied_by("123$abc #&"));
//! ```

pub mod error;
pub mod password;
pub mod random;

pub use error::{Error, Result};

// ============================================================================
// 密码相关导出
// ============================================================================

pub use password::{
    CharacterCategory, HASH_VERSION, PasswordHasher, PasswordPolicy, get_password_hash,
    is_password_secure, is_valid_hash, verify_password,
};

// ============================================================================
// 随机数生成函数导出
// ============================================================================

pub use random::{
    SALT_ALPHABET, SALT_LENGTH, constant_time_compare, constant_time_compare_str,
    create_random_password_salt, generate_random_lowercase, is_valid_salt,
};
