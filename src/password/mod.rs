//! 密码模块
//!
//! 提供密码策略检查和加盐哈希。
//!
//! ## 示例
//!
//! ```rust
//! use saltpass::password::{get_password_hash, is_password_secure, verify_password};
//!
//! assert!(is_password_secure("123$abc #&"));
//!
//! let hash = get_password_hash("123$abc #&", "salt");
//! assert!(verify_password("123$abc #&", "salt", &hash).unwrap());
//! ```

mod hasher;
pub mod policy;

pub use hasher::{
    HASH_LENGTH, HASH_VERSION, PasswordHasher, get_password_hash, is_valid_hash, verify_password,
};
pub use policy::{
    CharacterCategory, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PasswordPolicy,
    is_password_secure,
};
