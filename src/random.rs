//! 随机盐值生成模块
//!
//! 提供按凭据生成的随机盐，以及哈希验证用到的常量时间比较。

use rand::Rng;
use subtle::ConstantTimeEq;

/// 盐值长度（字符数）
pub const SALT_LENGTH: usize = 64;

/// 盐值字符集：26 个小写 ASCII 字母
pub const SALT_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// 生成指定长度的小写字母随机字符串
///
/// 每个字符从 `a..=z` 中独立均匀抽取。使用线程本地的 CSPRNG
/// (`rand::rng()`，由操作系统熵源播种)。
///
/// # Arguments
///
/// * `length` - 要生成的字符数
///
/// # Example
///
/// ```rust
/// use saltpass::random::generate_random_lowercase;
///
/// let s = generate_random_lowercase(16);
/// assert_eq!(s.len(), 16);
/// assert!(s.chars().all(|c| c.is_ascii_lowercase()));
/// ```
pub fn generate_random_lowercase(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| SALT_ALPHABET[rng.random_range(0..SALT_ALPHABET.len())] as char)
        .collect()
}

/// 生成新的密码盐
///
/// 返回 64 个小写字母。每个凭据生成一次，由调用方与哈希一起持久化。
/// 不做唯一性检查：26^64 的空间下碰撞概率可以忽略。
///
/// # Example
///
/// ```rust
/// use saltpass::random::{create_random_password_salt, is_valid_salt};
///
/// let salt = create_random_password_salt();
/// assert!(is_valid_salt(&salt));
/// ```
pub fn create_random_password_salt() -> String {
    tracing::trace!(length = SALT_LENGTH, "generating password salt");
    generate_random_lowercase(SALT_LENGTH)
}

/// 检查字符串是否具有盐值的形状（64 个小写 ASCII 字母）
///
/// 用于校验从存储中读回的盐；哈希计算本身接受任意盐字符串。
pub fn is_valid_salt(salt: &str) -> bool {
    salt.len() == SALT_LENGTH && salt.bytes().all(|b| b.is_ascii_lowercase())
}

// ============================================================================
// 辅助函数
// ============================================================================

/// 将字节数组编码为小写十六进制字符串
pub(crate) fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// 常量时间比较两个字节切片
///
/// 用于防止时序攻击
///
/// # Example
///
/// ```rust
/// use saltpass::random::constant_time_compare;
///
/// assert!(constant_time_compare(b"secret_token", b"secret_token"));
/// assert!(!constant_time_compare(b"secret_token", b"other_token!"));
/// ```
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// 常量时间比较两个字符串
pub fn constant_time_compare_str(a: &str, b: &str) -> bool {
    constant_time_compare(a.as_bytes(), b.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_salt_length_and_alphabet() {
        let salt = create_random_password_salt();
        assert_eq!(salt.len(), SALT_LENGTH);
        assert!(salt.bytes().all(|b| SALT_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_salts_are_distinct() {
        let salts: HashSet<String> = (0..1000).map(|_| create_random_password_salt()).collect();
        assert_eq!(salts.len(), 1000);
    }

    #[test]
    fn test_generate_random_lowercase_zero_length() {
        assert!(generate_random_lowercase(0).is_empty());
    }

    #[test]
    fn test_every_letter_is_reachable() {
        // 64 * 200 次抽取里每个字母都缺席的概率可以忽略
        let seen: HashSet<char> = (0..200)
            .flat_map(|_| create_random_password_salt().chars().collect::<Vec<_>>())
            .collect();
        assert_eq!(seen.len(), SALT_ALPHABET.len());
    }

    #[test]
    fn test_is_valid_salt() {
        assert!(is_valid_salt(&"a".repeat(64)));
        assert!(!is_valid_salt(&"a".repeat(63)));
        assert!(!is_valid_salt(&"a".repeat(65)));
        assert!(!is_valid_salt(&format!("{}A", "a".repeat(63))));
        assert!(!is_valid_salt(&format!("{}1", "a".repeat(63))));
        assert!(!is_valid_salt(""));
    }

    #[test]
    fn test_hex_encode() {
        assert_eq!(hex_encode(&[0x00, 0xff, 0x10]), "00ff10");
        assert_eq!(hex_encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare(b"hello", b"hello"));
        assert!(!constant_time_compare(b"hello", b"world"));
        assert!(!constant_time_compare(b"hello", b"hell"));
    }

    #[test]
    fn test_constant_time_compare_str() {
        assert!(constant_time_compare_str("secret", "secret"));
        assert!(!constant_time_compare_str("secret", "Secret"));
    }
}
