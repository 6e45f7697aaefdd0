//! 密码策略检查模块
//!
//! 判断密码是否满足安全策略。检查结果只有 `true` / `false`，
//! 不返回也不记录是哪一条规则未通过，避免攻击者借此枚举策略。

use serde::{Deserialize, Serialize};
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::error::{Error, Result};

/// 默认最小长度（包含）
pub const MIN_PASSWORD_LENGTH: usize = 10;

/// 默认最大长度（包含）
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// 字符复杂度类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterCategory {
    /// 大写字母
    Uppercase,
    /// 小写字母
    Lowercase,
    /// 数字
    Digit,
    /// 特殊字符：任何非字母数字字符，包括空格
    Special,
}

impl CharacterCategory {
    /// 所有类别
    pub const ALL: [CharacterCategory; 4] = [
        CharacterCategory::Uppercase,
        CharacterCategory::Lowercase,
        CharacterCategory::Digit,
        CharacterCategory::Special,
    ];

    /// 判断字符是否属于该类别
    ///
    /// 各类别独立判断，同一个字符可以同时属于多个类别（如 `Ⓐ` 既是大写又是特殊字符）。
    ///
    /// - 数字只包括十进制数字 (`Nd`)，`½`、`Ⅻ` 之类不算
    /// - 特殊字符是既不属于字母 (`L*`) 也不属于数字 (`N*`) 的字符
    ///
    /// 没有大小写之分的字母（如汉字）不属于任何类别。
    ///
    /// # Example
    ///
    /// ```rust
    /// use saltpass::CharacterCategory;
    ///
    /// assert!(CharacterCategory::Uppercase.matches('A'));
    /// assert!(CharacterCategory::Special.matches(' '));
    /// assert!(CharacterCategory::Digit.matches('٣'));
    /// assert!(!CharacterCategory::Digit.matches('½'));
    /// assert!(CharacterCategory::ALL.iter().all(|c| !c.matches('密')));
    /// ```
    pub fn matches(self, c: char) -> bool {
        match self {
            CharacterCategory::Uppercase => c.is_uppercase(),
            CharacterCategory::Lowercase => c.is_lowercase(),
            CharacterCategory::Digit => c.general_category() == GeneralCategory::DecimalNumber,
            CharacterCategory::Special => !matches!(
                c.general_category_group(),
                GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number
            ),
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterCategory::Uppercase => 0b0001,
            CharacterCategory::Lowercase => 0b0010,
            CharacterCategory::Digit => 0b0100,
            CharacterCategory::Special => 0b1000,
        }
    }
}

/// 密码策略配置
///
/// 默认值即内置策略：10 到 128 个字符，不允许 3 个及以上相同字符连续出现，
/// 四个字符类别中至少出现三个。
///
/// 可以嵌入调用方的配置文件，缺失的字段使用默认值：
///
/// ```rust
/// use saltpass::PasswordPolicy;
///
/// let policy: PasswordPolicy = serde_json::from_str(r#"{ "min_length": 12 }"#).unwrap();
/// assert_eq!(policy.min_length, 12);
/// assert_eq!(policy.max_length, 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// 最小长度（按 Unicode 字符计）
    pub min_length: usize,
    /// 最大长度（按 Unicode 字符计）
    pub max_length: usize,
    /// 允许同一字符连续出现的最大次数
    pub max_consecutive_repeats: usize,
    /// 至少需要出现的字符类别数 (1-4)
    pub min_categories: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: MAX_PASSWORD_LENGTH,
            max_consecutive_repeats: 2,
            min_categories: 3,
        }
    }
}

impl PasswordPolicy {
    /// 设置最小长度
    pub fn with_min_length(mut self, length: usize) -> Self {
        self.min_length = length;
        self
    }

    /// 设置最大长度
    pub fn with_max_length(mut self, length: usize) -> Self {
        self.max_length = length;
        self
    }

    /// 设置允许的最大连续重复次数
    pub fn with_max_consecutive_repeats(mut self, repeats: usize) -> Self {
        self.max_consecutive_repeats = repeats;
        self
    }

    /// 设置至少需要的字符类别数
    pub fn with_min_categories(mut self, categories: usize) -> Self {
        self.min_categories = categories;
        self
    }

    /// 校验配置本身是否自洽
    pub fn validate(&self) -> Result<()> {
        if self.min_length > self.max_length {
            return Err(Error::invalid_config(
                "min_length",
                format!("{} exceeds max_length {}", self.min_length, self.max_length),
            ));
        }

        if !(1..=CharacterCategory::ALL.len()).contains(&self.min_categories) {
            return Err(Error::invalid_config(
                "min_categories",
                format!("must be between 1 and 4, got {}", self.min_categories),
            ));
        }

        if self.max_consecutive_repeats == 0 {
            return Err(Error::invalid_config(
                "max_consecutive_repeats",
                "must be at least 1",
            ));
        }

        Ok(())
    }

    /// 检查密码是否满足策略
    ///
    /// 任意字符串（包括空串）都只会得到 `true` 或 `false`。
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        let length = password.chars().count();
        if length < self.min_length || length > self.max_length {
            return false;
        }

        let mut categories = 0u8;
        let mut previous = None;
        let mut run = 0usize;

        for c in password.chars() {
            if previous == Some(c) {
                run += 1;
            } else {
                run = 1;
                previous = Some(c);
            }

            if run > self.max_consecutive_repeats {
                return false;
            }

            for category in CharacterCategory::ALL {
                if category.matches(c) {
                    categories |= category.bit();
                }
            }
        }

        categories.count_ones() as usize >= self.min_categories
    }
}

/// 使用内置策略检查密码是否安全
///
/// # Example
///
/// ```rust
/// use saltpass::is_password_secure;
///
/// assert!(is_password_secure("123$abc #&"));
/// assert!(is_password_secure("ABCDE abcde"));
/// assert!(!is_password_secure("abcdefgHIJKLMNOP"));
/// ```
pub fn is_password_secure(password: &str) -> bool {
    PasswordPolicy::default().is_satisfied_by(password)
}
