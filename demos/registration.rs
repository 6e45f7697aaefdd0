//! 注册与登录示例
//!
//! 展示如何使用 saltpass 实现用户注册和登录流程。
//!
//! 运行: cargo run --example registration

use saltpass::{create_random_password_salt, get_password_hash, is_password_secure, verify_password};
use std::collections::HashMap;

/// 简单的用户存储（实际应用中应使用数据库）
struct UserStore {
    users: HashMap<String, User>,
}

struct User {
    salt: String,
    password_hash: String,
}

impl UserStore {
    fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    fn register(&mut self, username: &str, password: &str) -> Result<(), String> {
        if self.users.contains_key(username) {
            return Err("用户名已存在".to_string());
        }

        // 不向调用方说明具体是哪条规则未通过
        if !is_password_secure(password) {
            return Err("密码不符合安全策略".to_string());
        }

        let salt = create_random_password_salt();
        let password_hash = get_password_hash(password, &salt);
        self.users.insert(
            username.to_string(),
            User {
                salt,
                password_hash,
            },
        );
        Ok(())
    }

    fn login(&self, username: &str, password: &str) -> Result<bool, String> {
        let user = self.users.get(username).ok_or("用户不存在")?;
        verify_password(password, &user.salt, &user.password_hash).map_err(|e| e.to_string())
    }
}

fn main() {
    let mut store = UserStore::new();

    println!("=== 注册 ===");
    for (username, password) in [
        ("alice", "123$abc #&"),
        ("bob", "abcdefgHIJKLMNOP"),
        ("carol", "ABCDE abcde"),
    ] {
        match store.register(username, password) {
            Ok(()) => println!("{}: 注册成功", username),
            Err(e) => println!("{}: 注册失败 - {}", username, e),
        }
    }

    println!("\n=== 登录 ===");
    for (username, password) in [
        ("alice", "123$abc #&"),
        ("alice", "wrong password"),
        ("carol", "ABCDE abcde"),
        ("bob", "abcdefgHIJKLMNOP"),
    ] {
        match store.login(username, password) {
            Ok(true) => println!("{}: 登录成功", username),
            Ok(false) => println!("{}: 密码错误", username),
            Err(e) => println!("{}: 登录失败 - {}", username, e),
        }
    }
}
