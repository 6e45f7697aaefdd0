//! 集成测试：注册与登录流程
//!
//! 测试从密码策略检查、生成盐、计算哈希到登录验证的完整流程。

use saltpass::{
    PasswordHasher, PasswordPolicy, create_random_password_salt, get_password_hash,
    is_password_secure, is_valid_hash, is_valid_salt, verify_password,
};
use std::collections::HashMap;
use std::thread;

/// 模拟用户存储记录
struct StoredCredential {
    salt: String,
    hash: String,
}

fn register(store: &mut HashMap<String, StoredCredential>, user: &str, password: &str) -> bool {
    if !is_password_secure(password) {
        return false;
    }

    let salt = create_random_password_salt();
    let hash = get_password_hash(password, &salt);
    store.insert(user.to_string(), StoredCredential { salt, hash });
    true
}

fn login(store: &HashMap<String, StoredCredential>, user: &str, password: &str) -> bool {
    store
        .get(user)
        .map(|c| verify_password(password, &c.salt, &c.hash).unwrap_or(false))
        .unwrap_or(false)
}

/// 测试完整的注册流程
#[test]
fn test_user_registration_flow() {
    let mut store = HashMap::new();

    assert!(register(&mut store, "alice", "123$abc #&"));
    assert!(!register(&mut store, "bob", "abcdefgHIJKLMNOP"));

    let credential = store.get("alice").expect("alice should be registered");
    assert!(is_valid_salt(&credential.salt));
    assert!(is_valid_hash(&credential.hash));
    assert!(!store.contains_key("bob"));
}

/// 测试登录流程
#[test]
fn test_login_flow() {
    let mut store = HashMap::new();
    assert!(register(&mut store, "alice", "ABCDE abcde"));

    assert!(login(&store, "alice", "ABCDE abcde"));
    assert!(!login(&store, "alice", "ABCDE abcdE"));
    assert!(!login(&store, "mallory", "ABCDE abcde"));
}

/// 同一密码在不同用户下因盐不同而得到不同的哈希
#[test]
fn test_same_password_different_users() {
    let mut store = HashMap::new();
    assert!(register(&mut store, "alice", "123$abc #&"));
    assert!(register(&mut store, "carol", "123$abc #&"));

    let alice = &store["alice"];
    let carol = &store["carol"];
    assert_ne!(alice.salt, carol.salt);
    assert_ne!(alice.hash, carol.hash);
}

/// 已存储的哈希在重新计算后保持一致
#[test]
fn test_stored_hash_is_stable() {
    let salt = create_random_password_salt();
    let first = get_password_hash("123$abc #&", &salt);
    let second = PasswordHasher::new().hash("123$abc #&", &salt);
    assert_eq!(first, second);
}

/// 测试多线程并发调用
#[test]
fn test_concurrent_usage() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let password = format!("Passw0rd-{}", i);
                let salt = create_random_password_salt();
                let hash = get_password_hash(&password, &salt);
                (is_password_secure(&password), salt, hash)
            })
        })
        .collect();

    for handle in handles {
        let (secure, salt, hash) = handle.join().expect("thread should not panic");
        assert!(secure);
        assert!(is_valid_salt(&salt));
        assert!(is_valid_hash(&hash));
    }
}

/// 从配置加载的策略与内置策略行为一致
#[test]
fn test_policy_from_config_matches_builtin() {
    let policy: PasswordPolicy = serde_json::from_str("{}").expect("empty config should parse");
    policy.validate().expect("default policy should be valid");

    for password in ["123$abc #&", "ABCDE abcde", "abcdefgHIJKLMNOP", "", "kkkAbc123!x"] {
        assert_eq!(policy.is_satisfied_by(password), is_password_secure(password));
    }

    let json = serde_json::to_string(&policy).expect("policy should serialize");
    assert!(json.contains("\"min_length\":10"));
    assert!(json.contains("\"max_length\":128"));
}
