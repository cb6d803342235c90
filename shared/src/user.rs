//! 身份模型与凭据策略
//!
//! 演示级认证：任意非空邮箱都能登录为固定的演示身份，注册
//! 总是成功并以时间戳铸造新用户。密码从不校验。这是产品
//! 原型的刻意行为，不是待修的缺陷；接入真实凭据校验时替换
//! 本模块的两个入口即可。

use crate::date::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 演示身份的固定 id 与名称
pub const DEMO_USER_ID: &str = "123";
pub const DEMO_USER_NAME: &str = "Demo User";

/// 当前用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

// =========================================================
// 错误类型
// =========================================================

/// 认证失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// 登录时邮箱为空
    EmptyEmail,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 登录页原样展示这段文案
            AuthError::EmptyEmail => write!(f, "Please enter an email address"),
        }
    }
}

impl std::error::Error for AuthError {}

// =========================================================
// 凭据策略
// =========================================================

/// 登录校验
///
/// 邮箱非空即成功，返回固定的演示身份（邮箱保留输入值）；
/// 邮箱为空则失败。
pub fn authenticate(email: &str) -> Result<User, AuthError> {
    if email.is_empty() {
        return Err(AuthError::EmptyEmail);
    }
    Ok(User {
        id: DEMO_USER_ID.to_string(),
        email: email.to_string(),
        name: DEMO_USER_NAME.to_string(),
    })
}

/// 注册
///
/// 总是成功，新用户 id 取当前时间戳的十进制表示。
pub fn register(email: &str, name: &str, now: Timestamp) -> User {
    User {
        id: now.as_millis().to_string(),
        email: email.to_string(),
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_is_rejected() {
        let err = authenticate("").unwrap_err();
        assert_eq!(err, AuthError::EmptyEmail);
        assert_eq!(err.to_string(), "Please enter an email address");
    }

    #[test]
    fn test_any_email_yields_fixed_demo_identity() {
        let user = authenticate("user@example.com").unwrap();
        assert_eq!(user.id, "123");
        assert_eq!(user.name, "Demo User");
        assert_eq!(user.email, "user@example.com");

        // 不同邮箱得到同一身份，仅邮箱字段不同
        let other = authenticate("someone@else.net").unwrap();
        assert_eq!(other.id, user.id);
        assert_eq!(other.name, user.name);
    }

    #[test]
    fn test_register_mints_timestamp_id() {
        let user = register("new@example.com", "New Friend", Timestamp::new(1700000000000));
        assert_eq!(user.id, "1700000000000");
        assert_eq!(user.name, "New Friend");
    }
}
