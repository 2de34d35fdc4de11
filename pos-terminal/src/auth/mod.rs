//! 登录 - 角色推断 (不是认证)
//!
//! 任意非空用户名 + 密码都能登录，角色按用户名中的关键字决定：
//! 依次检查 "admin"、"manager"、"kitchen"，后匹配的覆盖先匹配的，
//! 都不包含时为收银员。

use shared::{User, UserRole, View};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter valid credentials")]
    MissingCredentials,

    #[error("Role {role} cannot open {view}")]
    ViewDenied { role: UserRole, view: View },
}

/// Role implied by `username`
pub fn role_for_username(username: &str) -> UserRole {
    let name = username.to_lowercase();
    let mut role = UserRole::Cashier;
    for (needle, candidate) in [
        ("admin", UserRole::Admin),
        ("manager", UserRole::Manager),
        ("kitchen", UserRole::Kitchen),
    ] {
        if name.contains(needle) {
            role = candidate;
        }
    }
    role
}

/// Log in with any non-empty credentials
pub fn login(username: &str, password: &str) -> Result<User, AuthError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    let role = role_for_username(username);
    info!(user = %username, role = %role, "User logged in");
    Ok(User {
        id: uuid::Uuid::new_v4().to_string(),
        name: username.to_string(),
        role,
        avatar_url: None,
    })
}

/// Gate a view on the user's role
pub fn require_view(user: &User, view: View) -> Result<(), AuthError> {
    if user.role.can_access(view) {
        Ok(())
    } else {
        Err(AuthError::ViewDenied {
            role: user.role,
            view,
        })
    }
}
