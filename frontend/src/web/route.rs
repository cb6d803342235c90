//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 走失/寻获启事
    LostFound,
    /// 救助组织名录
    Rescues,
    /// 捐赠清单
    Donations,
    /// 社区活动
    Events,
    /// 登录页面
    Login,
    /// 注册页面
    Signup,
    /// 个人主页 (需要认证)
    Profile,
    /// 组织管理面板 (需要认证)
    OrgDashboard,
    /// 编辑启事 (需要认证，携带启事 id)
    EditPost(u64),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        if let Some(id) = path.strip_prefix("/edit-post/") {
            return match id.parse::<u64>() {
                Ok(id) => Self::EditPost(id),
                Err(_) => Self::NotFound,
            };
        }
        match path {
            "/" => Self::Home,
            "/lost-and-found" => Self::LostFound,
            "/rescues" => Self::Rescues,
            "/donations" => Self::Donations,
            "/events" => Self::Events,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/profile" => Self::Profile,
            "/org-dashboard" => Self::OrgDashboard,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::LostFound => "/lost-and-found".to_string(),
            Self::Rescues => "/rescues".to_string(),
            Self::Donations => "/donations".to_string(),
            Self::Events => "/events".to_string(),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::OrgDashboard => "/org-dashboard".to_string(),
            Self::EditPost(id) => format!("/edit-post/{id}"),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Profile | Self::OrgDashboard | Self::EditPost(_)
        )
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录/注册页）
    pub fn auth_success_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::LostFound,
            AppRoute::Rescues,
            AppRoute::Donations,
            AppRoute::Events,
            AppRoute::Login,
            AppRoute::Signup,
            AppRoute::Profile,
            AppRoute::OrgDashboard,
            AppRoute::EditPost(1730000000000),
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/edit-post/abc"), AppRoute::NotFound);
    }

    #[test]
    fn test_guarded_routes() {
        assert!(AppRoute::Profile.requires_auth());
        assert!(AppRoute::OrgDashboard.requires_auth());
        assert!(AppRoute::EditPost(1).requires_auth());
        assert!(!AppRoute::Donations.requires_auth());
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(AppRoute::Signup.should_redirect_when_authenticated());
    }
}
