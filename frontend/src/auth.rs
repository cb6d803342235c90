//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。
//!
//! 登录/注册带固定的人工延迟，模拟真实后端的响应时间；
//! 凭据策略本身（任意非空邮箱 -> 演示身份）在数据层的
//! `user` 模块里，这里只负责延迟、持久化与信号更新。

use crate::web::{LocalStorage, clock, timer};
use hfp_shared::user::{self, AuthError, User};
use hfp_shared::{JsonStorage, KEY_USER};
use leptos::prelude::*;

/// 登录/注册的人工延迟（毫秒）
const AUTH_DELAY_MS: u32 = 500;

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 当前用户（仅在认证成功后存在）
    pub current_user: Option<User>,
    /// 是否仍在解析持久化的身份
    pub is_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            current_user: None,
            // 启动时先处于加载态，init_auth 解析完身份后解除
            is_loading: true,
        }
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 当前用户的响应式快照
    pub fn current_user(&self) -> Option<User> {
        self.state.get().current_user
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().current_user.is_some())
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

fn identity_storage() -> JsonStorage<LocalStorage> {
    JsonStorage::new(LocalStorage)
}

/// 初始化认证状态
///
/// 启动时从 LocalStorage 恢复上次的身份，解析完成后解除
/// 加载门。整个过程同步完成，但消费者仍应等待 `is_loading`
/// 归位后再渲染。
pub fn init_auth(ctx: &AuthContext) {
    let stored: Option<User> = identity_storage().load(KEY_USER, None);
    ctx.set_state.update(|state| {
        state.current_user = stored;
        state.is_loading = false;
    });
}

/// 登录
///
/// 固定延迟后按凭据策略判定：邮箱非空即成功（密码从不校验），
/// 成功后持久化身份并更新内存状态。延迟不可取消，一旦调用
/// 必然在延迟结束后出结果。
///
/// # Returns
/// 成功时返回登录身份；失败时返回带人类可读文案的错误
pub async fn log_in(
    ctx: &AuthContext,
    email: String,
    _password: String,
) -> Result<User, AuthError> {
    timer::sleep(AUTH_DELAY_MS).await;

    let user = user::authenticate(&email)?;
    identity_storage().save(KEY_USER, &user);
    ctx.set_state.update(|state| {
        state.current_user = Some(user.clone());
    });
    Ok(user)
}

/// 注册
///
/// 总是成功：固定延迟后以当前时间戳铸造新用户，
/// 持久化并设为当前身份。
pub async fn sign_up(ctx: &AuthContext, email: String, _password: String, name: String) -> User {
    timer::sleep(AUTH_DELAY_MS).await;

    let user = user::register(&email, &name, clock::now());
    identity_storage().save(KEY_USER, &user);
    ctx.set_state.update(|state| {
        state.current_user = Some(user.clone());
    });
    user
}

/// 注销并清除状态
///
/// 同步完成：删除持久化身份并清空内存状态。
/// 导航由路由服务的认证状态监听自动处理。
pub fn log_out(ctx: &AuthContext) {
    identity_storage().delete(KEY_USER);
    ctx.set_state.update(|state| {
        state.current_user = None;
    });
}
