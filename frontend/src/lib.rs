//! Hearts for Paws 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理（身份提供者）
//! - `data`: 领域数据上下文（包装数据层的 DomainStore）
//! - `components`: UI 组件层

mod auth;
mod data;
mod components {
    mod contact_modal;
    pub mod donations;
    pub mod edit_post;
    pub mod events;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod lost_found;
    pub mod navbar;
    pub mod org_dashboard;
    pub mod profile;
    pub mod rescues;
    pub mod signup;
    mod toast;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::donations::DonationsPage;
use crate::components::edit_post::EditPostPage;
use crate::components::events::EventsPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::lost_found::LostFoundPage;
use crate::components::navbar::Navbar;
use crate::components::org_dashboard::OrgDashboardPage;
use crate::components::profile::ProfilePage;
use crate::components::rescues::RescuesPage;
use crate::components::signup::SignupPage;
use crate::data::DataContext;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod clock;
    pub mod dialog;
    pub mod route;
    pub mod router;
    mod storage;
    pub mod timer;

    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::LostFound => view! { <LostFoundPage /> }.into_any(),
        AppRoute::Rescues => view! { <RescuesPage /> }.into_any(),
        AppRoute::Donations => view! { <DonationsPage /> }.into_any(),
        AppRoute::Events => view! { <EventsPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::OrgDashboard => view! { <OrgDashboardPage /> }.into_any(),
        AppRoute::EditPost(id) => view! { <EditPostPage id=id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文并从 LocalStorage 恢复身份
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 2. 创建领域数据上下文（打开存储并水合五个集合）
    let data_ctx = DataContext::new();
    provide_context(data_ctx);

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();
    let is_ready = move || !auth_ctx.state.get().is_loading;

    view! {
        // 加载门：身份解析完成前不渲染任何子组件
        <Show
            when=is_ready
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            // 路由器组件：注入认证信号实现守卫
            <Router is_authenticated=is_authenticated>
                <div class="min-h-screen bg-base-200 flex flex-col">
                    <Navbar />
                    <main class="flex-grow">
                        <RouterOutlet matcher=route_matcher />
                    </main>
                </div>
            </Router>
        </Show>
    }
}
