//! 顶部导航栏

use crate::auth::{log_out, use_auth};
use crate::components::icons::{LogOut, PawPrint};
use crate::data::use_data;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let data = use_data();
    let router = use_router();

    // 未读消息数角标
    let unread = move || {
        auth.current_user()
            .map(|u| data.unread_count(&u.id))
            .unwrap_or(0)
    };

    let nav = move |path: &'static str| move |_| router.navigate(path);

    let on_logout = move |_| {
        // 导航由路由服务的认证状态监听自动处理
        log_out(&auth);
    };

    view! {
        <div class="navbar bg-base-100 shadow-md sticky top-0 z-40 px-4">
            <div class="flex-1 gap-1">
                <a class="btn btn-ghost text-xl gap-2" on:click=nav("/")>
                    <PawPrint attr:class="h-6 w-6 text-primary" />
                    <span class="hidden sm:inline">"Hearts for Paws"</span>
                </a>
                <a class="btn btn-ghost btn-sm" on:click=nav("/lost-and-found")>"Lost & Found"</a>
                <a class="btn btn-ghost btn-sm" on:click=nav("/rescues")>"Rescues"</a>
                <a class="btn btn-ghost btn-sm" on:click=nav("/donations")>"Donations"</a>
                <a class="btn btn-ghost btn-sm" on:click=nav("/events")>"Events"</a>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=move || auth.current_user().is_some()
                    fallback=move || {
                        view! {
                            <a class="btn btn-ghost btn-sm" on:click=nav("/login")>"Log In"</a>
                            <a class="btn btn-primary btn-sm" on:click=nav("/signup")>"Sign Up"</a>
                        }
                    }
                >
                    <button class="btn btn-ghost btn-sm indicator" on:click=nav("/profile")>
                        <Show when=move || { unread() > 0 }>
                            <span class="indicator-item badge badge-secondary badge-xs">{unread}</span>
                        </Show>
                        {move || auth.current_user().map(|u| u.name).unwrap_or_default()}
                    </button>
                    <button class="btn btn-outline btn-error btn-sm gap-2" on:click=on_logout>
                        <LogOut attr:class="h-4 w-4" /> "Log Out"
                    </button>
                </Show>
            </div>
        </div>
    }
}
