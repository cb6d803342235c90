//! 个人主页
//!
//! 我的启事管理（状态切换 / 编辑 / 删除）、收件箱
//! （未读标记 + 标记已读）、我名下的组织入口。

use crate::auth::use_auth;
use crate::components::icons::{CheckCircle, Mail, Pencil, Trash2};
use crate::data::use_data;
use crate::web::dialog;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use hfp_shared::PostStatus;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let data = use_data();
    let router = use_router();

    // 路由守卫保证已认证；这里仍以 Option 方式取值兜底
    let my_posts = move || {
        auth.current_user()
            .map(|user| {
                data.posts()
                    .into_iter()
                    .filter(|p| p.user_id == user.id)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let inbox = move || {
        auth.current_user()
            .map(|user| data.messages_for(&user.id))
            .unwrap_or_default()
    };

    let my_orgs = move || {
        auth.current_user()
            .map(|user| {
                data.organizations()
                    .into_iter()
                    .filter(|o| o.user_id == user.id)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let handle_delete = move |id: u64| {
        if dialog::confirm("Are you sure you want to delete this report?") {
            data.delete_post(id);
        }
    };

    view! {
        <div class="max-w-5xl mx-auto px-4 py-8 space-y-8">
            <div>
                <h1 class="text-3xl font-bold">
                    {move || auth.current_user().map(|u| u.name).unwrap_or_default()}
                </h1>
                <p class="text-base-content/70">
                    {move || auth.current_user().map(|u| u.email).unwrap_or_default()}
                </p>
            </div>

            // 我的启事
            <div class="card bg-base-100 shadow-md">
                <div class="card-body">
                    <h2 class="card-title">"My Reports"</h2>
                    <Show
                        when=move || !my_posts().is_empty()
                        fallback=|| view! {
                            <p class="text-base-content/50 py-4">"You haven't posted any reports yet."</p>
                        }
                    >
                        <div class="overflow-x-auto">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Pet"</th>
                                        <th>"Status"</th>
                                        <th>"Date"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || my_posts()
                                        .into_iter()
                                        .map(|post| {
                                            let post_id = post.id;
                                            let (badge_class, badge_label) = match post.status {
                                                PostStatus::Reunited => ("badge badge-success", "Reunited"),
                                                PostStatus::Lost => ("badge badge-error", "Lost"),
                                                PostStatus::Found => ("badge badge-info", "Found"),
                                            };
                                            let toggle_label = if post.is_reunited() {
                                                "Reopen"
                                            } else {
                                                "Mark Reunited"
                                            };
                                            view! {
                                                <tr>
                                                    <td class="font-medium">{post.name.clone()}</td>
                                                    <td><span class=badge_class>{badge_label}</span></td>
                                                    <td class="text-sm opacity-70">{post.date.clone()}</td>
                                                    <td>
                                                        <div class="flex justify-end gap-2">
                                                            <button class="btn btn-ghost btn-sm gap-1"
                                                                on:click=move |_| data.toggle_post_status(post_id)>
                                                                <CheckCircle attr:class="h-4 w-4" /> {toggle_label}
                                                            </button>
                                                            <button class="btn btn-ghost btn-sm"
                                                                on:click=move |_| router.navigate_route(AppRoute::EditPost(post_id))>
                                                                <Pencil attr:class="h-4 w-4" />
                                                            </button>
                                                            <button class="btn btn-ghost btn-sm text-error"
                                                                on:click=move |_| handle_delete(post_id)>
                                                                <Trash2 attr:class="h-4 w-4" />
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </div>
            </div>

            // 收件箱
            <div class="card bg-base-100 shadow-md">
                <div class="card-body">
                    <h2 class="card-title gap-2">
                        <Mail attr:class="h-5 w-5" /> "Inbox"
                        {move || {
                            let unread = inbox().iter().filter(|m| !m.read).count();
                            (unread > 0).then(|| view! {
                                <span class="badge badge-secondary">{unread} " unread"</span>
                            })
                        }}
                    </h2>
                    <Show
                        when=move || !inbox().is_empty()
                        fallback=|| view! {
                            <p class="text-base-content/50 py-4">"No messages yet."</p>
                        }
                    >
                        <div class="space-y-3">
                            {move || inbox()
                                .into_iter()
                                .map(|message| {
                                    let message_id = message.id;
                                    let unread = !message.read;
                                    let card_class = if unread {
                                        "p-4 rounded-lg bg-primary/5 border border-primary/20"
                                    } else {
                                        "p-4 rounded-lg bg-base-200"
                                    };
                                    let subject_class = if unread { "font-bold" } else { "font-medium" };
                                    view! {
                                        <div class=card_class>
                                            <div class="flex items-start justify-between gap-4">
                                                <div>
                                                    <p class=subject_class>
                                                        {message.subject.clone()}
                                                    </p>
                                                    <p class="text-sm text-base-content/70">
                                                        {format!("From {}", message.sender_name)}
                                                    </p>
                                                </div>
                                                <span class="text-xs text-base-content/50 whitespace-nowrap">
                                                    {message.date.clone()}
                                                </span>
                                            </div>
                                            <p class="text-sm mt-2">{message.content.clone()}</p>
                                            <Show when=move || unread>
                                                <div class="flex justify-end mt-2">
                                                    <button class="btn btn-ghost btn-xs"
                                                        on:click=move |_| data.mark_message_read(message_id)>
                                                        "Mark as read"
                                                    </button>
                                                </div>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            </div>

            // 我的组织
            <div class="card bg-base-100 shadow-md">
                <div class="card-body">
                    <h2 class="card-title">"My Organizations"</h2>
                    <Show
                        when=move || !my_orgs().is_empty()
                        fallback=move || view! {
                            <p class="text-base-content/50 py-4">
                                "No organization registered. "
                                <a class="link link-primary" on:click=move |_| router.navigate("/rescues")>
                                    "Register one"
                                </a>
                            </p>
                        }
                    >
                        <div class="space-y-2">
                            {move || my_orgs()
                                .into_iter()
                                .map(|org| view! {
                                    <div class="flex items-center justify-between p-3 rounded-lg bg-base-200">
                                        <div>
                                            <p class="font-medium">{org.name.clone()}</p>
                                            <p class="text-sm text-base-content/70">{org.category.as_str()}</p>
                                        </div>
                                        <button class="btn btn-primary btn-sm"
                                            on:click=move |_| router.navigate("/org-dashboard")>
                                            "Open Dashboard"
                                        </button>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
