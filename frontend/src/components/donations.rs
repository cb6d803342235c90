//! 捐赠清单页面
//!
//! 展示全部救助组织的物资需求；登录用户可以认领/取消认领。
//! 未登录的认领尝试只弹提示，不会触达数据层。

use crate::auth::use_auth;
use crate::components::icons::{CheckCircle, Gift, Heart};
use crate::components::toast::{Notification, Toast};
use crate::data::use_data;
use hfp_shared::Urgency;
use leptos::prelude::*;

#[component]
pub fn DonationsPage() -> impl IntoView {
    let auth = use_auth();
    let data = use_data();

    let (notification, set_notification) = signal(Notification::None);

    let handle_pledge = move |id: u64| match auth.current_user() {
        None => {
            set_notification.set(Some(("Please login to pledge a donation.".to_string(), true)));
        }
        Some(user) => data.toggle_pledge(id, &user.id),
    };

    view! {
        <div class="max-w-5xl mx-auto px-4 py-8">
            <Toast notification=notification set_notification=set_notification />

            <div class="mb-8">
                <h1 class="text-3xl font-bold">"Donation Wishlists"</h1>
                <p class="text-base-content/70 mt-1">
                    "Local rescues need these items. Pledge one and drop it off directly."
                </p>
            </div>

            <Show
                when=move || !data.donations().is_empty()
                fallback=|| view! {
                    <div class="card bg-base-100 shadow-sm">
                        <div class="card-body items-center text-center text-base-content/50 py-16">
                            <Gift attr:class="h-12 w-12" />
                            <p>"No open requests right now. Check back soon!"</p>
                        </div>
                    </div>
                }
            >
                <div class="space-y-4">
                    {move || {
                        let current_user = auth.current_user();
                        data.donations()
                            .into_iter()
                            .map(|req| {
                                let req_id = req.id;
                                let description = req.description.clone();
                                let has_description = !description.is_empty();
                                let border = if req.fulfilled {
                                    "card bg-base-100 shadow-md border-l-4 border-success"
                                } else if req.urgency >= Urgency::High {
                                    "card bg-base-100 shadow-md border-l-4 border-error"
                                } else {
                                    "card bg-base-100 shadow-md border-l-4 border-info"
                                };
                                let urgency_badge = if req.fulfilled {
                                    ("badge badge-success", "Fulfilled".to_string())
                                } else {
                                    let class = match req.urgency {
                                        Urgency::Critical => "badge badge-error",
                                        Urgency::High => "badge badge-warning",
                                        Urgency::Medium => "badge badge-info",
                                        Urgency::Low => "badge badge-ghost",
                                    };
                                    (class, format!("{} Priority", req.urgency.as_str()))
                                };
                                let (badge_class, badge_label) = urgency_badge;
                                let wishlist_link = data
                                    .find_organization(&req.org_id)
                                    .map(|o| o.amazon_wishlist)
                                    .filter(|link| !link.is_empty());
                                // 认领按钮的三种形态：认领 / 取消认领 / 他人已认领
                                let mine = current_user
                                    .as_ref()
                                    .map(|u| req.can_unpledge(&u.id))
                                    .unwrap_or(false);
                                let pledge_button = if !req.fulfilled {
                                    view! {
                                        <button class="btn btn-primary btn-sm gap-2"
                                            on:click=move |_| handle_pledge(req_id)>
                                            <Heart attr:class="h-4 w-4" /> "Pledge to Donate"
                                        </button>
                                    }.into_any()
                                } else if mine {
                                    view! {
                                        <button class="btn btn-outline btn-sm"
                                            on:click=move |_| handle_pledge(req_id)>
                                            "Cancel Pledge"
                                        </button>
                                    }.into_any()
                                } else {
                                    // 他人认领的条目：按钮不可用，点击也只会被数据层静默忽略
                                    view! {
                                        <button class="btn btn-disabled btn-sm gap-2" disabled>
                                            <CheckCircle attr:class="h-4 w-4" /> "Pledged"
                                        </button>
                                    }.into_any()
                                };
                                view! {
                                    <div class=border>
                                        <div class="card-body">
                                            <div class="flex items-start justify-between gap-4">
                                                <div>
                                                    <h2 class="card-title">{req.item.clone()}</h2>
                                                    <p class="text-sm text-primary font-medium">{req.rescue_name.clone()}</p>
                                                    <p class="text-sm text-base-content/70">
                                                        {format!("Quantity: {}", req.quantity)}
                                                    </p>
                                                </div>
                                                <span class=badge_class>{badge_label}</span>
                                            </div>
                                            <Show when=move || has_description>
                                                <p class="text-sm">{description.clone()}</p>
                                            </Show>
                                            <div class="card-actions justify-end items-center gap-3">
                                                {wishlist_link.map(|link| view! {
                                                    <a class="link link-primary text-sm" href=link target="_blank" rel="noreferrer">
                                                        "View wishlist"
                                                    </a>
                                                })}
                                                {pledge_button}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
