//! 组织管理面板
//!
//! 操作当前用户名下的第一个组织（数据模型允许多个，
//! 面板按第一个匹配处理）：维护捐赠清单、发布官方活动。

use crate::auth::use_auth;
use crate::components::icons::{Calendar, Gift, Plus, Trash2};
use crate::components::toast::{Notification, Toast};
use crate::data::use_data;
use crate::web::clock;
use crate::web::router::use_router;
use hfp_shared::{DonationRequest, Event, Urgency, OFFICIAL_EVENT_TYPES};
use leptos::prelude::*;

#[component]
pub fn OrgDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let data = use_data();
    let router = use_router();

    let (notification, set_notification) = signal(Notification::None);

    let my_org = move || {
        auth.current_user()
            .and_then(|user| data.organization_owned_by(&user.id))
    };

    // 清单表单
    let (w_item, set_w_item) = signal(String::new());
    let (w_quantity, set_w_quantity) = signal(String::new());
    let (w_urgency, set_w_urgency) = signal(Urgency::Medium);
    let (w_description, set_w_description) = signal(String::new());

    // 活动表单
    let (e_title, set_e_title) = signal(String::new());
    let (e_date, set_e_date) = signal(String::new());
    let (e_time, set_e_time) = signal(String::new());
    let (e_location, set_e_location) = signal(String::new());
    let (e_type, set_e_type) = signal(String::new());
    let (e_description, set_e_description) = signal(String::new());

    let org_wishlist = move || {
        my_org()
            .map(|org| {
                data.donations()
                    .into_iter()
                    .filter(|r| r.org_id == org.id)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let org_events = move || {
        my_org()
            .map(|org| {
                data.events()
                    .into_iter()
                    .filter(|e| e.org_id.as_deref() == Some(org.id.as_str()))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let on_add_wishlist = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(org) = my_org() else { return };
        data.add_donation(DonationRequest {
            id: clock::now().as_id(),
            rescue_name: org.name.clone(),
            org_id: org.id.clone(),
            item: w_item.get_untracked(),
            quantity: w_quantity.get_untracked(),
            urgency: w_urgency.get_untracked(),
            description: w_description.get_untracked(),
            fulfilled: false,
            pledged_by: None,
        });
        set_notification.set(Some(("Wishlist item added.".to_string(), false)));
        set_w_item.set(String::new());
        set_w_quantity.set(String::new());
        set_w_urgency.set(Urgency::Medium);
        set_w_description.set(String::new());
    };

    let on_add_event = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (Some(user), Some(org)) = (auth.current_user(), my_org()) else {
            return;
        };
        let event_type = {
            let chosen = e_type.get_untracked();
            if chosen.is_empty() {
                OFFICIAL_EVENT_TYPES[0].to_string()
            } else {
                chosen
            }
        };
        data.add_event(Event {
            id: clock::now().as_id(),
            title: e_title.get_untracked(),
            date: e_date.get_untracked(),
            time: e_time.get_untracked(),
            location: e_location.get_untracked(),
            event_type,
            description: e_description.get_untracked(),
            contact_email: org.email.clone(),
            image: None,
            user_id: user.id,
            org_id: Some(org.id.clone()),
            attendees: Vec::new(),
        });
        set_notification.set(Some(("Event published.".to_string(), false)));
        set_e_title.set(String::new());
        set_e_date.set(String::new());
        set_e_time.set(String::new());
        set_e_location.set(String::new());
        set_e_type.set(String::new());
        set_e_description.set(String::new());
    };

    view! {
        <div class="max-w-5xl mx-auto px-4 py-8 space-y-8">
            <Toast notification=notification set_notification=set_notification />

            <Show
                when=move || my_org().is_some()
                fallback=move || view! {
                    <div class="card bg-base-100 shadow-md">
                        <div class="card-body items-center text-center py-16">
                            <h2 class="card-title">"No organization yet"</h2>
                            <p class="text-base-content/70">
                                "Register your rescue or shelter to manage a wishlist and post official events."
                            </p>
                            <button class="btn btn-primary mt-4" on:click=move |_| router.navigate("/rescues")>
                                "Register Organization"
                            </button>
                        </div>
                    </div>
                }
            >
                // 组织信息头
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        <div class="flex items-start justify-between">
                            <div>
                                <h1 class="text-2xl font-bold">
                                    {move || my_org().map(|o| o.name).unwrap_or_default()}
                                </h1>
                                <p class="text-base-content/70">
                                    {move || my_org()
                                        .map(|o| format!("{} • {}", o.category.as_str(), o.address))
                                        .unwrap_or_default()}
                                </p>
                            </div>
                            <span class="badge badge-primary badge-outline">
                                {move || my_org().map(|o| o.email).unwrap_or_default()}
                            </span>
                        </div>
                    </div>
                </div>

                // 捐赠清单管理
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        <h2 class="card-title gap-2">
                            <Gift attr:class="h-5 w-5" /> "Donation Wishlist"
                        </h2>
                        <form class="flex flex-col md:flex-row gap-2 items-end" on:submit=on_add_wishlist>
                            <div class="form-control flex-1">
                                <label class="label" for="w_item"><span class="label-text">"Item"</span></label>
                                <input id="w_item" type="text" required class="input input-bordered input-sm"
                                    prop:value=w_item
                                    on:input=move |ev| set_w_item.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="w_qty"><span class="label-text">"Quantity"</span></label>
                                <input id="w_qty" type="text" required placeholder="e.g. 5 bags"
                                    class="input input-bordered input-sm"
                                    prop:value=w_quantity
                                    on:input=move |ev| set_w_quantity.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="w_urgency"><span class="label-text">"Urgency"</span></label>
                                <select id="w_urgency" class="select select-bordered select-sm"
                                    prop:value=move || w_urgency.get().as_str()
                                    on:change=move |ev| {
                                        set_w_urgency.set(
                                            Urgency::from_str(&event_target_value(&ev)).unwrap_or_default(),
                                        )
                                    }>
                                    <option value="Low">"Low"</option>
                                    <option value="Medium">"Medium"</option>
                                    <option value="High">"High"</option>
                                    <option value="Critical">"Critical"</option>
                                </select>
                            </div>
                            <div class="form-control flex-1">
                                <label class="label" for="w_desc"><span class="label-text">"Note"</span></label>
                                <input id="w_desc" type="text" class="input input-bordered input-sm"
                                    prop:value=w_description
                                    on:input=move |ev| set_w_description.set(event_target_value(&ev)) />
                            </div>
                            <button type="submit" class="btn btn-primary btn-sm gap-1">
                                <Plus attr:class="h-4 w-4" /> "Add"
                            </button>
                        </form>

                        <div class="divider my-2"></div>

                        <Show
                            when=move || !org_wishlist().is_empty()
                            fallback=|| view! {
                                <p class="text-base-content/50">"No wishlist items yet."</p>
                            }
                        >
                            <div class="space-y-2">
                                {move || org_wishlist()
                                    .into_iter()
                                    .map(|req| {
                                        let req_id = req.id;
                                        view! {
                                            <div class="flex items-center justify-between p-3 rounded-lg bg-base-200">
                                                <div>
                                                    <p class="font-medium">{req.item.clone()}</p>
                                                    <p class="text-sm text-base-content/70">
                                                        {format!("{} • {} Priority", req.quantity, req.urgency.as_str())}
                                                    </p>
                                                </div>
                                                <div class="flex items-center gap-2">
                                                    {req.fulfilled.then(|| view! {
                                                        <span class="badge badge-success">"Pledged"</span>
                                                    })}
                                                    <button class="btn btn-ghost btn-sm text-error"
                                                        on:click=move |_| data.delete_donation(req_id)>
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>
                </div>

                // 官方活动发布
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        <h2 class="card-title gap-2">
                            <Calendar attr:class="h-5 w-5" /> "Official Events"
                        </h2>
                        <form class="grid grid-cols-1 md:grid-cols-3 gap-2" on:submit=on_add_event>
                            <div class="form-control md:col-span-2">
                                <label class="label" for="oe_title"><span class="label-text">"Title"</span></label>
                                <input id="oe_title" type="text" required class="input input-bordered input-sm"
                                    prop:value=e_title
                                    on:input=move |ev| set_e_title.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="oe_type"><span class="label-text">"Type"</span></label>
                                <select id="oe_type" class="select select-bordered select-sm"
                                    on:change=move |ev| set_e_type.set(event_target_value(&ev))>
                                    {OFFICIAL_EVENT_TYPES
                                        .into_iter()
                                        .map(|t| view! { <option value=t>{t}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-control">
                                <label class="label" for="oe_date"><span class="label-text">"Date"</span></label>
                                <input id="oe_date" type="date" required class="input input-bordered input-sm"
                                    prop:value=e_date
                                    on:input=move |ev| set_e_date.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="oe_time"><span class="label-text">"Time"</span></label>
                                <input id="oe_time" type="text" placeholder="10:00 AM - 4:00 PM"
                                    class="input input-bordered input-sm"
                                    prop:value=e_time
                                    on:input=move |ev| set_e_time.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="oe_location"><span class="label-text">"Location"</span></label>
                                <input id="oe_location" type="text" required class="input input-bordered input-sm"
                                    prop:value=e_location
                                    on:input=move |ev| set_e_location.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control md:col-span-3">
                                <label class="label" for="oe_desc"><span class="label-text">"Description"</span></label>
                                <textarea id="oe_desc" rows="2" class="textarea textarea-bordered"
                                    prop:value=e_description
                                    on:input=move |ev| set_e_description.set(event_target_value(&ev))></textarea>
                            </div>
                            <div class="md:col-span-3 flex justify-end">
                                <button type="submit" class="btn btn-primary btn-sm gap-1">
                                    <Plus attr:class="h-4 w-4" /> "Publish Event"
                                </button>
                            </div>
                        </form>

                        <Show when=move || !org_events().is_empty()>
                            <div class="divider my-2"></div>
                            <div class="space-y-2">
                                {move || org_events()
                                    .into_iter()
                                    .map(|event| view! {
                                        <div class="flex items-center justify-between p-3 rounded-lg bg-base-200">
                                            <p class="font-medium">{event.title.clone()}</p>
                                            <span class="text-sm text-base-content/70">{event.date.clone()}</span>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
