//! 社区活动页面
//!
//! 「官方活动」与「聚会」两个标签页，分类由活动类型在固定
//! 清单中的归属决定。聚会支持报名/退出（幂等切换）。

use crate::auth::use_auth;
use crate::components::icons::{Calendar, Clock, MapPin, Plus, Users};
use crate::components::toast::{Notification, Toast};
use crate::data::use_data;
use crate::web::clock;
use hfp_shared::{Event, MEETUP_TYPES, OFFICIAL_EVENT_TYPES};
use leptos::prelude::*;

#[component]
pub fn EventsPage() -> impl IntoView {
    let auth = use_auth();
    let data = use_data();

    // false = 官方活动, true = 聚会
    let (meetups_tab, set_meetups_tab) = signal(false);
    let (selected_type, set_selected_type) = signal("All".to_string());
    let (show_form, set_show_form) = signal(false);
    let (notification, set_notification) = signal(Notification::None);

    // 表单字段
    let (f_title, set_f_title) = signal(String::new());
    let (f_date, set_f_date) = signal(String::new());
    let (f_time, set_f_time) = signal(String::new());
    let (f_location, set_f_location) = signal(String::new());
    let (f_type, set_f_type) = signal(String::new());
    let (f_description, set_f_description) = signal(String::new());
    let (f_email, set_f_email) = signal(String::new());

    // 当前标签页可选的类型清单
    let type_options = move || {
        if meetups_tab.get() {
            MEETUP_TYPES.to_vec()
        } else {
            OFFICIAL_EVENT_TYPES.to_vec()
        }
    };

    let default_type = move || {
        if meetups_tab.get_untracked() {
            MEETUP_TYPES[0]
        } else {
            OFFICIAL_EVENT_TYPES[0]
        }
    };

    let filtered = move || {
        let want_meetups = meetups_tab.get();
        let wanted_type = selected_type.get();
        let mut events: Vec<Event> = data
            .events()
            .into_iter()
            .filter(|e| e.is_meetup() == want_meetups)
            .filter(|e| wanted_type == "All" || e.event_type == wanted_type)
            .collect();
        // 按日期升序（ISO 日期串可按字典序比较）
        events.sort_by(|a, b| a.date.cmp(&b.date));
        events
    };

    let switch_tab = move |meetups: bool| {
        set_meetups_tab.set(meetups);
        set_selected_type.set("All".to_string());
        set_show_form.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = auth.current_user() else {
            return;
        };
        let event_type = {
            let chosen = f_type.get_untracked();
            if chosen.is_empty() {
                default_type().to_string()
            } else {
                chosen
            }
        };
        data.add_event(Event {
            id: clock::now().as_id(),
            title: f_title.get_untracked(),
            date: f_date.get_untracked(),
            time: f_time.get_untracked(),
            location: f_location.get_untracked(),
            event_type,
            description: f_description.get_untracked(),
            contact_email: f_email.get_untracked(),
            image: None,
            user_id: user.id,
            org_id: None,
            attendees: Vec::new(),
        });
        set_notification.set(Some(("Event published.".to_string(), false)));
        set_show_form.set(false);
        set_f_title.set(String::new());
        set_f_date.set(String::new());
        set_f_time.set(String::new());
        set_f_location.set(String::new());
        set_f_type.set(String::new());
        set_f_description.set(String::new());
        set_f_email.set(String::new());
    };

    let handle_attendance = move |event_id: u64| match auth.current_user() {
        None => {
            set_notification.set(Some(("Please log in to join a meetup.".to_string(), true)));
        }
        Some(user) => data.toggle_attendance(event_id, &user.id),
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <Toast notification=notification set_notification=set_notification />

            <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-6 gap-4">
                <div>
                    <h1 class="text-3xl font-bold">"Community Hub"</h1>
                    <p class="text-base-content/70 mt-1">"Connect with the local pet community."</p>
                </div>
                <div role="tablist" class="tabs tabs-boxed">
                    <a role="tab" class=move || if meetups_tab.get() { "tab" } else { "tab tab-active" }
                        on:click=move |_| switch_tab(false)>"Official Events"</a>
                    <a role="tab" class=move || if meetups_tab.get() { "tab tab-active" } else { "tab" }
                        on:click=move |_| switch_tab(true)>"Meetups"</a>
                </div>
                <Show when=move || auth.current_user().is_some()>
                    <button class="btn btn-primary gap-2" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                        <Plus attr:class="h-5 w-5" />
                        {move || if meetups_tab.get() { "Post Meetup" } else { "Post Event" }}
                    </button>
                </Show>
            </div>

            // 类型筛选
            <div class="mb-6 w-full md:w-64">
                <select class="select select-bordered w-full"
                    prop:value=selected_type
                    on:change=move |ev| set_selected_type.set(event_target_value(&ev))>
                    <option value="All">"All types"</option>
                    {move || type_options()
                        .into_iter()
                        .map(|t| view! { <option value=t>{t}</option> })
                        .collect_view()}
                </select>
            </div>

            // 发布表单
            <Show when=move || show_form.get()>
                <div class="card bg-base-100 shadow-xl mb-8">
                    <form class="card-body space-y-2" on:submit=on_submit>
                        <h3 class="card-title">
                            {move || if meetups_tab.get() { "Post a meetup" } else { "Post an event" }}
                        </h3>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <div class="form-control md:col-span-2">
                                <label class="label" for="ev_title"><span class="label-text">"Title"</span></label>
                                <input id="ev_title" type="text" required class="input input-bordered"
                                    prop:value=f_title
                                    on:input=move |ev| set_f_title.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="ev_type"><span class="label-text">"Type"</span></label>
                                <select id="ev_type" class="select select-bordered"
                                    on:change=move |ev| set_f_type.set(event_target_value(&ev))>
                                    {move || type_options()
                                        .into_iter()
                                        .map(|t| view! { <option value=t>{t}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-control">
                                <label class="label" for="ev_date"><span class="label-text">"Date"</span></label>
                                <input id="ev_date" type="date" required class="input input-bordered"
                                    prop:value=f_date
                                    on:input=move |ev| set_f_date.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="ev_time"><span class="label-text">"Time"</span></label>
                                <input id="ev_time" type="text" placeholder="10:00 AM - 4:00 PM" class="input input-bordered"
                                    prop:value=f_time
                                    on:input=move |ev| set_f_time.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="ev_location"><span class="label-text">"Location"</span></label>
                                <input id="ev_location" type="text" required class="input input-bordered"
                                    prop:value=f_location
                                    on:input=move |ev| set_f_location.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control md:col-span-2">
                                <label class="label" for="ev_email"><span class="label-text">"Contact email"</span></label>
                                <input id="ev_email" type="email" class="input input-bordered"
                                    prop:value=f_email
                                    on:input=move |ev| set_f_email.set(event_target_value(&ev)) />
                            </div>
                        </div>
                        <div class="form-control">
                            <label class="label" for="ev_desc"><span class="label-text">"Description"</span></label>
                            <textarea id="ev_desc" rows="3" class="textarea textarea-bordered"
                                prop:value=f_description
                                on:input=move |ev| set_f_description.set(event_target_value(&ev))></textarea>
                        </div>
                        <div class="card-actions justify-end mt-2">
                            <button type="button" class="btn btn-ghost" on:click=move |_| set_show_form.set(false)>"Cancel"</button>
                            <button type="submit" class="btn btn-primary">"Publish"</button>
                        </div>
                    </form>
                </div>
            </Show>

            // 活动卡片
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {move || {
                    let current_user = auth.current_user();
                    filtered()
                        .into_iter()
                        .map(|event| {
                            let event_id = event.id;
                            let is_meetup = event.is_meetup();
                            let attending = current_user
                                .as_ref()
                                .map(|u| event.is_attending(&u.id))
                                .unwrap_or(false);
                            let attendee_count = event.attendees.len();
                            let type_badge = if is_meetup {
                                "badge badge-secondary"
                            } else {
                                "badge badge-primary"
                            };
                            view! {
                                <div class="card bg-base-100 shadow-md">
                                    <div class="card-body">
                                        <div class="flex items-start justify-between">
                                            <h2 class="card-title">{event.title.clone()}</h2>
                                            <span class=type_badge>
                                                {event.event_type.clone()}
                                            </span>
                                        </div>
                                        <div class="flex items-center gap-2 text-sm text-base-content/70">
                                            <Calendar attr:class="h-4 w-4" /> {event.date.clone()}
                                        </div>
                                        <div class="flex items-center gap-2 text-sm text-base-content/70">
                                            <Clock attr:class="h-4 w-4" /> {event.time.clone()}
                                        </div>
                                        <div class="flex items-center gap-2 text-sm text-base-content/70">
                                            <MapPin attr:class="h-4 w-4" /> {event.location.clone()}
                                        </div>
                                        <p class="text-sm">{event.description.clone()}</p>
                                        <Show when=move || is_meetup>
                                            <div class="card-actions justify-between items-center mt-2">
                                                <span class="flex items-center gap-2 text-sm text-base-content/70">
                                                    <Users attr:class="h-4 w-4" />
                                                    {format!("{attendee_count} attending")}
                                                </span>
                                                <button
                                                    class=move || if attending { "btn btn-outline btn-sm" } else { "btn btn-secondary btn-sm" }
                                                    on:click=move |_| handle_attendance(event_id)>
                                                    {if attending { "Leave Meetup" } else { "Join Meetup" }}
                                                </button>
                                            </div>
                                        </Show>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
