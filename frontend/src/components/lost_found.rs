//! 走失/寻获启事页面
//!
//! 两个标签页（Lost / Found）+ 搜索 + 发布表单 + 联系发布者弹窗。
//! 所有者可以在卡片上直接切换「已团聚」状态。

use crate::auth::use_auth;
use crate::components::contact_modal::{ContactModal, ContactTarget};
use crate::components::icons::{Calendar, CheckCircle, Mail, MapPin, Plus, Search};
use crate::components::toast::{Notification, Toast};
use crate::data::use_data;
use crate::web::clock;
use hfp_shared::{Answer, Gender, MessageDraft, Post, PostKind, PostStatus};
use leptos::prelude::*;

#[component]
pub fn LostFoundPage() -> impl IntoView {
    let auth = use_auth();
    let data = use_data();

    let (active_kind, set_active_kind) = signal(PostKind::Lost);
    let (search, set_search) = signal(String::new());
    let (show_form, set_show_form) = signal(false);
    let (notification, set_notification) = signal(Notification::None);
    let (contact_target, set_contact_target) = signal(Option::<ContactTarget>::None);

    // 表单字段
    let (f_name, set_f_name) = signal(String::new());
    let (f_breed, set_f_breed) = signal(String::new());
    let (f_gender, set_f_gender) = signal(Gender::Unknown);
    let (f_microchipped, set_f_microchipped) = signal(Answer::Unknown);
    let (f_collar, set_f_collar) = signal(Answer::Unknown);
    let (f_location, set_f_location) = signal(String::new());
    let (f_date, set_f_date) = signal(String::new());
    let (f_time, set_f_time) = signal(String::new());
    let (f_description, set_f_description) = signal(String::new());
    let (f_email, set_f_email) = signal(String::new());
    let (f_phone, set_f_phone) = signal(String::new());

    let reset_form = move || {
        set_f_name.set(String::new());
        set_f_breed.set(String::new());
        set_f_gender.set(Gender::Unknown);
        set_f_microchipped.set(Answer::Unknown);
        set_f_collar.set(Answer::Unknown);
        set_f_location.set(String::new());
        set_f_date.set(String::new());
        set_f_time.set(String::new());
        set_f_description.set(String::new());
        set_f_email.set(String::new());
        set_f_phone.set(String::new());
    };

    let filtered = move || {
        let term = search.get().to_lowercase();
        let kind = active_kind.get();
        data.posts()
            .into_iter()
            .filter(|p| p.kind == kind)
            .filter(|p| {
                term.is_empty()
                    || p.name.to_lowercase().contains(&term)
                    || p.breed.to_lowercase().contains(&term)
                    || p.location.to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = auth.current_user() else {
            set_notification.set(Some(("Please log in to report a pet.".to_string(), true)));
            return;
        };

        let kind = active_kind.get_untracked();
        let post = Post {
            id: clock::now().as_id(),
            kind,
            status: kind.into(),
            name: f_name.get_untracked(),
            breed: f_breed.get_untracked(),
            gender: f_gender.get_untracked(),
            microchipped: f_microchipped.get_untracked(),
            collar: f_collar.get_untracked(),
            location: f_location.get_untracked(),
            date: f_date.get_untracked(),
            time: f_time.get_untracked(),
            description: f_description.get_untracked(),
            distinctive_markings: String::new(),
            image: None,
            contact_email: f_email.get_untracked(),
            contact_phone: f_phone.get_untracked(),
            user_id: user.id,
        };
        data.add_post(post);
        set_notification.set(Some(("Report published.".to_string(), false)));
        set_show_form.set(false);
        reset_form();
    };

    // 联系发布者
    let on_send = move |content: String| {
        if let (Some(user), Some(target)) = (auth.current_user(), contact_target.get_untracked()) {
            data.send_message(MessageDraft {
                from_user_id: user.id,
                to_user_id: target.user_id,
                sender_name: user.name,
                subject: target.subject,
                content,
            });
            set_notification.set(Some(("Message sent.".to_string(), false)));
        }
        set_contact_target.set(None);
    };

    let tab_class = move |kind: PostKind| {
        if active_kind.get() == kind {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <Toast notification=notification set_notification=set_notification />

            <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-6 gap-4">
                <div>
                    <h1 class="text-3xl font-bold">"Lost & Found"</h1>
                    <p class="text-base-content/70 mt-1">"Help reunite pets with their families."</p>
                </div>
                <Show when=move || auth.current_user().is_some()>
                    <button class="btn btn-primary gap-2" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                        <Plus attr:class="h-5 w-5" />
                        {move || match active_kind.get() {
                            PostKind::Lost => "Report Lost Pet",
                            PostKind::Found => "Report Found Pet",
                        }}
                    </button>
                </Show>
            </div>

            <div class="flex flex-col md:flex-row gap-4 mb-6">
                <div role="tablist" class="tabs tabs-boxed w-fit">
                    <a role="tab" class=move || tab_class(PostKind::Lost)
                        on:click=move |_| set_active_kind.set(PostKind::Lost)>"Lost Pets"</a>
                    <a role="tab" class=move || tab_class(PostKind::Found)
                        on:click=move |_| set_active_kind.set(PostKind::Found)>"Found Pets"</a>
                </div>
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <Search attr:class="h-4 w-4 opacity-50" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search by name, breed or location..."
                        prop:value=search
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </label>
            </div>

            // 发布表单
            <Show when=move || show_form.get()>
                <div class="card bg-base-100 shadow-xl mb-8">
                    <form class="card-body space-y-2" on:submit=on_submit>
                        <h3 class="card-title">
                            {move || match active_kind.get() {
                                PostKind::Lost => "Report a lost pet",
                                PostKind::Found => "Report a found pet",
                            }}
                        </h3>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <div class="form-control">
                                <label class="label" for="lf_name"><span class="label-text">"Pet name"</span></label>
                                <input id="lf_name" type="text" required class="input input-bordered"
                                    prop:value=f_name
                                    on:input=move |ev| set_f_name.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="lf_breed"><span class="label-text">"Breed"</span></label>
                                <input id="lf_breed" type="text" required class="input input-bordered"
                                    prop:value=f_breed
                                    on:input=move |ev| set_f_breed.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="lf_gender"><span class="label-text">"Gender"</span></label>
                                <select id="lf_gender" class="select select-bordered"
                                    prop:value=move || f_gender.get().as_str()
                                    on:change=move |ev| {
                                        set_f_gender.set(Gender::from_str(&event_target_value(&ev)).unwrap_or_default())
                                    }>
                                    <option value="unknown">"Unknown"</option>
                                    <option value="male">"Male"</option>
                                    <option value="female">"Female"</option>
                                </select>
                            </div>
                            <div class="form-control">
                                <label class="label" for="lf_chip"><span class="label-text">"Microchipped?"</span></label>
                                <select id="lf_chip" class="select select-bordered"
                                    prop:value=move || f_microchipped.get().as_str()
                                    on:change=move |ev| {
                                        set_f_microchipped.set(Answer::from_str(&event_target_value(&ev)).unwrap_or_default())
                                    }>
                                    <option value="unknown">"Unknown"</option>
                                    <option value="yes">"Yes"</option>
                                    <option value="no">"No"</option>
                                </select>
                            </div>
                            <div class="form-control">
                                <label class="label" for="lf_collar"><span class="label-text">"Wearing a collar?"</span></label>
                                <select id="lf_collar" class="select select-bordered"
                                    prop:value=move || f_collar.get().as_str()
                                    on:change=move |ev| {
                                        set_f_collar.set(Answer::from_str(&event_target_value(&ev)).unwrap_or_default())
                                    }>
                                    <option value="unknown">"Unknown"</option>
                                    <option value="yes">"Yes"</option>
                                    <option value="no">"No"</option>
                                </select>
                            </div>
                            <div class="form-control">
                                <label class="label" for="lf_location"><span class="label-text">"Last seen location"</span></label>
                                <input id="lf_location" type="text" required class="input input-bordered"
                                    prop:value=f_location
                                    on:input=move |ev| set_f_location.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="lf_date"><span class="label-text">"Date"</span></label>
                                <input id="lf_date" type="date" required class="input input-bordered"
                                    prop:value=f_date
                                    on:input=move |ev| set_f_date.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="lf_time"><span class="label-text">"Time"</span></label>
                                <input id="lf_time" type="time" class="input input-bordered"
                                    prop:value=f_time
                                    on:input=move |ev| set_f_time.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="lf_email"><span class="label-text">"Contact email"</span></label>
                                <input id="lf_email" type="email" required class="input input-bordered"
                                    prop:value=f_email
                                    on:input=move |ev| set_f_email.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="lf_phone"><span class="label-text">"Contact phone"</span></label>
                                <input id="lf_phone" type="tel" class="input input-bordered"
                                    prop:value=f_phone
                                    on:input=move |ev| set_f_phone.set(event_target_value(&ev)) />
                            </div>
                        </div>
                        <div class="form-control">
                            <label class="label" for="lf_desc"><span class="label-text">"Description"</span></label>
                            <textarea id="lf_desc" rows="3" class="textarea textarea-bordered"
                                placeholder="e.g. Has a red collar, needs insulin daily, very shy..."
                                prop:value=f_description
                                on:input=move |ev| set_f_description.set(event_target_value(&ev))></textarea>
                        </div>
                        <div class="card-actions justify-end mt-2">
                            <button type="button" class="btn btn-ghost" on:click=move |_| set_show_form.set(false)>"Cancel"</button>
                            <button type="submit" class="btn btn-primary">"Publish Report"</button>
                        </div>
                    </form>
                </div>
            </Show>

            // 启事卡片
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {move || {
                    let current_user = auth.current_user();
                    filtered()
                        .into_iter()
                        .map(|post| {
                            let post_id = post.id;
                            let is_owner = current_user
                                .as_ref()
                                .map(|u| u.id == post.user_id)
                                .unwrap_or(false);
                            let logged_in = current_user.is_some();
                            let owner_id = post.user_id.clone();
                            let pet_name = post.name.clone();
                            let description = post.description.clone();
                            let has_description = !description.is_empty();
                            let (badge_class, badge_label) = match post.status {
                                PostStatus::Reunited => ("badge badge-success gap-1", "Reunited"),
                                PostStatus::Lost => ("badge badge-error gap-1", "Lost"),
                                PostStatus::Found => ("badge badge-info gap-1", "Found"),
                            };
                            view! {
                                <div class="card bg-base-100 shadow-md">
                                    <div class="card-body">
                                        <div class="flex items-start justify-between">
                                            <h2 class="card-title">{post.name.clone()}</h2>
                                            <span class=badge_class>{badge_label}</span>
                                        </div>
                                        <p class="text-sm font-medium text-base-content/70">{post.breed.clone()}</p>
                                        <div class="flex items-center gap-2 text-sm text-base-content/70">
                                            <MapPin attr:class="h-4 w-4" /> {post.location.clone()}
                                        </div>
                                        <div class="flex items-center gap-2 text-sm text-base-content/70">
                                            <Calendar attr:class="h-4 w-4" /> {post.date.clone()}
                                        </div>
                                        <Show when=move || has_description>
                                            <p class="text-sm line-clamp-3">{description.clone()}</p>
                                        </Show>
                                        <div class="card-actions justify-end mt-2">
                                            {if is_owner {
                                                let label = if post.is_reunited() { "Reopen Report" } else { "Mark as Reunited" };
                                                view! {
                                                    <button class="btn btn-success btn-sm gap-2"
                                                        on:click=move |_| data.toggle_post_status(post_id)>
                                                        <CheckCircle attr:class="h-4 w-4" /> {label}
                                                    </button>
                                                }.into_any()
                                            } else if logged_in {
                                                view! {
                                                    <button class="btn btn-primary btn-sm gap-2"
                                                        on:click=move |_| {
                                                            set_contact_target.set(Some(ContactTarget {
                                                                user_id: owner_id.clone(),
                                                                name: pet_name.clone(),
                                                                subject: format!("Regarding: {pet_name}"),
                                                            }))
                                                        }>
                                                        <Mail attr:class="h-4 w-4" /> "Contact"
                                                    </button>
                                                }.into_any()
                                            } else {
                                                view! {
                                                    <span class="text-xs text-base-content/50">"Log in to contact the poster"</span>
                                                }.into_any()
                                            }}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <ContactModal
                target=contact_target
                on_close=move |_| set_contact_target.set(None)
                on_send=on_send
            />
        </div>
    }
}
