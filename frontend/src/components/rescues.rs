//! 救助组织名录页面
//!
//! 组织目录 + 搜索/类别筛选 + 登记表单。一个用户可以登记
//! 多个组织（存储层不阻止），管理面板只认第一个。

use crate::auth::use_auth;
use crate::components::icons::{Heart, MapPin, Plus, Search};
use crate::components::toast::{Notification, Toast};
use crate::data::use_data;
use crate::web::clock;
use hfp_shared::{OrgCategory, Organization};
use leptos::prelude::*;

#[component]
pub fn RescuesPage() -> impl IntoView {
    let auth = use_auth();
    let data = use_data();

    let (search, set_search) = signal(String::new());
    let (selected_category, set_selected_category) = signal("All".to_string());
    let (show_form, set_show_form) = signal(false);
    let (notification, set_notification) = signal(Notification::None);

    // 表单字段
    let (f_name, set_f_name) = signal(String::new());
    let (f_category, set_f_category) = signal(OrgCategory::Rescue);
    let (f_specialty, set_f_specialty) = signal(String::new());
    let (f_email, set_f_email) = signal(String::new());
    let (f_phone, set_f_phone) = signal(String::new());
    let (f_website, set_f_website) = signal(String::new());
    let (f_address, set_f_address) = signal(String::new());
    let (f_donation_link, set_f_donation_link) = signal(String::new());
    let (f_wishlist, set_f_wishlist) = signal(String::new());
    let (f_description, set_f_description) = signal(String::new());

    let filtered = move || {
        let term = search.get().to_lowercase();
        let category = selected_category.get();
        data.organizations()
            .into_iter()
            .filter(|o| {
                term.is_empty()
                    || o.name.to_lowercase().contains(&term)
                    || o.specialty.to_lowercase().contains(&term)
            })
            .filter(|o| category == "All" || o.category.as_str() == category)
            .collect::<Vec<_>>()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = auth.current_user() else {
            return;
        };
        data.add_organization(Organization {
            id: clock::now().as_millis().to_string(),
            name: f_name.get_untracked(),
            category: f_category.get_untracked(),
            specialty: f_specialty.get_untracked(),
            phone: f_phone.get_untracked(),
            email: f_email.get_untracked(),
            website: f_website.get_untracked(),
            address: f_address.get_untracked(),
            donation_link: f_donation_link.get_untracked(),
            amazon_wishlist: f_wishlist.get_untracked(),
            description: f_description.get_untracked(),
            image: None,
            user_id: user.id,
        });
        set_notification.set(Some(("Organization registered.".to_string(), false)));
        set_show_form.set(false);
        set_f_name.set(String::new());
        set_f_category.set(OrgCategory::Rescue);
        set_f_specialty.set(String::new());
        set_f_email.set(String::new());
        set_f_phone.set(String::new());
        set_f_website.set(String::new());
        set_f_address.set(String::new());
        set_f_donation_link.set(String::new());
        set_f_wishlist.set(String::new());
        set_f_description.set(String::new());
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <Toast notification=notification set_notification=set_notification />

            <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-6 gap-4">
                <div>
                    <h1 class="text-3xl font-bold">"Rescues & Shelters"</h1>
                    <p class="text-base-content/70 mt-1">"Find a local organization to adopt from or support."</p>
                </div>
                <Show when=move || auth.current_user().is_some()>
                    <button class="btn btn-primary gap-2" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                        <Plus attr:class="h-5 w-5" /> "Register Organization"
                    </button>
                </Show>
            </div>

            <div class="flex flex-col md:flex-row gap-4 mb-6">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <Search attr:class="h-4 w-4 opacity-50" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search by name or specialty..."
                        prop:value=search
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </label>
                <select class="select select-bordered w-full md:w-48"
                    prop:value=selected_category
                    on:change=move |ev| set_selected_category.set(event_target_value(&ev))>
                    <option value="All">"All categories"</option>
                    <option value="Rescue">"Rescue"</option>
                    <option value="Shelter">"Shelter"</option>
                </select>
            </div>

            // 登记表单
            <Show when=move || show_form.get()>
                <div class="card bg-base-100 shadow-xl mb-8">
                    <form class="card-body space-y-2" on:submit=on_submit>
                        <h3 class="card-title">"Register your organization"</h3>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <div class="form-control">
                                <label class="label" for="org_name"><span class="label-text">"Name"</span></label>
                                <input id="org_name" type="text" required class="input input-bordered"
                                    prop:value=f_name
                                    on:input=move |ev| set_f_name.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="org_category"><span class="label-text">"Category"</span></label>
                                <select id="org_category" class="select select-bordered"
                                    prop:value=move || f_category.get().as_str()
                                    on:change=move |ev| {
                                        set_f_category.set(
                                            OrgCategory::from_str(&event_target_value(&ev)).unwrap_or_default(),
                                        )
                                    }>
                                    <option value="Rescue">"Rescue"</option>
                                    <option value="Shelter">"Shelter"</option>
                                </select>
                            </div>
                            <div class="form-control">
                                <label class="label" for="org_specialty"><span class="label-text">"Specialty"</span></label>
                                <input id="org_specialty" type="text" required placeholder="e.g. Senior dogs"
                                    class="input input-bordered"
                                    prop:value=f_specialty
                                    on:input=move |ev| set_f_specialty.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="org_email"><span class="label-text">"Contact email"</span></label>
                                <input id="org_email" type="email" required class="input input-bordered"
                                    prop:value=f_email
                                    on:input=move |ev| set_f_email.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="org_phone"><span class="label-text">"Phone"</span></label>
                                <input id="org_phone" type="tel" class="input input-bordered"
                                    prop:value=f_phone
                                    on:input=move |ev| set_f_phone.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="org_website"><span class="label-text">"Website"</span></label>
                                <input id="org_website" type="url" class="input input-bordered"
                                    prop:value=f_website
                                    on:input=move |ev| set_f_website.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="org_address"><span class="label-text">"Address"</span></label>
                                <input id="org_address" type="text" class="input input-bordered"
                                    prop:value=f_address
                                    on:input=move |ev| set_f_address.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="org_donate"><span class="label-text">"Donation link"</span></label>
                                <input id="org_donate" type="url" class="input input-bordered"
                                    prop:value=f_donation_link
                                    on:input=move |ev| set_f_donation_link.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="org_wishlist"><span class="label-text">"Amazon wishlist"</span></label>
                                <input id="org_wishlist" type="url" class="input input-bordered"
                                    prop:value=f_wishlist
                                    on:input=move |ev| set_f_wishlist.set(event_target_value(&ev)) />
                            </div>
                        </div>
                        <div class="form-control">
                            <label class="label" for="org_desc"><span class="label-text">"Description"</span></label>
                            <textarea id="org_desc" rows="3" class="textarea textarea-bordered"
                                prop:value=f_description
                                on:input=move |ev| set_f_description.set(event_target_value(&ev))></textarea>
                        </div>
                        <div class="card-actions justify-end mt-2">
                            <button type="button" class="btn btn-ghost" on:click=move |_| set_show_form.set(false)>"Cancel"</button>
                            <button type="submit" class="btn btn-primary">"Register"</button>
                        </div>
                    </form>
                </div>
            </Show>

            // 组织卡片
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {move || filtered()
                    .into_iter()
                    .map(|org| {
                        let donation_link = Some(org.donation_link.clone()).filter(|l| !l.is_empty());
                        let wishlist = Some(org.amazon_wishlist.clone()).filter(|l| !l.is_empty());
                        let website = Some(org.website.clone()).filter(|l| !l.is_empty());
                        let specialty = org.specialty.clone();
                        let has_specialty = !specialty.is_empty();
                        let address = org.address.clone();
                        let has_address = !address.is_empty();
                        view! {
                            <div class="card bg-base-100 shadow-md">
                                <div class="card-body">
                                    <div class="flex items-start justify-between">
                                        <h2 class="card-title">{org.name.clone()}</h2>
                                        <span class="badge badge-outline">{org.category.as_str()}</span>
                                    </div>
                                    <Show when=move || has_specialty>
                                        <span class="badge badge-ghost badge-sm w-fit">{specialty.clone()}</span>
                                    </Show>
                                    <Show when=move || has_address>
                                        <div class="flex items-center gap-2 text-sm text-base-content/70">
                                            <MapPin attr:class="h-4 w-4" /> {address.clone()}
                                        </div>
                                    </Show>
                                    <p class="text-sm line-clamp-3">{org.description.clone()}</p>
                                    <div class="card-actions justify-end items-center gap-3 mt-2">
                                        {website.map(|link| view! {
                                            <a class="link text-sm" href=link target="_blank" rel="noreferrer">"Website"</a>
                                        })}
                                        {wishlist.map(|link| view! {
                                            <a class="link link-secondary text-sm" href=link target="_blank" rel="noreferrer">"Wishlist"</a>
                                        })}
                                        {donation_link.map(|link| view! {
                                            <a class="btn btn-primary btn-sm gap-2" href=link target="_blank" rel="noreferrer">
                                                <Heart attr:class="h-4 w-4" /> "Donate"
                                            </a>
                                        })}
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
