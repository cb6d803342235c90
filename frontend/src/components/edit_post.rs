//! 编辑启事页面
//!
//! 所有权守卫：非所有者访问会收到阻断提示并被重定向离开。
//! 保存时以部分更新（浅合并）写回，类别与所有者不可更改。

use crate::auth::use_auth;
use crate::components::icons::Pencil;
use crate::data::use_data;
use crate::web::dialog;
use crate::web::router::use_router;
use hfp_shared::{Answer, Gender, PostPatch};
use leptos::prelude::*;

#[component]
pub fn EditPostPage(id: u64) -> impl IntoView {
    let auth = use_auth();
    let data = use_data();
    let router = use_router();

    // 初始快照（非所有者拿到的值不会被渲染，守卫会先跳走）
    let initial = data.find_post(id);

    let is_owner = move || {
        matches!(
            (data.find_post(id), auth.current_user()),
            (Some(post), Some(user)) if post.user_id == user.id
        )
    };

    // 所有权守卫：阻断提示 + 重定向
    Effect::new(move |_| {
        match (data.find_post(id), auth.current_user()) {
            (Some(post), Some(user)) if post.user_id == user.id => {}
            (Some(_), Some(_)) => {
                dialog::alert("You are not authorized to edit this post.");
                router.navigate("/profile");
            }
            (None, Some(_)) => router.navigate("/profile"),
            (_, None) => router.navigate("/login"),
        }
    });

    // 表单字段（以现有值预填）
    let (f_name, set_f_name) =
        signal(initial.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let (f_breed, set_f_breed) =
        signal(initial.as_ref().map(|p| p.breed.clone()).unwrap_or_default());
    let (f_gender, set_f_gender) =
        signal(initial.as_ref().map(|p| p.gender).unwrap_or_default());
    let (f_microchipped, set_f_microchipped) =
        signal(initial.as_ref().map(|p| p.microchipped).unwrap_or_default());
    let (f_collar, set_f_collar) =
        signal(initial.as_ref().map(|p| p.collar).unwrap_or_default());
    let (f_location, set_f_location) =
        signal(initial.as_ref().map(|p| p.location.clone()).unwrap_or_default());
    let (f_date, set_f_date) =
        signal(initial.as_ref().map(|p| p.date.clone()).unwrap_or_default());
    let (f_time, set_f_time) =
        signal(initial.as_ref().map(|p| p.time.clone()).unwrap_or_default());
    let (f_description, set_f_description) =
        signal(initial.as_ref().map(|p| p.description.clone()).unwrap_or_default());
    let (f_markings, set_f_markings) = signal(
        initial
            .as_ref()
            .map(|p| p.distinctive_markings.clone())
            .unwrap_or_default(),
    );
    let (f_email, set_f_email) = signal(
        initial
            .as_ref()
            .map(|p| p.contact_email.clone())
            .unwrap_or_default(),
    );
    let (f_phone, set_f_phone) = signal(
        initial
            .as_ref()
            .map(|p| p.contact_phone.clone())
            .unwrap_or_default(),
    );

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        data.update_post(
            id,
            PostPatch {
                name: Some(f_name.get_untracked()),
                breed: Some(f_breed.get_untracked()),
                gender: Some(f_gender.get_untracked()),
                microchipped: Some(f_microchipped.get_untracked()),
                collar: Some(f_collar.get_untracked()),
                location: Some(f_location.get_untracked()),
                date: Some(f_date.get_untracked()),
                time: Some(f_time.get_untracked()),
                description: Some(f_description.get_untracked()),
                distinctive_markings: Some(f_markings.get_untracked()),
                image: None,
                contact_email: Some(f_email.get_untracked()),
                contact_phone: Some(f_phone.get_untracked()),
            },
        );
        router.navigate("/profile");
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 py-8">
            <Show when=is_owner>
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body space-y-2" on:submit=on_submit>
                        <h1 class="card-title text-2xl gap-2">
                            <Pencil attr:class="h-6 w-6" /> "Edit Report"
                        </h1>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="ep_name"><span class="label-text">"Pet name"</span></label>
                                <input id="ep_name" type="text" required class="input input-bordered"
                                    prop:value=f_name
                                    on:input=move |ev| set_f_name.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="ep_breed"><span class="label-text">"Breed"</span></label>
                                <input id="ep_breed" type="text" class="input input-bordered"
                                    prop:value=f_breed
                                    on:input=move |ev| set_f_breed.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="ep_gender"><span class="label-text">"Gender"</span></label>
                                <select id="ep_gender" class="select select-bordered"
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
                                <label class="label" for="ep_chip"><span class="label-text">"Microchipped?"</span></label>
                                <select id="ep_chip" class="select select-bordered"
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
                                <label class="label" for="ep_collar"><span class="label-text">"Wearing a collar?"</span></label>
                                <select id="ep_collar" class="select select-bordered"
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
                                <label class="label" for="ep_location"><span class="label-text">"Location"</span></label>
                                <input id="ep_location" type="text" required class="input input-bordered"
                                    prop:value=f_location
                                    on:input=move |ev| set_f_location.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="ep_date"><span class="label-text">"Date"</span></label>
                                <input id="ep_date" type="date" class="input input-bordered"
                                    prop:value=f_date
                                    on:input=move |ev| set_f_date.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="ep_time"><span class="label-text">"Time"</span></label>
                                <input id="ep_time" type="time" class="input input-bordered"
                                    prop:value=f_time
                                    on:input=move |ev| set_f_time.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="ep_email"><span class="label-text">"Contact email"</span></label>
                                <input id="ep_email" type="email" class="input input-bordered"
                                    prop:value=f_email
                                    on:input=move |ev| set_f_email.set(event_target_value(&ev)) />
                            </div>
                            <div class="form-control">
                                <label class="label" for="ep_phone"><span class="label-text">"Contact phone"</span></label>
                                <input id="ep_phone" type="tel" class="input input-bordered"
                                    prop:value=f_phone
                                    on:input=move |ev| set_f_phone.set(event_target_value(&ev)) />
                            </div>
                        </div>
                        <div class="form-control">
                            <label class="label" for="ep_markings"><span class="label-text">"Distinctive markings"</span></label>
                            <input id="ep_markings" type="text" class="input input-bordered"
                                placeholder="e.g. White patch on chest"
                                prop:value=f_markings
                                on:input=move |ev| set_f_markings.set(event_target_value(&ev)) />
                        </div>
                        <div class="form-control">
                            <label class="label" for="ep_desc"><span class="label-text">"Description"</span></label>
                            <textarea id="ep_desc" rows="3" class="textarea textarea-bordered"
                                prop:value=f_description
                                on:input=move |ev| set_f_description.set(event_target_value(&ev))></textarea>
                        </div>
                        <div class="card-actions justify-end mt-2">
                            <button type="button" class="btn btn-ghost"
                                on:click=move |_| router.navigate("/profile")>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary">"Save Changes"</button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
