//! 联系发布者的消息弹窗

use crate::components::icons::{Send, X};
use leptos::prelude::*;

/// 弹窗目标：收件人与锁定的主题
#[derive(Debug, Clone, PartialEq)]
pub struct ContactTarget {
    pub user_id: String,
    pub name: String,
    pub subject: String,
}

#[component]
pub fn ContactModal(
    /// 当前目标；`None` 时弹窗关闭
    #[prop(into)] target: Signal<Option<ContactTarget>>,
    /// 关闭回调
    #[prop(into)] on_close: Callback<()>,
    /// 发送回调，参数为消息正文
    #[prop(into)] on_send: Callback<String>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let (content, set_content) = signal(String::new());

    // 目标出现/消失时驱动原生 <dialog>
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if target.get().is_some() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = content.get_untracked();
        if body.trim().is_empty() {
            return;
        }
        on_send.run(body);
        set_content.set(String::new());
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class="modal-box">
                <div class="flex items-center justify-between mb-2">
                    <h3 class="font-bold text-lg">
                        {move || {
                            target
                                .get()
                                .map(|t| format!("Contact {}", t.name))
                                .unwrap_or_default()
                        }}
                    </h3>
                    <button class="btn btn-ghost btn-sm btn-circle" on:click=move |_| on_close.run(())>
                        <X attr:class="h-4 w-4" />
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Subject"</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered bg-base-200 w-full"
                            disabled
                            prop:value=move || target.get().map(|t| t.subject).unwrap_or_default()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="contact_body">
                            <span class="label-text">"Message"</span>
                        </label>
                        <textarea
                            id="contact_body"
                            required
                            rows="4"
                            class="textarea textarea-bordered w-full"
                            placeholder="Write your message here..."
                            prop:value=content
                            on:input=move |ev| set_content.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary gap-2">
                            <Send attr:class="h-4 w-4" /> "Send Message"
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
