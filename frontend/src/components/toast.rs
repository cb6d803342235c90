//! 通知提示组件
//!
//! 页面级的轻量通知：`(文案, 是否出错)` 信号有值时浮出，
//! 3 秒后自动清除。

use leptos::prelude::*;
use std::time::Duration;

/// 页面通知信号的别名，方便各页面统一声明
pub type Notification = Option<(String, bool)>;

#[component]
pub fn Toast(
    notification: ReadSignal<Notification>,
    set_notification: WriteSignal<Notification>,
) -> impl IntoView {
    // 3秒后清除通知
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || notification.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_err = notification.get().map(|(_, e)| e).unwrap_or(false);
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
