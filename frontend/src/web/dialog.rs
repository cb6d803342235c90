//! 原生对话框封装模块
//!
//! 阻断式提示与确认，直接走浏览器原生 API。

/// 弹出阻断式提示框
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// 弹出确认框
///
/// # 返回
/// 用户点击「确定」返回 `true`；取消或环境不可用返回 `false`
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
