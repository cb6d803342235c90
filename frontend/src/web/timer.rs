//! 定时器封装模块

use gloo_timers::future::TimeoutFuture;

/// 等待指定毫秒数
///
/// 没有取消机制：一旦开始等待，无论页面如何跳转都会在
/// 延迟结束后恢复执行。
pub async fn sleep(millis: u32) {
    TimeoutFuture::new(millis).await;
}
