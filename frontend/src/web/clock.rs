//! 壁钟模块
//!
//! 数据层只接受显式传入的 `Timestamp`，当前时间统一从这里取。

use hfp_shared::Timestamp;

/// 当前时间的毫秒时间戳
#[inline]
pub fn now() -> Timestamp {
    Timestamp::new(js_sys::Date::now() as i64)
}
