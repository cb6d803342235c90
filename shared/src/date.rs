//! 时间戳类型
//!
//! `Timestamp` 是可序列化的毫秒时间戳，用于实体 id 生成与消息日期。
//! 壁钟本身不在本 crate 中：调用方（前端）负责提供当前时间，
//! 这也是整个数据层可以在原生环境测试的前提。

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 转换为实体 id（毫秒数的无符号表示）
    #[inline]
    pub const fn as_id(&self) -> u64 {
        self.0 as u64
    }

    /// 格式化为 RFC 3339 / ISO 8601 字符串（毫秒精度，UTC）
    ///
    /// 与 JavaScript `Date.prototype.toISOString()` 的输出格式一致，
    /// 存量数据按该格式写入。
    pub fn to_rfc3339(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.0)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_default()
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_matches_js_iso_format() {
        // 2023-10-26T10:30:00.000Z
        let ts = Timestamp::new(1_698_316_200_000);
        assert_eq!(ts.to_rfc3339(), "2023-10-26T10:30:00.000Z");
    }

    #[test]
    fn test_serde_transparent() {
        let ts = Timestamp::new(1700000000123);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1700000000123");
        let back: Timestamp = serde_json::from_str("1700000000123").unwrap();
        assert_eq!(back, ts);
    }
}
