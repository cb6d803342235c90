//! 社区活动 (Community Events)
//!
//! 活动分为「官方活动」与「自发聚会」两类，分类只取决于
//! 活动类型字符串在两张固定清单中的归属，不是独立的模式字段。
//! 类型保持为字符串而非枚举：历史数据里出现过已退役的类型名，
//! 它们必须仍能解码。

use serde::{Deserialize, Serialize};

// =========================================================
// 活动类型清单
// =========================================================

/// 官方活动类型（组织主办）
pub const OFFICIAL_EVENT_TYPES: [&str; 4] = [
    "Adoption Drive",
    "Vaccination",
    "Fundraiser",
    "Training Workshop",
];

/// 自发聚会类型（社区成员发起，支持报名参加）
pub const MEETUP_TYPES: [&str; 2] = ["Social Meetup", "Walking Group"];

/// 判定一个活动类型是否属于聚会类
pub fn is_meetup(event_type: &str) -> bool {
    MEETUP_TYPES.contains(&event_type)
}

/// 社区活动
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub image: Option<String>,
    /// 发布者
    pub user_id: String,
    /// 从组织面板发布时关联的组织
    #[serde(default)]
    pub org_id: Option<String>,
    /// 报名者（仅聚会类使用），按加入顺序保存
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl Event {
    pub fn is_meetup(&self) -> bool {
        is_meetup(&self.event_type)
    }

    /// 报名切换：已报名则退出，未报名则加到队尾
    pub fn toggle_attendance(&mut self, user_id: &str) {
        if let Some(pos) = self.attendees.iter().position(|a| a == user_id) {
            self.attendees.remove(pos);
        } else {
            self.attendees.push(user_id.to_string());
        }
    }

    pub fn is_attending(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|a| a == user_id)
    }

    /// 浅合并部分更新
    pub fn apply(&mut self, patch: EventPatch) {
        let EventPatch {
            title,
            date,
            time,
            location,
            event_type,
            description,
            contact_email,
            image,
        } = patch;
        if let Some(v) = title {
            self.title = v;
        }
        if let Some(v) = date {
            self.date = v;
        }
        if let Some(v) = time {
            self.time = v;
        }
        if let Some(v) = location {
            self.location = v;
        }
        if let Some(v) = event_type {
            self.event_type = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = contact_email {
            self.contact_email = v;
        }
        if let Some(v) = image {
            self.image = Some(v);
        }
    }
}

/// 活动的部分更新载荷
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub event_type: Option<String>,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meetup() -> Event {
        Event {
            id: 3,
            title: "Sunday Morning Pack Walk".to_string(),
            date: "2023-11-12".to_string(),
            time: "9:00 AM - 10:30 AM".to_string(),
            location: "Riverside Trail Head".to_string(),
            event_type: "Walking Group".to_string(),
            description: String::new(),
            contact_email: "walker@example.com".to_string(),
            image: None,
            user_id: "123".to_string(),
            org_id: None,
            attendees: Vec::new(),
        }
    }

    #[test]
    fn test_type_lists_are_disjoint() {
        for t in OFFICIAL_EVENT_TYPES {
            assert!(!MEETUP_TYPES.contains(&t));
        }
    }

    #[test]
    fn test_classification_by_membership() {
        assert!(is_meetup("Walking Group"));
        assert!(is_meetup("Social Meetup"));
        assert!(!is_meetup("Adoption Drive"));
        // 清单之外的类型不归为聚会
        assert!(!is_meetup("Costume Parade"));
    }

    #[test]
    fn test_toggle_attendance_adds_once_then_removes() {
        let mut event = meetup();
        event.toggle_attendance("u1");
        assert_eq!(event.attendees, vec!["u1".to_string()]);
        event.toggle_attendance("u1");
        assert!(event.attendees.is_empty());
    }

    #[test]
    fn test_toggle_attendance_preserves_insertion_order() {
        let mut event = meetup();
        event.toggle_attendance("u1");
        event.toggle_attendance("u2");
        event.toggle_attendance("u3");
        event.toggle_attendance("u2");
        assert_eq!(event.attendees, vec!["u1".to_string(), "u3".to_string()]);
    }

    #[test]
    fn test_retired_type_name_still_decodes() {
        let json = r#"{"id":9,"title":"Old","type":"Costume Parade","userId":"5"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, "Costume Parade");
        assert!(!event.is_meetup());
        assert!(event.attendees.is_empty());
    }

    #[test]
    fn test_type_field_serializes_as_type() {
        let event = meetup();
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Walking Group\""));
        assert!(json.contains("\"attendees\":[]"));
    }
}
