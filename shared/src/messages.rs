//! 站内私信 (Direct Messages)
//!
//! 消息的 `id`、`date`、`read` 三个字段由存储层在发送时赋值。
//! 调用方只能提交 `MessageDraft`，草稿结构上就不包含这三个
//! 字段，因此「调用方覆盖存储层赋值」在类型层面不可表达。

use crate::date::Timestamp;
use serde::{Deserialize, Serialize};

/// 已入库的消息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub from_user_id: String,
    pub to_user_id: String,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub content: String,
    /// RFC 3339 时间串，入库时生成
    pub date: String,
    #[serde(default)]
    pub read: bool,
}

/// 待发送消息
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDraft {
    pub from_user_id: String,
    pub to_user_id: String,
    pub sender_name: String,
    pub subject: String,
    pub content: String,
}

impl MessageDraft {
    /// 定稿入库：以当前时间生成 id 与日期，未读状态起始
    pub fn into_message(self, now: Timestamp) -> Message {
        Message {
            id: now.as_id(),
            from_user_id: self.from_user_id,
            to_user_id: self.to_user_id,
            sender_name: self.sender_name,
            subject: self.subject,
            content: self.content,
            date: now.to_rfc3339(),
            read: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> MessageDraft {
        MessageDraft {
            from_user_id: "999".to_string(),
            to_user_id: "123".to_string(),
            sender_name: "Jane Doe".to_string(),
            subject: "Found your dog Buddy".to_string(),
            content: "I think I saw Buddy near the park entrance.".to_string(),
        }
    }

    #[test]
    fn test_into_message_assigns_store_owned_fields() {
        let now = Timestamp::new(1_698_316_200_000);
        let message = draft().into_message(now);
        assert_eq!(message.id, 1_698_316_200_000);
        assert_eq!(message.date, "2023-10-26T10:30:00.000Z");
        assert!(!message.read);
        // 草稿字段原样保留
        assert_eq!(message.sender_name, "Jane Doe");
        assert_eq!(message.to_user_id, "123");
    }

    #[test]
    fn test_camel_case_layout() {
        let message = draft().into_message(Timestamp::new(1));
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"fromUserId\":\"999\""));
        assert!(json.contains("\"toUserId\":\"123\""));
        assert!(json.contains("\"read\":false"));
    }

    #[test]
    fn test_legacy_record_without_read_flag_decodes_unread() {
        let json = r#"{"id":1,"fromUserId":"999","toUserId":"123","date":"2023-10-26T10:30:00"}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert!(!message.read);
        assert_eq!(message.subject, "");
    }
}
