//! 走失/寻获启事 (Lost & Found)
//!
//! 启事分为「走失」与「寻获」两类，类别在创建后不可变；
//! 展示状态 `status` 只在「已团聚」与原始类别之间往返切换。

use serde::{Deserialize, Serialize};

/// 启事类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Lost,
    Found,
}

/// 启事展示状态
///
/// 初始值等于启事类别；团聚后置为 `Reunited`，
/// 再次切换时回到类别对应的初始值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Lost,
    Found,
    Reunited,
}

impl From<PostKind> for PostStatus {
    fn from(kind: PostKind) -> Self {
        match kind {
            PostKind::Lost => PostStatus::Lost,
            PostKind::Found => PostStatus::Found,
        }
    }
}

/// 宠物性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Unknown,
    Male,
    Female,
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Unknown
    }
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Unknown => "unknown",
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "unknown" => Some(Gender::Unknown),
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// 三值回答（芯片、项圈等无法确定的属性）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Unknown,
    Yes,
    No,
}

impl Default for Answer {
    fn default() -> Self {
        Answer::Unknown
    }
}

impl Answer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Unknown => "unknown",
            Answer::Yes => "yes",
            Answer::No => "no",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "unknown" => Some(Answer::Unknown),
            "yes" => Some(Answer::Yes),
            "no" => Some(Answer::No),
            _ => None,
        }
    }
}

/// 走失/寻获启事
///
/// 序列化采用 camelCase 以匹配存量数据布局；早期版本未写入的
/// 字段一律带 `default`，保证旧记录仍可解码。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub status: PostStatus,
    pub name: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub microchipped: Answer,
    #[serde(default)]
    pub collar: Answer,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub distinctive_markings: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    /// 所有者，创建后不可变
    pub user_id: String,
}

impl Post {
    /// 是否已团聚
    pub fn is_reunited(&self) -> bool {
        self.status == PostStatus::Reunited
    }

    /// 切换后的展示状态：在「已团聚」与原始类别之间往返
    pub fn toggled_status(&self) -> PostStatus {
        if self.is_reunited() {
            self.kind.into()
        } else {
            PostStatus::Reunited
        }
    }

    /// 浅合并部分更新；`None` 字段保持原值
    pub fn apply(&mut self, patch: PostPatch) {
        let PostPatch {
            name,
            breed,
            gender,
            microchipped,
            collar,
            location,
            date,
            time,
            description,
            distinctive_markings,
            image,
            contact_email,
            contact_phone,
        } = patch;
        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = breed {
            self.breed = v;
        }
        if let Some(v) = gender {
            self.gender = v;
        }
        if let Some(v) = microchipped {
            self.microchipped = v;
        }
        if let Some(v) = collar {
            self.collar = v;
        }
        if let Some(v) = location {
            self.location = v;
        }
        if let Some(v) = date {
            self.date = v;
        }
        if let Some(v) = time {
            self.time = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = distinctive_markings {
            self.distinctive_markings = v;
        }
        if let Some(v) = image {
            self.image = Some(v);
        }
        if let Some(v) = contact_email {
            self.contact_email = v;
        }
        if let Some(v) = contact_phone {
            self.contact_phone = v;
        }
    }
}

/// 启事的部分更新载荷
///
/// 类别、状态与所有者不在其中：类别与所有者不可变，
/// 状态只能通过专门的切换操作变更。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<Gender>,
    pub microchipped: Option<Answer>,
    pub collar: Option<Answer>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
    pub distinctive_markings: Option<String>,
    pub image: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lost_post() -> Post {
        Post {
            id: 1,
            kind: PostKind::Lost,
            status: PostStatus::Lost,
            name: "Buddy".to_string(),
            breed: "Golden Retriever".to_string(),
            gender: Gender::Male,
            microchipped: Answer::Yes,
            collar: Answer::Unknown,
            location: "Central Park".to_string(),
            date: "2023-10-25".to_string(),
            time: String::new(),
            description: String::new(),
            distinctive_markings: String::new(),
            image: None,
            contact_email: "owner@example.com".to_string(),
            contact_phone: "555-0101".to_string(),
            user_id: "123".to_string(),
        }
    }

    #[test]
    fn test_toggled_status_round_trips() {
        let mut post = lost_post();
        post.status = post.toggled_status();
        assert_eq!(post.status, PostStatus::Reunited);
        post.status = post.toggled_status();
        assert_eq!(post.status, PostStatus::Lost);
    }

    #[test]
    fn test_toggled_status_found_kind_returns_to_found() {
        let mut post = lost_post();
        post.kind = PostKind::Found;
        post.status = PostStatus::Found;
        post.status = post.toggled_status();
        post.status = post.toggled_status();
        assert_eq!(post.status, PostStatus::Found);
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut post = lost_post();
        post.apply(PostPatch {
            location: Some("Riverside".to_string()),
            description: Some("Last seen near the trail head.".to_string()),
            ..Default::default()
        });
        assert_eq!(post.location, "Riverside");
        assert_eq!(post.description, "Last seen near the trail head.");
        // 未出现在 patch 中的字段保持原值
        assert_eq!(post.name, "Buddy");
        assert_eq!(post.contact_phone, "555-0101");
    }

    #[test]
    fn test_legacy_record_without_optional_fields_decodes() {
        // 早期版本写入的记录没有 gender/microchipped/collar/time 等字段
        let json = r#"{
            "id": 2,
            "type": "found",
            "status": "found",
            "name": "Unknown",
            "breed": "Siamese Cat",
            "location": "Downtown",
            "date": "2023-10-26",
            "image": null,
            "userId": "999",
            "contactEmail": "finder@example.com",
            "contactPhone": "555-0102"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.kind, PostKind::Found);
        assert_eq!(post.gender, Gender::Unknown);
        assert_eq!(post.microchipped, Answer::Unknown);
        assert_eq!(post.time, "");
        assert_eq!(post.user_id, "999");
    }

    #[test]
    fn test_camel_case_layout_is_stable() {
        let post = lost_post();
        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"type\":\"lost\""));
        assert!(json.contains("\"userId\":\"123\""));
        assert!(json.contains("\"contactEmail\":\"owner@example.com\""));
        assert!(json.contains("\"distinctiveMarkings\":\"\""));
    }
}
