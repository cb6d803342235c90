//! 捐赠需求 (Donation Wishlist)
//!
//! 救助组织发布物资需求，用户认领（pledge）后标记为已满足。
//! 取消认领只允许认领者本人执行；他人操作静默忽略。

use serde::{Deserialize, Serialize};

/// 需求紧急程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for Urgency {
    fn default() -> Self {
        Urgency::Medium
    }
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
            Urgency::Critical => "Critical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Urgency::Low),
            "Medium" => Some(Urgency::Medium),
            "High" => Some(Urgency::High),
            "Critical" => Some(Urgency::Critical),
            _ => None,
        }
    }
}

/// 捐赠需求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub id: u64,
    /// 发布组织的展示名（冗余存储，组织删除后仍可展示）
    pub rescue_name: String,
    pub org_id: String,
    pub item: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fulfilled: bool,
    /// 认领者；`None` 同时覆盖未认领与启用追踪之前的存量记录
    #[serde(default)]
    pub pledged_by: Option<String>,
}

impl DonationRequest {
    /// 认领状态切换
    ///
    /// - 未满足：置为已满足并记录认领者
    /// - 已满足且认领者是本人（或存量记录无认领者）：取消认领
    /// - 已满足且认领者是他人：不做任何事（静默忽略，没有错误通道）
    pub fn toggle_pledge(&mut self, user_id: &str) {
        if self.fulfilled {
            match &self.pledged_by {
                Some(pledger) if pledger != user_id => {}
                _ => {
                    self.fulfilled = false;
                    self.pledged_by = None;
                }
            }
        } else {
            self.fulfilled = true;
            self.pledged_by = Some(user_id.to_string());
        }
    }

    /// 当前用户能否取消这条认领
    pub fn can_unpledge(&self, user_id: &str) -> bool {
        match &self.pledged_by {
            Some(pledger) => pledger == user_id,
            None => true,
        }
    }

    /// 浅合并部分更新
    pub fn apply(&mut self, patch: DonationPatch) {
        let DonationPatch {
            item,
            quantity,
            urgency,
            description,
        } = patch;
        if let Some(v) = item {
            self.item = v;
        }
        if let Some(v) = quantity {
            self.quantity = v;
        }
        if let Some(v) = urgency {
            self.urgency = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
    }
}

/// 捐赠需求的部分更新载荷
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationPatch {
    pub item: Option<String>,
    pub quantity: Option<String>,
    pub urgency: Option<Urgency>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> DonationRequest {
        DonationRequest {
            id: 10,
            rescue_name: "Happy Paws Rescue".to_string(),
            org_id: "org1".to_string(),
            item: "Dog food".to_string(),
            quantity: "5 large bags".to_string(),
            urgency: Urgency::High,
            description: String::new(),
            fulfilled: false,
            pledged_by: None,
        }
    }

    #[test]
    fn test_pledge_sets_fulfilled_and_pledger() {
        let mut req = request();
        req.toggle_pledge("u1");
        assert!(req.fulfilled);
        assert_eq!(req.pledged_by.as_deref(), Some("u1"));
    }

    #[test]
    fn test_unpledge_by_pledger_round_trips() {
        let mut req = request();
        req.toggle_pledge("u1");
        req.toggle_pledge("u1");
        assert!(!req.fulfilled);
        assert_eq!(req.pledged_by, None);
    }

    #[test]
    fn test_unpledge_by_other_user_is_ignored() {
        let mut req = request();
        req.toggle_pledge("u1");
        req.toggle_pledge("u2");
        // 他人的取消请求不产生任何效果
        assert!(req.fulfilled);
        assert_eq!(req.pledged_by.as_deref(), Some("u1"));
    }

    #[test]
    fn test_unpledge_legacy_record_without_pledger() {
        // 启用认领者追踪之前写入的记录：fulfilled 但无 pledged_by
        let mut req = request();
        req.fulfilled = true;
        req.pledged_by = None;
        req.toggle_pledge("anyone");
        assert!(!req.fulfilled);
    }

    #[test]
    fn test_urgency_serializes_capitalized() {
        let req = request();
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"urgency\":\"High\""));
        assert!(json.contains("\"pledgedBy\":null"));
        assert!(json.contains("\"rescueName\":\"Happy Paws Rescue\""));
    }

    #[test]
    fn test_legacy_record_defaults() {
        let json = r#"{"id":1,"rescueName":"R","orgId":"org1","item":"Towels"}"#;
        let req: DonationRequest = serde_json::from_str(json).unwrap();
        assert!(!req.fulfilled);
        assert_eq!(req.urgency, Urgency::Medium);
        assert_eq!(req.pledged_by, None);
    }
}
