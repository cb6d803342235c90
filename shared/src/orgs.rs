//! 救助组织 (Rescues & Shelters)

use serde::{Deserialize, Serialize};

/// 组织类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrgCategory {
    Rescue,
    Shelter,
}

impl Default for OrgCategory {
    fn default() -> Self {
        OrgCategory::Rescue
    }
}

impl OrgCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgCategory::Rescue => "Rescue",
            OrgCategory::Shelter => "Shelter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Rescue" => Some(OrgCategory::Rescue),
            "Shelter" => Some(OrgCategory::Shelter),
            _ => None,
        }
    }
}

/// 救助组织档案
///
/// 每个用户至多一个组织是管理面板的假设，存储层并不强制；
/// 数据模型允许多个，面板按第一个匹配处理。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: OrgCategory,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "contactEmail", default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub donation_link: String,
    #[serde(default)]
    pub amazon_wishlist: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    /// 所有者
    pub user_id: String,
}

impl Organization {
    /// 浅合并部分更新
    pub fn apply(&mut self, patch: OrgPatch) {
        let OrgPatch {
            name,
            category,
            specialty,
            phone,
            email,
            website,
            address,
            donation_link,
            amazon_wishlist,
            description,
            image,
        } = patch;
        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = specialty {
            self.specialty = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = website {
            self.website = v;
        }
        if let Some(v) = address {
            self.address = v;
        }
        if let Some(v) = donation_link {
            self.donation_link = v;
        }
        if let Some(v) = amazon_wishlist {
            self.amazon_wishlist = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = image {
            self.image = Some(v);
        }
    }
}

/// 组织档案的部分更新载荷
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrgPatch {
    pub name: Option<String>,
    pub category: Option<OrgCategory>,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub donation_link: Option<String>,
    pub amazon_wishlist: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_keeps_legacy_contact_email_key() {
        let org = Organization {
            id: "org1".to_string(),
            name: "Happy Paws Rescue".to_string(),
            category: OrgCategory::Rescue,
            specialty: String::new(),
            phone: String::new(),
            email: "org@hfp.com".to_string(),
            website: String::new(),
            address: "Downtown Metro".to_string(),
            donation_link: String::new(),
            amazon_wishlist: String::new(),
            description: String::new(),
            image: None,
            user_id: "org1".to_string(),
        };
        let json = serde_json::to_string(&org).unwrap();
        assert!(json.contains("\"contactEmail\":\"org@hfp.com\""));
        assert!(json.contains("\"category\":\"Rescue\""));
    }

    #[test]
    fn test_legacy_record_defaults() {
        let json = r#"{"id":"org1","name":"Happy Paws Rescue","userId":"org1"}"#;
        let org: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(org.category, OrgCategory::Rescue);
        assert_eq!(org.specialty, "");
        assert_eq!(org.image, None);
    }

    #[test]
    fn test_apply_merges_patch() {
        let json = r#"{"id":"org1","name":"Happy Paws Rescue","userId":"org1"}"#;
        let mut org: Organization = serde_json::from_str(json).unwrap();
        org.apply(OrgPatch {
            category: Some(OrgCategory::Shelter),
            amazon_wishlist: Some("https://amazon.example/wishlist".to_string()),
            ..Default::default()
        });
        assert_eq!(org.category, OrgCategory::Shelter);
        assert_eq!(org.amazon_wishlist, "https://amazon.example/wishlist");
        assert_eq!(org.name, "Happy Paws Rescue");
    }
}
