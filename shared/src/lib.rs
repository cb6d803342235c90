//! Hearts for Paws 数据层
//!
//! 与 UI 框架完全解耦的领域核心：
//! - `storage`: 键值存储抽象与 JSON 编解码适配
//! - `store`: 领域数据中心（五个集合的全部业务规则与持久化）
//! - `posts` / `donations` / `events` / `orgs` / `messages`: 各实体模型
//! - `user`: 身份模型与演示级凭据策略
//! - `seed`: 首次运行的种子数据
//!
//! 本 crate 不依赖任何浏览器 API，所有测试均可在原生环境运行。

pub mod date;
pub mod donations;
pub mod events;
pub mod messages;
pub mod orgs;
pub mod posts;
pub mod seed;
pub mod storage;
pub mod store;
pub mod user;

// =========================================================
// 存储键定义 (Storage Keys)
// =========================================================
// 历史遗留的键名，浏览器中可能已存在按此布局写入的数据，
// 不可随意改动。

pub const KEY_POSTS: &str = "hfp_posts_live";
pub const KEY_DONATIONS: &str = "hfp_donations";
pub const KEY_EVENTS: &str = "hfp_events_live";
pub const KEY_ORGS: &str = "hfp_orgs_live";
pub const KEY_MESSAGES: &str = "hfp_messages";
pub const KEY_USER: &str = "user";

pub use date::Timestamp;
pub use donations::{DonationPatch, DonationRequest, Urgency};
pub use events::{Event, EventPatch, MEETUP_TYPES, OFFICIAL_EVENT_TYPES};
pub use messages::{Message, MessageDraft};
pub use orgs::{OrgCategory, OrgPatch, Organization};
pub use posts::{Answer, Gender, Post, PostKind, PostPatch, PostStatus};
pub use storage::{JsonStorage, MemoryStore, StringStore};
pub use store::DomainStore;
pub use user::{AuthError, User};
