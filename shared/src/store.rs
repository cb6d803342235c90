//! 领域数据中心 (Domain Store)
//!
//! 五个实体集合的唯一权威：所有变更先在内存中完成重算，
//! 随后立即把**那一个**集合整体写回存储。集合之间没有
//! 跨键事务，两次写入之间崩溃会留下各自一致、但彼此不
//! 同步的集合（可接受：每次页面加载都会重新水合）。
//!
//! 所有操作同步完成，没有可以部分失败的路径：内存重算
//! 是纯计算，持久化是尽力而为。

#[cfg(test)]
mod tests;

use crate::date::Timestamp;
use crate::donations::{DonationPatch, DonationRequest};
use crate::events::{Event, EventPatch};
use crate::messages::{Message, MessageDraft};
use crate::orgs::{OrgPatch, Organization};
use crate::posts::{Post, PostPatch};
use crate::seed;
use crate::storage::{JsonStorage, StringStore};
use crate::{KEY_DONATIONS, KEY_EVENTS, KEY_MESSAGES, KEY_ORGS, KEY_POSTS};

pub struct DomainStore<S: StringStore> {
    storage: JsonStorage<S>,
    pub posts: Vec<Post>,
    pub donations: Vec<DonationRequest>,
    pub events: Vec<Event>,
    pub organizations: Vec<Organization>,
    pub messages: Vec<Message>,
}

impl<S: StringStore> DomainStore<S> {
    /// 打开存储并水合全部集合
    ///
    /// 缺失或损坏的条目按集合回落到种子数据，互不影响。
    pub fn open(backend: S) -> Self {
        let storage = JsonStorage::new(backend);
        let posts = storage.load(KEY_POSTS, seed::default_posts());
        let donations = storage.load(KEY_DONATIONS, seed::default_donations());
        let events = storage.load(KEY_EVENTS, seed::default_events());
        let organizations = storage.load(KEY_ORGS, seed::default_organizations());
        let messages = storage.load(KEY_MESSAGES, seed::default_messages());
        Self {
            storage,
            posts,
            donations,
            events,
            organizations,
            messages,
        }
    }

    // =========================================================
    // 走失/寻获启事
    // =========================================================

    /// 新启事插到列表头部（最新的排最前）
    pub fn add_post(&mut self, post: Post) {
        self.posts.insert(0, post);
        self.persist_posts();
    }

    /// 在「已团聚」与原始类别之间切换启事状态
    pub fn toggle_post_status(&mut self, id: u64) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
            post.status = post.toggled_status();
        }
        self.persist_posts();
    }

    pub fn update_post(&mut self, id: u64, patch: PostPatch) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
            post.apply(patch);
        }
        self.persist_posts();
    }

    pub fn delete_post(&mut self, id: u64) {
        self.posts.retain(|p| p.id != id);
        self.persist_posts();
    }

    pub fn find_post(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    // =========================================================
    // 捐赠需求
    // =========================================================

    pub fn add_donation(&mut self, request: DonationRequest) {
        self.donations.push(request);
        self.persist_donations();
    }

    /// 认领/取消认领；他人认领的条目不受影响
    pub fn toggle_pledge(&mut self, id: u64, user_id: &str) {
        if let Some(request) = self.donations.iter_mut().find(|r| r.id == id) {
            request.toggle_pledge(user_id);
        }
        self.persist_donations();
    }

    pub fn update_donation(&mut self, id: u64, patch: DonationPatch) {
        if let Some(request) = self.donations.iter_mut().find(|r| r.id == id) {
            request.apply(patch);
        }
        self.persist_donations();
    }

    pub fn delete_donation(&mut self, id: u64) {
        self.donations.retain(|r| r.id != id);
        self.persist_donations();
    }

    // =========================================================
    // 社区活动
    // =========================================================

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
        self.persist_events();
    }

    pub fn update_event(&mut self, id: u64, patch: EventPatch) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == id) {
            event.apply(patch);
        }
        self.persist_events();
    }

    pub fn delete_event(&mut self, id: u64) {
        self.events.retain(|e| e.id != id);
        self.persist_events();
    }

    /// 报名切换（幂等往返）
    pub fn toggle_attendance(&mut self, event_id: u64, user_id: &str) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == event_id) {
            event.toggle_attendance(user_id);
        }
        self.persist_events();
    }

    // =========================================================
    // 救助组织
    // =========================================================

    pub fn add_organization(&mut self, org: Organization) {
        self.organizations.push(org);
        self.persist_organizations();
    }

    pub fn update_organization(&mut self, id: &str, patch: OrgPatch) {
        if let Some(org) = self.organizations.iter_mut().find(|o| o.id == id) {
            org.apply(patch);
        }
        self.persist_organizations();
    }

    pub fn delete_organization(&mut self, id: &str) {
        self.organizations.retain(|o| o.id != id);
        self.persist_organizations();
    }

    pub fn find_organization(&self, id: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.id == id)
    }

    /// 用户名下的第一个组织（管理面板按此假设工作）
    pub fn organization_owned_by(&self, user_id: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.user_id == user_id)
    }

    // =========================================================
    // 站内私信
    // =========================================================

    /// 发送消息：id/date/read 由这里赋值，插到列表头部
    ///
    /// # 返回
    /// 新消息的 id
    pub fn send_message(&mut self, draft: MessageDraft, now: Timestamp) -> u64 {
        let message = draft.into_message(now);
        let id = message.id;
        self.messages.insert(0, message);
        self.persist_messages();
        id
    }

    /// 标记已读（无所有权校验）
    pub fn mark_message_read(&mut self, id: u64) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
            message.read = true;
        }
        self.persist_messages();
    }

    /// 某用户收件箱的只读投影，保持集合原始顺序
    ///
    /// 这是一次性快照，不带任何订阅语义：集合变更后需要
    /// 重新调用。
    pub fn messages_for(&self, user_id: &str) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|m| m.to_user_id == user_id)
            .cloned()
            .collect()
    }

    // =========================================================
    // 持久化
    // =========================================================
    // 每个集合单独一个键；写失败静默（下次加载回落种子）。

    fn persist_posts(&self) {
        self.storage.save(KEY_POSTS, &self.posts);
    }

    fn persist_donations(&self) {
        self.storage.save(KEY_DONATIONS, &self.donations);
    }

    fn persist_events(&self) {
        self.storage.save(KEY_EVENTS, &self.events);
    }

    fn persist_organizations(&self) {
        self.storage.save(KEY_ORGS, &self.organizations);
    }

    fn persist_messages(&self) {
        self.storage.save(KEY_MESSAGES, &self.messages);
    }
}
