//! 领域数据上下文
//!
//! 把数据层的 `DomainStore` 装进单个信号共享给全部组件。
//! 任何一次变更都会唤醒所有订阅者重渲染——与单一数据
//! Context 的语义一致，对这个规模的应用足够。
//!
//! 所有变更方法同步完成：内存重算加尽力而为的持久化，
//! 没有可以部分失败的路径。

use crate::web::{LocalStorage, clock};
use hfp_shared::{
    DomainStore, DonationRequest, Event, Message, MessageDraft, Organization, Post, PostPatch,
};
use leptos::prelude::*;

/// 领域数据上下文
#[derive(Clone, Copy)]
pub struct DataContext {
    store: RwSignal<DomainStore<LocalStorage>>,
}

impl DataContext {
    /// 打开浏览器存储并水合五个集合
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(DomainStore::open(LocalStorage)),
        }
    }

    // =========================================================
    // 读取（响应式快照）
    // =========================================================

    pub fn posts(&self) -> Vec<Post> {
        self.store.with(|s| s.posts.clone())
    }

    pub fn find_post(&self, id: u64) -> Option<Post> {
        self.store.with(|s| s.find_post(id).cloned())
    }

    pub fn donations(&self) -> Vec<DonationRequest> {
        self.store.with(|s| s.donations.clone())
    }

    pub fn events(&self) -> Vec<Event> {
        self.store.with(|s| s.events.clone())
    }

    pub fn organizations(&self) -> Vec<Organization> {
        self.store.with(|s| s.organizations.clone())
    }

    pub fn find_organization(&self, id: &str) -> Option<Organization> {
        self.store.with(|s| s.find_organization(id).cloned())
    }

    /// 用户名下的第一个组织（管理面板按此假设工作）
    pub fn organization_owned_by(&self, user_id: &str) -> Option<Organization> {
        self.store.with(|s| s.organization_owned_by(user_id).cloned())
    }

    /// 某用户的收件箱快照，保持集合原始顺序
    pub fn messages_for(&self, user_id: &str) -> Vec<Message> {
        self.store.with(|s| s.messages_for(user_id))
    }

    pub fn unread_count(&self, user_id: &str) -> usize {
        self.store.with(|s| {
            s.messages_for(user_id).iter().filter(|m| !m.read).count()
        })
    }

    // =========================================================
    // 变更
    // =========================================================

    pub fn add_post(&self, post: Post) {
        self.store.update(|s| s.add_post(post));
    }

    pub fn toggle_post_status(&self, id: u64) {
        self.store.update(|s| s.toggle_post_status(id));
    }

    pub fn update_post(&self, id: u64, patch: PostPatch) {
        self.store.update(|s| s.update_post(id, patch));
    }

    pub fn delete_post(&self, id: u64) {
        self.store.update(|s| s.delete_post(id));
    }

    pub fn add_donation(&self, request: DonationRequest) {
        self.store.update(|s| s.add_donation(request));
    }

    pub fn toggle_pledge(&self, id: u64, user_id: &str) {
        let user_id = user_id.to_string();
        self.store.update(|s| s.toggle_pledge(id, &user_id));
    }

    pub fn delete_donation(&self, id: u64) {
        self.store.update(|s| s.delete_donation(id));
    }

    pub fn add_event(&self, event: Event) {
        self.store.update(|s| s.add_event(event));
    }

    pub fn toggle_attendance(&self, event_id: u64, user_id: &str) {
        let user_id = user_id.to_string();
        self.store.update(|s| s.toggle_attendance(event_id, &user_id));
    }

    pub fn add_organization(&self, org: Organization) {
        self.store.update(|s| s.add_organization(org));
    }

    /// 发送消息：id/date/read 由数据层赋值
    pub fn send_message(&self, draft: MessageDraft) {
        let now = clock::now();
        self.store.update(|s| {
            s.send_message(draft, now);
        });
    }

    pub fn mark_message_read(&self, id: u64) {
        self.store.update(|s| s.mark_message_read(id));
    }
}

/// 从 Context 获取领域数据上下文
pub fn use_data() -> DataContext {
    use_context::<DataContext>().expect("DataContext should be provided")
}
