use super::*;
use crate::donations::Urgency;
use crate::orgs::OrgCategory;
use crate::posts::{Answer, Gender, PostKind, PostStatus};
use crate::storage::MemoryStore;

// =========================================================
// 辅助函数
// =========================================================

fn post(id: u64, kind: PostKind, user_id: &str) -> Post {
    Post {
        id,
        kind,
        status: kind.into(),
        name: format!("pet-{id}"),
        breed: String::new(),
        gender: Gender::Unknown,
        microchipped: Answer::Unknown,
        collar: Answer::Unknown,
        location: String::new(),
        date: String::new(),
        time: String::new(),
        description: String::new(),
        distinctive_markings: String::new(),
        image: None,
        contact_email: String::new(),
        contact_phone: String::new(),
        user_id: user_id.to_string(),
    }
}

fn donation(id: u64) -> DonationRequest {
    DonationRequest {
        id,
        rescue_name: "Happy Paws Rescue".to_string(),
        org_id: "org1".to_string(),
        item: "Blankets".to_string(),
        quantity: "10".to_string(),
        urgency: Urgency::Critical,
        description: String::new(),
        fulfilled: false,
        pledged_by: None,
    }
}

fn meetup(id: u64) -> Event {
    Event {
        id,
        title: format!("meetup-{id}"),
        date: String::new(),
        time: String::new(),
        location: String::new(),
        event_type: "Social Meetup".to_string(),
        description: String::new(),
        contact_email: String::new(),
        image: None,
        user_id: "123".to_string(),
        org_id: None,
        attendees: Vec::new(),
    }
}

fn org(id: &str, user_id: &str) -> Organization {
    Organization {
        id: id.to_string(),
        name: format!("org-{id}"),
        category: OrgCategory::Shelter,
        specialty: String::new(),
        phone: String::new(),
        email: String::new(),
        website: String::new(),
        address: String::new(),
        donation_link: String::new(),
        amazon_wishlist: String::new(),
        description: String::new(),
        image: None,
        user_id: user_id.to_string(),
    }
}

fn draft(from: &str, to: &str) -> MessageDraft {
    MessageDraft {
        from_user_id: from.to_string(),
        to_user_id: to.to_string(),
        sender_name: "Sender".to_string(),
        subject: "Hello".to_string(),
        content: "Hi there".to_string(),
    }
}

// =========================================================
// 水合
// =========================================================

#[test]
fn test_open_empty_backend_hydrates_seed_data() {
    let mem = MemoryStore::new();
    let store = DomainStore::open(&mem);
    assert_eq!(store.posts.len(), 2);
    assert_eq!(store.events.len(), 4);
    assert_eq!(store.organizations.len(), 1);
    assert_eq!(store.messages.len(), 1);
    assert!(store.donations.is_empty());
    // 水合本身不写存储
    assert!(mem.is_empty());
}

#[test]
fn test_open_with_one_corrupt_collection_only_affects_that_collection() {
    let mem = MemoryStore::new();
    {
        let mut store = DomainStore::open(&mem);
        store.add_post(post(100, PostKind::Lost, "u1"));
        store.add_event(meetup(200));
    }
    // 只破坏启事集合
    mem.set(KEY_POSTS, "{definitely not json");

    let store = DomainStore::open(&mem);
    // 启事回落种子，活动不受影响
    assert_eq!(store.posts.len(), 2);
    assert!(store.events.iter().any(|e| e.id == 200));
}

#[test]
fn test_reopen_round_trips_all_collections() {
    let mem = MemoryStore::new();
    let (posts, donations, events, organizations, messages) = {
        let mut store = DomainStore::open(&mem);
        store.add_post(post(100, PostKind::Found, "u1"));
        store.add_donation(donation(7));
        store.add_event(meetup(8));
        store.add_organization(org("org9", "u1"));
        store.send_message(draft("u1", "u2"), Timestamp::new(1_700_000_000_000));
        (
            store.posts.clone(),
            store.donations.clone(),
            store.events.clone(),
            store.organizations.clone(),
            store.messages.clone(),
        )
    };

    let reopened = DomainStore::open(&mem);
    assert_eq!(reopened.posts, posts);
    assert_eq!(reopened.donations, donations);
    assert_eq!(reopened.events, events);
    assert_eq!(reopened.organizations, organizations);
    assert_eq!(reopened.messages, messages);
}

// =========================================================
// 启事
// =========================================================

#[test]
fn test_add_post_prepends() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_post(post(100, PostKind::Lost, "u1"));
    store.add_post(post(101, PostKind::Found, "u2"));
    assert_eq!(store.posts[0].id, 101);
    assert_eq!(store.posts[1].id, 100);
}

#[test]
fn test_lost_post_status_toggles_to_reunited_and_back() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_post(post(100, PostKind::Lost, "u1"));

    assert_eq!(store.find_post(100).unwrap().status, PostStatus::Lost);
    store.toggle_post_status(100);
    assert_eq!(store.find_post(100).unwrap().status, PostStatus::Reunited);
    store.toggle_post_status(100);
    assert_eq!(store.find_post(100).unwrap().status, PostStatus::Lost);
}

#[test]
fn test_toggle_post_status_unknown_id_is_noop() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    let before = store.posts.clone();
    store.toggle_post_status(424242);
    assert_eq!(store.posts, before);
}

#[test]
fn test_update_post_merges_and_persists() {
    let mem = MemoryStore::new();
    {
        let mut store = DomainStore::open(&mem);
        store.add_post(post(100, PostKind::Lost, "u1"));
        store.update_post(
            100,
            PostPatch {
                name: Some("Rex".to_string()),
                ..Default::default()
            },
        );
    }
    let store = DomainStore::open(&mem);
    let updated = store.find_post(100).unwrap();
    assert_eq!(updated.name, "Rex");
    assert_eq!(updated.user_id, "u1");
}

#[test]
fn test_delete_post_removes_only_target() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_post(post(100, PostKind::Lost, "u1"));
    store.add_post(post(101, PostKind::Lost, "u1"));
    store.delete_post(100);
    assert!(store.find_post(100).is_none());
    assert!(store.find_post(101).is_some());
}

// =========================================================
// 捐赠需求
// =========================================================

#[test]
fn test_add_donation_appends() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_donation(donation(1));
    store.add_donation(donation(2));
    assert_eq!(store.donations[0].id, 1);
    assert_eq!(store.donations[1].id, 2);
}

#[test]
fn test_pledge_then_conflicting_unpledge_leaves_first_pledge_intact() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_donation(donation(1));

    store.toggle_pledge(1, "u1");
    assert!(store.donations[0].fulfilled);
    assert_eq!(store.donations[0].pledged_by.as_deref(), Some("u1"));

    // 他人的第二次切换是静默空操作
    store.toggle_pledge(1, "u2");
    assert!(store.donations[0].fulfilled);
    assert_eq!(store.donations[0].pledged_by.as_deref(), Some("u1"));
}

#[test]
fn test_pledge_round_trip_by_same_user() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_donation(donation(1));
    store.toggle_pledge(1, "u1");
    store.toggle_pledge(1, "u1");
    assert!(!store.donations[0].fulfilled);
    assert_eq!(store.donations[0].pledged_by, None);
}

#[test]
fn test_pledge_state_survives_reopen() {
    let mem = MemoryStore::new();
    {
        let mut store = DomainStore::open(&mem);
        store.add_donation(donation(1));
        store.toggle_pledge(1, "u1");
    }
    let store = DomainStore::open(&mem);
    assert!(store.donations[0].fulfilled);
    assert_eq!(store.donations[0].pledged_by.as_deref(), Some("u1"));
}

// =========================================================
// 活动
// =========================================================

#[test]
fn test_toggle_attendance_round_trips() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_event(meetup(50));

    store.toggle_attendance(50, "u1");
    let event = store.events.iter().find(|e| e.id == 50).unwrap();
    assert_eq!(event.attendees, vec!["u1".to_string()]);

    store.toggle_attendance(50, "u1");
    let event = store.events.iter().find(|e| e.id == 50).unwrap();
    assert!(event.attendees.is_empty());
}

#[test]
fn test_update_event_merges() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_event(meetup(50));
    store.update_event(
        50,
        EventPatch {
            location: Some("New Park".to_string()),
            ..Default::default()
        },
    );
    let event = store.events.iter().find(|e| e.id == 50).unwrap();
    assert_eq!(event.location, "New Park");
    assert_eq!(event.event_type, "Social Meetup");
}

#[test]
fn test_delete_event() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_event(meetup(50));
    store.delete_event(50);
    assert!(!store.events.iter().any(|e| e.id == 50));
}

// =========================================================
// 组织
// =========================================================

#[test]
fn test_store_tolerates_multiple_orgs_per_user() {
    // 存储层不强制一人一组织；面板取第一个
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_organization(org("orgA", "u1"));
    store.add_organization(org("orgB", "u1"));
    assert_eq!(store.organization_owned_by("u1").unwrap().id, "orgA");
}

#[test]
fn test_update_and_delete_organization() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_organization(org("orgA", "u1"));
    store.update_organization(
        "orgA",
        OrgPatch {
            name: Some("Renamed Rescue".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(store.find_organization("orgA").unwrap().name, "Renamed Rescue");
    store.delete_organization("orgA");
    assert!(store.find_organization("orgA").is_none());
}

#[test]
fn test_dangling_org_reference_renders_as_empty_lookup() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    let mut request = donation(1);
    request.org_id = "org-deleted".to_string();
    store.add_donation(request);
    // 悬空引用被容忍：查询返回空，不报错
    assert!(store.find_organization("org-deleted").is_none());
}

// =========================================================
// 私信
// =========================================================

#[test]
fn test_send_message_assigns_store_owned_fields_and_prepends() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    let now = Timestamp::new(1_698_316_200_000);
    let id = store.send_message(draft("999", "123"), now);

    assert_eq!(id, 1_698_316_200_000);
    let message = &store.messages[0];
    assert_eq!(message.id, id);
    assert_eq!(message.date, "2023-10-26T10:30:00.000Z");
    assert!(!message.read);
}

#[test]
fn test_mark_read_has_no_ownership_check() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    let id = store.send_message(draft("u1", "u2"), Timestamp::new(5_000));
    // 任何调用方都能标记，包括非收件人上下文
    store.mark_message_read(id);
    assert!(store.messages.iter().find(|m| m.id == id).unwrap().read);
}

#[test]
fn test_messages_for_filters_by_recipient_preserving_order() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.messages.clear();
    store.send_message(draft("a", "target"), Timestamp::new(1_000));
    store.send_message(draft("b", "other"), Timestamp::new(2_000));
    store.send_message(draft("c", "target"), Timestamp::new(3_000));

    let inbox = store.messages_for("target");
    assert_eq!(inbox.len(), 2);
    // 集合顺序（新的在前）原样保留
    assert_eq!(inbox[0].id, 3_000);
    assert_eq!(inbox[1].id, 1_000);
    assert!(store.messages_for("nobody").is_empty());
}

// =========================================================
// 端到端场景
// =========================================================

#[test]
fn test_scenario_lost_report_lifecycle() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_post(post(42, PostKind::Lost, "123"));

    assert_eq!(store.find_post(42).unwrap().status, PostStatus::Lost);
    store.toggle_post_status(42);
    assert_eq!(store.find_post(42).unwrap().status, PostStatus::Reunited);
    store.toggle_post_status(42);
    assert_eq!(store.find_post(42).unwrap().status, PostStatus::Lost);
}

#[test]
fn test_scenario_wishlist_pledge_conflict() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_donation(donation(77));
    assert!(!store.donations[0].fulfilled);

    store.toggle_pledge(77, "u1");
    assert!(store.donations[0].fulfilled);
    assert_eq!(store.donations[0].pledged_by.as_deref(), Some("u1"));

    store.toggle_pledge(77, "u2");
    assert!(store.donations[0].fulfilled);
    assert_eq!(store.donations[0].pledged_by.as_deref(), Some("u1"));
}

#[test]
fn test_mutating_one_collection_does_not_touch_other_keys() {
    let mem = MemoryStore::new();
    let mut store = DomainStore::open(&mem);
    store.add_post(post(100, PostKind::Lost, "u1"));
    // 只有启事键被写入
    assert!(mem.get(KEY_POSTS).is_some());
    assert!(mem.get(KEY_DONATIONS).is_none());
    assert!(mem.get(KEY_EVENTS).is_none());
    assert!(mem.get(KEY_ORGS).is_none());
    assert!(mem.get(KEY_MESSAGES).is_none());
}
