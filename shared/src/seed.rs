//! 首次运行的种子数据
//!
//! 作为 `load` 的默认值使用：全新或已损坏的浏览器档案
//! 启动后界面依然有内容可看。捐赠需求没有种子，清单由
//! 组织自行发布。

use crate::donations::DonationRequest;
use crate::events::Event;
use crate::messages::Message;
use crate::orgs::{OrgCategory, Organization};
use crate::posts::{Answer, Gender, Post, PostKind, PostStatus};
use crate::user::DEMO_USER_ID;

pub fn default_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            kind: PostKind::Lost,
            status: PostStatus::Lost,
            name: "Buddy".to_string(),
            breed: "Golden Retriever".to_string(),
            gender: Gender::Male,
            microchipped: Answer::Yes,
            collar: Answer::Yes,
            location: "Central Park".to_string(),
            date: "2023-10-25".to_string(),
            time: String::new(),
            description: "Wearing a red collar. Needs daily medication for allergies. Very friendly."
                .to_string(),
            distinctive_markings: String::new(),
            image: None,
            contact_email: "owner@example.com".to_string(),
            contact_phone: "555-0101".to_string(),
            user_id: DEMO_USER_ID.to_string(),
        },
        Post {
            id: 2,
            kind: PostKind::Found,
            status: PostStatus::Found,
            name: "Unknown".to_string(),
            breed: "Siamese Cat".to_string(),
            gender: Gender::Unknown,
            microchipped: Answer::Unknown,
            collar: Answer::No,
            location: "Downtown".to_string(),
            date: "2023-10-26".to_string(),
            time: String::new(),
            description: String::new(),
            distinctive_markings: String::new(),
            image: None,
            contact_email: "finder@example.com".to_string(),
            contact_phone: "555-0102".to_string(),
            user_id: "999".to_string(),
        },
    ]
}

pub fn default_donations() -> Vec<DonationRequest> {
    Vec::new()
}

pub fn default_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            title: "Mega Adoption Weekend".to_string(),
            date: "2023-11-15".to_string(),
            time: "10:00 AM - 4:00 PM".to_string(),
            location: "City Park Pavilion".to_string(),
            event_type: "Adoption Drive".to_string(),
            description:
                "Come meet over 50 dogs and cats looking for their forever homes! Adoption fees waived."
                    .to_string(),
            contact_email: "events@citypark.com".to_string(),
            image: None,
            user_id: "999".to_string(),
            org_id: None,
            attendees: Vec::new(),
        },
        Event {
            id: 2,
            title: "Low-Cost Vaccination Clinic".to_string(),
            date: "2023-11-20".to_string(),
            time: "9:00 AM - 2:00 PM".to_string(),
            location: "Community Center".to_string(),
            event_type: "Vaccination".to_string(),
            description: "Rabies and distemper vaccines available for $10. Microchipping for $15."
                .to_string(),
            contact_email: "vet@community.org".to_string(),
            image: None,
            user_id: "999".to_string(),
            org_id: None,
            attendees: Vec::new(),
        },
        Event {
            id: 3,
            title: "Sunday Morning Pack Walk".to_string(),
            date: "2023-11-12".to_string(),
            time: "9:00 AM - 10:30 AM".to_string(),
            location: "Riverside Trail Head".to_string(),
            event_type: "Walking Group".to_string(),
            description:
                "A casual group walk for dogs of all sizes. Reactive dogs welcome (yellow ribbon required)."
                    .to_string(),
            contact_email: "walker@example.com".to_string(),
            image: None,
            user_id: DEMO_USER_ID.to_string(),
            org_id: None,
            attendees: Vec::new(),
        },
        Event {
            id: 4,
            title: "Small Dog Playdate".to_string(),
            date: "2023-11-18".to_string(),
            time: "2:00 PM - 3:30 PM".to_string(),
            location: "Bark Park - Small Dog Section".to_string(),
            event_type: "Social Meetup".to_string(),
            description: "Let the little ones run free! Snacks provided for humans.".to_string(),
            contact_email: "playdate@example.com".to_string(),
            image: None,
            user_id: DEMO_USER_ID.to_string(),
            org_id: None,
            attendees: Vec::new(),
        },
    ]
}

pub fn default_organizations() -> Vec<Organization> {
    vec![Organization {
        id: "org1".to_string(),
        name: "Happy Paws Rescue".to_string(),
        category: OrgCategory::Rescue,
        specialty: "Strays".to_string(),
        phone: String::new(),
        email: "org@hfp.com".to_string(),
        website: String::new(),
        address: "Downtown Metro".to_string(),
        donation_link: String::new(),
        amazon_wishlist: String::new(),
        description: "Dedicated to rescuing stray dogs and cats.".to_string(),
        image: None,
        user_id: "org1".to_string(),
    }]
}

pub fn default_messages() -> Vec<Message> {
    vec![Message {
        id: 1,
        from_user_id: "999".to_string(),
        to_user_id: DEMO_USER_ID.to_string(),
        sender_name: "Jane Doe".to_string(),
        subject: "Found your dog Buddy".to_string(),
        content: "Hi! I think I saw Buddy near the park entrance this morning. He looked safe but scared."
            .to_string(),
        date: "2023-10-26T10:30:00".to_string(),
        read: false,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique_per_collection() {
        let posts = default_posts();
        let mut ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), posts.len());

        let events = default_events();
        let mut ids: Vec<u64> = events.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn test_seed_statuses_match_kinds() {
        for post in default_posts() {
            assert_eq!(post.status, post.kind.into());
        }
    }
}
