//! Reference rows loaded into every new store

use chrono::{DateTime, Utc};

use super::types::{CampusService, Resource};

pub(crate) fn resources(now: DateTime<Utc>) -> Vec<Resource> {
    let resource = |id: &str, title: &str, content: &str, category: &str, read_time: u32, icon: &str| {
        Resource {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            kind: "article".to_string(),
            read_time: Some(read_time),
            icon: Some(icon.to_string()),
            created_at: now,
        }
    };

    vec![
        resource(
            "1",
            "Understanding Anxiety",
            "Comprehensive guide to understanding anxiety symptoms, triggers, and management strategies.",
            "anxiety",
            5,
            "fas fa-book",
        ),
        resource(
            "2",
            "Coping Strategies Guide",
            "Practical coping strategies for managing stress and anxiety in daily life.",
            "general",
            8,
            "fas fa-brain",
        ),
        resource(
            "3",
            "Sleep Hygiene Tips",
            "Essential tips for improving sleep quality and establishing healthy sleep habits.",
            "sleep",
            4,
            "fas fa-moon",
        ),
        resource(
            "4",
            "Exercise & Mental Health",
            "How physical activity can improve mental health and reduce symptoms of depression and anxiety.",
            "general",
            6,
            "fas fa-dumbbell",
        ),
    ]
}

pub(crate) fn campus_services() -> Vec<CampusService> {
    vec![
        CampusService {
            id: "1".into(),
            name: "Student Counseling Center".into(),
            description: "Individual and group counseling sessions".into(),
            kind: "counseling".into(),
            availability: Some("Mon-Fri 8AM-6PM".into()),
            contact: Some("(555) 123-4567".into()),
            location: Some("Student Services Building, Room 201".into()),
            booking_url: Some("https://counseling.university.edu/book".into()),
        },
        CampusService {
            id: "2".into(),
            name: "Peer Support Groups".into(),
            description: "Weekly support group meetings".into(),
            kind: "support_group".into(),
            availability: Some("Tuesdays 3PM, Student Union".into()),
            contact: Some("peersupport@university.edu".into()),
            location: Some("Student Union, Conference Room A".into()),
            booking_url: None,
        },
        CampusService {
            id: "3".into(),
            name: "Campus Wellness Center".into(),
            description: "Mindfulness workshops and stress relief".into(),
            kind: "wellness".into(),
            availability: Some("Drop-in sessions available".into()),
            contact: Some("(555) 123-4580".into()),
            location: Some("Recreation Center, 2nd Floor".into()),
            booking_url: Some("https://wellness.university.edu/schedule".into()),
        },
    ]
}
