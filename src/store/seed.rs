//! Posts loaded into the store at startup.

use chrono::{TimeZone, Utc};

use crate::store::post::{Post, PostId};

/// The three posts every fresh process starts with.
pub fn default_posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId::new(1),
            title: Some("The Rise of Decentralized Finance".to_string()),
            content: Some(
                "Decentralized Finance (DeFi) is an emerging and rapidly evolving field..."
                    .to_string(),
            ),
            author: Some("Alex Thompson".to_string()),
            date: Utc.with_ymd_and_hms(2023, 8, 1, 10, 0, 0).unwrap(),
        },
        Post {
            id: PostId::new(2),
            title: Some("The Impact of Artificial Intelligence on Modern Businesses".to_string()),
            content: Some(
                "Artificial Intelligence (AI) is no longer a concept of the future...".to_string(),
            ),
            author: Some("Mia Williams".to_string()),
            date: Utc.with_ymd_and_hms(2023, 8, 5, 14, 30, 0).unwrap(),
        },
        Post {
            id: PostId::new(3),
            title: Some("Sustainable Living: Tips for an Eco-Friendly Lifestyle".to_string()),
            content: Some(
                "Sustainability is more than just a buzzword; it's a way of life...".to_string(),
            ),
            author: Some("Samuel Green".to_string()),
            date: Utc.with_ymd_and_hms(2023, 8, 10, 9, 15, 0).unwrap(),
        },
    ]
}
