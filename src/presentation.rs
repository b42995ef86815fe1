// src/presentation.rs
//! Cosmetic decoration for the demo front-end: avatars, vote counts and
//! Vietnamese timestamps. Nothing here is persisted.

use chrono::{DateTime, FixedOffset};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

use crate::messages;

/// Vietnam does not observe daylight saving, so a fixed UTC+7 offset is exact.
const VIETNAM_OFFSET_SECS: i32 = 7 * 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    pub upvotes: u32,
    pub downvotes: u32,
}

impl VoteTally {
    pub fn total(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }
}

pub trait Presenter: Send + Sync {
    fn avatar(&self, name: Option<&str>) -> String;
    fn review_votes(&self) -> VoteTally;
    fn reply_upvotes(&self) -> u32;
}

pub type SharedPresenter = Arc<dyn Presenter>;

/// randomuser.me portraits and random vote counts, as the demo front-end expects
pub struct RandomPresenter;

impl Presenter for RandomPresenter {
    fn avatar(&self, _name: Option<&str>) -> String {
        let mut rng = rand::thread_rng();
        let gender = if rng.gen_bool(0.5) { "men" } else { "women" };
        portrait_url(gender, rng.gen_range(0..50))
    }

    fn review_votes(&self) -> VoteTally {
        let mut rng = rand::thread_rng();
        VoteTally {
            upvotes: rng.gen_range(0..15),
            downvotes: rng.gen_range(0..5),
        }
    }

    fn reply_upvotes(&self) -> u32 {
        rand::thread_rng().gen_range(0..10)
    }
}

/// Deterministic output; the avatar is derived from the author name
pub struct StaticPresenter;

impl Presenter for StaticPresenter {
    fn avatar(&self, name: Option<&str>) -> String {
        let seed: u32 = name
            .unwrap_or_default()
            .chars()
            .fold(0u32, |acc, c| acc.wrapping_mul(31).wrapping_add(c as u32));
        let gender = if seed % 2 == 0 { "men" } else { "women" };
        portrait_url(gender, seed % 50)
    }

    fn review_votes(&self) -> VoteTally {
        VoteTally {
            upvotes: 0,
            downvotes: 0,
        }
    }

    fn reply_upvotes(&self) -> u32 {
        0
    }
}

fn portrait_url(gender: &str, id: u32) -> String {
    format!("https://randomuser.me/api/portraits/{}/{}.jpg", gender, id)
}

pub fn presenter(randomize: bool) -> SharedPresenter {
    if randomize {
        Arc::new(RandomPresenter)
    } else {
        Arc::new(StaticPresenter)
    }
}

/// Render an ISO-8601 timestamp the way vi-VN locales show it, e.g. `9:05 3/1/2025`
pub fn format_vietnamese_time(timestamp: Option<&str>) -> String {
    let Some(offset) = FixedOffset::east_opt(VIETNAM_OFFSET_SECS) else {
        return messages::INVALID_DATE.to_string();
    };

    timestamp
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|time| {
            time.with_timezone(&offset)
                .format("%-H:%M %-d/%-m/%Y")
                .to_string()
        })
        .unwrap_or_else(|| messages::INVALID_DATE.to_string())
}
