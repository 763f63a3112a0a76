// src/domain/hotness.rs
use crate::domain::listing::Listing;

/// Popularity badge shown on listing cards. Display-only, no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotStatus {
    None,
    Hot,
    SuperHot,
}

impl HotStatus {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            HotStatus::None => None,
            HotStatus::Hot => Some("Hot"),
            HotStatus::SuperHot => Some("Super hot"),
        }
    }
}

/// Pluggable classification policy. Thresholds are cosmetic and live only
/// inside the chosen policy function; callers never branch on numbers.
pub type HotPolicy = fn(&Listing) -> HotStatus;

/// Default policy: weigh likes heavier than views. Tune freely without
/// touching any caller.
pub fn default_hot_policy(listing: &Listing) -> HotStatus {
    let score = listing.views_count + listing.likes_count * 10;
    if score >= 500 {
        HotStatus::SuperHot
    } else if score >= 100 {
        HotStatus::Hot
    } else {
        HotStatus::None
    }
}
