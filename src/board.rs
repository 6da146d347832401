//! Read-only projections of the item store: filtering and per-profile
//! grouping for the cross-profile board, plus the single-profile detail
//! listing. Everything here is a pure function of its inputs and safe to
//! re-derive on every store change.

use std::collections::HashMap;

use crate::core::profile::Profile;
use crate::core::work_item::{WorkItem, WorkPriority, WorkStatus};

/// The board's two independent selectors. `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardFilter {
    pub status: Option<WorkStatus>,
    pub priority: Option<WorkPriority>,
}

impl BoardFilter {
    pub fn matches(&self, item: &WorkItem) -> bool {
        let ok_status = self.status.is_none_or(|s| item.status == s);
        let ok_priority = self.priority.is_none_or(|p| item.priority == p);
        ok_status && ok_priority
    }
}

/// One board lane: a known profile and its filtered items, in store order.
/// Profiles with no matching items still get a lane (rendered as an
/// explicit empty state).
#[derive(Debug)]
pub struct ProfileLane<'a> {
    pub profile: &'a Profile,
    pub items: Vec<&'a WorkItem>,
}

/// A lane for items whose `profile_key` matches no known profile. The key
/// itself serves as the display label.
#[derive(Debug)]
pub struct OrphanLane<'a> {
    pub profile_key: &'a str,
    pub items: Vec<&'a WorkItem>,
}

/// The fully derived cross-profile board.
#[derive(Debug)]
pub struct BoardView<'a> {
    pub lanes: Vec<ProfileLane<'a>>,
    pub orphans: Vec<OrphanLane<'a>>,
}

/// Items passing both selector predicates, in store order.
pub fn filter_items<'a>(items: &'a [WorkItem], filter: BoardFilter) -> Vec<&'a WorkItem> {
    items.iter().filter(|i| filter.matches(i)).collect()
}

/// Partition the filtered items by profile, iterating the known profile
/// list in its given order. Items referencing an unknown profile key land
/// in `orphans`, one lane per key in first-seen order.
pub fn board_view<'a>(
    profiles: &'a [Profile],
    items: &'a [WorkItem],
    filter: BoardFilter,
) -> BoardView<'a> {
    let mut by_key: HashMap<&str, Vec<&WorkItem>> = HashMap::new();
    let mut seen_keys: Vec<&str> = Vec::new();
    for item in items.iter().filter(|i| filter.matches(i)) {
        let bucket = by_key.entry(item.profile_key.as_str()).or_default();
        if bucket.is_empty() {
            seen_keys.push(item.profile_key.as_str());
        }
        bucket.push(item);
    }

    let lanes = profiles
        .iter()
        .map(|profile| ProfileLane {
            profile,
            items: by_key.remove(profile.key.as_str()).unwrap_or_default(),
        })
        .collect();

    // Whatever is left in the map never matched a known profile.
    let orphans = seen_keys
        .into_iter()
        .filter_map(|key| {
            by_key.remove(key).map(|items| OrphanLane {
                profile_key: key,
                items,
            })
        })
        .collect();

    BoardView { lanes, orphans }
}

/// The single-profile detail view: every item for one profile, unfiltered,
/// in store order.
pub fn profile_items<'a>(items: &'a [WorkItem], profile_key: &str) -> Vec<&'a WorkItem> {
    items
        .iter()
        .filter(|i| i.profile_key == profile_key)
        .collect()
}
