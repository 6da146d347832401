use serde::{Deserialize, Serialize};

/// A fixed category (profession/role) that work items are organized under.
///
/// Profiles are loaded once from the remote service and never mutated
/// client-side. `key` is the stable routing/grouping handle; `id` is the
/// remote authority's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Profile {
    pub fn new(id: impl Into<String>, key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            label: label.into(),
            description: None,
        }
    }
}
