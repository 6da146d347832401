use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    Backlog,
    InProgress,
    Done,
}

impl WorkStatus {
    /// Every status, in the order the controls offer them.
    pub const ALL: [WorkStatus; 3] = [Self::Backlog, Self::InProgress, Self::Done];

    /// The wire keyword, as the remote service spells it.
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "backlog" => Some(Self::Backlog),
            "in_progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Human-readable form for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl WorkPriority {
    /// Every priority, lowest first.
    pub const ALL: [WorkPriority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

/// A trackable task with status and priority, belonging to exactly one
/// profile. The id is assigned by the remote authority; no item exists
/// client-side before the service has confirmed it.
///
/// `assignee` and `notes` go over the wire as explicit `null` when empty,
/// never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: String,
    pub profile_key: String,
    pub title: String,
    pub status: WorkStatus,
    pub priority: WorkPriority,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkItem {
    /// The proposed next value after applying a partial change.
    pub fn merged(&self, patch: WorkItemPatch) -> WorkItem {
        let mut next = self.clone();
        if let Some(status) = patch.status {
            next.status = status;
        }
        if let Some(priority) = patch.priority {
            next.priority = priority;
        }
        next
    }
}

/// The creation payload: a work item minus the server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewWorkItem {
    pub profile_key: String,
    pub title: String,
    pub status: WorkStatus,
    pub priority: WorkPriority,
    pub assignee: Option<String>,
    pub notes: Option<String>,
}

/// A partial change to an existing item. Only status and priority are
/// mutable after creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkItemPatch {
    pub status: Option<WorkStatus>,
    pub priority: Option<WorkPriority>,
}

impl WorkItemPatch {
    pub fn status(status: WorkStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn priority(priority: WorkPriority) -> Self {
        Self {
            priority: Some(priority),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }
}
