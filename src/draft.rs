use crate::core::work_item::{NewWorkItem, WorkItem, WorkPriority, WorkStatus};
use crate::sync::{SyncEngine, SyncError, WorkItemService};

/// One field edit on the draft form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Title(String),
    Status(WorkStatus),
    Priority(WorkPriority),
    Assignee(String),
    Notes(String),
}

/// The transient, not-yet-submitted new-item form.
///
/// `submitting` guards against double submission: while a create is in
/// flight, further submits are rejected without touching the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftForm {
    pub title: String,
    pub status: WorkStatus,
    pub priority: WorkPriority,
    pub assignee: String,
    pub notes: String,
    pub submitting: bool,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            status: WorkStatus::Backlog,
            priority: WorkPriority::Medium,
            assignee: String::new(),
            notes: String::new(),
            submitting: false,
        }
    }
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a single field. No validation happens here.
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Title(v) => self.title = v,
            DraftField::Status(v) => self.status = v,
            DraftField::Priority(v) => self.priority = v,
            DraftField::Assignee(v) => self.assignee = v,
            DraftField::Notes(v) => self.notes = v,
        }
    }

    /// The creation payload this draft would submit, or `None` when the
    /// trimmed title is empty. Empty assignee/notes are submitted as none.
    pub fn validated(&self, profile_key: &str) -> Option<NewWorkItem> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        Some(NewWorkItem {
            profile_key: profile_key.to_string(),
            title: title.to_string(),
            status: self.status,
            priority: self.priority,
            assignee: (!self.assignee.is_empty()).then(|| self.assignee.clone()),
            notes: (!self.notes.is_empty()).then(|| self.notes.clone()),
        })
    }

    /// Back to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Submit the draft as a new work item for the given profile.
    ///
    /// Rejected locally (`Ok(None)`, no remote call, no state change) when
    /// a submit is already in flight or the title is blank. On success the
    /// fields reset to defaults; on failure they are preserved so the user
    /// can retry. Either way `submitting` is cleared before returning.
    pub async fn submit<S: WorkItemService>(
        &mut self,
        profile_key: &str,
        sync: &mut SyncEngine<S>,
    ) -> Result<Option<WorkItem>, SyncError> {
        if self.submitting {
            log::debug!("draft submit while already submitting, ignored");
            return Ok(None);
        }
        let Some(item) = self.validated(profile_key) else {
            log::debug!("draft submit with blank title, ignored");
            return Ok(None);
        };

        self.submitting = true;
        let result = sync.create(item).await;
        self.submitting = false;

        match result {
            Ok(created) => {
                self.reset();
                Ok(Some(created))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::Profile;
    use crate::sync::api::ApiError;
    use reqwest::StatusCode;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Create-only stand-in for the remote service.
    #[derive(Clone, Default)]
    struct FakeService {
        create_results: Rc<RefCell<VecDeque<Result<WorkItem, ApiError>>>>,
        create_calls: Rc<Cell<usize>>,
    }

    impl WorkItemService for FakeService {
        async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
            Ok(Vec::new())
        }

        async fn list_work_items(&self, _key: Option<&str>) -> Result<Vec<WorkItem>, ApiError> {
            Ok(Vec::new())
        }

        async fn create_work_item(&self, item: &NewWorkItem) -> Result<WorkItem, ApiError> {
            self.create_calls.set(self.create_calls.get() + 1);
            self.create_results.borrow_mut().pop_front().unwrap_or_else(|| {
                Ok(WorkItem {
                    id: "srv-1".to_string(),
                    profile_key: item.profile_key.clone(),
                    title: item.title.clone(),
                    status: item.status,
                    priority: item.priority,
                    assignee: item.assignee.clone(),
                    notes: item.notes.clone(),
                })
            })
        }

        async fn update_work_item(&self, item: &WorkItem) -> Result<WorkItem, ApiError> {
            Ok(item.clone())
        }
    }

    fn filled_draft() -> DraftForm {
        let mut draft = DraftForm::new();
        draft.apply(DraftField::Title("  Rebuild intake shelf  ".to_string()));
        draft.apply(DraftField::Priority(WorkPriority::High));
        draft.apply(DraftField::Assignee("mel".to_string()));
        draft
    }

    #[test]
    fn defaults() {
        let draft = DraftForm::new();
        assert_eq!(draft.title, "");
        assert_eq!(draft.status, WorkStatus::Backlog);
        assert_eq!(draft.priority, WorkPriority::Medium);
        assert_eq!(draft.assignee, "");
        assert_eq!(draft.notes, "");
        assert!(!draft.submitting);
    }

    #[test]
    fn apply_replaces_one_field_at_a_time() {
        let mut draft = DraftForm::new();
        draft.apply(DraftField::Title("A".to_string()));
        draft.apply(DraftField::Status(WorkStatus::Done));
        assert_eq!(draft.title, "A");
        assert_eq!(draft.status, WorkStatus::Done);
        assert_eq!(draft.priority, WorkPriority::Medium);
    }

    #[test]
    fn validated_trims_title_and_drops_empty_optionals() {
        let draft = filled_draft();
        let item = draft.validated("service").unwrap();
        assert_eq!(item.title, "Rebuild intake shelf");
        assert_eq!(item.profile_key, "service");
        assert_eq!(item.assignee.as_deref(), Some("mel"));
        assert_eq!(item.notes, None);
    }

    #[test]
    fn validated_rejects_whitespace_only_title() {
        let mut draft = DraftForm::new();
        draft.apply(DraftField::Title("   ".to_string()));
        assert!(draft.validated("service").is_none());
    }

    #[tokio::test]
    async fn blank_title_submit_makes_no_remote_call() {
        let service = FakeService::default();
        let mut engine = SyncEngine::new(service.clone());
        let mut draft = DraftForm::new();

        let outcome = draft.submit("service", &mut engine).await.unwrap();
        assert!(outcome.is_none());
        assert_eq!(service.create_calls.get(), 0);
        assert!(engine.store().is_empty());
    }

    #[tokio::test]
    async fn submit_while_submitting_is_rejected() {
        let service = FakeService::default();
        let mut engine = SyncEngine::new(service.clone());
        let mut draft = filled_draft();
        draft.submitting = true;

        let outcome = draft.submit("service", &mut engine).await.unwrap();
        assert!(outcome.is_none());
        assert_eq!(service.create_calls.get(), 0);
        // Fields untouched, flag still held by the in-flight submit.
        assert_eq!(draft.title, "  Rebuild intake shelf  ");
        assert!(draft.submitting);
    }

    #[tokio::test]
    async fn successful_submit_resets_fields_and_prepends_item() {
        let service = FakeService::default();
        let mut engine = SyncEngine::new(service.clone());
        engine.initialize(vec![WorkItem {
            id: "w0".to_string(),
            profile_key: "service".to_string(),
            title: "Existing".to_string(),
            status: WorkStatus::Backlog,
            priority: WorkPriority::Low,
            assignee: None,
            notes: None,
        }]);
        let mut draft = filled_draft();

        let created = draft.submit("service", &mut engine).await.unwrap().unwrap();
        assert_eq!(created.id, "srv-1");
        assert_eq!(engine.store().all()[0].id, "srv-1");
        assert_eq!(draft, DraftForm::default());
    }

    #[tokio::test]
    async fn failed_submit_preserves_fields_and_store() {
        let service = FakeService::default();
        service.create_results.borrow_mut().push_back(Err(ApiError::Status {
            method: "POST",
            url: "http://127.0.0.1:8000/work-items".to_string(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }));
        let mut engine = SyncEngine::new(service.clone());
        let mut draft = filled_draft();
        let before = draft.clone();

        let result = draft.submit("service", &mut engine).await;
        assert!(result.is_err());
        assert!(engine.store().is_empty());
        assert!(!draft.submitting);
        // Everything but the flag is as the user left it.
        assert_eq!(draft.title, before.title);
        assert_eq!(draft.priority, before.priority);
        assert_eq!(draft.assignee, before.assignee);
    }
}
