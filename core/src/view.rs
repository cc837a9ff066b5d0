use uuid::Uuid;

use crate::labels::Labels;
use crate::store::TaskStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

/// Everything the dashboard renders, derived from the store on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub total_count: usize,
    pub completed_count: usize,
    /// "{completed} de {total}", or "0" for an empty list.
    pub completed_summary: String,
    pub is_empty: bool,
    pub can_submit: bool,
    pub pending_input: String,
    pub rows: Vec<TaskRow>,
}

impl DashboardView {
    pub fn derive(store: &TaskStore, labels: &Labels) -> Self {
        let total_count = store.total_count();
        let completed_count = store.completed_count();

        let rows = store
            .tasks()
            .iter()
            .map(|t| TaskRow {
                id: t.id,
                text: t.text.clone(),
                completed: t.completed,
            })
            .collect();

        Self {
            total_count,
            completed_count,
            completed_summary: completed_summary(completed_count, total_count, labels),
            is_empty: store.is_empty(),
            can_submit: store.can_submit(),
            pending_input: store.pending_input().to_string(),
            rows,
        }
    }
}

pub fn completed_summary(completed: usize, total: usize, labels: &Labels) -> String {
    if total > 0 {
        format!("{} {} {}", completed, labels.of, total)
    } else {
        "0".to_string()
    }
}
