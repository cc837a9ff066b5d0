use tracing::debug;
use uuid::Uuid;

use crate::model::task::Task;

/// Notification sent to subscribers after the store actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    TaskAdded(Uuid),
    TaskToggled { id: Uuid, completed: bool },
    TaskDeleted(Uuid),
    PendingInputChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// In-memory task list plus the draft text of the next task.
///
/// Tasks keep insertion order. Toggling and deleting never reorder the
/// remaining tasks, and unknown ids are ignored.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    pending_input: String,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Appends a task unless `text` is blank, then clears the pending input.
    pub fn add_task(&mut self, text: &str) -> Option<Uuid> {
        if text.trim().is_empty() {
            debug!("ignoring blank task");
            return None;
        }

        let task = Task::new(text.to_string());
        let id = task.id;
        self.tasks.push(task);
        debug!(%id, "task added");
        self.notify(&StoreEvent::TaskAdded(id));

        if !self.pending_input.is_empty() {
            self.pending_input.clear();
            self.notify(&StoreEvent::PendingInputChanged);
        }
        Some(id)
    }

    /// Commits the pending input as a new task.
    pub fn submit(&mut self) -> Option<Uuid> {
        let text = self.pending_input.clone();
        self.add_task(&text)
    }

    pub fn toggle_task(&mut self, id: &Uuid) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == *id) else {
            debug!(%id, "toggle on unknown task");
            return false;
        };
        task.toggle();
        let completed = task.completed;
        debug!(%id, completed, "task toggled");
        self.notify(&StoreEvent::TaskToggled { id: *id, completed });
        true
    }

    pub fn delete_task(&mut self, id: &Uuid) -> bool {
        let Some(pos) = self.tasks.iter().position(|t| t.id == *id) else {
            debug!(%id, "delete on unknown task");
            return false;
        };
        self.tasks.remove(pos);
        debug!(%id, "task deleted");
        self.notify(&StoreEvent::TaskDeleted(*id));
        true
    }

    pub fn set_pending_input(&mut self, text: &str) {
        if self.pending_input == text {
            return;
        }
        self.pending_input = text.to_string();
        self.notify(&StoreEvent::PendingInputChanged);
    }

    // Derived values

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.pending_input.trim().is_empty()
    }

    // Subscriptions

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: &StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}
