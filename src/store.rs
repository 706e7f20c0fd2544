//! Global Application State Store
//!
//! The in-memory task collection is the single client-side source of truth;
//! the view is a projection of it. Uses Leptos reactive_stores for
//! fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks, newest first
    pub tasks: Vec<Task>,
    /// Initial list fetch in flight
    pub loading: bool,
    /// Ids of tasks with an in-flight request. Requests are serialized per
    /// task id: a second request for a busy id is refused at the handler.
    pub busy: Vec<u32>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole task list (initial load)
pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
}

/// Insert a freshly created task at the top of the list
pub fn store_prepend_task(store: &AppStore, task: Task) {
    prepend(&mut store.tasks().write(), task);
}

/// Replace a task in the store with the server's updated version
pub fn store_update_task(store: &AppStore, updated: Task) {
    replace_by_id(&mut store.tasks().write(), updated);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: u32) {
    remove_by_id(&mut store.tasks().write(), task_id);
}

/// Mark a task as having an in-flight request; false if one is already
/// running for that id
pub fn store_begin_request(store: &AppStore, task_id: u32) -> bool {
    begin_request(&mut store.busy().write(), task_id)
}

/// Clear a task's in-flight marker once its request resolved
pub fn store_finish_request(store: &AppStore, task_id: u32) {
    store.busy().write().retain(|id| *id != task_id);
}

/// Reactive check used to disable a row's actions while it is busy
pub fn task_is_busy(store: &AppStore, task_id: u32) -> bool {
    store.busy().get().contains(&task_id)
}

fn prepend(tasks: &mut Vec<Task>, task: Task) {
    tasks.insert(0, task);
}

fn replace_by_id(tasks: &mut Vec<Task>, updated: Task) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == updated.id) {
        *task = updated;
    }
}

fn remove_by_id(tasks: &mut Vec<Task>, task_id: u32) {
    tasks.retain(|task| task.id != task_id);
}

fn begin_request(busy: &mut Vec<u32>, task_id: u32) -> bool {
    if busy.contains(&task_id) {
        return false;
    }
    busy.push(task_id);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            completed,
            created_at: "2024-05-01T10:00:00Z".to_string(),
            updated_at: "2024-05-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn created_task_lands_at_the_top() {
        let mut tasks = vec![task(1, "Old", false)];
        prepend(&mut tasks, task(2, "New", false));

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, 2);
        assert_eq!(tasks[0].title, "New");
        assert_eq!(tasks[1].id, 1);
    }

    #[test]
    fn removal_leaves_the_other_tasks_untouched() {
        let mut tasks = vec![task(1, "One", false), task(2, "Two", true), task(3, "Three", false)];
        remove_by_id(&mut tasks, 2);

        assert_eq!(
            tasks.iter().map(|task| task.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(tasks[0].title, "One");
        assert_eq!(tasks[1].title, "Three");
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut tasks = vec![task(1, "One", false)];
        remove_by_id(&mut tasks, 9);
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn removing_the_last_task_empties_the_list() {
        let mut tasks = vec![task(1, "One", false)];
        remove_by_id(&mut tasks, 1);
        assert!(tasks.is_empty());
    }

    #[test]
    fn replace_touches_only_the_matching_task() {
        let mut tasks = vec![task(1, "One", false), task(2, "Two", false)];
        replace_by_id(&mut tasks, task(2, "Two", true));

        assert!(!tasks[0].completed);
        assert_eq!(tasks[0].title, "One");
        assert!(tasks[1].completed);
    }

    #[test]
    fn replace_ignores_unknown_id() {
        let mut tasks = vec![task(1, "One", false)];
        replace_by_id(&mut tasks, task(9, "Ghost", true));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "One");
    }

    #[test]
    fn second_request_for_same_task_is_refused() {
        let mut busy = Vec::new();
        assert!(begin_request(&mut busy, 5));
        assert!(!begin_request(&mut busy, 5));
        assert!(begin_request(&mut busy, 6));

        busy.retain(|id| *id != 5);
        assert!(begin_request(&mut busy, 5));
    }
}
