//! Task List Component
//!
//! Projects the store onto one of three mutually exclusive views:
//! loading, empty state, or the populated list.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    let loaded_and_empty = move || !store.loading().get() && store.tasks().read().is_empty();
    let populated = move || !store.loading().get() && !store.tasks().read().is_empty();

    view! {
        <Show when=move || store.loading().get()>
            <div class="loading-spinner">"Loading tasks…"</div>
        </Show>

        <Show when=loaded_and_empty>
            <div class="empty-state">
                <p>"No tasks yet"</p>
                <p class="empty-state-hint">"Add your first task with the form above."</p>
            </div>
        </Show>

        <Show when=populated>
            <div class="task-list">
                <For
                    each=move || store.tasks().get()
                    key=|task| (task.id, task.completed, task.title.clone(), task.updated_at.clone())
                    children=move |task| view! { <TaskItem task=task/> }
                />
            </div>
        </Show>
    }
}
