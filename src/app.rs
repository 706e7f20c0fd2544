//! Task List Frontend App
//!
//! Root component: provides the store and context, loads the task list on
//! mount and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{TaskForm, TaskList, ToastHost};
use crate::context::{AppContext, Toast};
use crate::format::task_count_label;
use crate::store::{store_set_tasks, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (toast, set_toast) = signal(None::<Toast>);
    let ctx = AppContext::new((toast, set_toast));
    provide_context(ctx);

    // Initial load; prior state stays untouched if the fetch fails
    Effect::new(move |_| {
        store.loading().set(true);
        spawn_local(async move {
            match api::list_tasks().await {
                Ok(tasks) => {
                    tracing::info!(count = tasks.len(), "loaded tasks");
                    store_set_tasks(&store, tasks);
                }
                Err(err) => {
                    tracing::error!(%err, "loading tasks failed");
                    ctx.notify_error(format!("Could not load tasks: {err}"));
                }
            }
            store.loading().set(false);
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"My Tasks"</h1>

                <TaskForm/>

                <TaskList/>

                <p class="task-count">
                    {move || task_count_label(store.tasks().read().len())}
                </p>
            </main>

            <ToastHost/>
        </div>
    }
}
