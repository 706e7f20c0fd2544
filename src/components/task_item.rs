//! Task Item Component
//!
//! A single task row: completion toggle, inline rename, delete with
//! confirmation, and the created/modified timestamps. All server updates go
//! through the store; the row itself never mutates on a failed request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::format::{format_timestamp, validate_title, was_modified};
use crate::models::{Task, TaskPatch};
use crate::store::{
    store_begin_request, store_finish_request, store_remove_task, store_update_task,
    task_is_busy, use_app_store,
};
use crate::components::DeleteConfirmButton;

/// A single task row
#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;
    let title = task.title.clone();
    let initial_title = task.title.clone();
    let description = task.description.clone();
    let created_label = format_timestamp(&task.created_at);
    let modified_label =
        was_modified(&task).then(|| format!(" • Modified {}", format_timestamp(&task.updated_at)));

    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(String::new());

    let busy = Signal::derive(move || task_is_busy(&store, id));

    let toggle = move |_| {
        if !store_begin_request(&store, id) {
            return;
        }
        let next = !completed;
        spawn_local(async move {
            match api::update_task(id, &TaskPatch::completed(next)).await {
                Ok(updated) => {
                    store_update_task(&store, updated);
                    ctx.notify_success(if next {
                        "Task marked as done"
                    } else {
                        "Task marked as not done"
                    });
                }
                Err(err) => {
                    tracing::error!(%err, id, "toggle failed");
                    ctx.notify_error(format!("Could not update the task: {err}"));
                }
            }
            store_finish_request(&store, id);
        });
    };

    let start_rename = move |_| {
        set_edit_title.set(initial_title.clone());
        set_editing.set(true);
    };

    // Blank input just closes the editor; no request is sent
    let save_rename = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_editing.set(false);

        let raw = edit_title.get();
        let Some(trimmed) = validate_title(&raw) else {
            return;
        };
        let new_title = trimmed.to_string();
        if !store_begin_request(&store, id) {
            return;
        }
        spawn_local(async move {
            match api::update_task(id, &TaskPatch::title(&new_title)).await {
                Ok(updated) => {
                    store_update_task(&store, updated);
                    ctx.notify_success("Task renamed");
                }
                Err(err) => {
                    tracing::error!(%err, id, "rename failed");
                    ctx.notify_error(format!("Could not rename the task: {err}"));
                }
            }
            store_finish_request(&store, id);
        });
    };

    let delete = Callback::new(move |_| {
        if !store_begin_request(&store, id) {
            return;
        }
        spawn_local(async move {
            match api::delete_task(id).await {
                Ok(()) => {
                    store_remove_task(&store, id);
                    ctx.notify_success("Task deleted");
                }
                Err(err) => {
                    tracing::error!(%err, id, "delete failed");
                    ctx.notify_error(format!("Could not delete the task: {err}"));
                }
            }
            store_finish_request(&store, id);
        });
    });

    view! {
        <div class=if completed { "task-item completed" } else { "task-item" }>
            <button
                class=if completed { "toggle-btn done" } else { "toggle-btn" }
                title=if completed { "Mark as not done" } else { "Mark as done" }
                prop:disabled=move || busy.get()
                on:click=toggle
            >
                {if completed { "✓" } else { "○" }}
            </button>

            <div class="task-body">
                <Show when=move || !editing.get()>
                    <h3 class="task-title">{title.clone()}</h3>
                </Show>
                <Show when=move || editing.get()>
                    <form class="rename-form" on:submit=save_rename>
                        <input
                            type="text"
                            class="rename-input"
                            prop:value=move || edit_title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_edit_title.set(input.value());
                            }
                        />
                        <button
                            type="submit"
                            class="confirm-btn"
                            prop:disabled=move || busy.get()
                        >
                            "✓"
                        </button>
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |_| set_editing.set(false)
                        >
                            "✗"
                        </button>
                    </form>
                </Show>

                {(!description.is_empty()).then(|| view! {
                    <p class="task-description">{description.clone()}</p>
                })}

                <small class="task-meta">
                    "Created " {created_label}
                    {modified_label}
                </small>
            </div>

            <div class="task-actions">
                <button
                    class="edit-btn"
                    title="Rename task"
                    prop:disabled=move || busy.get()
                    on:click=start_rename
                >
                    "✎"
                </button>
                <DeleteConfirmButton button_class="delete-btn" disabled=busy on_confirm=delete/>
            </div>
        </div>
    }
}
