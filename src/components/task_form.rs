//! Task Form Component
//!
//! Form for creating new tasks. A blank title is rejected locally and never
//! reaches the server; successful creates are prepended to the list without
//! a full reload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::format::validate_title;
use crate::models::NewTask;
use crate::store::{store_prepend_task, use_app_store};

#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let raw_title = title.get();
        let Some(trimmed) = validate_title(&raw_title) else {
            ctx.notify_error("A task title is required");
            return;
        };
        // One create at a time; re-enabled once the request resolves
        if submitting.get() {
            return;
        }

        let new_title = trimmed.to_string();
        let new_description = description.get().trim().to_string();
        set_submitting.set(true);

        spawn_local(async move {
            let body = NewTask {
                title: &new_title,
                description: &new_description,
                completed: false,
            };
            match api::create_task(&body).await {
                Ok(created) => {
                    tracing::info!(id = created.id, "task created");
                    store_prepend_task(&store, created);
                    set_title.set(String::new());
                    set_description.set(String::new());
                    ctx.notify_success("Task added");
                }
                Err(err) => {
                    tracing::error!(%err, "create task failed");
                    ctx.notify_error(format!("Could not add the task: {err}"));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="task-form" on:submit=create_task>
            <input
                type="text"
                class="task-form-title"
                placeholder="What needs doing?"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <textarea
                class="task-form-description"
                placeholder="Details (optional)"
                prop:value=move || description.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_description.set(area.value());
                }
            ></textarea>
            <button type="submit" prop:disabled=move || submitting.get()>
                {move || if submitting.get() { "Adding…" } else { "Add task" }}
            </button>
        </form>
    }
}
