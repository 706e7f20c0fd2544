//! Toast Component
//!
//! Renders the current notification from context, if any. Auto-dismissal is
//! handled by the context; the close button dismisses early.

use leptos::prelude::*;

use crate::context::{AppContext, ToastLevel};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.toast.get().map(|toast| {
            let class = match toast.level {
                ToastLevel::Success => "toast toast-success",
                ToastLevel::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status">
                    <span class="toast-message">{toast.message}</span>
                    <button class="toast-close" on:click=move |_| ctx.dismiss_toast()>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
