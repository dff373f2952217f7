use leptos::prelude::*;

use crate::shared::icons::icon;

/// Modal dialog with overlay. Clicking the overlay or the close button calls
/// `on_close`; clicks inside the dialog do not propagate.
#[component]
pub fn Modal<F>(title: String, on_close: F, children: Children) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="modal-close" on:click=move |_| on_close()>
                        {icon("x")}
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
