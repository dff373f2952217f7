use leptos::prelude::*;

use super::global_context::{use_app_context, NAV_PAGES};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="sidebar">
            {NAV_PAGES
                .into_iter()
                .map(|page| {
                    view! {
                        <button
                            class=move || {
                                if ctx.current_page.get() == page {
                                    "sidebar__item sidebar__item--active"
                                } else {
                                    "sidebar__item"
                                }
                            }
                            on:click=move |_| ctx.navigate(page)
                        >
                            {icon(page.icon_name())}
                            <span>{page.title()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
