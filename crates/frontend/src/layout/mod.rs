pub mod global_context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use crate::shared::toast::ToastHost;
use header::Header;
use sidebar::Sidebar;

/// Application shell: header on top, sidebar on the left, page content in
/// the center. The toast stack overlays everything.
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="shell">
            <Header />
            <div class="shell__body">
                <Sidebar />
                <main class="shell__content">
                    {children()}
                </main>
            </div>
            <ToastHost />
        </div>
    }
}
