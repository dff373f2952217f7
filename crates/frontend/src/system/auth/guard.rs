use leptos::prelude::*;

use super::context::use_session;

/// Component that requires authentication.
/// Shows fallback if not authenticated.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <div>"Not authenticated. Please login."</div> }
        >
            {children()}
        </Show>
    }
}

/// Component that requires the admin role.
/// Shows fallback if the current user is not an admin.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated() && session.is_admin()
            fallback=|| view! { <div>"Access denied. Admin privileges required."</div> }
        >
            {children()}
        </Show>
    }
}
