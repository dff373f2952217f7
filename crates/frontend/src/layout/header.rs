use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();

    let user_name = move || session.user().map(|u| u.name).unwrap_or_default();

    view! {
        <header class="header">
            <div class="header__brand">"Catalog Admin"</div>
            <div class="header__right">
                <span class="header__user">{user_name}</span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| session.logout()
                    attr:title="Sign out"
                >
                    {icon("logout")}
                    " Sign out"
                </Button>
            </div>
        </header>
    }
}
