use leptos::prelude::*;

use crate::catalog::category::ui::list::CategoriesPage;
use crate::catalog::product::ui::list::ProductsPage;
use crate::catalog::sub_category::ui::list::SubCategoriesPage;
use crate::catalog::wishlist::ui::list::WishlistPage;
use crate::dashboard::DashboardPage;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::{RequireAdmin, RequireAuth};
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;

/// Top-level view selection. Until the stored token has been checked a
/// splash is shown; unauthenticated users toggle between login and
/// registration; everyone else gets the shell.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    let (show_register, set_show_register) = signal(false);

    let show_login_cb = Callback::new(move |_| set_show_register.set(false));
    let show_register_cb = Callback::new(move |_| set_show_register.set(true));

    view! {
        {move || {
            if session.loading() {
                view! {
                    <div class="splash">"Loading..."</div>
                }.into_any()
            } else if !session.is_authenticated() {
                if show_register.get() {
                    view! { <RegisterPage on_show_login=show_login_cb /> }.into_any()
                } else {
                    view! { <LoginPage on_show_register=show_register_cb /> }.into_any()
                }
            } else {
                view! {
                    <RequireAuth>
                        <MainLayout />
                    </RequireAuth>
                }.into_any()
            }
        }}
    }
}

/// Catalog management pages are admin-only; the rest is open to any
/// authenticated user.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Shell>
            {move || match ctx.current_page.get() {
                Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                Page::Categories => view! {
                    <RequireAdmin>
                        <CategoriesPage />
                    </RequireAdmin>
                }.into_any(),
                Page::SubCategories => view! {
                    <RequireAdmin>
                        <SubCategoriesPage />
                    </RequireAdmin>
                }.into_any(),
                Page::Products => view! { <ProductsPage /> }.into_any(),
                Page::Wishlist => view! { <WishlistPage /> }.into_any(),
            }}
        </Shell>
    }
}
