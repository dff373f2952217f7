pub mod state;

use contracts::catalog::{Category, Product, SubCategory};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::{create_state, sub_categories_for, FetchSeq};
use super::details::ProductForm;
use crate::catalog::product::api;
use crate::catalog::{category, sub_category, wishlist};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_session;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let state = create_state();
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let sub_categories: RwSignal<Vec<SubCategory>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);
    let (show_add_form, set_show_add_form) = signal(false);
    let editing: RwSignal<Option<Product>> = RwSignal::new(None);
    let seq: RwSignal<FetchSeq> = RwSignal::new(FetchSeq::default());

    let toasts = use_toast();
    let session = use_session();

    // Filter options are loaded once; the product list itself re-fetches
    // whenever the query changes.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(data) = category::api::list().await {
                categories.set(data);
            }
        });
        spawn_local(async move {
            if let Ok(data) = sub_category::api::list().await {
                sub_categories.set(data);
            }
        });
    });

    let fetch = move || {
        let query = state.with_untracked(|s| s.query());
        let ticket = seq.try_update(|s| s.next()).unwrap_or(0);
        set_loading.set(true);
        spawn_local(async move {
            let result = api::list(&query).await;
            // A newer fetch may have started while this one was in flight.
            if !seq.with_untracked(|s| s.is_current(ticket)) {
                return;
            }
            match result {
                Ok(page) => {
                    products.set(page.products);
                    state.update(|s| s.apply(&page.pagination));
                    set_error.set(None);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e.message()));
                    set_loading.set(false);
                }
            }
        });
    };

    // `apply` rewrites totals without changing the query, so keying the
    // effect on the query memo keeps it from re-firing on its own result.
    let query = Memo::new(move |_| state.with(|s| s.query()));
    Effect::new(move |_| {
        query.track();
        fetch();
    });

    let add_to_wishlist = move |product_id: String| {
        spawn_local(async move {
            match wishlist::api::add(&product_id).await {
                Ok(_) => toasts.success("Product added to wishlist"),
                Err(e) if e.is_conflict() => {
                    toasts.error("Product is already in your wishlist")
                }
                Err(e) => toasts.error(e.message()),
            }
        });
    };

    let delete = move |product: Product| {
        if !confirm(&format!("Are you sure to delete {} ?", product.name)) {
            return;
        }
        spawn_local(async move {
            match api::remove(&product.id).await {
                Ok(()) => {
                    toasts.success("Product deleted");
                    fetch();
                }
                Err(e) => toasts.error(e.message()),
            }
        });
    };

    let filter_subs = Memo::new(move |_| {
        let category_id = state.with(|s| s.category_id.clone());
        sub_categories_for(&sub_categories.get(), &category_id)
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                    <Badge>{move || state.with(|s| s.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    {move || session.is_admin().then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| set_show_add_form.set(true)
                        >
                            {icon("plus")}
                            " Add Product"
                        </Button>
                    })}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="filters">
                <div class="filters__search">
                    {icon("search")}
                    <input
                        class="form__input"
                        placeholder="Search products..."
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=move |ev| {
                            state.update(|s| s.set_search(event_target_value(&ev)))
                        }
                    />
                </div>
                <select
                    class="form__select"
                    prop:value=move || state.with(|s| s.category_id.clone())
                    on:change=move |ev| {
                        state.update(|s| s.set_category(event_target_value(&ev)))
                    }
                >
                    <option value="">"All categories"</option>
                    {move || {
                        let selected_id = state.with(|s| s.category_id.clone());
                        categories
                            .get()
                            .into_iter()
                            .map(|c| {
                                let selected = c.id == selected_id;
                                view! {
                                    <option value=c.id.clone() selected=selected>{c.name.clone()}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <select
                    class="form__select"
                    prop:value=move || state.with(|s| s.sub_category_id.clone())
                    on:change=move |ev| {
                        state.update(|s| s.set_sub_category(event_target_value(&ev)))
                    }
                    disabled=move || state.with(|s| s.category_id.is_empty())
                >
                    <option value="">"All subcategories"</option>
                    {move || {
                        let selected_id = state.with(|s| s.sub_category_id.clone());
                        filter_subs
                            .get()
                            .into_iter()
                            .map(|s| {
                                let selected = s.id == selected_id;
                                view! {
                                    <option value=s.id.clone() selected=selected>{s.name.clone()}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            <th style="width: 50px;">"SN"</th>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"Subcategory"</th>
                            <th>"Variants"</th>
                            <th style="width: 160px;">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = products.get();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="6" class="table__empty">
                                            {if loading.get() { "Loading..." } else { "No products found" }}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                let (page, limit) = state.with(|s| (s.page, s.limit));
                                items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, product)| {
                                        let sn = (page - 1) * limit + index + 1;
                                        let variants_label = if product.variants.len() == 1 {
                                            "1 variant".to_string()
                                        } else {
                                            format!("{} variants", product.variants.len())
                                        };
                                        let product_id = product.id.clone();
                                        let for_edit = product.clone();
                                        let for_delete = product.clone();
                                        view! {
                                            <tr>
                                                <td>{sn}</td>
                                                <td>{product.name.clone()}</td>
                                                <td>
                                                    {product
                                                        .category
                                                        .as_ref()
                                                        .map(|c| c.name.clone())
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td>
                                                    {product
                                                        .sub_category
                                                        .as_ref()
                                                        .map(|s| s.name.clone())
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td>{variants_label}</td>
                                                <td>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| add_to_wishlist(product_id.clone())
                                                        attr:title="Add to wishlist"
                                                    >
                                                        {icon("heart")}
                                                    </Button>
                                                    {session.is_admin().then(|| view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| editing.set(Some(for_edit.clone()))
                                                            attr:title="Edit"
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| delete(for_delete.clone())
                                                            attr:title="Delete"
                                                        >
                                                            {icon("trash")}
                                                        </Button>
                                                    })}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.pages))
                total_count=Signal::derive(move || state.with(|s| s.total))
                on_page_change=Callback::new(move |page| state.update(|s| s.set_page(page)))
            />

            {move || if show_add_form.get() {
                view! {
                    <ProductForm
                        product=None
                        categories=categories.get()
                        sub_categories=sub_categories.get()
                        on_close=move || set_show_add_form.set(false)
                        on_saved=move || {
                            set_show_add_form.set(false);
                            fetch();
                        }
                    />
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

            {move || editing.get().map(|product| view! {
                <ProductForm
                    product=Some(product)
                    categories=categories.get()
                    sub_categories=sub_categories.get()
                    on_close=move || editing.set(None)
                    on_saved=move || {
                        editing.set(None);
                        fetch();
                    }
                />
            })}
        </div>
    }
}
