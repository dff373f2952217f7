use contracts::catalog::{Category, SubCategory};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::SubCategoryForm;
use crate::catalog::category;
use crate::catalog::sub_category::api;
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

#[component]
pub fn SubCategoriesPage() -> impl IntoView {
    let sub_categories: RwSignal<Vec<SubCategory>> = RwSignal::new(Vec::new());
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);
    let (show_add_form, set_show_add_form) = signal(false);
    let editing: RwSignal<Option<SubCategory>> = RwSignal::new(None);

    let toasts = use_toast();

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::list().await {
                Ok(data) => {
                    sub_categories.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e.message()));
                    set_loading.set(false);
                }
            }
        });
        spawn_local(async move {
            if let Ok(data) = category::api::list().await {
                categories.set(data);
            }
        });
    };

    Effect::new(move |_| {
        load();
    });

    let delete = move |sub_category: SubCategory| {
        if !confirm(&format!("Are you sure to delete {} ?", sub_category.name)) {
            return;
        }
        spawn_local(async move {
            match api::remove(&sub_category.id).await {
                Ok(()) => {
                    toasts.success("Subcategory deleted");
                    load();
                }
                Err(e) => toasts.error(e.message()),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Subcategories"</h1>
                    <Badge>{move || sub_categories.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_add_form.set(true)
                    >
                        {icon("plus")}
                        " Add Subcategory"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            <th style="width: 50px;">"SN"</th>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"Description"</th>
                            <th style="width: 120px;">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = sub_categories.get();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="5" class="table__empty">
                                            {if loading.get() { "Loading..." } else { "No subcategories found" }}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, sub_category)| {
                                        let for_edit = sub_category.clone();
                                        let for_delete = sub_category.clone();
                                        view! {
                                            <tr>
                                                <td>{index + 1}</td>
                                                <td>{sub_category.name.clone()}</td>
                                                <td>{sub_category.category.name.clone()}</td>
                                                <td>{sub_category.description.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                <td>
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

            {move || if show_add_form.get() {
                view! {
                    <SubCategoryForm
                        sub_category=None
                        categories=categories.get()
                        on_close=move || set_show_add_form.set(false)
                        on_saved=move || {
                            set_show_add_form.set(false);
                            load();
                        }
                    />
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

            {move || editing.get().map(|sub_category| view! {
                <SubCategoryForm
                    sub_category=Some(sub_category)
                    categories=categories.get()
                    on_close=move || editing.set(None)
                    on_saved=move || {
                        editing.set(None);
                        load();
                    }
                />
            })}
        </div>
    }
}
