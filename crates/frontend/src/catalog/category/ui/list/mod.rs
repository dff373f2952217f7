use contracts::catalog::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::CategoryForm;
use crate::catalog::category::api;
use crate::shared::confirm::confirm;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);
    let (show_add_form, set_show_add_form) = signal(false);
    let editing: RwSignal<Option<Category>> = RwSignal::new(None);

    let toasts = use_toast();

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::list().await {
                Ok(data) => {
                    categories.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e.message()));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        load();
    });

    let delete = move |category: Category| {
        if !confirm(&format!("Are you sure to delete {} ?", category.name)) {
            return;
        }
        spawn_local(async move {
            match api::remove(&category.id).await {
                Ok(()) => {
                    toasts.success("Category deleted");
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
                    <h1 class="page__title">"Categories"</h1>
                    <Badge>{move || categories.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_add_form.set(true)
                    >
                        {icon("plus")}
                        " Add Category"
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
                            <th>"Description"</th>
                            <th style="width: 110px;">"Created"</th>
                            <th style="width: 120px;">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = categories.get();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="5" class="table__empty">
                                            {if loading.get() { "Loading..." } else { "No categories found" }}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, category)| {
                                        let for_edit = category.clone();
                                        let for_delete = category.clone();
                                        view! {
                                            <tr>
                                                <td>{index + 1}</td>
                                                <td>{category.name.clone()}</td>
                                                <td>{category.description.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                <td>{format_date(category.created_at)}</td>
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
                    <CategoryForm
                        category=None
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

            {move || editing.get().map(|category| view! {
                <CategoryForm
                    category=Some(category)
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
