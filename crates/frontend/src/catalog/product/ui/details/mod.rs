pub mod model;

use contracts::catalog::{Category, Product, SubCategory};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::model::ProductFormModel;
use crate::catalog::product::api;
use crate::catalog::product::ui::list::state::sub_categories_for;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

/// Add/edit modal for a product: basic fields, cascading category and
/// sub-category selects, and a dynamic set of variant rows.
#[component]
pub fn ProductForm<F1, F2>(
    product: Option<Product>,
    categories: Vec<Category>,
    sub_categories: Vec<SubCategory>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + Copy + Send + Sync + 'static,
    F2: Fn() + Copy + Send + Sync + 'static,
{
    let model = RwSignal::new(match &product {
        Some(p) => ProductFormModel::for_edit(p),
        None => ProductFormModel::for_add(),
    });
    let is_edit = product.is_some();

    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let toasts = use_toast();

    let all_subs = StoredValue::new(sub_categories);
    let available_subs = Memo::new(move |_| {
        let category_id = model.with(|m| m.category_id.clone());
        all_subs.with_value(|all| sub_categories_for(all, &category_id))
    });

    let on_save = move |_| {
        let dto = match model.with(|m| m.to_dto()) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let target_id = model.with(|m| m.target_id.clone());

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match &target_id {
                Some(id) => api::update(id, &dto).await,
                None => api::create(&dto).await,
            };
            match result {
                Ok(_) => {
                    toasts.success(if target_id.is_some() {
                        "Product updated"
                    } else {
                        "Product added"
                    });
                    on_saved();
                }
                Err(e) => {
                    set_error.set(Some(e.message()));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <Modal
            title=if is_edit { "Edit Product".to_string() } else { "Add Product".to_string() }
            on_close=on_close
        >
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Name"</Label>
                    <input
                        class="form__input"
                        prop:value=move || model.with(|m| m.name.clone())
                        on:input=move |ev| model.update(|m| m.name = event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form__group">
                    <Label>"Description"</Label>
                    <textarea
                        class="form__textarea"
                        rows="3"
                        prop:value=move || model.with(|m| m.description.clone())
                        on:input=move |ev| model.update(|m| m.description = event_target_value(&ev))
                        disabled=move || saving.get()
                    ></textarea>
                </div>

                <div class="form__group">
                    <Label>"Image URL"</Label>
                    <input
                        class="form__input"
                        prop:value=move || model.with(|m| m.image.clone())
                        on:input=move |ev| model.update(|m| m.image = event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <Label>"Category"</Label>
                        <select
                            class="form__select"
                            prop:value=move || model.with(|m| m.category_id.clone())
                            on:change=move |ev| {
                                model.update(|m| m.set_category(event_target_value(&ev)))
                            }
                            disabled=move || saving.get()
                        >
                            <option value="">"Select category"</option>
                            {categories
                                .iter()
                                .map(|c| {
                                    let id = c.id.clone();
                                    let selected = model.with_untracked(|m| m.category_id == id);
                                    view! {
                                        <option value=id selected=selected>{c.name.clone()}</option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Subcategory"</Label>
                        <select
                            class="form__select"
                            prop:value=move || model.with(|m| m.sub_category_id.clone())
                            on:change=move |ev| {
                                model.update(|m| m.sub_category_id = event_target_value(&ev))
                            }
                            disabled=move || saving.get() || model.with(|m| m.category_id.is_empty())
                        >
                            <option value="">"Select subcategory"</option>
                            {move || {
                                let selected_id = model.with(|m| m.sub_category_id.clone());
                                available_subs
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
                </div>

                <div class="form__group">
                    <div class="form__group-header">
                        <Label>"Variants"</Label>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| model.update(|m| m.add_variant())
                            disabled=Signal::derive(move || saving.get())
                        >
                            {icon("plus")}
                            " Add Variant"
                        </Button>
                    </div>

                    {move || {
                        let count = model.with(|m| m.variants.len());
                        (0..count)
                            .map(|index| {
                                view! {
                                    <div class="variant-row">
                                        <input
                                            class="form__input"
                                            placeholder="RAM (e.g. 8GB)"
                                            prop:value=move || {
                                                model.with(|m| {
                                                    m.variants.get(index).map(|v| v.ram.clone()).unwrap_or_default()
                                                })
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                model.update(|m| {
                                                    if let Some(v) = m.variants.get_mut(index) {
                                                        v.ram = value;
                                                    }
                                                })
                                            }
                                            disabled=move || saving.get()
                                        />
                                        <input
                                            class="form__input"
                                            type="number"
                                            min="0"
                                            step="0.01"
                                            placeholder="Price"
                                            prop:value=move || {
                                                model.with(|m| {
                                                    m.variants.get(index).map(|v| v.price.clone()).unwrap_or_default()
                                                })
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                model.update(|m| {
                                                    if let Some(v) = m.variants.get_mut(index) {
                                                        v.price = value;
                                                    }
                                                })
                                            }
                                            disabled=move || saving.get()
                                        />
                                        <input
                                            class="form__input"
                                            type="number"
                                            min="0"
                                            placeholder="Qty"
                                            prop:value=move || {
                                                model.with(|m| {
                                                    m.variants.get(index).map(|v| v.qty.clone()).unwrap_or_default()
                                                })
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                model.update(|m| {
                                                    if let Some(v) = m.variants.get_mut(index) {
                                                        v.qty = value;
                                                    }
                                                })
                                            }
                                            disabled=move || saving.get()
                                        />
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| {
                                                model.update(|m| {
                                                    m.remove_variant(index);
                                                })
                                            }
                                            disabled=Signal::derive(move || {
                                                saving.get() || model.with(|m| m.variants.len() <= 1)
                                            })
                                            attr:title="Remove variant"
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close()
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else if is_edit { "Update" } else { "Save" }}
                </Button>
            </div>
        </Modal>
    }
}
