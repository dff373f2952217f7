use contracts::catalog::{Category, SubCategory, SubCategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::catalog::sub_category::api;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

/// Add/edit modal for a sub-category. The parent category select is
/// populated from the categories passed in by the list page.
#[component]
pub fn SubCategoryForm<F1, F2>(
    sub_category: Option<SubCategory>,
    categories: Vec<Category>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + Copy + Send + Sync + 'static,
    F2: Fn() + Copy + Send + Sync + 'static,
{
    let target_id = sub_category.as_ref().map(|s| s.id.clone());
    let is_edit = target_id.is_some();

    let name = RwSignal::new(
        sub_category
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_default(),
    );
    let description = RwSignal::new(
        sub_category
            .as_ref()
            .and_then(|s| s.description.clone())
            .unwrap_or_default(),
    );
    let category_id = RwSignal::new(
        sub_category
            .as_ref()
            .map(|s| s.category.id.clone())
            .unwrap_or_default(),
    );
    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let toasts = use_toast();

    let on_save = move |_| {
        let dto = SubCategoryDto {
            name: name.get(),
            description: description.get(),
            category_id: category_id.get(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        let target_id = target_id.clone();
        spawn_local(async move {
            let result = match &target_id {
                Some(id) => api::update(id, &dto).await,
                None => api::create(&dto).await,
            };
            match result {
                Ok(_) => {
                    toasts.success(if target_id.is_some() {
                        "Subcategory updated"
                    } else {
                        "Subcategory added"
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
            title=if is_edit { "Edit Subcategory".to_string() } else { "Add Subcategory".to_string() }
            on_close=on_close
        >
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Name"</Label>
                    <Input
                        value=name
                        placeholder="e.g. Smartphones"
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <div class="form__group">
                    <Label>"Category"</Label>
                    <select
                        class="form__select"
                        prop:value=move || category_id.get()
                        on:change=move |ev| category_id.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    >
                        <option value="">"Select category"</option>
                        {categories
                            .iter()
                            .map(|c| {
                                let id = c.id.clone();
                                let selected = category_id.get_untracked() == id;
                                view! {
                                    <option value=id selected=selected>{c.name.clone()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form__group">
                    <Label>"Description"</Label>
                    <textarea
                        class="form__textarea"
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    ></textarea>
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
