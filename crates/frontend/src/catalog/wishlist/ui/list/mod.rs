use contracts::catalog::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::catalog::wishlist::api;
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

#[component]
pub fn WishlistPage() -> impl IntoView {
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);

    let toasts = use_toast();

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::list().await {
                Ok(response) => {
                    products.set(response.products);
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

    let remove = move |product: Product| {
        if !confirm(&format!("Remove {} from wishlist ?", product.name)) {
            return;
        }
        spawn_local(async move {
            match api::remove(&product.id).await {
                Ok(()) => {
                    toasts.success("Product removed from wishlist");
                    load();
                }
                Err(e) => toasts.error(e.message()),
            }
        });
    };

    let clear = move |_| {
        if !confirm("Clear the entire wishlist ?") {
            return;
        }
        spawn_local(async move {
            match api::clear().await {
                Ok(()) => {
                    toasts.success("Wishlist cleared");
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
                    <h1 class="page__title">"My Wishlist"</h1>
                    <Badge>{move || products.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=clear
                        disabled=Signal::derive(move || products.get().is_empty())
                    >
                        {icon("trash")}
                        " Clear Wishlist"
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

            {move || {
                let items = products.get();
                if items.is_empty() {
                    view! {
                        <div class="alert alert--info">
                            {if loading.get() {
                                "Loading..."
                            } else {
                                "Your wishlist is empty. Browse products and add some."
                            }}
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {items
                                .into_iter()
                                .map(|product| {
                                    let for_remove = product.clone();
                                    view! {
                                        <div class="card">
                                            <div class="card__image">
                                                {match &product.image {
                                                    Some(url) if !url.is_empty() => view! {
                                                        <img src=url.clone() alt=product.name.clone() />
                                                    }.into_any(),
                                                    _ => view! {
                                                        <div class="card__image-placeholder">{icon("products")}</div>
                                                    }.into_any(),
                                                }}
                                            </div>
                                            <div class="card__body">
                                                <h3 class="card__title">{product.name.clone()}</h3>
                                                <p class="card__subtitle">
                                                    {product
                                                        .category
                                                        .as_ref()
                                                        .map(|c| c.name.clone())
                                                        .unwrap_or_else(|| "Uncategorized".to_string())}
                                                </p>
                                                <ul class="card__variants">
                                                    {product
                                                        .variants
                                                        .iter()
                                                        .map(|v| view! {
                                                            <li>
                                                                {format!("{} - ${:.2} ({} in stock)", v.ram, v.price, v.qty)}
                                                            </li>
                                                        })
                                                        .collect_view()}
                                                </ul>
                                            </div>
                                            <div class="card__footer">
                                                <Button
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| remove(for_remove.clone())
                                                >
                                                    {icon("trash")}
                                                    " Remove"
                                                </Button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
