use contracts::catalog::{Product, ProductQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{category, product, sub_category, wishlist};
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;

/// Landing page: entity counters plus a card grid of the products the
/// backend lists for the current filters.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (product_count, set_product_count) = signal(Option::<usize>::None);
    let (category_count, set_category_count) = signal(Option::<usize>::None);
    let (sub_category_count, set_sub_category_count) = signal(Option::<usize>::None);
    let (wishlist_count, set_wishlist_count) = signal(Option::<usize>::None);
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());

    Effect::new(move |_| {
        spawn_local(async move {
            // The product total lives in the pagination envelope; the first
            // page doubles as the card grid content.
            let query = ProductQuery {
                search: String::new(),
                category_id: String::new(),
                sub_category_id: String::new(),
                page: 1,
                limit: 8,
            };
            if let Ok(page) = product::api::list(&query).await {
                set_product_count.set(Some(page.pagination.total));
                products.set(page.products);
            }
        });
        spawn_local(async move {
            if let Ok(data) = category::api::list().await {
                set_category_count.set(Some(data.len()));
            }
        });
        spawn_local(async move {
            if let Ok(data) = sub_category::api::list().await {
                set_sub_category_count.set(Some(data.len()));
            }
        });
        spawn_local(async move {
            if let Ok(response) = wishlist::api::list().await {
                set_wishlist_count.set(Some(response.products.len()));
            }
        });
    });

    view! {
        <div class="page">
            <h1 class="page__title">"Dashboard"</h1>

            <div class="stat-grid">
                <StatCard
                    label="Products".to_string()
                    icon_name="products".to_string()
                    value=product_count
                />
                <StatCard
                    label="Categories".to_string()
                    icon_name="categories".to_string()
                    value=category_count
                />
                <StatCard
                    label="Subcategories".to_string()
                    icon_name="layers".to_string()
                    value=sub_category_count
                />
                <StatCard
                    label="Wishlist".to_string()
                    icon_name="heart".to_string()
                    value=wishlist_count
                />
            </div>

            <h2 class="page__subtitle">"Latest Products"</h2>
            <div class="card-grid">
                {move || {
                    let items = products.get();
                    if items.is_empty() {
                        view! {
                            <div class="alert alert--info">"No products yet."</div>
                        }.into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|p| {
                                let price_label = match p.price_range() {
                                    Some((lo, hi)) if lo == hi => format!("${:.2}", lo),
                                    Some((lo, hi)) => format!("${:.2} - ${:.2}", lo, hi),
                                    None => "No variants".to_string(),
                                };
                                let qty_label = format!("{} in stock", p.total_qty());
                                view! {
                                    <div class="card">
                                        <div class="card__image">
                                            {match &p.image {
                                                Some(url) if !url.is_empty() => view! {
                                                    <img src=url.clone() alt=p.name.clone() />
                                                }.into_any(),
                                                _ => view! {
                                                    <div class="card__image-placeholder">{icon("products")}</div>
                                                }.into_any(),
                                            }}
                                        </div>
                                        <div class="card__body">
                                            <h3 class="card__title">{p.name.clone()}</h3>
                                            <p class="card__subtitle">
                                                {p
                                                    .category
                                                    .as_ref()
                                                    .map(|c| c.name.clone())
                                                    .unwrap_or_else(|| "Uncategorized".to_string())}
                                            </p>
                                            <div class="card__meta">
                                                <span class="card__price">{price_label}</span>
                                                <span class="card__qty">{qty_label}</span>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
