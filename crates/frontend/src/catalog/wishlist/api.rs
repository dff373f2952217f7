use contracts::catalog::{AddWishlistRequest, WishlistResponse};

use crate::shared::api::{self, ApiError};

pub async fn list() -> Result<WishlistResponse, ApiError> {
    api::get_json("/api/wishlist").await
}

pub async fn add(product_id: &str) -> Result<WishlistResponse, ApiError> {
    let body = AddWishlistRequest {
        product_id: product_id.to_string(),
    };
    api::post_json("/api/wishlist", &body).await
}

pub async fn remove(product_id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/api/wishlist/{}", product_id)).await
}

pub async fn clear() -> Result<(), ApiError> {
    api::delete("/api/wishlist").await
}
