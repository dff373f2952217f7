use contracts::catalog::{Category, CategoryDto};

use crate::shared::api::{self, ApiError};

pub async fn list() -> Result<Vec<Category>, ApiError> {
    api::get_json("/api/categories").await
}

pub async fn create(dto: &CategoryDto) -> Result<Category, ApiError> {
    api::post_json("/api/categories", dto).await
}

pub async fn update(id: &str, dto: &CategoryDto) -> Result<Category, ApiError> {
    api::put_json(&format!("/api/categories/{}", id), dto).await
}

pub async fn remove(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/api/categories/{}", id)).await
}
