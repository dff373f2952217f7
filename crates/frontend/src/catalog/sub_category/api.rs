use contracts::catalog::{SubCategory, SubCategoryDto};

use crate::shared::api::{self, ApiError};

pub async fn list() -> Result<Vec<SubCategory>, ApiError> {
    api::get_json("/api/categories/sub/all").await
}

pub async fn create(dto: &SubCategoryDto) -> Result<SubCategory, ApiError> {
    api::post_json("/api/categories/sub", dto).await
}

pub async fn update(id: &str, dto: &SubCategoryDto) -> Result<SubCategory, ApiError> {
    api::put_json(&format!("/api/categories/sub/{}", id), dto).await
}

pub async fn remove(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/api/categories/sub/{}", id)).await
}
