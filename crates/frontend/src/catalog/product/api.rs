use contracts::catalog::{Product, ProductDto, ProductPage, ProductQuery};

use crate::shared::api::{self, ApiError};

pub async fn list(query: &ProductQuery) -> Result<ProductPage, ApiError> {
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::Network(format!("bad query: {}", e)))?;
    api::get_json(&format!("/api/products?{}", qs)).await
}

pub async fn create(dto: &ProductDto) -> Result<Product, ApiError> {
    api::post_json("/api/products", dto).await
}

pub async fn update(id: &str, dto: &ProductDto) -> Result<Product, ApiError> {
    api::put_json(&format!("/api/products/{}", id), dto).await
}

pub async fn remove(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/api/products/{}", id)).await
}

#[cfg(test)]
mod tests {
    use contracts::catalog::ProductQuery;

    #[test]
    fn query_string_omits_empty_filters() {
        let query = ProductQuery {
            search: String::new(),
            category_id: String::new(),
            sub_category_id: String::new(),
            page: 1,
            limit: 10,
        };
        assert_eq!(serde_qs::to_string(&query).unwrap(), "page=1&limit=10");
    }

    #[test]
    fn query_string_uses_camel_case_filter_names() {
        let query = ProductQuery {
            search: "mac".to_string(),
            category_id: "c1".to_string(),
            sub_category_id: String::new(),
            page: 2,
            limit: 10,
        };
        assert_eq!(
            serde_qs::to_string(&query).unwrap(),
            "search=mac&categoryId=c1&page=2&limit=10"
        );
    }
}
