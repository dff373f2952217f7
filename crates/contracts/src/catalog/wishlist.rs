use serde::{Deserialize, Serialize};

use super::product::Product;

/// Response of `GET /api/wishlist`: the current user's saved products,
/// populated. A product appears at most once; the backend rejects duplicate
/// adds with a conflict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Payload for `POST /api/wishlist`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddWishlistRequest {
    #[serde(rename = "productId")]
    pub product_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wishlist_decodes() {
        let response: WishlistResponse = serde_json::from_str(r#"{"products":[]}"#).unwrap();
        assert!(response.products.is_empty());
    }

    #[test]
    fn add_request_serializes_camel_case() {
        let request = AddWishlistRequest {
            product_id: "665f1c2a9b1e8a0012d4c300".into(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"productId":"665f1c2a9b1e8a0012d4c300"}"#
        );
    }
}
