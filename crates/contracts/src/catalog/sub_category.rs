use serde::{Deserialize, Serialize};

use super::category::CategoryRef;

/// Sub-category as returned by `GET /api/categories/sub/all`.
///
/// The backend populates the owning category as an embedded `{_id, name}`
/// object. A sub-category always belongs to exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: CategoryRef,
}

/// Populated sub-category reference embedded in products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubCategoryRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Payload for `POST /api/categories/sub` and `PUT /api/categories/sub/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubCategoryDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
}

impl SubCategoryDto {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Sub-category name is required");
        }
        if self.category_id.is_empty() {
            anyhow::bail!("Parent category is required");
        }
        Ok(())
    }
}

impl From<&SubCategory> for SubCategoryDto {
    fn from(sub: &SubCategory) -> Self {
        Self {
            name: sub.name.clone(),
            description: sub.description.clone().unwrap_or_default(),
            category_id: sub.category.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_populated_category() {
        let json = r#"{"_id":"665f1c2a9b1e8a0012d4c200","name":"Android","category":{"_id":"665f1c2a9b1e8a0012d4c100","name":"Phones"}}"#;
        let sub: SubCategory = serde_json::from_str(json).unwrap();
        assert_eq!(sub.category.id, "665f1c2a9b1e8a0012d4c100");
        assert_eq!(sub.category.name, "Phones");
    }

    #[test]
    fn dto_serializes_camel_case() {
        let dto = SubCategoryDto {
            name: "Android".into(),
            description: String::new(),
            category_id: "abc".into(),
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("\"categoryId\":\"abc\""));
    }

    #[test]
    fn validate_requires_parent() {
        let dto = SubCategoryDto {
            name: "Android".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
