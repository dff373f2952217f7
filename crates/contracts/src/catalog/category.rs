use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog category as returned by `GET /api/categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Populated category reference embedded in sub-categories and products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Payload for `POST /api/categories` and `PUT /api/categories/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CategoryDto {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Category name is required");
        }
        Ok(())
    }
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_shape() {
        let json = r#"{"_id":"665f1c2a9b1e8a0012d4c100","name":"Phones","description":"Mobile phones","createdAt":"2025-05-01T10:00:00.000Z","__v":0}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, "665f1c2a9b1e8a0012d4c100");
        assert_eq!(category.name, "Phones");
        assert!(category.created_at.is_some());
    }

    #[test]
    fn description_is_optional() {
        let json = r#"{"_id":"665f1c2a9b1e8a0012d4c101","name":"Laptops"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.description, None);
    }

    #[test]
    fn validate_rejects_blank_name() {
        let dto = CategoryDto {
            name: "   ".into(),
            description: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}
