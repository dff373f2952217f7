use anyhow::{bail, Context, Result};
use contracts::catalog::{Product, ProductDto, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// Variant row as typed, before numeric parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantDraft {
    pub ram: String,
    pub price: String,
    pub qty: String,
}

impl VariantDraft {
    pub fn blank() -> Self {
        Self {
            ram: String::new(),
            price: String::new(),
            qty: String::new(),
        }
    }

    pub fn from_variant(variant: &Variant) -> Self {
        Self {
            ram: variant.ram.clone(),
            price: variant.price.to_string(),
            qty: variant.qty.to_string(),
        }
    }

    pub fn parse(&self) -> Result<Variant> {
        let ram = self.ram.trim();
        if ram.is_empty() {
            bail!("Variant RAM is required");
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .with_context(|| format!("Invalid price: {}", self.price))?;
        if price < 0.0 {
            bail!("Price cannot be negative");
        }
        let qty: u32 = if self.qty.trim().is_empty() {
            0
        } else {
            self.qty
                .trim()
                .parse()
                .with_context(|| format!("Invalid quantity: {}", self.qty))?
        };
        Ok(Variant {
            ram: ram.to_string(),
            price,
            qty,
        })
    }
}

/// Working copy of the product form. Lives in a single signal so the
/// variant rows and cascading selects stay consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormModel {
    pub mode: FormMode,
    pub target_id: Option<String>,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category_id: String,
    pub sub_category_id: String,
    pub variants: Vec<VariantDraft>,
}

impl ProductFormModel {
    pub fn for_add() -> Self {
        Self {
            mode: FormMode::Add,
            target_id: None,
            name: String::new(),
            description: String::new(),
            image: String::new(),
            category_id: String::new(),
            sub_category_id: String::new(),
            variants: vec![VariantDraft::blank()],
        }
    }

    pub fn for_edit(product: &Product) -> Self {
        let mut variants: Vec<VariantDraft> =
            product.variants.iter().map(VariantDraft::from_variant).collect();
        if variants.is_empty() {
            variants.push(VariantDraft::blank());
        }
        Self {
            mode: FormMode::Edit,
            target_id: Some(product.id.clone()),
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone().unwrap_or_default(),
            category_id: product
                .category
                .as_ref()
                .map(|c| c.id.clone())
                .unwrap_or_default(),
            sub_category_id: product
                .sub_category
                .as_ref()
                .map(|s| s.id.clone())
                .unwrap_or_default(),
            variants,
        }
    }

    /// Changing the category invalidates the sub-category choice.
    pub fn set_category(&mut self, category_id: String) {
        self.category_id = category_id;
        self.sub_category_id.clear();
    }

    pub fn add_variant(&mut self) {
        self.variants.push(VariantDraft::blank());
    }

    /// The last remaining row cannot be removed.
    pub fn remove_variant(&mut self, index: usize) -> bool {
        if self.variants.len() <= 1 || index >= self.variants.len() {
            return false;
        }
        self.variants.remove(index);
        true
    }

    pub fn to_dto(&self) -> Result<ProductDto> {
        let variants = self
            .variants
            .iter()
            .map(VariantDraft::parse)
            .collect::<Result<Vec<_>>>()?;
        let dto = ProductDto {
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            category_id: self.category_id.clone(),
            sub_category_id: self.sub_category_id.clone(),
            variants,
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::{CategoryRef, SubCategoryRef};

    fn sample_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Galaxy S24".to_string(),
            description: "Flagship phone".to_string(),
            image: None,
            category: Some(CategoryRef {
                id: "c1".to_string(),
                name: "Phones".to_string(),
            }),
            sub_category: Some(SubCategoryRef {
                id: "s1".to_string(),
                name: "Smartphones".to_string(),
            }),
            variants: vec![Variant {
                ram: "8GB".to_string(),
                price: 799.0,
                qty: 5,
            }],
        }
    }

    #[test]
    fn edit_model_round_trips_to_dto() {
        let product = sample_product();
        let model = ProductFormModel::for_edit(&product);
        assert_eq!(model.mode, FormMode::Edit);
        assert_eq!(model.target_id.as_deref(), Some("p1"));

        let dto = model.to_dto().unwrap();
        assert_eq!(dto.name, "Galaxy S24");
        assert_eq!(dto.category_id, "c1");
        assert_eq!(dto.sub_category_id, "s1");
        assert_eq!(dto.variants.len(), 1);
        assert_eq!(dto.variants[0].ram, "8GB");
        assert_eq!(dto.variants[0].price, 799.0);
        assert_eq!(dto.variants[0].qty, 5);
    }

    #[test]
    fn add_model_starts_with_one_blank_variant() {
        let model = ProductFormModel::for_add();
        assert_eq!(model.mode, FormMode::Add);
        assert_eq!(model.variants.len(), 1);
        assert!(model.to_dto().is_err());
    }

    #[test]
    fn last_variant_row_cannot_be_removed() {
        let mut model = ProductFormModel::for_add();
        assert!(!model.remove_variant(0));
        model.add_variant();
        assert!(model.remove_variant(1));
        assert_eq!(model.variants.len(), 1);
    }

    #[test]
    fn category_change_resets_sub_category() {
        let mut model = ProductFormModel::for_edit(&sample_product());
        model.set_category("c2".to_string());
        assert_eq!(model.category_id, "c2");
        assert!(model.sub_category_id.is_empty());
    }

    #[test]
    fn variant_parse_rejects_bad_numbers() {
        let draft = VariantDraft {
            ram: "8GB".to_string(),
            price: "abc".to_string(),
            qty: "1".to_string(),
        };
        assert!(draft.parse().is_err());

        let draft = VariantDraft {
            ram: "8GB".to_string(),
            price: "-5".to_string(),
            qty: "1".to_string(),
        };
        assert!(draft.parse().is_err());
    }

    #[test]
    fn variant_parse_defaults_empty_qty_to_zero() {
        let draft = VariantDraft {
            ram: "8GB".to_string(),
            price: "10.5".to_string(),
            qty: "".to_string(),
        };
        let variant = draft.parse().unwrap();
        assert_eq!(variant.qty, 0);
        assert_eq!(variant.price, 10.5);
    }
}
