use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::model::image::Image;

/// A product category. `order` drives the display order of the category
/// filter bar; inactive categories are hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name_tr: String,
    pub name_en: String,
    pub slug_tr: String,
    pub slug_en: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub order: i32,
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<Category>>,
}

impl Category {
    pub fn name(&self, locale: Locale) -> &str {
        locale.pick(&self.name_tr, &self.name_en)
    }
}

/// A catalog entry. Inactive products are hidden from the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name_tr: String,
    pub name_en: String,
    #[serde(default)]
    pub description_tr: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    pub price: f64,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Product {
    pub fn name(&self, locale: Locale) -> &str {
        locale.pick(&self.name_tr, &self.name_en)
    }

    pub fn description(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::Tr => self.description_tr.as_deref(),
            Locale::En => self.description_en.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_api_payload_shape() {
        let json = r#"{
            "id": "p1",
            "name_tr": "Vanilyalı Mum",
            "name_en": "Vanilla Candle",
            "description_tr": null,
            "price": 149.9,
            "categoryId": "c1",
            "images": [
                {
                    "id": "i1",
                    "originalName": "vanilla.jpg",
                    "filePath": "uploads/products/vanilla.jpg",
                    "createdAt": "2025-01-01T00:00:00.000Z"
                }
            ],
            "isActive": true,
            "createdAt": "2025-01-01T00:00:00.000Z"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name(Locale::Tr), "Vanilyalı Mum");
        assert_eq!(product.description(Locale::Tr), None);
        assert_eq!(product.description(Locale::En), None);
        assert_eq!(product.category_id, "c1");
        assert!(product.is_active);
        assert!((product.price - 149.9).abs() < f64::EPSILON);
    }

    #[test]
    fn category_name_selection() {
        let json = r#"{
            "id": "c1",
            "name_tr": "Kokulu",
            "name_en": "Scented",
            "slug_tr": "kokulu",
            "slug_en": "scented",
            "isActive": true,
            "order": 2
        }"#;

        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.name(Locale::Tr), "Kokulu");
        assert_eq!(category.name(Locale::En), "Scented");
        assert_eq!(category.parent_id, None);
    }
}
