use common::model::product::{Category, Product};

use crate::api::{ApiClient, ApiError};

pub struct ProductsService {
    api: ApiClient,
}

impl ProductsService {
    pub fn new(api: ApiClient) -> ProductsService {
        ProductsService { api }
    }

    /// Categories and products together, filtered to active records. The
    /// category fetch runs first, matching the page's load order; categories
    /// come back sorted by their display `order`.
    pub async fn load_catalog(&self) -> Result<(Vec<Category>, Vec<Product>), ApiError> {
        let mut categories: Vec<Category> = self.api.get_json("/categories/public").await?;
        let products: Vec<Product> = self.api.get_json("/products/public").await?;

        categories.retain(|category| category.is_active);
        categories.sort_by_key(|category| category.order);

        let products = products
            .into_iter()
            .filter(|product| product.is_active)
            .collect();

        Ok((categories, products))
    }
}
