use reqwest::Method;
use vitrine_api_types::{NewProduct, Product, ProductWithDiscount};

use super::client::ApiClient;
use super::error::ApiError;

impl ApiClient {
    pub async fn list_products(&self) -> Result<Vec<ProductWithDiscount>, ApiError> {
        self.get_json("product").await
    }

    pub async fn get_product(&self, id: i32) -> Result<Product, ApiError> {
        self.get_json(&format!("product/{id}")).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError> {
        self.send_json(Method::POST, "product", product).await
    }

    pub async fn update_product(&self, product: &Product) -> Result<(), ApiError> {
        self.send_json(Method::PUT, "product", product).await
    }

    pub async fn delete_product(&self, id: i32) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &format!("product/id/{id}")).await
    }
}
