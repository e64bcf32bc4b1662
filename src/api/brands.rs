use reqwest::Method;
use vitrine_api_types::{Brand, NewBrand};

use super::client::ApiClient;
use super::error::ApiError;

impl ApiClient {
    pub async fn list_brands(&self) -> Result<Vec<Brand>, ApiError> {
        self.get_json("brand").await
    }

    pub async fn get_brand(&self, id: i32) -> Result<Brand, ApiError> {
        self.get_json(&format!("brand/{id}")).await
    }

    pub async fn create_brand(&self, brand: &NewBrand) -> Result<(), ApiError> {
        self.send_json(Method::POST, "brand", brand).await
    }

    pub async fn update_brand(&self, brand: &Brand) -> Result<(), ApiError> {
        self.send_json(Method::PUT, "brand", brand).await
    }

    pub async fn delete_brand(&self, id: i32) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &format!("brand/id/{id}")).await
    }
}
