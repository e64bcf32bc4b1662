use reqwest::Method;
use vitrine_api_types::{Discount, DiscountBrand, DiscountCategory, DiscountProduct, NewDiscount};

use super::client::ApiClient;
use super::error::ApiError;

/// Link between a discount and the catalogue entity it applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscountAssociation {
    Category(DiscountCategory),
    Brand(DiscountBrand),
    Product(DiscountProduct),
}

impl ApiClient {
    pub async fn list_discounts(&self) -> Result<Vec<Discount>, ApiError> {
        self.get_json("discount").await
    }

    pub async fn get_discount(&self, id: i32) -> Result<Discount, ApiError> {
        self.get_json(&format!("discount/{id}")).await
    }

    pub async fn create_discount(&self, discount: &NewDiscount) -> Result<(), ApiError> {
        self.send_json(Method::POST, "discount", discount).await
    }

    pub async fn update_discount(&self, discount: &Discount) -> Result<(), ApiError> {
        self.send_json(Method::PUT, "discount", discount).await
    }

    pub async fn delete_discount(&self, id: i32) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &format!("discount/{id}")).await
    }

    pub async fn associate_discount(
        &self,
        association: &DiscountAssociation,
    ) -> Result<(), ApiError> {
        match association {
            DiscountAssociation::Category(body) => {
                self.send_json(Method::POST, "discount/category", body).await
            }
            DiscountAssociation::Brand(body) => {
                self.send_json(Method::POST, "discount/brand", body).await
            }
            DiscountAssociation::Product(body) => {
                self.send_json(Method::POST, "discount/product", body).await
            }
        }
    }
}
