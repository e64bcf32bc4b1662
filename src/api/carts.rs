use reqwest::Method;
use vitrine_api_types::{Cart, CartWithOrderLines, NewOrderLine, OrderLine};

use super::client::ApiClient;
use super::error::ApiError;

impl ApiClient {
    pub async fn list_carts(&self) -> Result<Vec<CartWithOrderLines>, ApiError> {
        self.get_json("cart").await
    }

    /// `GET /cart/{id}` returns the bare cart without its order lines.
    pub async fn get_cart(&self, id: i32) -> Result<Cart, ApiError> {
        self.get_json(&format!("cart/{id}")).await
    }

    /// `POST /cart` with no body; the backend assigns the id.
    pub async fn create_cart(&self) -> Result<(), ApiError> {
        self.send_empty(Method::POST, "cart").await
    }

    pub async fn delete_cart(&self, id: i32) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &format!("cart/{id}")).await
    }

    pub async fn add_order_line(&self, line: &NewOrderLine) -> Result<(), ApiError> {
        self.send_json(Method::POST, "orderline", line).await
    }

    pub async fn update_order_line(&self, line: &OrderLine) -> Result<(), ApiError> {
        self.send_json(Method::PUT, "orderline", line).await
    }

    pub async fn remove_order_line(&self, id: i32) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &format!("orderline/{id}")).await
    }
}
