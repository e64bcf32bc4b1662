//! Wire types for the vitrine admin API.
//!
//! Shapes follow the JSON produced and accepted by the e-commerce backend:
//! integer identifiers, integer money amounts, and naive timestamps for
//! discount windows.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Timestamp layout used by the backend for discount windows.
pub const NAIVE_DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

time::serde::format_description!(naive_datetime, PrimitiveDateTime, NAIVE_DATETIME_FORMAT);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// ----------------------------------------------------------------------------
// Products
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub in_stock: bool,
    pub category_id: Option<i32>,
    pub brand_id: Option<i32>,
    pub price: i32,
    pub tax_rate: i32,
}

/// Row returned by `GET /product`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithDiscount {
    pub product: Product,
    #[serde(default)]
    pub discounts: Vec<Discount>,
}

/// Body of `POST /product`. Attribute fields are accepted by the backend
/// alongside the core product columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: Option<String>,
    pub in_stock: bool,
    pub size: Option<String>,
    pub color: Option<String>,
    pub weight: i32,
    pub weight_unit: Option<String>,
    pub width: i32,
    pub height: i32,
    pub category_id: Option<i32>,
    pub brand_id: Option<i32>,
    pub price: i32,
    pub tax_rate: i32,
}

// ----------------------------------------------------------------------------
// Brands
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBrand {
    pub name: String,
    pub description: Option<String>,
}

// ----------------------------------------------------------------------------
// Carts and order lines
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: i32,
    pub is_active: bool,
}

/// Row returned by `GET /cart`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartWithOrderLines {
    pub cart: Cart,
    #[serde(default)]
    pub order_lines: Vec<OrderLineInCart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

/// Step-by-step record of how discounts were applied to an order line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountBreakdown {
    #[serde(default)]
    pub steps: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineInCart {
    pub id: i32,
    pub cart_id: i32,
    pub product: Product,
    pub quantity: i32,
    pub orderline_total: i32,
    pub orderline_total_discount_amount: i32,
    pub orderline_total_with_discount: i32,
    #[serde(default)]
    pub discounts: Vec<Discount>,
    #[serde(default)]
    pub discount_resolution_breakdown: DiscountBreakdown,
}

// ----------------------------------------------------------------------------
// Discounts
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub id: i32,
    pub name: String,
    pub discount_type: String,
    pub value: i32,
    #[serde(with = "naive_datetime")]
    pub start_date: PrimitiveDateTime,
    #[serde(with = "naive_datetime")]
    pub end_date: PrimitiveDateTime,
    pub min_quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDiscount {
    pub name: String,
    pub discount_type: String,
    pub value: i32,
    #[serde(with = "naive_datetime")]
    pub start_date: PrimitiveDateTime,
    #[serde(with = "naive_datetime")]
    pub end_date: PrimitiveDateTime,
    pub min_quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountCategory {
    pub discount_id: i32,
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountBrand {
    pub discount_id: i32,
    pub brand_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountProduct {
    pub discount_id: i32,
    pub product_id: i32,
}
