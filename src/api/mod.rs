//! Typed client for the shop backend and the processor-control service.

mod auth;
mod brands;
mod carts;
mod client;
mod discounts;
mod error;
mod processor;
mod products;


pub use client::ApiClient;
pub use discounts::DiscountAssociation;
pub use error::ApiError;
