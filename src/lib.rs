//! vitrine: a terminal admin console for an e-commerce REST backend.

pub mod api;
pub mod application;
pub mod cache;
pub mod config;
pub mod infra;
pub mod presentation;
pub mod session;
