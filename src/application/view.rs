use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::cache::ResourceType;

/// What the console is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Products,
    Brands,
    Carts,
    Discounts,
    Processor,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Login,
        View::Products,
        View::Brands,
        View::Carts,
        View::Discounts,
        View::Processor,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            View::Login => "login",
            View::Products => "products",
            View::Brands => "brands",
            View::Carts => "carts",
            View::Discounts => "discounts",
            View::Processor => "processor",
        }
    }

    /// The cached resource behind this view, if it has one.
    pub const fn resource(self) -> Option<ResourceType> {
        match self {
            View::Products => Some(ResourceType::Products),
            View::Brands => Some(ResourceType::Brands),
            View::Carts => Some(ResourceType::Carts),
            View::Discounts => Some(ResourceType::Discounts),
            View::Login | View::Processor => None,
        }
    }
}

impl From<ResourceType> for View {
    fn from(resource: ResourceType) -> Self {
        match resource {
            ResourceType::Products => View::Products,
            ResourceType::Brands => View::Brands,
            ResourceType::Carts => View::Carts,
            ResourceType::Discounts => View::Discounts,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown view `{0}`")]
pub struct ParseViewError(pub String);

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == needle)
            .ok_or_else(|| ParseViewError(s.to_string()))
    }
}
