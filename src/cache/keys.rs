//! Cache key definitions.
//!
//! The view cache is keyed by resource type, one entry per collection the
//! console can display.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A backend collection the console lists and caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceType {
    Products,
    Brands,
    Carts,
    Discounts,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Products,
        ResourceType::Brands,
        ResourceType::Carts,
        ResourceType::Discounts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Products => "products",
            ResourceType::Brands => "brands",
            ResourceType::Carts => "carts",
            ResourceType::Discounts => "discounts",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown resource type `{0}` (expected products, brands, carts or discounts)")]
pub struct ParseResourceTypeError(pub String);

impl FromStr for ResourceType {
    type Err = ParseResourceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|resource| resource.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseResourceTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Brands".parse::<ResourceType>(), Ok(ResourceType::Brands));
        assert_eq!(" carts ".parse::<ResourceType>(), Ok(ResourceType::Carts));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "orders".parse::<ResourceType>().expect_err("unknown type");
        assert_eq!(err, ParseResourceTypeError("orders".to_string()));
    }

    #[test]
    fn display_matches_as_str() {
        for resource in ResourceType::ALL {
            assert_eq!(resource.to_string(), resource.as_str());
        }
    }
}
