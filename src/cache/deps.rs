//! Invalidation fan-out between resource types.
//!
//! Some list endpoints embed other resources: product rows carry their
//! discounts, and cart rows carry products and discount totals. A mutation
//! on one type therefore stales every cached collection that embeds it.

use super::keys::ResourceType;

/// Resource types whose cached views must be dropped after `mutated` changes.
///
/// The mutated type itself always comes first.
pub fn affected_by(mutated: ResourceType) -> &'static [ResourceType] {
    match mutated {
        ResourceType::Products => &[ResourceType::Products, ResourceType::Carts],
        ResourceType::Brands => &[ResourceType::Brands],
        ResourceType::Carts => &[ResourceType::Carts],
        ResourceType::Discounts => &[
            ResourceType::Discounts,
            ResourceType::Products,
            ResourceType::Carts,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutated_type_is_always_affected() {
        for resource in ResourceType::ALL {
            assert_eq!(affected_by(resource).first(), Some(&resource));
        }
    }

    #[test]
    fn discounts_fan_out_to_embedding_views() {
        let affected = affected_by(ResourceType::Discounts);
        assert!(affected.contains(&ResourceType::Products));
        assert!(affected.contains(&ResourceType::Carts));
        assert!(!affected.contains(&ResourceType::Brands));
    }
}
