//! View cache storage.
//!
//! One entry per resource type, holding the raw records of the last fetch and
//! the view rendered from them. Entries are replaced wholesale and removed
//! explicitly; there is no expiry and no eviction.

use std::collections::HashMap;
use std::future::Future;

use metrics::counter;
use serde::Serialize;
use tracing::debug;
use vitrine_api_types::{Brand, CartWithOrderLines, Discount, ProductWithDiscount};

use super::config::CacheConfig;
use super::deps::affected_by;
use super::keys::ResourceType;

const HIT_TOTAL: &str = "vitrine_view_cache_hit_total";
const MISS_TOTAL: &str = "vitrine_view_cache_miss_total";
const INVALIDATE_TOTAL: &str = "vitrine_view_cache_invalidate_total";

/// Records fetched for one resource type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Records {
    Products(Vec<ProductWithDiscount>),
    Brands(Vec<Brand>),
    Carts(Vec<CartWithOrderLines>),
    Discounts(Vec<Discount>),
}

impl Records {
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Records::Products(_) => ResourceType::Products,
            Records::Brands(_) => ResourceType::Brands,
            Records::Carts(_) => ResourceType::Carts,
            Records::Discounts(_) => ResourceType::Discounts,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Records::Products(rows) => rows.len(),
            Records::Brands(rows) => rows.len(),
            Records::Carts(rows) => rows.len(),
            Records::Discounts(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A cached collection and its rendered view.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub raw_data: Records,
    pub rendered_view: String,
}

/// Per-resource-type cache of fetched collections.
///
/// Owned by a single controller and mutated only through `&mut self`, so a
/// mutate-invalidate-refetch sequence is ordered by the caller awaiting each
/// step.
#[derive(Debug, Default)]
pub struct ViewCache {
    config: CacheConfig,
    entries: HashMap<ResourceType, CacheEntry>,
}

impl ViewCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Pure lookup.
    pub fn get(&self, resource: ResourceType) -> Option<&CacheEntry> {
        self.entries.get(&resource)
    }

    /// Store `raw_data` and `rendered_view` under `resource`, replacing any
    /// previous entry. A no-op while the cache is disabled.
    pub fn set(&mut self, resource: ResourceType, raw_data: Records, rendered_view: String) {
        if !self.config.enabled {
            return;
        }
        self.entries.insert(
            resource,
            CacheEntry {
                raw_data,
                rendered_view,
            },
        );
    }

    /// Remove the entry for `resource` if present.
    pub fn invalidate(&mut self, resource: ResourceType) {
        if self.entries.remove(&resource).is_some() {
            counter!(INVALIDATE_TOTAL, "resource" => resource.as_str()).increment(1);
            debug!(resource = resource.as_str(), "view cache entry invalidated");
        }
    }

    /// Invalidate every cached view that embeds `mutated`.
    pub fn invalidate_for(&mut self, mutated: ResourceType) {
        for resource in affected_by(mutated) {
            self.invalidate(*resource);
        }
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the cached view for `resource`, or run `loader`, store what it
    /// produces and return that.
    ///
    /// The loader runs at most once per call and never on a hit. When it
    /// fails, the error is returned and nothing is stored.
    pub async fn fetch_or_load<F, Fut, E>(
        &mut self,
        resource: ResourceType,
        loader: F,
    ) -> Result<String, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(Records, String), E>>,
    {
        if let Some(entry) = self.get(resource) {
            counter!(HIT_TOTAL, "resource" => resource.as_str()).increment(1);
            debug!(resource = resource.as_str(), "view cache hit");
            return Ok(entry.rendered_view.clone());
        }

        counter!(MISS_TOTAL, "resource" => resource.as_str()).increment(1);
        debug!(resource = resource.as_str(), "view cache miss");

        let (raw_data, rendered_view) = loader().await?;
        self.set(resource, raw_data, rendered_view.clone());
        Ok(rendered_view)
    }
}
