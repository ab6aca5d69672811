use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::snapshot::BrandSnapshot;

/// Partition of tracked brand identifiers into regional groups.
///
/// The groups are neither disjoint nor exhaustive with respect to the brands
/// in a snapshot. A brand listed in both groups shows up in both views; a
/// brand listed in neither is silently left out of categorized views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandCatalog {
    #[serde(default)]
    pub indian: HashSet<String>,
    #[serde(default)]
    pub global: HashSet<String>,
}

/// Envelope returned by `GET /api/brands`.
#[derive(Debug, Deserialize)]
pub struct BrandsResponse {
    pub brands: BrandCatalog,
    #[serde(default)]
    pub total_brands: Option<u64>,
}

/// Brand snapshots split by catalog group, in snapshot order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategorizedBrands<'a> {
    pub indian: Vec<&'a BrandSnapshot>,
    pub global: Vec<&'a BrandSnapshot>,
}

impl BrandCatalog {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indian.is_empty() && self.global.is_empty()
    }

    #[must_use]
    pub fn is_indian(&self, brand: &str) -> bool {
        self.indian.contains(brand)
    }

    #[must_use]
    pub fn is_global(&self, brand: &str) -> bool {
        self.global.contains(brand)
    }

    #[must_use]
    pub fn categorize<'a>(&self, brands: &'a [BrandSnapshot]) -> CategorizedBrands<'a> {
        let mut out = CategorizedBrands::default();
        for brand in brands {
            if self.is_indian(&brand.brand) {
                out.indian.push(brand);
            }
            if self.is_global(&brand.brand) {
                out.global.push(brand);
            }
        }
        out
    }
}
