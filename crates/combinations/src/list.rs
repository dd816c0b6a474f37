//! Filtered, paginated combination listings.

use serde::{Deserialize, Serialize};

use shopkeep_core::{AttributeId, CatalogResult, CombinationId, ProductId};

use crate::combination::{Combination, CombinationStore};

/// Listing filters. `limit: None` returns everything past `offset`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationFilters {
    pub offset: usize,
    pub limit: Option<usize>,
    /// Keep only combinations carrying this attribute.
    pub attribute: Option<AttributeId>,
}

/// One page of a listing plus the pre-pagination total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationPage {
    pub total: usize,
    pub items: Vec<Combination>,
}

/// Read-side listing over a combination store. Rows come back in ascending
/// id order.
pub struct CombinationLister<C> {
    combinations: C,
}

impl<C> CombinationLister<C>
where
    C: CombinationStore,
{
    pub fn new(combinations: C) -> Self {
        Self { combinations }
    }

    pub fn list(
        &self,
        product_id: ProductId,
        filters: &CombinationFilters,
    ) -> CatalogResult<CombinationPage> {
        let mut items = self.combinations.by_product(product_id)?;
        if let Some(attribute) = filters.attribute {
            items.retain(|c| c.attributes().contains(&attribute));
        }

        let total = items.len();
        let mut items: Vec<Combination> = items.into_iter().skip(filters.offset).collect();
        if let Some(limit) = filters.limit {
            items.truncate(limit);
        }

        Ok(CombinationPage { total, items })
    }

    /// Just the matching ids, for bulk selections spanning several pages.
    pub fn ids(
        &self,
        product_id: ProductId,
        filters: &CombinationFilters,
    ) -> CatalogResult<Vec<CombinationId>> {
        Ok(self
            .list(product_id, filters)?
            .items
            .iter()
            .map(|c| c.id())
            .collect())
    }
}
