use std::collections::HashMap;
use std::sync::RwLock;

use shopkeep_catalog::StockResetter;
use shopkeep_core::{CatalogError, CatalogResult, ProductId, ShopConstraint, ShopId};

/// In-memory per-shop stock quantities. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    quantities: RwLock<HashMap<(ProductId, ShopId), i64>>,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_quantity(
        &self,
        product: ProductId,
        shop: ShopId,
        quantity: i64,
    ) -> CatalogResult<()> {
        self.quantities
            .write()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .insert((product, shop), quantity);
        Ok(())
    }

    /// Quantity for a product in one shop; zero when never stocked.
    pub fn quantity(&self, product: ProductId, shop: ShopId) -> CatalogResult<i64> {
        Ok(self
            .quantities
            .read()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .get(&(product, shop))
            .copied()
            .unwrap_or(0))
    }
}

impl StockResetter for InMemoryStockStore {
    fn reset_stock(&self, product: ProductId, scope: ShopConstraint) -> CatalogResult<()> {
        let mut quantities = self
            .quantities
            .write()
            .map_err(|_| CatalogError::store("lock poisoned"))?;
        match scope {
            // Rows stay so the shop association is kept; only quantities drop.
            ShopConstraint::AllShops => {
                for ((p, _), quantity) in quantities.iter_mut() {
                    if *p == product {
                        *quantity = 0;
                    }
                }
            }
            ShopConstraint::Shop(shop) => {
                if let Some(quantity) = quantities.get_mut(&(product, shop)) {
                    *quantity = 0;
                }
            }
        }
        Ok(())
    }
}
