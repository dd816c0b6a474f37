//! Product-type transitions.

use tracing::{debug, info};

use shopkeep_core::{CatalogResult, PackId, ProductId, ShopConstraint, UpdateReason};

use crate::product::ProductType;
use crate::store::{CombinationDeleter, PackStore, ProductStore, StockResetter, VirtualAssetStore};

/// Moves a product from one commercial type to another.
///
/// Associations that are only valid for the current type (pack contents,
/// combinations, the downloadable file) are torn down first, then the record
/// is written back through a single partial update naming exactly the changed
/// fields.
///
/// The teardown writes and the final record update are separate store calls
/// with no surrounding transaction: if the update is refused after a teardown
/// already ran, the torn-down associations stay gone. Callers see the
/// `ConstraintViolation` and must treat the product as needing repair.
pub struct TypeChangeCoordinator<P, A, C, V, S> {
    products: P,
    packs: A,
    combinations: C,
    virtual_assets: V,
    stock: S,
}

impl<P, A, C, V, S> TypeChangeCoordinator<P, A, C, V, S>
where
    P: ProductStore,
    A: PackStore,
    C: CombinationDeleter,
    V: VirtualAssetStore,
    S: StockResetter,
{
    pub fn new(products: P, packs: A, combinations: C, virtual_assets: V, stock: S) -> Self {
        Self {
            products,
            packs,
            combinations,
            virtual_assets,
            stock,
        }
    }

    /// Switch `product_id` to `new_type`.
    ///
    /// A same-type call performs no teardown and still issues the partial
    /// update. Collaborator failures abort the remaining steps and propagate
    /// unchanged; nothing is retried.
    pub fn update_type(&self, product_id: ProductId, new_type: ProductType) -> CatalogResult<()> {
        let mut product = self.products.get(product_id)?;
        let current = product.product_type();

        // Associations are only allowed for their own type, so they go away
        // before the record switches over. Each branch stands on its own:
        // adding a type must not require touching the others.
        if current.is_pack() && !new_type.is_pack() {
            debug!(%product_id, "clearing pack contents");
            self.packs.set_contents(PackId::from(product_id), &[])?;
        }
        if current.has_combinations() && !new_type.has_combinations() {
            // The stock reset reads combination rows to build its movements,
            // so it has to run while the rows still exist.
            debug!(%product_id, "resetting stock and removing combinations");
            self.reset_stock_all_shops(product_id)?;
            self.combinations.delete_all(product_id)?;
        }
        if current.is_virtual() && !new_type.is_virtual() {
            debug!(%product_id, "removing downloadable file");
            self.virtual_assets.delete_file(product_id)?;
        }

        // A product converted to the combination type starts with an empty
        // combination set, so its stock restarts at zero. That reset can only
        // happen after the record says the product carries combinations.
        let reset_stock_after = !current.has_combinations() && new_type.has_combinations();

        let fields = product.change_type(new_type);
        self.products
            .partial_update(&product, &fields, UpdateReason::ProductType)?;

        if reset_stock_after {
            self.reset_stock_all_shops(product_id)?;
        }

        info!(%product_id, from = %current, to = %new_type, "product type updated");
        Ok(())
    }

    /// The product type is shop-independent, so a type-driven stock reset
    /// spans every associated shop regardless of the caller's own scope.
    fn reset_stock_all_shops(&self, product_id: ProductId) -> CatalogResult<()> {
        self.stock.reset_stock(product_id, ShopConstraint::all_shops())
    }
}
