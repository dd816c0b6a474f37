//! Catalog domain module.
//!
//! This crate contains the product record, its commercial-type value object,
//! the store/collaborator ports, and the coordinator that moves a product
//! from one type to another while tearing down now-invalid associations.

pub mod product;
pub mod store;
pub mod transition;

pub use product::{Product, ProductField, ProductType};
pub use store::{CombinationDeleter, PackStore, ProductStore, StockResetter, VirtualAssetStore};
pub use transition::TypeChangeCoordinator;
