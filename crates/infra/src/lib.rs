//! Infrastructure layer: in-memory implementations of the catalog store
//! ports. Intended for tests and development; a SQL-backed deployment swaps
//! these out behind the same traits.

pub mod stores;


pub use stores::attributes::InMemoryAttributeStore;
pub use stores::combinations::InMemoryCombinationStore;
pub use stores::packs::InMemoryPackStore;
pub use stores::products::InMemoryProductStore;
pub use stores::stock::InMemoryStockStore;
pub use stores::virtual_assets::{InMemoryVirtualAssets, VirtualFile};
